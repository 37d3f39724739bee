//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use aquifer_core::{TransferFee, NUM_REWARDS};
use solana_account::Account;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use spl_token_2022::{
    extension::{transfer_fee::TransferFeeConfig, BaseStateWithExtensions, StateWithExtensionsOwned},
    state::Mint,
};
use std::error::Error;

/// A decoded token mint together with the program that owns it.
pub struct MintWithTokenProgram {
    pub address: Pubkey,
    pub token_program: Pubkey,
    pub mint: StateWithExtensionsOwned<Mint>,
}

impl MintWithTokenProgram {
    /// The transfer fee schedule of this mint for the given epoch, or `None`
    /// if the mint carries no transfer fee extension.
    pub fn transfer_fee(&self, epoch: u64) -> Option<TransferFee> {
        let config = self.mint.get_extension::<TransferFeeConfig>().ok()?;
        let fee = config.get_epoch_fee(epoch);
        Some(TransferFee::new_with_max(
            u16::from(fee.transfer_fee_basis_points),
            u64::from(fee.maximum_fee),
        ))
    }

    pub fn is_token_2022(&self) -> bool {
        self.token_program == spl_token_2022::ID
    }
}

/// The token mints of a pool, decoded once per quote so that transfer fees
/// and program ownership do not have to be re-fetched per calculation.
pub struct TokenExtensionContext {
    pub current_epoch: u64,
    pub token_mint_a: MintWithTokenProgram,
    pub token_mint_b: MintWithTokenProgram,
    pub reward_token_mints: [Option<MintWithTokenProgram>; NUM_REWARDS],
}

impl TokenExtensionContext {
    /// The transfer fee for token A for the context's epoch, if any.
    pub fn transfer_fee_a(&self) -> Option<TransferFee> {
        self.token_mint_a.transfer_fee(self.current_epoch)
    }

    /// The transfer fee for token B for the context's epoch, if any.
    pub fn transfer_fee_b(&self) -> Option<TransferFee> {
        self.token_mint_b.transfer_fee(self.current_epoch)
    }

    /// Whether any of the pool's pair mints is owned by the Token-2022 program.
    pub fn requires_token_2022(&self) -> bool {
        self.token_mint_a.is_token_2022() || self.token_mint_b.is_token_2022()
    }

    /// Whether the reward mint at `index` is owned by the Token-2022 program.
    pub fn requires_token_2022_for_reward(&self, index: usize) -> bool {
        self.reward_token_mints[index].as_ref().map(|mint| mint.is_token_2022()).unwrap_or(false)
    }
}

/// Decodes a mint account, accepting both the original token program and
/// Token-2022. Accounts owned by any other program are rejected.
pub fn decode_mint(address: Pubkey, account: &Account) -> Result<MintWithTokenProgram, Box<dyn Error>> {
    if account.owner != spl_token::ID && account.owner != spl_token_2022::ID {
        return Err(format!("Account {} is not a token mint", address).into());
    }
    let mint = StateWithExtensionsOwned::<Mint>::unpack(account.data.clone())?;
    Ok(MintWithTokenProgram {
        address,
        token_program: account.owner,
        mint,
    })
}

/// Fetches and decodes the mints of a pool in a single RPC round trip,
/// together with the current epoch for transfer fee selection.
///
/// # Arguments
///
/// * `rpc` - A reference to the Solana RPC client.
/// * `token_mint_a` - The public key of the pool's first token mint.
/// * `token_mint_b` - The public key of the pool's second token mint.
/// * `reward_mints` - The public keys of the pool's reward mints, where set.
///
/// # Returns
///
/// A `Result` containing the decoded `TokenExtensionContext`.
///
/// # Errors
///
/// This function will return an error if:
/// - Any of the mint accounts cannot be fetched or does not exist.
/// - Any of the accounts is not owned by a token program.
pub async fn fetch_token_extension_context(
    rpc: &RpcClient,
    token_mint_a: Pubkey,
    token_mint_b: Pubkey,
    reward_mints: [Option<Pubkey>; NUM_REWARDS],
) -> Result<TokenExtensionContext, Box<dyn Error>> {
    let mut addresses = vec![token_mint_a, token_mint_b];
    addresses.extend(reward_mints.iter().flatten());

    let account_infos = rpc.get_multiple_accounts(&addresses).await?;
    let current_epoch = rpc.get_epoch_info().await?.epoch;

    let mut decoded = Vec::with_capacity(addresses.len());
    for (address, account_info) in addresses.iter().zip(account_infos.iter()) {
        let account = account_info.as_ref().ok_or(format!("Mint {} not found", address))?;
        decoded.push(decode_mint(*address, account)?);
    }

    let token_mint_b = decoded.remove(1);
    let token_mint_a = decoded.remove(0);
    let reward_token_mints = match_reward_mints(reward_mints, decoded);

    Ok(TokenExtensionContext {
        current_epoch,
        token_mint_a,
        token_mint_b,
        reward_token_mints,
    })
}

/// Pairs each set reward mint with its decoded account, in slot order. The
/// decoded list carries one entry per `Some` mint; a short list leaves the
/// trailing slots unset.
fn match_reward_mints(
    reward_mints: [Option<Pubkey>; NUM_REWARDS],
    decoded: Vec<MintWithTokenProgram>,
) -> [Option<MintWithTokenProgram>; NUM_REWARDS] {
    let mut remaining = decoded.into_iter();
    reward_mints.map(|mint| mint.and_then(|_| remaining.next()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::{program_option::COption, program_pack::Pack};
    use spl_token_2022::extension::{BaseStateWithExtensionsMut, ExtensionType, StateWithExtensionsMut};

    fn base_mint() -> Mint {
        Mint {
            mint_authority: COption::None,
            supply: 1_000_000_000,
            decimals: 6,
            is_initialized: true,
            freeze_authority: COption::None,
        }
    }

    fn mint_account_with_transfer_fee(older: (u16, u64), newer: (u16, u64), newer_epoch: u64) -> Account {
        let space = ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::TransferFeeConfig]).unwrap();
        let mut data = vec![0u8; space];
        let mut state = StateWithExtensionsMut::<Mint>::unpack_uninitialized(&mut data).unwrap();

        let config = state.init_extension::<TransferFeeConfig>(true).unwrap();
        config.older_transfer_fee.epoch = 0u64.into();
        config.older_transfer_fee.transfer_fee_basis_points = older.0.into();
        config.older_transfer_fee.maximum_fee = older.1.into();
        config.newer_transfer_fee.epoch = newer_epoch.into();
        config.newer_transfer_fee.transfer_fee_basis_points = newer.0.into();
        config.newer_transfer_fee.maximum_fee = newer.1.into();

        state.base = base_mint();
        state.pack_base();
        state.init_account_type().unwrap();

        Account {
            lamports: 1_000_000,
            data,
            owner: spl_token_2022::ID,
            executable: false,
            rent_epoch: 0,
        }
    }

    fn plain_mint_account() -> Account {
        let mut data = vec![0u8; Mint::LEN];
        base_mint().pack_into_slice(&mut data);
        Account {
            lamports: 1_000_000,
            data,
            owner: spl_token::ID,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn test_transfer_fee_selects_schedule_by_epoch() {
        let address = Pubkey::new_unique();
        let account = mint_account_with_transfer_fee((100, 1_000), (500, 1_000_000), 10);
        let mint = decode_mint(address, &account).unwrap();
        assert!(mint.is_token_2022());

        // Before the newer schedule activates, the older one applies.
        assert_eq!(mint.transfer_fee(9), Some(TransferFee::new_with_max(100, 1_000)));
        assert_eq!(mint.transfer_fee(10), Some(TransferFee::new_with_max(500, 1_000_000)));
        assert_eq!(mint.transfer_fee(11), Some(TransferFee::new_with_max(500, 1_000_000)));
    }

    #[test]
    fn test_plain_mint_has_no_transfer_fee() {
        let address = Pubkey::new_unique();
        let mint = decode_mint(address, &plain_mint_account()).unwrap();
        assert_eq!(mint.token_program, spl_token::ID);
        assert!(!mint.is_token_2022());
        assert_eq!(mint.transfer_fee(0), None);
    }

    #[test]
    fn test_decode_mint_rejects_foreign_owner() {
        let address = Pubkey::new_unique();
        let mut account = plain_mint_account();
        account.owner = Pubkey::new_unique();
        assert!(decode_mint(address, &account).is_err());
    }

    #[test]
    fn test_match_reward_mints_pairs_in_slot_order() {
        let mints = [Some(Pubkey::new_unique()), None, Some(Pubkey::new_unique())];
        let decoded = vec![
            decode_mint(Pubkey::new_unique(), &plain_mint_account()).unwrap(),
            decode_mint(Pubkey::new_unique(), &plain_mint_account()).unwrap(),
        ];
        let first = decoded[0].address;
        let third = decoded[1].address;

        let paired = match_reward_mints(mints, decoded);
        assert_eq!(paired[0].as_ref().map(|mint| mint.address), Some(first));
        assert!(paired[1].is_none());
        assert_eq!(paired[2].as_ref().map(|mint| mint.address), Some(third));
    }

    #[test]
    fn test_match_reward_mints_short_list_leaves_slots_unset() {
        let mints = [Some(Pubkey::new_unique()), Some(Pubkey::new_unique()), None];
        let paired = match_reward_mints(mints, vec![]);
        assert!(paired.iter().all(|mint| mint.is_none()));
    }

    #[test]
    fn test_context_fee_accessors() {
        let ctx = TokenExtensionContext {
            current_epoch: 10,
            token_mint_a: decode_mint(Pubkey::new_unique(), &mint_account_with_transfer_fee((100, 1_000), (500, 1_000_000), 10)).unwrap(),
            token_mint_b: decode_mint(Pubkey::new_unique(), &plain_mint_account()).unwrap(),
            reward_token_mints: [None, None, None],
        };
        assert_eq!(ctx.transfer_fee_a(), Some(TransferFee::new_with_max(500, 1_000_000)));
        assert_eq!(ctx.transfer_fee_b(), None);
        assert!(ctx.requires_token_2022());
        assert!(!ctx.requires_token_2022_for_reward(0));
    }
}

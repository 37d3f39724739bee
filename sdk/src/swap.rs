//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use aquifer_core::{
    swap_quote_by_input_token, swap_quote_by_output_token, ExactInSwapQuote, ExactOutSwapQuote, PoolFacade, SwapStepper, TickArraySnapshot,
};
use solana_program::pubkey::Pubkey;
use std::error::Error;

use crate::TokenExtensionContext;

fn is_token_a(specified_mint: Pubkey, context: &TokenExtensionContext) -> Result<bool, Box<dyn Error>> {
    if specified_mint == context.token_mint_a.address {
        Ok(true)
    } else if specified_mint == context.token_mint_b.address {
        Ok(false)
    } else {
        Err(format!("Mint {} does not belong to the pool", specified_mint).into())
    }
}

/// Computes an exact-in swap quote, resolving the trade direction and the
/// transfer fees of both tokens from the pool's token extension context.
///
/// # Arguments
///
/// * `token_in` - The input token amount, transfer fee included.
/// * `specified_mint` - The mint of the input token. Must be one of the pool's pair mints.
/// * `slippage_tolerance_bps` - The slippage tolerance in basis points.
/// * `pool` - The pool state.
/// * `tick_arrays` - The tick array window needed for the swap.
/// * `stepper` - The price-curve stepping algorithm.
/// * `context` - The decoded token extension context of the pool.
///
/// # Returns
///
/// A `Result` containing the estimated and minimum output amounts.
pub fn swap_quote_by_input_mint<S: SwapStepper<Pubkey>>(
    token_in: u64,
    specified_mint: Pubkey,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    tick_arrays: Vec<TickArraySnapshot<Pubkey>>,
    stepper: &S,
    context: &TokenExtensionContext,
) -> Result<ExactInSwapQuote, Box<dyn Error>> {
    let specified_token_a = is_token_a(specified_mint, context)?;
    let quote = swap_quote_by_input_token(
        token_in,
        specified_token_a,
        slippage_tolerance_bps,
        pool,
        tick_arrays,
        stepper,
        context.transfer_fee_a(),
        context.transfer_fee_b(),
    )?;
    Ok(quote)
}

/// Computes an exact-out swap quote, resolving the trade direction and the
/// transfer fees of both tokens from the pool's token extension context.
///
/// # Arguments
///
/// * `token_out` - The output token amount the user should receive, after transfer fees.
/// * `specified_mint` - The mint of the output token. Must be one of the pool's pair mints.
/// * `slippage_tolerance_bps` - The slippage tolerance in basis points.
/// * `pool` - The pool state.
/// * `tick_arrays` - The tick array window needed for the swap.
/// * `stepper` - The price-curve stepping algorithm.
/// * `context` - The decoded token extension context of the pool.
///
/// # Returns
///
/// A `Result` containing the estimated and maximum input amounts.
pub fn swap_quote_by_output_mint<S: SwapStepper<Pubkey>>(
    token_out: u64,
    specified_mint: Pubkey,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    tick_arrays: Vec<TickArraySnapshot<Pubkey>>,
    stepper: &S,
    context: &TokenExtensionContext,
) -> Result<ExactOutSwapQuote, Box<dyn Error>> {
    let specified_token_a = is_token_a(specified_mint, context)?;
    let quote = swap_quote_by_output_token(
        token_out,
        specified_token_a,
        slippage_tolerance_bps,
        pool,
        tick_arrays,
        stepper,
        context.transfer_fee_a(),
        context.transfer_fee_b(),
    )?;
    Ok(quote)
}

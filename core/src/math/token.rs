//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use crate::{
    CoreError, TokenAmountWithFee, TransferFee, AMOUNT_EXCEEDS_MAX_U64, INVALID_SLIPPAGE_TOLERANCE, INVALID_TRANSFER_FEE, ONE_IN_BASIS_POINTS,
};

fn ceil_div_u128(numerator: u128, denominator: u128) -> u128 {
    (numerator + denominator - 1) / denominator
}

/// Calculate the fee-included amount for a transfer: how much must be sent
/// so that exactly `amount` arrives after the transfer fee is withheld.
///
/// The fee is capped at `max_fee`. Together with the ceiling division of the
/// general case this makes the pair include/exclude intentionally asymmetric
/// at the cap; the on-chain token program behaves the same way.
///
/// # Parameters
/// - `transfer_fee` - The fee schedule of the mint for the current epoch
/// - `amount` - The fee-excluded amount that must arrive
///
/// # Returns
/// - The fee-included amount and the fee withheld on the way
pub fn try_calculate_transfer_fee_included_amount(transfer_fee: TransferFee, amount: u64) -> Result<TokenAmountWithFee, CoreError> {
    if transfer_fee.fee_bps > ONE_IN_BASIS_POINTS {
        return Err(INVALID_TRANSFER_FEE);
    }

    if transfer_fee.fee_bps == 0 || amount == 0 {
        return Ok(TokenAmountWithFee {
            is_fee_included_amount: true,
            amount,
            fee: 0,
        });
    }

    if transfer_fee.fee_bps == ONE_IN_BASIS_POINTS {
        // A 100% fee rate always withholds the maximum fee.
        let included = amount.checked_add(transfer_fee.max_fee).ok_or(AMOUNT_EXCEEDS_MAX_U64)?;
        return Ok(TokenAmountWithFee {
            is_fee_included_amount: true,
            amount: included,
            fee: transfer_fee.max_fee,
        });
    }

    let numerator = amount as u128 * ONE_IN_BASIS_POINTS as u128;
    let denominator = (ONE_IN_BASIS_POINTS - transfer_fee.fee_bps) as u128;
    let raw_included = ceil_div_u128(numerator, denominator);

    let (included, fee) = if raw_included - amount as u128 >= transfer_fee.max_fee as u128 {
        (amount as u128 + transfer_fee.max_fee as u128, transfer_fee.max_fee)
    } else {
        (raw_included, (raw_included - amount as u128) as u64)
    };

    let included: u64 = included.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)?;
    Ok(TokenAmountWithFee {
        is_fee_included_amount: true,
        amount: included,
        fee,
    })
}

/// Calculate the fee-excluded amount for a transfer: how much arrives if
/// `amount` is sent. The fee rounds up and is capped at `max_fee`, matching
/// the token program's own fee calculation.
///
/// # Parameters
/// - `transfer_fee` - The fee schedule of the mint for the current epoch
/// - `amount` - The fee-included amount being sent
///
/// # Returns
/// - The fee-excluded amount and the fee withheld on the way
pub fn try_calculate_transfer_fee_excluded_amount(transfer_fee: TransferFee, amount: u64) -> Result<TokenAmountWithFee, CoreError> {
    if transfer_fee.fee_bps > ONE_IN_BASIS_POINTS {
        return Err(INVALID_TRANSFER_FEE);
    }

    if transfer_fee.fee_bps == 0 || amount == 0 {
        return Ok(TokenAmountWithFee {
            is_fee_included_amount: false,
            amount,
            fee: 0,
        });
    }

    let raw_fee = ceil_div_u128(amount as u128 * transfer_fee.fee_bps as u128, ONE_IN_BASIS_POINTS as u128);
    let fee = raw_fee.min(transfer_fee.max_fee as u128) as u64;
    Ok(TokenAmountWithFee {
        is_fee_included_amount: false,
        amount: amount - fee,
        fee,
    })
}

/// Strip the transfer fee from a fee-included amount.
pub fn try_apply_transfer_fee(amount: u64, transfer_fee: TransferFee) -> Result<u64, CoreError> {
    Ok(try_calculate_transfer_fee_excluded_amount(transfer_fee, amount)?.amount)
}

/// Add the transfer fee on top of a fee-excluded amount.
pub fn try_reverse_apply_transfer_fee(amount: u64, transfer_fee: TransferFee) -> Result<u64, CoreError> {
    Ok(try_calculate_transfer_fee_included_amount(transfer_fee, amount)?.amount)
}

/// The lowest output amount an exact-in swap may settle at under the given
/// slippage tolerance. Rounds down.
pub fn try_get_min_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > ONE_IN_BASIS_POINTS {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = amount as u128 * (ONE_IN_BASIS_POINTS - slippage_tolerance_bps) as u128;
    Ok((numerator / ONE_IN_BASIS_POINTS as u128) as u64)
}

/// The highest input amount an exact-out swap may settle at under the given
/// slippage tolerance. Rounds up.
pub fn try_get_max_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > ONE_IN_BASIS_POINTS {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = amount as u128 * (ONE_IN_BASIS_POINTS + slippage_tolerance_bps) as u128;
    let max_amount = ceil_div_u128(numerator, ONE_IN_BASIS_POINTS as u128);
    max_amount.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

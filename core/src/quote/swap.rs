//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use crate::{
    try_apply_transfer_fee, try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, try_reverse_apply_transfer_fee,
    CoreError, ExactInSwapQuote, ExactOutSwapQuote, PoolFacade, TickArraySequence, TickArraySnapshot, TransferFee,
};

/// Gross curve amounts produced by one invocation of the swap stepper.
/// Transfer fees are not applied at this level.
pub struct SwapResult {
    pub token_a: u64,
    pub token_b: u64,
    pub fee_amount: u64,
    pub next_sqrt_price: u128,
}

/// The constant-liquidity stepping algorithm the quote layer drives.
///
/// Implementations repeatedly call `TickArraySequence::next_initialized_tick`
/// and `TickArraySequence::tick` while moving the price across the supplied
/// window, until the requested amount is consumed, the price limit is hit,
/// or the sequence reports that its window is exhausted (`None` tick). A
/// `sqrt_price_limit` of `0` selects the minimum or maximum representable
/// price depending on the trade direction.
pub trait SwapStepper<A> {
    fn compute_swap(
        &self,
        token_amount: u64,
        sqrt_price_limit: u128,
        pool: PoolFacade,
        tick_sequence: &mut TickArraySequence<A>,
        a_to_b: bool,
        specified_input: bool,
    ) -> Result<SwapResult, CoreError>;
}

/// Computes a swap quote for an exact input amount.
///
/// # Arguments
/// - `token_in`: The input token amount, transfer fee included.
/// - `specified_token_a`: If `true`, the input token is token A. Otherwise, it is token B.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pool state.
/// - `tick_arrays`: The tick array window needed for the swap.
/// - `stepper`: The price-curve stepping algorithm.
/// - `transfer_fee_a`: The transfer fee for token A for the current epoch.
/// - `transfer_fee_b`: The transfer fee for token B for the current epoch.
///
/// # Returns
/// The estimated and minimum output amounts for the swap transaction.
pub fn swap_quote_by_input_token<A: Clone, S: SwapStepper<A>>(
    token_in: u64,
    specified_token_a: bool,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    tick_arrays: Vec<TickArraySnapshot<A>>,
    stepper: &S,
    transfer_fee_a: Option<TransferFee>,
    transfer_fee_b: Option<TransferFee>,
) -> Result<ExactInSwapQuote, CoreError> {
    let (transfer_fee_in, transfer_fee_out) = if specified_token_a {
        (transfer_fee_a, transfer_fee_b)
    } else {
        (transfer_fee_b, transfer_fee_a)
    };
    let token_in_after_fee = try_apply_transfer_fee(token_in, transfer_fee_in.unwrap_or_default())?;

    let a_to_b = specified_token_a;
    let mut tick_sequence = TickArraySequence::new(tick_arrays, pool.tick_spacing, a_to_b)?;

    let swap_result = stepper.compute_swap(token_in_after_fee, 0, pool, &mut tick_sequence, a_to_b, true)?;

    let (token_in_after_fees, token_est_out_before_fee) = if specified_token_a {
        (swap_result.token_a, swap_result.token_b)
    } else {
        (swap_result.token_b, swap_result.token_a)
    };

    let token_in = try_reverse_apply_transfer_fee(token_in_after_fees, transfer_fee_in.unwrap_or_default())?;
    let token_est_out = try_apply_transfer_fee(token_est_out_before_fee, transfer_fee_out.unwrap_or_default())?;
    let token_min_out = try_get_min_amount_with_slippage_tolerance(token_est_out, slippage_tolerance_bps)?;

    Ok(ExactInSwapQuote {
        token_in,
        token_est_out,
        token_min_out,
        trade_fee: swap_result.fee_amount,
        next_sqrt_price: swap_result.next_sqrt_price,
    })
}

/// Computes a swap quote for an exact output amount.
///
/// # Arguments
/// - `token_out`: The output token amount the user should receive, after transfer fees.
/// - `specified_token_a`: If `true`, the output token is token A. Otherwise, it is token B.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `pool`: The pool state.
/// - `tick_arrays`: The tick array window needed for the swap.
/// - `stepper`: The price-curve stepping algorithm.
/// - `transfer_fee_a`: The transfer fee for token A for the current epoch.
/// - `transfer_fee_b`: The transfer fee for token B for the current epoch.
///
/// # Returns
/// The estimated and maximum input amounts for the swap transaction.
pub fn swap_quote_by_output_token<A: Clone, S: SwapStepper<A>>(
    token_out: u64,
    specified_token_a: bool,
    slippage_tolerance_bps: u16,
    pool: PoolFacade,
    tick_arrays: Vec<TickArraySnapshot<A>>,
    stepper: &S,
    transfer_fee_a: Option<TransferFee>,
    transfer_fee_b: Option<TransferFee>,
) -> Result<ExactOutSwapQuote, CoreError> {
    let (transfer_fee_in, transfer_fee_out) = if specified_token_a {
        (transfer_fee_b, transfer_fee_a)
    } else {
        (transfer_fee_a, transfer_fee_b)
    };
    let token_out_before_fee = try_reverse_apply_transfer_fee(token_out, transfer_fee_out.unwrap_or_default())?;

    let a_to_b = !specified_token_a;
    let mut tick_sequence = TickArraySequence::new(tick_arrays, pool.tick_spacing, a_to_b)?;

    let swap_result = stepper.compute_swap(token_out_before_fee, 0, pool, &mut tick_sequence, a_to_b, false)?;

    let (token_out_before_fee, token_est_in_after_fee) = if specified_token_a {
        (swap_result.token_a, swap_result.token_b)
    } else {
        (swap_result.token_b, swap_result.token_a)
    };

    let token_out = try_apply_transfer_fee(token_out_before_fee, transfer_fee_out.unwrap_or_default())?;
    let token_est_in = try_reverse_apply_transfer_fee(token_est_in_after_fee, transfer_fee_in.unwrap_or_default())?;
    let token_max_in = try_get_max_amount_with_slippage_tolerance(token_est_in, slippage_tolerance_bps)?;

    Ok(ExactOutSwapQuote {
        token_out,
        token_est_in,
        token_max_in,
        trade_fee: swap_result.fee_amount,
        next_sqrt_price: swap_result.next_sqrt_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TickArrayFacade, TickFacade, MAX_SQRT_PRICE, MIN_SQRT_PRICE, TICK_ARRAY_SIZE, TICK_SEQUENCE_EMPTY};

    /// Trades 1:1 at the pool's current price, touching the first tick in the
    /// trade direction the way the real stepper would.
    struct UnitPriceStepper;

    impl SwapStepper<&'static str> for UnitPriceStepper {
        fn compute_swap(
            &self,
            token_amount: u64,
            sqrt_price_limit: u128,
            pool: PoolFacade,
            tick_sequence: &mut TickArraySequence<&'static str>,
            a_to_b: bool,
            _specified_input: bool,
        ) -> Result<SwapResult, CoreError> {
            let sqrt_price_limit = if sqrt_price_limit == 0 {
                if a_to_b {
                    MIN_SQRT_PRICE
                } else {
                    MAX_SQRT_PRICE
                }
            } else {
                sqrt_price_limit
            };
            assert!((MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price_limit));

            tick_sequence.next_initialized_tick(pool.tick_current_index)?;

            Ok(SwapResult {
                token_a: token_amount,
                token_b: token_amount,
                fee_amount: 0,
                next_sqrt_price: pool.sqrt_price,
            })
        }
    }

    fn test_pool() -> PoolFacade {
        PoolFacade {
            tick_spacing: 2,
            fee_rate: 3000,
            liquidity: 100000000,
            sqrt_price: 1 << 64,
            tick_current_index: 0,
            ..PoolFacade::default()
        }
    }

    fn test_tick_arrays(a_to_b: bool) -> Vec<TickArraySnapshot<&'static str>> {
        let tick = TickFacade {
            initialized: true,
            liquidity_net: 1000,
            ..TickFacade::default()
        };
        let array = |start_tick_index: i32| TickArrayFacade {
            start_tick_index,
            ticks: [tick; TICK_ARRAY_SIZE],
        };
        if a_to_b {
            vec![
                TickArraySnapshot::new("ta0", array(0)),
                TickArraySnapshot::new("ta1", array(-176)),
                TickArraySnapshot::new("ta2", array(-352)),
            ]
        } else {
            vec![
                TickArraySnapshot::new("ta0", array(0)),
                TickArraySnapshot::new("ta1", array(176)),
                TickArraySnapshot::new("ta2", array(352)),
            ]
        }
    }

    #[test]
    fn test_exact_in_without_transfer_fees() {
        let quote = swap_quote_by_input_token(1000, true, 1000, test_pool(), test_tick_arrays(true), &UnitPriceStepper, None, None).unwrap();
        assert_eq!(quote.token_in, 1000);
        assert_eq!(quote.token_est_out, 1000);
        assert_eq!(quote.token_min_out, 900);
        assert_eq!(quote.trade_fee, 0);
        assert_eq!(quote.next_sqrt_price, 1 << 64);
    }

    #[test]
    fn test_exact_in_strips_and_restores_input_transfer_fee() {
        let transfer_fee_a = TransferFee::new_with_max(500, 1_000_000);
        let quote = swap_quote_by_input_token(
            210_527,
            true,
            0,
            test_pool(),
            test_tick_arrays(true),
            &UnitPriceStepper,
            Some(transfer_fee_a),
            None,
        )
        .unwrap();
        // 5% is withheld before the curve sees the amount, and adding it back
        // reproduces the requested input exactly.
        assert_eq!(quote.token_in, 210_527);
        assert_eq!(quote.token_est_out, 200_000);
        assert_eq!(quote.token_min_out, 200_000);
    }

    #[test]
    fn test_exact_in_applies_output_transfer_fee() {
        let transfer_fee_b = TransferFee::new_with_max(100, 1_000_000);
        let quote = swap_quote_by_input_token(
            10_000,
            true,
            0,
            test_pool(),
            test_tick_arrays(true),
            &UnitPriceStepper,
            None,
            Some(transfer_fee_b),
        )
        .unwrap();
        assert_eq!(quote.token_in, 10_000);
        // 1% of the curve output is withheld on the way out.
        assert_eq!(quote.token_est_out, 9_900);
    }

    #[test]
    fn test_exact_out_direction_and_fees() {
        // Requesting token A out means the trade runs b->a.
        let transfer_fee_a = TransferFee::new_with_max(100, 1_000_000);
        let quote = swap_quote_by_output_token(
            9_900,
            true,
            1000,
            test_pool(),
            test_tick_arrays(false),
            &UnitPriceStepper,
            Some(transfer_fee_a),
            None,
        )
        .unwrap();
        assert_eq!(quote.token_out, 9_900);
        assert_eq!(quote.token_est_in, 10_000);
        assert_eq!(quote.token_max_in, 11_000);
    }

    #[test]
    fn test_quote_fails_without_current_tick_array() {
        let result = swap_quote_by_input_token(1000, true, 0, test_pool(), vec![], &UnitPriceStepper, None, None);
        assert_eq!(result.err(), Some(TICK_SEQUENCE_EMPTY));
    }
}

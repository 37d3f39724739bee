//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

#[cfg(feature = "serde")]
use serde_big_array::BigArray;

use crate::{NUM_REWARDS, TICK_ARRAY_SIZE};

/// Immutable snapshot of a single tick, valid for the duration of one quote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickFacade {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub fee_growth_outside_a: u128,
    pub fee_growth_outside_b: u128,
    pub reward_growths_outside: [u128; NUM_REWARDS],
}

/// A fixed-capacity batch of ticks. `start_tick_index` is always a multiple
/// of `tick_spacing * TICK_ARRAY_SIZE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickArrayFacade {
    pub start_tick_index: i32,
    #[cfg_attr(feature = "serde", serde(with = "BigArray"))]
    pub ticks: [TickFacade; TICK_ARRAY_SIZE],
}

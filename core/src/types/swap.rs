//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactInSwapQuote {
    pub token_in: u64,
    pub token_est_out: u64,
    pub token_min_out: u64,
    pub trade_fee: u64,
    pub next_sqrt_price: u128,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactOutSwapQuote {
    pub token_out: u64,
    pub token_est_in: u64,
    pub token_max_in: u64,
    pub trade_fee: u64,
    pub next_sqrt_price: u128,
}

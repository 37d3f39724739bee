//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

/// The transfer fee schedule of a fee-bearing mint for one epoch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferFee {
    pub fee_bps: u16,
    pub max_fee: u64,
}

impl TransferFee {
    pub fn new(fee_bps: u16) -> Self {
        Self { fee_bps, max_fee: u64::MAX }
    }

    pub fn new_with_max(fee_bps: u16, max_fee: u64) -> Self {
        Self { fee_bps, max_fee }
    }
}

/// A fee-adjusted token amount. `is_fee_included_amount` records which side
/// of the conversion `amount` sits on: `true` means `amount` is what must be
/// moved by the token transfer, `false` means `amount` is what arrives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAmountWithFee {
    pub is_fee_included_amount: bool,
    pub amount: u64,
    pub fee: u64,
}

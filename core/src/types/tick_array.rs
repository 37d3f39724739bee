//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

use crate::TickArrayFacade;

/// One element of the pre-fetched tick array window, keyed by an opaque
/// identity `A` (an account address in practice). `data` is `None` when the
/// array account does not exist on chain yet; such arrays must never be read
/// for tick data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickArraySnapshot<A> {
    pub address: A,
    pub data: Option<TickArrayFacade>,
}

impl<A> TickArraySnapshot<A> {
    pub fn new(address: A, data: TickArrayFacade) -> Self {
        Self { address, data: Some(data) }
    }

    pub fn uninitialized(address: A) -> Self {
        Self { address, data: None }
    }
}

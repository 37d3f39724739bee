//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

pub type CoreError = &'static str;

pub const INVALID_TICK_INDEX: CoreError = "Invalid tick index";

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const TICK_SEQUENCE_EMPTY: CoreError = "Tick sequence empty";

pub const TICK_ARRAY_NOT_INITIALIZED: CoreError = "Tick array not initialized";

pub const INVALID_TICK_ARRAY_SEQUENCE: CoreError = "Invalid tick array sequence";

pub const AMOUNT_EXCEEDS_MAX_U64: CoreError = "Amount exceeds max u64";

pub const INVALID_TRANSFER_FEE: CoreError = "Invalid transfer fee";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

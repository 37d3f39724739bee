//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

/// The number of ticks in a tick array.
pub const TICK_ARRAY_SIZE: usize = 88;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -443636;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 443636;

/// The number of reward slots a pool carries.
pub const NUM_REWARDS: usize = 3;

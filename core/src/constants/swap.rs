//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

/// The sqrt price of the minimum tick index, as a Q64.64.
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// The sqrt price of the maximum tick index, as a Q64.64.
pub const MAX_SQRT_PRICE: u128 = 79226673515401279992447579055;

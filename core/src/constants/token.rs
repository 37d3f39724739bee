//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

/// 100% expressed in basis points. Transfer fee rates and slippage
/// tolerances are fractions of this value.
pub const ONE_IN_BASIS_POINTS: u16 = 10_000;

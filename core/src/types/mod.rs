//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

mod pool;
mod swap;
mod tick;
mod tick_array;
mod token;

pub use pool::*;
pub use swap::*;
pub use tick::*;
pub use tick_array::*;
pub use token::*;

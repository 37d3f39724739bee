//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

mod tick;
mod tick_array_sequence;
mod token;

pub use tick::*;
pub use tick_array_sequence::*;
pub use token::*;

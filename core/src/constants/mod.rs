//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

mod error;
mod swap;
mod tick;
mod token;

pub use error::*;
pub use swap::*;
pub use tick::*;
pub use token::*;

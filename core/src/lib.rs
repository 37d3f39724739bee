//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

mod constants;
mod math;
mod quote;
mod types;

pub use constants::*;
pub use math::*;
pub use quote::*;
pub use types::*;

//
// Copyright (c) Aquifer Labs
//
// Licensed under the Apache License, Version 2.0
//

mod swap;

pub use swap::*;

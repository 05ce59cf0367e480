#![allow(unused_imports)]

mod mock_lookup;

pub use mock_lookup::*;

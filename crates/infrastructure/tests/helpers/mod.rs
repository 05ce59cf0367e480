#![allow(unused_imports)]

mod builders;
mod listener;

pub use builders::*;
pub use listener::*;

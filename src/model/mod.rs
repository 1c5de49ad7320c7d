mod common;
mod fixture;
mod match_result;
mod table;

pub use common::*;
pub use fixture::*;
pub use match_result::*;
pub use table::*;

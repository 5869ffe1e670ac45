#[macro_use]
pub mod macros;

pub mod cost;
pub mod rate;
pub mod storage;
pub mod time;

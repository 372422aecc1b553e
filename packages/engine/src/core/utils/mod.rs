#[macro_use]
mod log;
pub mod random;

pub use random::{xorshift32, Rng};

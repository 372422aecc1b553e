//! Core utilities shared by every layer (logging macros, random source).

#[macro_use]
pub mod utils;

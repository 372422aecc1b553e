//! Types exported to JavaScript

pub use crate::simulation::{PerfStats, Scene};

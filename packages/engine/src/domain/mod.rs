pub mod config;
pub mod profiles;

pub use config::{ConfigError, SceneConfig};
pub use profiles::{CupPartSpec, CupSpec, GroundSpec, ParticleProfile};

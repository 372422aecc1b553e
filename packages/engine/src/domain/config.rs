//! Scene configuration
//!
//! Every tunable of the scene lives here with the stock values as defaults.
//! Hosts can override any subset from JSON. Overrides are laid over the
//! serialized defaults key by key, so a nested object only replaces the
//! fields it names.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::rigid_body::Vec2;
use crate::rigid_body_system::DEFAULT_GRAVITY_SCALE;
use crate::viewport::FilterConfig;

use super::profiles::{CupSpec, GroundSpec, ParticleProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Seed for spawn radii and stochastic spawns
    pub seed: u32,
    /// Fixed simulation step in milliseconds
    pub tick_ms: f32,
    pub gravity: Vec2,
    pub gravity_scale: f32,
    /// Spawned every tick
    pub boba: ParticleProfile,
    /// Spawned with `jelly_probability` per tick
    pub jelly: ParticleProfile,
    pub jelly_probability: f32,
    pub jelly_enabled: bool,
    pub cup: CupSpec,
    pub ground: Option<GroundSpec>,
    pub filter: FilterConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            tick_ms: 1000.0 / 60.0,
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            boba: ParticleProfile::boba(),
            jelly: ParticleProfile::jelly(),
            jelly_probability: 0.05,
            jelly_enabled: true,
            cup: CupSpec::default(),
            ground: Some(GroundSpec::default()),
            filter: FilterConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(SceneConfig::default())?;
        merge(&mut merged, overrides);

        let config: SceneConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tick_ms > 0.0) {
            return Err(invalid("tick_ms", format!("must be positive, got {}", self.tick_ms)));
        }
        if !(0.0..=1.0).contains(&self.jelly_probability) {
            return Err(invalid(
                "jelly_probability",
                format!("must be within [0, 1], got {}", self.jelly_probability),
            ));
        }
        check_profile("boba", &self.boba)?;
        check_profile("jelly", &self.jelly)?;

        for part in self.cup.parts() {
            if !(part.width > 0.0 && part.height > 0.0) {
                return Err(invalid(
                    "cup",
                    format!("part size must be positive, got {}x{}", part.width, part.height),
                ));
            }
        }
        if let Some(ground) = &self.ground {
            if !(ground.width > 0.0 && ground.height > 0.0) {
                return Err(invalid(
                    "ground",
                    format!("size must be positive, got {}x{}", ground.width, ground.height),
                ));
            }
        }
        Ok(())
    }
}

/// Objects merge recursively; any other value, `null` included, replaces.
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn check_profile(field: &'static str, profile: &ParticleProfile) -> Result<()> {
    if !(profile.radius_min > 0.0) {
        return Err(invalid(field, format!("radius_min must be positive, got {}", profile.radius_min)));
    }
    if profile.radius_max < profile.radius_min {
        return Err(invalid(
            field,
            format!(
                "radius_max {} is below radius_min {}",
                profile.radius_max, profile.radius_min
            ),
        ));
    }
    if !(0.0..=1.0).contains(&profile.material.restitution) {
        return Err(invalid(
            field,
            format!("restitution must be within [0, 1], got {}", profile.material.restitution),
        ));
    }
    if !(profile.material.density > 0.0) {
        return Err(invalid(field, format!("density must be positive, got {}", profile.material.density)));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

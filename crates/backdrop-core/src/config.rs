//! Tunables for the background animations and the theme store.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (`{}`) is a complete configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the particle count. The link pass is O(n²) per frame.
pub const MAX_PARTICLES: usize = 500;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed into a config.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the animators cannot run with.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted field path
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
}

/// Particle field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles created at mount
    pub count: usize,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link opacity at zero distance
    pub link_max_alpha: f32,
    /// Velocity components are drawn from `[-max_speed/2, max_speed/2)`
    pub max_speed: f32,
    /// Smallest particle radius
    pub min_radius: f32,
    /// Largest particle radius (exclusive)
    pub max_radius: f32,
    /// Smallest phase advance per frame
    pub min_phase_speed: f32,
    /// Largest phase advance per frame (exclusive)
    pub max_phase_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            link_distance: 180.0,
            link_max_alpha: 0.2,
            max_speed: 0.8,
            min_radius: 1.0,
            max_radius: 3.5,
            min_phase_speed: 0.01,
            max_phase_speed: 0.03,
        }
    }
}

/// Scrolling grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid spacing; the offset wraps at this value
    pub cell_size: f32,
    /// Offset advance per frame
    pub scroll_step: f32,
    /// Number of pulse bars spread across the viewport
    pub pulse_bars: usize,
    /// Grid line width
    pub line_width: f32,
    /// Pulse bar width
    pub pulse_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            scroll_step: 0.3,
            pulse_bars: 5,
            line_width: 1.0,
            pulse_width: 2.0,
        }
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding `"light"` or `"dark"`
    pub storage_key: String,
    /// Class toggled on the document element in dark mode
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Particle field
    pub particles: ParticleConfig,
    /// Grid
    pub grid: GridConfig,
    /// Theme store
    pub theme: ThemeConfig,
}

impl BackdropConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable. Comparisons are negated so NaN fails.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if p.count > MAX_PARTICLES {
            return Err(invalid(
                "particles.count",
                format!("{} exceeds the maximum of {MAX_PARTICLES}", p.count),
            ));
        }
        if !(p.link_distance > 0.0) {
            return Err(invalid("particles.link_distance", "must be positive"));
        }
        if !(0.0..=1.0).contains(&p.link_max_alpha) {
            return Err(invalid("particles.link_max_alpha", "must be within [0, 1]"));
        }
        if !(p.max_speed >= 0.0) {
            return Err(invalid("particles.max_speed", "must not be negative"));
        }
        if !(p.min_radius > 0.0 && p.min_radius < p.max_radius) {
            return Err(invalid(
                "particles.min_radius",
                "must be positive and below max_radius",
            ));
        }
        if !(p.min_phase_speed >= 0.0 && p.min_phase_speed < p.max_phase_speed) {
            return Err(invalid(
                "particles.min_phase_speed",
                "must not be negative and must be below max_phase_speed",
            ));
        }

        let g = &self.grid;
        if !(g.cell_size > 0.0) {
            return Err(invalid("grid.cell_size", "must be positive"));
        }
        if !(g.scroll_step > 0.0 && g.scroll_step < g.cell_size) {
            return Err(invalid(
                "grid.scroll_step",
                "must be positive and below cell_size",
            ));
        }

        if self.theme.storage_key.is_empty() {
            return Err(invalid("theme.storage_key", "must not be empty"));
        }
        if self.theme.dark_class.is_empty() {
            return Err(invalid("theme.dark_class", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::Color32;
use serde::Deserialize;
use thiserror::Error;

use crate::plexus::PairScan;
use crate::style::{Theme, parse_hex_color};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite value greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("camera gain must be within (0, 1], got {0}")]
    GainOutOfRange(f32),
    #[error("camera fov must be within (0, 180) degrees, got {0}")]
    FovOutOfRange(f32),
    #[error("camera near plane {near} must be closer than far plane {far}")]
    DepthRange { near: f32, far: f32 },
    #[error("accent colour {0:?} is not a #rrggbb hex value")]
    Accent(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlexusConfig {
    pub particle_count: usize,
    pub boundary: f32,
    pub max_speed: f32,
    pub link_threshold: f32,
    pub scan: PairScan,
    pub seed: Option<u64>,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            boundary: 400.0,
            max_speed: 0.5,
            link_threshold: 200.0,
            scan: PairScan::AllPairs,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub distance: f32,
    pub sway: f32,
    pub gain: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub point_size: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 600.0,
            sway: 100.0,
            gain: 0.05,
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            point_size: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub focus_radius: f32,
    pub highlight_radius: f32,
    pub pull_radius: f32,
    pub pull_strength: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            focus_radius: 100.0,
            highlight_radius: 150.0,
            pull_radius: 200.0,
            pull_strength: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub accent: String,
    pub theme: Theme,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            accent: "#00ffcc".to_owned(),
            theme: Theme::Dark,
        }
    }
}

impl StyleConfig {
    pub fn accent_color(&self) -> Result<Color32, ConfigError> {
        parse_hex_color(&self.accent).ok_or_else(|| ConfigError::Accent(self.accent.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub plexus: PlexusConfig,
    pub camera: CameraConfig,
    pub graph: GraphConfig,
    pub style: StyleConfig,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl ViewConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("invalid JSON in config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to load config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("plexus.boundary", self.plexus.boundary)?;
        non_negative("plexus.max_speed", self.plexus.max_speed)?;
        positive("plexus.link_threshold", self.plexus.link_threshold)?;

        let camera = &self.camera;
        positive("camera.distance", camera.distance)?;
        non_negative("camera.sway", camera.sway)?;
        if !(camera.gain > 0.0 && camera.gain <= 1.0) {
            return Err(ConfigError::GainOutOfRange(camera.gain));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::FovOutOfRange(camera.fov_degrees));
        }
        positive("camera.near", camera.near)?;
        positive("camera.far", camera.far)?;
        if camera.near >= camera.far {
            return Err(ConfigError::DepthRange {
                near: camera.near,
                far: camera.far,
            });
        }
        positive("camera.point_size", camera.point_size)?;

        positive("graph.focus_radius", self.graph.focus_radius)?;
        positive("graph.highlight_radius", self.graph.highlight_radius)?;
        positive("graph.pull_radius", self.graph.pull_radius)?;
        non_negative("graph.pull_strength", self.graph.pull_strength)?;

        self.style.accent_color()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ViewConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.plexus.particle_count, 120);
        assert_eq!(config.plexus.boundary, 400.0);
        assert_eq!(config.plexus.link_threshold, 200.0);
        assert_eq!(config.graph.focus_radius, 100.0);
        assert_eq!(config.graph.highlight_radius, 150.0);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = ViewConfig::from_json(
            r##"{ "plexus": { "particle_count": 40, "scan": "grid" }, "style": { "theme": "light" } }"##,
        )
        .expect("partial config parses");

        assert_eq!(config.plexus.particle_count, 40);
        assert_eq!(config.plexus.scan, PairScan::Grid);
        assert_eq!(config.plexus.boundary, 400.0);
        assert_eq!(config.style.theme, Theme::Light);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ViewConfig::from_json(r#"{ "plexus": { "particles": 10 } }"#).is_err());
    }

    #[test]
    fn invalid_values_report_their_field() {
        let mut config = ViewConfig::default();
        config.plexus.link_threshold = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "plexus.link_threshold",
                value: 0.0
            })
        );

        let mut config = ViewConfig::default();
        config.camera.gain = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::GainOutOfRange(1.5)));

        let mut config = ViewConfig::default();
        config.camera.near = 3000.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DepthRange { .. })
        ));

        let mut config = ViewConfig::default();
        config.style.accent = "teal".to_owned();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Accent("teal".to_owned()))
        );
    }

    #[test]
    fn nan_boundary_is_rejected() {
        let mut config = ViewConfig::default();
        config.plexus.boundary = f32::NAN;
        assert!(config.validate().is_err());
    }
}

//! Visualizer Configuration
//!
//! Loaded from TOML (or JSON, by extension) with defaults for anything
//! missing. Command-line flags are applied on top by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_PACE_MS;
use crate::errors::{Result, SortscopeError};

/// Upper bound on `floor(container_width / bar_width)`
pub const MAX_BARS: usize = 1 << 20;

/// Container and bar geometry, in container pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub container_width: f64,
    pub container_height: f64,
    pub bar_width: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            container_width: 960.0,
            container_height: 540.0,
            bar_width: 30.0,
        }
    }
}

impl Layout {
    /// Number of bars that fit: `floor(container_width / bar_width)`
    pub fn bar_count(&self) -> usize {
        (self.container_width / self.bar_width).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        check_positive("container_width", self.container_width)?;
        check_positive("container_height", self.container_height)?;
        check_positive("bar_width", self.bar_width)?;

        let bars = (self.container_width / self.bar_width).floor();
        if bars > MAX_BARS as f64 {
            return Err(SortscopeError::layout(
                "bar_width",
                format!(
                    "{} / {} gives {bars} bars, more than the limit of {MAX_BARS}",
                    self.container_width, self.bar_width
                ),
            ));
        }
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SortscopeError::layout(
            field,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

/// Swap pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Delay before each swap
    pub pace_ms: u64,
    /// Extra random delay per swap, 0 disables jitter
    pub jitter_ms: u64,
    /// Seed for bar heights and jitter
    pub seed: Option<u64>,
    /// Renderer sampling interval
    pub tick_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            pace_ms: DEFAULT_PACE_MS,
            jitter_ms: 0,
            seed: None,
            tick_ms: 16,
        }
    }
}

/// Fill colors as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub background: u32,
    pub default_bar: u32,
    pub active_bar: u32,
    pub pivot_bar: u32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: 0x0E_14_1B,
            default_bar: 0xFF_FF_FF,
            active_bar: 0xD6_FF_B7,
            pivot_bar: 0x0E_14_1B,
        }
    }
}

/// Complete visualizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl VisualizerConfig {
    /// Platform config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "sortscope", "sortscope")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration from `path`, or from the default location when `None`
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<VisualizerConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match VisualizerConfig::config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(VisualizerConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        SortscopeError::ConfigurationError(format!(
            "Failed to read config {}: {e}",
            path.display()
        ))
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");

    // JSON by extension, TOML otherwise
    if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)
            .map_err(|e| SortscopeError::ConfigurationError(format!("Invalid JSON config: {e}")))
    } else {
        toml::from_str(&content)
            .map_err(|e| SortscopeError::ConfigurationError(format!("Invalid TOML config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = VisualizerConfig::default();
        assert_eq!(config.layout.bar_count(), 32);
        assert_eq!(config.pacing.pace_ms, 25);
        assert_eq!(config.pacing.jitter_ms, 0);
        assert!(config.pacing.seed.is_none());
    }

    #[test]
    fn test_palette_colors_distinct() {
        let p = PaletteConfig::default();
        assert_ne!(p.default_bar, p.active_bar);
        assert_ne!(p.default_bar, p.pivot_bar);
        assert_ne!(p.active_bar, p.pivot_bar);
    }

    #[test]
    fn test_bar_count_floors() {
        let layout = Layout {
            container_width: 95.0,
            container_height: 10.0,
            bar_width: 30.0,
        };
        assert_eq!(layout.bar_count(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let mut layout = Layout::default();
        layout.bar_width = -1.0;
        assert!(layout.validate().is_err());
        layout.bar_width = 10.0;
        layout.container_height = f64::NAN;
        assert!(layout.validate().is_err());
        layout.container_height = 10.0;
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_too_many_bars() {
        let layout = Layout {
            container_width: 1e30,
            container_height: 10.0,
            bar_width: 1.0,
        };
        let err = layout.validate().unwrap_err();
        assert!(matches!(
            err,
            SortscopeError::InvalidLayout { ref field, .. } if field == "bar_width"
        ));

        let at_limit = Layout {
            container_width: MAX_BARS as f64,
            container_height: 10.0,
            bar_width: 1.0,
        };
        assert!(at_limit.validate().is_ok());
        assert_eq!(at_limit.bar_count(), MAX_BARS);
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[layout]\nbar_width = 10.0\n\n[pacing]\npace_ms = 5\nseed = 9").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.layout.bar_width, 10.0);
        assert_eq!(config.layout.container_width, 960.0);
        assert_eq!(config.pacing.pace_ms, 5);
        assert_eq!(config.pacing.seed, Some(9));
        assert_eq!(config.palette, PaletteConfig::default());
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"pacing": {{"jitter_ms": 4}}}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.pacing.jitter_ms, 4);
        assert_eq!(config.pacing.pace_ms, 25);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(SortscopeError::ConfigurationError(_))));
    }

    #[test]
    fn test_load_malformed_toml_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[layout\nbar_width = ").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}

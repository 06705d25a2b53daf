//! Title configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use wick_core::Result;

/// Presentation surface dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StageConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 480,
        }
    }
}

/// Settings for the sample title, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub stage: StageConfig,
    /// Milliseconds per full cube revolution.
    pub spin_period_ms: u64,
    /// Frames to run before the title posts its own quit event.
    pub max_frames: u64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            stage: StageConfig::default(),
            spin_period_ms: 10_000,
            max_frames: 600,
        }
    }
}

impl TitleConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from a TOML file, falling back to defaults when the file is
    /// absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TitleConfig::default();
        assert_eq!(config.stage.width, 320);
        assert_eq!(config.stage.height, 480);
        assert_eq!(config.spin_period_ms, 10_000);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: TitleConfig = toml::from_str(
            r#"
            spin_period_ms = 5000

            [stage]
            width = 640
            height = 360
            "#,
        )
        .unwrap();

        assert_eq!(config.spin_period_ms, 5000);
        assert_eq!(config.stage.width, 640);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.max_frames, 600);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            TitleConfig::load_or_default(Path::new("/nonexistent/title.toml")).unwrap();
        assert_eq!(config.max_frames, 600);
    }
}

//! Game configuration
//!
//! Everything here has a default, so the game runs without a config file.
//! When present, the file is JSON and may override any subset of fields:
//!
//! ```json
//! {
//!     "target_fps": 120,
//!     "start_muted": true,
//!     "scroll": { "speed_cap": 2.0 }
//! }
//! ```

use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Scroll speed tuning, in pixels per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Speed held while the menu is shown
    pub menu_speed: f32,
    /// Speed a new run starts at
    pub start_speed: f32,
    /// Added every Playing tick until `speed_cap`
    pub speed_step: f32,
    pub speed_cap: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            menu_speed: 0.5,
            start_speed: 0.5,
            speed_step: 0.0001,
            speed_cap: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding the images and sounds
    pub asset_dir: PathBuf,
    /// Frame cap, 0 runs uncapped
    pub target_fps: u32,
    pub start_fullscreen: bool,
    pub start_muted: bool,
    /// Play the collect cue when a cloud is picked up
    pub play_collect_sound: bool,
    /// Fixed seed for cloud placement, random when absent
    pub seed: Option<u64>,
    pub scroll: ScrollConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            asset_dir: PathBuf::from("assets"),
            target_fps: 60,
            start_fullscreen: false,
            start_muted: false,
            play_collect_sound: true,
            seed: None,
            scroll: ScrollConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config from the first location that has one, or fall back to defaults
    pub fn load_or_default() -> GameResult<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// `<config_dir>/ten_clouds/config.json`, then `./config.json`
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("ten_clouds").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    pub fn validate(&self) -> GameResult<()> {
        let scroll = &self.scroll;

        if scroll.menu_speed < 0.0 || scroll.start_speed < 0.0 {
            return Err(GameError::InvalidConfig("scroll speeds must not be negative".to_string()));
        }
        if scroll.speed_step < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "speed_step must not be negative (got {})",
                scroll.speed_step
            )));
        }
        if scroll.speed_cap < scroll.start_speed {
            return Err(GameError::InvalidConfig(format!(
                "speed_cap ({}) is below start_speed ({})",
                scroll.speed_cap, scroll.start_speed
            )));
        }

        Ok(())
    }

    /// Full path of an asset file
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.scroll.speed_cap, 1.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "start_muted": true, "scroll": { "speed_cap": 2.0 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert!(config.start_muted);
        assert_eq!(config.scroll.speed_cap, 2.0);
        assert_eq!(config.scroll.menu_speed, 0.5);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert!(config.play_collect_sound);
    }

    #[test]
    fn test_cap_below_start_rejected() {
        let mut config = GameConfig::default();
        config.scroll.speed_cap = 0.25;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_negative_step_rejected() {
        let mut config = GameConfig::default();
        config.scroll.speed_step = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_reports_bad_json() {
        let path = std::env::temp_dir().join(format!("ten_clouds_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(GameError::Config { .. })));
    }

    #[test]
    fn test_load_from_file_round_trips() {
        let path = std::env::temp_dir().join(format!("ten_clouds_ok_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "target_fps": 30, "seed": 9 }"#).unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.target_fps, 30);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_asset_path_joins_dir() {
        let config = GameConfig::default();
        assert_eq!(config.asset_path("cloud.png"), PathBuf::from("assets").join("cloud.png"));
    }
}

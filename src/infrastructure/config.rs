pub mod keybindings;

use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::model::slide_controller::AUTO_ADVANCE_INTERVAL;
use crate::utils;

pub use keybindings::KeyBindings;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CarouselConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    AUTO_ADVANCE_INTERVAL.as_millis() as u64
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// The built-in configuration shipped in `.config/config.json5`.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load the user's configuration from the config directory, layered over the defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        Self::load_from(config_dir, data_dir)
    }

    pub fn load_from(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            tracing::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        if !found_config {
            cfg.carousel = default_config.carousel.clone();
            cfg.catalog_path.clone_from(&default_config.catalog_path);
        }

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Message(String::from(
                "carousel.interval_ms must be greater than zero",
            )));
        }
        Ok(())
    }

    /// Catalog file to load when none is given on the command line.
    pub fn resolved_catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| self.config._data_dir.join("catalog.json"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::action::Action;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "storefront-config-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn test_embedded_defaults() -> color_eyre::Result<()> {
        let cfg = Config::embedded()?;
        assert_eq!(cfg.carousel.interval(), Duration::from_millis(5000));
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(&Action::NextSlide)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE)),
            Some(&Action::StartSearch)
        );
        Ok(())
    }

    #[test]
    fn test_load_without_user_file_uses_defaults() -> color_eyre::Result<()> {
        let config_dir = temp_dir("defaults");
        let data_dir = config_dir.join("data");
        let cfg = Config::load_from(config_dir.clone(), data_dir.clone())?;

        assert_eq!(cfg.carousel, CarouselConfig::default());
        assert_eq!(cfg.resolved_catalog_path(), data_dir.join("catalog.json"));
        assert!(!cfg.keybindings.is_empty());
        fs::remove_dir_all(config_dir)?;
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_and_merges() -> color_eyre::Result<()> {
        let config_dir = temp_dir("override");
        fs::write(
            config_dir.join("config.json5"),
            r#"{
                carousel: { interval_ms: 1500 },
                catalog_path: "/tmp/products.json",
                keybindings: { "<n>": "NextSlide" },
            }"#,
        )?;
        let cfg = Config::load_from(config_dir.clone(), config_dir.join("data"))?;

        assert_eq!(cfg.carousel.interval(), Duration::from_millis(1500));
        assert_eq!(
            cfg.resolved_catalog_path(),
            PathBuf::from("/tmp/products.json")
        );
        // user binding
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(&Action::NextSlide)
        );
        // default binding kept
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(&Action::Quit)
        );
        fs::remove_dir_all(config_dir)?;
        Ok(())
    }

    #[test]
    fn test_zero_interval_is_rejected() -> color_eyre::Result<()> {
        let config_dir = temp_dir("zero");
        fs::write(
            config_dir.join("config.json5"),
            r#"{ carousel: { interval_ms: 0 } }"#,
        )?;
        let err = Config::load_from(config_dir.clone(), config_dir.join("data"))
            .expect_err("zero interval must fail");
        assert!(err.to_string().contains("interval_ms"));
        fs::remove_dir_all(config_dir)?;
        Ok(())
    }
}

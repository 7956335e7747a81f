//! Vitrine configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vitrine_widgets::{CarouselConfig, ContactConfig, CounterConfig, NavConfig, TypingConfig};

use crate::headless_runtime::HeadlessRunConfig;

/// File name looked up by [`VitrineConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "vitrine.toml";

/// Top-level Vitrine configuration (vitrine.toml)
///
/// Every section and key is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub headless: HeadlessRunConfig,
}

impl VitrineConfig {
    /// Load configuration from a directory (looks for vitrine.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `vitrine config --init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VitrineConfig = toml::from_str(content)?;
        tracing::debug!(carousel = ?config.carousel, "configuration loaded");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the configuration as `vitrine.toml` into `dir`
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_widgets::KeyboardScope;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = VitrineConfig::from_toml("").unwrap();
        assert_eq!(config, VitrineConfig::default());
        assert_eq!(config.carousel.auto_advance_period_ms, 6000);
        assert_eq!(config.headless.tick_ms, 16);
    }

    #[test]
    fn test_partial_sections() {
        let config = VitrineConfig::from_toml(
            r#"
            [carousel]
            keyboard_scope = "focused"
            swipe_threshold = 60.0

            [contact]
            message_ttl_ms = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.keyboard_scope, KeyboardScope::Focused);
        assert_eq!(config.carousel.swipe_threshold, 60.0);
        assert_eq!(config.carousel.desktop_min_width, 1024.0);
        assert_eq!(config.contact.message_ttl_ms, 3000);
        assert_eq!(config.nav.navbar_offset, 70.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = VitrineConfig::default();
        config.carousel.settle_estimate_ms = 900;
        config.headless.viewport_width = 800.0;

        let text = config.to_toml().unwrap();
        assert!(text.contains("[carousel]"));
        assert_eq!(VitrineConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_malformed_value() {
        let err = VitrineConfig::from_toml("[carousel]\nauto_advance_period_ms = \"soon\"\n");
        assert!(err.is_err());
    }
}

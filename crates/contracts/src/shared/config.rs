use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows per page in list views
    pub page_size: usize,
    /// Route opened when the hash is empty or unknown
    pub default_route: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            default_route: "requests".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `Info`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[ui]
page_size = 25
default_route = "requests"

[logging]
level = "debug"
"#;

/// Local storage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "mdm_config";

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("invalid configuration TOML")?;
    ensure!(config.ui.page_size > 0, "ui.page_size must be positive");
    ensure!(
        !config.ui.default_route.trim().is_empty(),
        "ui.default_route must not be empty"
    );
    Ok(config)
}

/// Outcome of [`load_config`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// Set when the override was valid and is in effect
    pub overridden: bool,
    /// Why a supplied override was ignored
    pub rejected_override: Option<anyhow::Error>,
}

/// Loads the embedded defaults, then the override if one is given.
///
/// An invalid override is not an error: the defaults are used and the
/// reason is returned so the caller can log it once logging is up.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<LoadedConfig> {
    let mut rejected_override = None;
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        match parse_config(contents) {
            Ok(config) => {
                return Ok(LoadedConfig {
                    config,
                    overridden: true,
                    rejected_override: None,
                })
            }
            Err(e) => rejected_override = Some(e),
        }
    }

    Ok(LoadedConfig {
        config: parse_config(DEFAULT_CONFIG)?,
        overridden: false,
        rejected_override,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let loaded = load_config(None).unwrap();
        assert!(!loaded.overridden);
        assert!(loaded.rejected_override.is_none());
        let config = loaded.config;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.page_size, 25);
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override() {
        let loaded = load_config(Some("[ui]\npage_size = 50\n")).unwrap();
        assert!(loaded.overridden);
        let config = loaded.config;
        assert_eq!(config.ui.page_size, 50);
        assert_eq!(config.ui.default_route, "requests");
    }

    #[test]
    fn test_invalid_override_falls_back() {
        for broken in ["[ui\n", "[ui]\npage_size = 0\n"] {
            let loaded = load_config(Some(broken)).unwrap();
            assert_eq!(loaded.config, AppConfig::default());
            assert!(!loaded.overridden);
            assert!(loaded.rejected_override.is_some(), "reason kept for {broken:?}");
        }
        let reason = load_config(Some("[ui]\npage_size = 0\n"))
            .unwrap()
            .rejected_override
            .unwrap();
        assert!(reason.to_string().contains("page_size"));
        assert!(parse_config("[ui]\npage_size = 0\n").is_err());
    }

    #[test]
    fn test_blank_override_is_not_rejected() {
        let loaded = load_config(Some("  \n")).unwrap();
        assert!(!loaded.overridden);
        assert!(loaded.rejected_override.is_none());
    }

    #[test]
    fn test_unknown_level_is_info() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.level(), log::Level::Info);
    }
}

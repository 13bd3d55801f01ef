use serde::{Deserialize, Serialize};
use std::{sync::LazyLock, time::Duration};
use thiserror::Error;

static SITE_JSON: &str = include_str!("../site.json");

pub static GLOBAL_SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|e| {
        log::warn!("{e}, falling back to default site config");
        SiteConfig::default()
    })
});

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for every page controller. Missing keys take their defaults, so
/// `site.json` only needs to list what it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub effects: EffectsConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn global() -> &'static SiteConfig {
        &GLOBAL_SITE_CONFIG
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset (px) at which the top bar switches to its scrolled look.
    pub scrolled_threshold: f64,
    /// How far (px) ahead of a section's top it already counts as current.
    pub section_lookahead: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            section_lookahead: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_latency_ms: u64,
    pub settle_delay_ms: u64,
    pub banner_ttl_ms: u64,
    pub banner_fade_ms: u64,
}

impl ContactConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_millis(self.banner_ttl_ms)
    }

    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner_fade_ms)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 2000,
            settle_delay_ms: 1000,
            banner_ttl_ms: 5000,
            banner_fade_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub parallax_interval_ms: f64,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
    pub shape_count: usize,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_interval_ms: 10.0,
            parallax_base_speed: 0.5,
            parallax_speed_step: 0.1,
            shape_count: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).expect("site.json should parse");
        assert_eq!(config.nav.scrolled_threshold, 50.0);
        assert_eq!(config.contact.submit_latency(), Duration::from_millis(2000));
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "nav": { "scrolled_threshold": 80 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.nav.scrolled_threshold, 80.0);
        assert_eq!(config.nav.section_lookahead, 100.0);
        assert_eq!(config.effects, EffectsConfig::default());
        assert!(config.analytics.enabled);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = SiteConfig::from_json("{ nav: ").unwrap_err();
        assert!(err.to_string().starts_with("Couldn't parse site config"));
    }

    #[test]
    fn test_log_level() {
        let mut config = SiteConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.logging.level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.logging.level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}

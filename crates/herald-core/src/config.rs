use figment::{providers::Env, Figment};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{HeraldError, Result};

/// Environment prefix for all notifier settings (`HERALD_BOT_TOKEN`, …).
pub const ENV_PREFIX: &str = "HERALD_";

/// Notifier configuration (environment only; there is no config file).
///
/// Loaded once at construction and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Bot API token issued by @BotFather.
    pub bot_token: String,

    /// Comma-separated destination list: numeric chat IDs, negative channel
    /// IDs, or `@username` entries. Kept raw here; parsed into typed
    /// destinations when the notifier is built.
    #[serde(deserialize_with = "string_or_int")]
    pub destinations: String,
}

impl NotifierConfig {
    /// Load from `HERALD_*` environment variables.
    ///
    /// Fails fast when the token or the destination list is missing or blank.
    pub fn from_env() -> Result<Self> {
        let config: NotifierConfig = Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| HeraldError::Config(e.to_string()))?;

        config.validate()?;
        debug!("notifier configuration loaded from environment");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(HeraldError::Config(format!(
                "{ENV_PREFIX}BOT_TOKEN is not set or empty"
            )));
        }
        if self.destinations.trim().is_empty() {
            return Err(HeraldError::Config(format!(
                "{ENV_PREFIX}DESTINATIONS is not set or empty"
            )));
        }
        Ok(())
    }
}

/// The env provider type-infers values, so `HERALD_DESTINATIONS=123456789`
/// arrives as an integer. Accept both spellings.
fn string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct Raw;

    impl serde::de::Visitor<'_> for Raw {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a comma-separated destination list")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(Raw)
}

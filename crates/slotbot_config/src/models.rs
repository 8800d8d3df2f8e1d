// --- File: crates/slotbot_config/src/models.rs ---

use chrono_tz::Tz;
use config::ConfigError;
use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// --- Slack Config ---
// The signing secret is normally "secret_from_env" in the config file and
// resolved from SLACK_SIGNING_SECRET at load time.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SlackConfig {
    #[serde(default)]
    pub signing_secret: String,
}

// --- Google Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    /// Path to the service account key file.
    pub key_path: Option<String>,
    /// Target calendar; `primary` when unset.
    pub calendar_id: Option<String>,
}

impl GcalConfig {
    pub fn calendar_id_or_primary(&self) -> &str {
        self.calendar_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or("primary")
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub slack: SlackConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    #[serde(default)]
    pub gcal: Option<GcalConfig>,

    /// IANA zone used for rendering times and stamping calendar events.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl AppConfig {
    /// Parses `default_timezone` into a chrono-tz zone.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.default_timezone.parse::<Tz>().map_err(|err| {
            ConfigError::Message(format!(
                "invalid default_timezone '{}': {err}",
                self.default_timezone
            ))
        })
    }

    /// Returns the Google Calendar section only when the runtime flag enables it.
    pub fn gcal_if_enabled(&self) -> Option<&GcalConfig> {
        if self.use_gcal {
            self.gcal.as_ref()
        } else {
            None
        }
    }

    /// Checks the settings the server cannot start without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slack.signing_secret.is_empty() || self.slack.signing_secret == crate::SECRET_MARKER
        {
            return Err(ConfigError::Message(
                "slack.signing_secret is not set (SLACK_SIGNING_SECRET)".to_string(),
            ));
        }
        self.timezone()?;
        Ok(())
    }
}

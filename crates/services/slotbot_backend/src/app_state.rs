// --- File: crates/services/slotbot_backend/src/app_state.rs ---
use chrono_tz::Tz;
use slotbot_common::{external_service_error, BoxedEventSource, SlotbotError};
use slotbot_config::AppConfig;
use slotbot_gcal::{create_calendar_hub, GoogleCalendarEventSource};
use slotbot_slack::{logic::DynEventSource, SlackAuthState, SlackState};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the routers need, built once at start-up.
#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with.
    pub config: Arc<AppConfig>,
    pub slack: Arc<SlackState>,
    pub auth: Arc<SlackAuthState>,
}

impl AppState {
    /// Wires the calendar (when enabled) and the Slack state from configuration.
    ///
    /// Calendar authentication failures abort start-up; a disabled calendar leaves the
    /// commands answering "not configured".
    pub async fn from_config(config: AppConfig) -> Result<Self, SlotbotError> {
        let timezone = config.timezone()?;

        let event_source = match config.gcal_if_enabled() {
            Some(gcal) => {
                let hub = create_calendar_hub(gcal)
                    .await
                    .map_err(|e| external_service_error("google-calendar", e))?;
                info!(
                    "Google Calendar connected (calendar {})",
                    gcal.calendar_id_or_primary()
                );
                let source: Arc<DynEventSource> =
                    Arc::new(BoxedEventSource::new(GoogleCalendarEventSource::new(
                        Arc::new(hub),
                        gcal.calendar_id_or_primary(),
                        timezone,
                    )));
                Some(source)
            }
            None => {
                warn!("Google Calendar disabled, commands will report it as not configured");
                None
            }
        };

        Ok(Self::new(config, event_source, timezone))
    }

    pub fn new(
        config: AppConfig,
        event_source: Option<Arc<DynEventSource>>,
        timezone: Tz,
    ) -> Self {
        let auth = Arc::new(SlackAuthState::new(&config.slack.signing_secret));
        Self {
            slack: Arc::new(SlackState::new(event_source, timezone)),
            auth,
            config: Arc::new(config),
        }
    }

    /// `host:port` the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

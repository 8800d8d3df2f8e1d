// --- File: crates/slotbot_slack/src/lib.rs ---

pub mod auth; // Slack request signature verification
pub mod commands; // Slash command text parsing
pub mod handlers; // Axum handlers for the slash commands
pub mod logic; // Booking flow on top of the scheduling engine
pub mod reply; // Slack response formatting
pub mod routes;

pub use auth::SlackAuthState;
pub use handlers::SlackState;
pub use routes::routes;

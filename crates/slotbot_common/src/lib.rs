// --- File: crates/slotbot_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP error responses
pub mod logging; // Logging utilities
pub mod models; // Booking and Event
pub mod services; // Event source abstraction

pub use error::{external_service_error, HttpStatusCode, SlotbotError};
pub use models::{Booking, Event};
pub use services::{BoxedError, BoxedEventSource, EventSource};

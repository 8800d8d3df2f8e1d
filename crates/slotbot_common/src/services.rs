// --- File: crates/slotbot_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The scheduling core never talks to the calendar itself. Command handlers reach it
//! through [`EventSource`], which keeps them testable against [`mock::InMemoryEventSource`].

use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::{Booking, Event};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Store of confirmed reservations.
///
/// Errors are opaque to the caller and are passed through unchanged: no retry, no
/// backoff.
pub trait EventSource: Send + Sync {
    /// Error type returned by event source operations.
    type Error: StdError + Send + Sync + 'static;

    /// Events intersecting `[start, end)`, ascending by start.
    fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Event>, Self::Error>;

    /// Persists the booking and returns a reference to it (for example a link).
    fn create_event(&self, booking: &Booking) -> BoxFuture<'_, String, Self::Error>;
}

/// Adapts any [`EventSource`] to `EventSource<Error = BoxedError>` so handlers can
/// hold an `Arc<dyn EventSource<Error = BoxedError>>`.
pub struct BoxedEventSource<S> {
    inner: S,
}

impl<S> BoxedEventSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: EventSource> EventSource for BoxedEventSource<S> {
    type Error = BoxedError;

    fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Event>, Self::Error> {
        let fut = self.inner.list_events(start, end);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn create_event(&self, booking: &Booking) -> BoxFuture<'_, String, Self::Error> {
        let fut = self.inner.create_event(booking);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("mock event source failure: {0}")]
    pub struct MockEventSourceError(pub String);

    /// In-memory event source for tests.
    #[derive(Default)]
    pub struct InMemoryEventSource {
        events: Mutex<Vec<Event>>,
        failure: Option<String>,
    }

    impl InMemoryEventSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_events(events: Vec<Event>) -> Self {
            Self {
                events: Mutex::new(events),
                failure: None,
            }
        }

        /// A source whose every call fails with `message`.
        pub fn failing(message: &str) -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                failure: Some(message.to_string()),
            }
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.lock().map(|e| e.clone()).unwrap_or_default()
        }
    }

    impl EventSource for InMemoryEventSource {
        type Error = MockEventSourceError;

        fn list_events(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<Event>, Self::Error> {
            Box::pin(async move {
                if let Some(message) = &self.failure {
                    return Err(MockEventSourceError(message.clone()));
                }
                let mut found: Vec<Event> = self
                    .events()
                    .into_iter()
                    .filter(|e| e.start < end && e.end > start)
                    .collect();
                found.sort_by_key(|e| e.start);
                Ok(found)
            })
        }

        fn create_event(&self, booking: &Booking) -> BoxFuture<'_, String, Self::Error> {
            let event = Event {
                title: booking.title(),
                start: booking.start,
                end: booking.end(),
                environment: booking.environment.to_lowercase(),
                service: booking.service.to_lowercase(),
            };
            Box::pin(async move {
                if let Some(message) = &self.failure {
                    return Err(MockEventSourceError(message.clone()));
                }
                let mut events = self
                    .events
                    .lock()
                    .map_err(|_| MockEventSourceError("poisoned".to_string()))?;
                events.push(event);
                Ok(format!("mock://events/{}", events.len()))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::InMemoryEventSource;
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;

    fn booking(start: DateTime<Utc>) -> Booking {
        Booking {
            environment: "QA".to_string(),
            service: "Search".to_string(),
            ticket: "qa-7".to_string(),
            start,
            duration: Duration::minutes(30),
            requester: "bob".to_string(),
        }
    }

    #[tokio::test]
    async fn test_boxed_source_round_trips_through_dyn() {
        let source: Arc<dyn EventSource<Error = BoxedError>> =
            Arc::new(BoxedEventSource::new(InMemoryEventSource::new()));
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

        let link = source.create_event(&booking(start)).await.unwrap();
        assert_eq!(link, "mock://events/1");

        let events = source
            .list_events(start - Duration::hours(1), start + Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "qa | search | QA-7 | bob");
        assert_eq!(events[0].environment, "qa");
    }

    #[tokio::test]
    async fn test_failures_propagate_unchanged() {
        let source = BoxedEventSource::new(InMemoryEventSource::failing("quota exceeded"));
        let now = Utc::now();
        let err = source.list_events(now, now).await.unwrap_err();
        assert_eq!(err.to_string(), "mock event source failure: quota exceeded");
    }
}

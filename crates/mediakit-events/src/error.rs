//! Error types for the `mediakit-events` crate.
//!
//! [`HandlerError`] is what an [`EventHandler`](crate::EventHandler) returns
//! when it cannot deal with an event. The marker traits themselves never
//! fail; errors only come out of handler implementations.

use std::error::Error as StdError;

use crate::Event;

/// Boxed cause carried by [`HandlerError::Failed`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors raised while handling an event.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The handler refused the event.
    #[error("handler rejected {event}: {reason}")]
    Rejected {
        /// Name of the rejected event.
        event: &'static str,
        /// Why the handler refused it.
        reason: String,
    },

    /// The handler accepted the event but could not complete.
    #[error("handler for {event} failed: {source}")]
    Failed {
        /// Name of the event being handled.
        event: &'static str,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
}

impl HandlerError {
    /// Build a [`HandlerError::Rejected`] for `event`.
    pub fn rejected<E: Event + ?Sized>(event: &E, reason: impl Into<String>) -> Self {
        Self::Rejected {
            event: event.name(),
            reason: reason.into(),
        }
    }

    /// Build a [`HandlerError::Failed`] for `event` wrapping `source`.
    pub fn failed<E: Event + ?Sized>(event: &E, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            event: event.name(),
            source: source.into(),
        }
    }

    /// Name of the event the error was raised for.
    pub const fn event(&self) -> &'static str {
        match self {
            Self::Rejected { event, .. } | Self::Failed { event, .. } => *event,
        }
    }
}

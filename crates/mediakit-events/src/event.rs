//! The two base capabilities: being an event and handling one.

use serde::{Deserialize, Serialize};

use crate::HandlerError;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Something that can be published to a dispatcher.
///
/// Classification only. The single provided method supplies a label for
/// logs and errors.
pub trait Event: Send + Sync + 'static {
    /// Label used in log fields and error messages.
    ///
    /// Defaults to the Rust type name.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ---------------------------------------------------------------------------
// Handling
// ---------------------------------------------------------------------------

/// What a handler reports back after seeing an event.
///
/// The dispatcher decides what to do with it; handlers only state intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Later handlers should still see the event.
    Continue,
    /// The handler claims the event.
    Consumed,
}

impl Disposition {
    /// Whether the handler claimed the event.
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Something that can handle events of type `E`.
///
/// Any `Fn(&E) -> Result<Disposition, HandlerError>` closure that is
/// `Send + Sync` is a handler.
pub trait EventHandler<E: Event>: Send + Sync {
    /// Handle one event.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the handler refuses the event or fails
    /// while processing it.
    fn handle_event(&self, event: &E) -> Result<Disposition, HandlerError>;
}

impl<E, F> EventHandler<E> for F
where
    E: Event,
    F: Fn(&E) -> Result<Disposition, HandlerError> + Send + Sync,
{
    fn handle_event(&self, event: &E) -> Result<Disposition, HandlerError> {
        self(event)
    }
}

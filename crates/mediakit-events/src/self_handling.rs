//! The self-handling event marker.
//!
//! An event that implements [`SelfHandlingEvent`] is also its own handler.
//! A dispatcher that sees this capability gives the event first-chance
//! handling through [`offer_to_self`], strictly before any registered
//! listener sees the same instance. The marker adds no members; it only
//! ties [`Event`] and [`EventHandler`] together under one name.
//!
//! ```
//! use mediakit_events::{
//!     Disposition, Event, EventHandler, HandlerError, SelfHandlingEvent, offer_to_self,
//! };
//!
//! struct FlushRequested;
//!
//! impl Event for FlushRequested {}
//!
//! impl EventHandler<Self> for FlushRequested {
//!     fn handle_event(&self, _event: &Self) -> Result<Disposition, HandlerError> {
//!         Ok(Disposition::Consumed)
//!     }
//! }
//!
//! impl SelfHandlingEvent<Self> for FlushRequested {}
//!
//! assert!(matches!(offer_to_self(&FlushRequested), Ok(Disposition::Consumed)));
//! ```

use tracing::{debug, trace, trace_span};

use crate::{Disposition, Event, EventHandler, HandlerError};

/// Marks an event that can handle events of type `E`, usually itself.
///
/// Implementors already satisfy [`Event`] and [`EventHandler<E>`]; this
/// trait contributes nothing beyond the capability it names.
pub trait SelfHandlingEvent<E: Event>: Event + EventHandler<E> {}

/// Give a self-handling event its first chance at handling itself.
///
/// Calls the event's own [`EventHandler::handle_event`] with the event as
/// argument and returns the result unchanged. Dispatchers call this before
/// offering the event to any listener.
///
/// # Errors
///
/// Returns whatever [`HandlerError`] the event's own handler returns. The
/// error is not retried or translated.
pub fn offer_to_self<E>(event: &E) -> Result<Disposition, HandlerError>
where
    E: SelfHandlingEvent<E>,
{
    let span = trace_span!("self_handling", event = event.name());
    let _enter = span.enter();

    let result = event.handle_event(event);
    match &result {
        Ok(disposition) => trace!(?disposition, "Self-handled"),
        Err(err) => debug!(%err, "Self-handling failed"),
    }
    result
}

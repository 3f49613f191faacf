//! Event capabilities for mediakit.
//!
//! Dispatching itself lives elsewhere. This crate defines the contracts a
//! dispatcher works against, plus the marker that lets an event handle
//! itself before any listener sees it.
//!
//! # Modules
//!
//! - [`event`] -- [`Event`] and [`EventHandler`], the two base capabilities,
//!   and the [`Disposition`] a handler reports
//! - [`self_handling`] -- the [`SelfHandlingEvent`] marker and
//!   [`offer_to_self`], the first-chance entry point
//! - [`error`] -- [`HandlerError`]
//!
//! # Ordering
//!
//! For an event that implements [`SelfHandlingEvent`], the dispatcher calls
//! [`offer_to_self`] strictly before handing the same instance to any
//! registered listener. What happens after a failed or consuming
//! self-handle is the dispatcher's decision.

pub mod error;
pub mod event;
pub mod self_handling;

// Re-export primary types at crate root.
pub use error::{BoxError, HandlerError};
pub use event::{Disposition, Event, EventHandler};
pub use self_handling::{SelfHandlingEvent, offer_to_self};

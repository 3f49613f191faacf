//! Small general-purpose utilities shared across mediakit.
//!
//! # Modules
//!
//! - [`mutable`] -- [`Mutable`], a replaceable single-value holder for
//!   sharing a value across closure or thread boundaries

pub mod mutable;

pub use mutable::Mutable;

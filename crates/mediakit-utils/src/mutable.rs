//! A single-slot holder whose value can be replaced and read.
//!
//! [`Mutable`] exists so that code which needs a reassignable value across
//! a closure or thread boundary has a named object to mutate and to lock
//! around. It holds one `Option<T>`; `None` is the absent value.
//!
//! # Synchronization
//!
//! `Mutable` does **not** synchronize access. Replacing the value needs
//! `&mut self`, so sharing a holder between threads means the caller wraps
//! it in a lock and holds that lock around both the action that starts the
//! concurrent work and any related read or write:
//!
//! ```
//! use std::sync::Arc;
//!
//! use mediakit_utils::Mutable;
//! use parking_lot::Mutex;
//!
//! let flag = Arc::new(Mutex::new(Mutable::new(false)));
//!
//! let worker = {
//!     let mut guard = flag.lock();
//!     let shared = Arc::clone(&flag);
//!     // The worker blocks on the lock until `guard` is dropped.
//!     let handle = std::thread::spawn(move || shared.lock().set(true));
//!     guard.set(false);
//!     drop(guard);
//!     handle
//! };
//!
//! worker.join().ok();
//! assert_eq!(flag.lock().get(), Some(&true));
//! ```

use serde::{Deserialize, Serialize};

/// A container for one value of type `T` that may be replaced at will.
///
/// The holder never transforms or validates its payload: [`get`] returns
/// exactly what the most recent [`set`] stored, or the initial value if
/// nothing was set. A holder built with [`empty`] (or [`Default`]) starts
/// absent.
///
/// Not internally synchronized. See the [module docs](self).
///
/// [`get`]: Mutable::get
/// [`set`]: Mutable::set
/// [`empty`]: Mutable::empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mutable<T> {
    /// The current value, `None` when absent.
    value: Option<T>,
}

impl<T> Mutable<T> {
    /// Create a holder with no value.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Create a holder containing `value`.
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create a holder from a value that may itself be absent.
    pub const fn from_option(value: Option<T>) -> Self {
        Self { value }
    }

    /// Replace the contained value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Replace the contained value with one that may be absent.
    pub fn set_option(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Return the current value.
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Return the current value for in-place mutation.
    pub const fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replace the contained value, returning the previous one.
    pub const fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Reset the holder to absent, returning the previous value.
    pub const fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether a value is present.
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the underlying slot.
    pub const fn as_option(&self) -> &Option<T> {
        &self.value
    }

    /// Consume the holder, returning its value.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

// `derive(Default)` would require `T: Default`; an empty holder needs nothing.
impl<T> Default for Mutable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Mutable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Mutable<T>> for Option<T> {
    fn from(holder: Mutable<T>) -> Self {
        holder.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_is_returned_unchanged() {
        let holder = Mutable::new(5);
        assert_eq!(holder.get(), Some(&5));

        let text = Mutable::new(String::from("clip-01.flv"));
        assert_eq!(text.get().map(String::as_str), Some("clip-01.flv"));
    }

    #[test]
    fn absent_initial_value_is_accepted() {
        let holder: Mutable<i32> = Mutable::from_option(None);
        assert_eq!(holder.get(), None);
        assert!(!holder.is_set());
    }

    #[test]
    fn empty_holder_has_no_value() {
        let holder: Mutable<u64> = Mutable::empty();
        assert_eq!(holder.get(), None);
        assert_eq!(Mutable::<u64>::default(), holder);
    }

    #[test]
    fn default_does_not_require_default_payload() {
        let holder: Mutable<std::time::Instant> = Mutable::default();
        assert!(holder.get().is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut holder = Mutable::new(1);
        for value in [2, 3, 7, 4] {
            holder.set(value);
        }
        assert_eq!(holder.get(), Some(&4));
    }

    #[test]
    fn set_option_can_clear() {
        let mut holder = Mutable::new('a');
        holder.set_option(None);
        assert_eq!(holder.get(), None);
        holder.set_option(Some('b'));
        assert_eq!(holder.get(), Some(&'b'));
    }

    #[test]
    fn replace_and_take_return_previous_value() {
        let mut holder = Mutable::new(10);
        assert_eq!(holder.replace(11), Some(10));
        assert_eq!(holder.take(), Some(11));
        assert_eq!(holder.take(), None);
        assert_eq!(holder.replace(12), None);
        assert_eq!(holder.into_inner(), Some(12));
    }

    #[test]
    fn into_inner_moves_out_an_owned_payload() {
        let holder = Mutable::new(String::from("stream-7"));
        let owned: Option<String> = holder.into_inner();
        assert_eq!(owned.as_deref(), Some("stream-7"));

        let empty: Mutable<Vec<u8>> = Mutable::empty();
        assert_eq!(empty.into_inner(), None);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut holder = Mutable::new(vec![1, 2]);
        if let Some(items) = holder.get_mut() {
            items.push(3);
        }
        assert_eq!(holder.get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn holders_are_independent() {
        let mut first = Mutable::new(5);
        let second = first.clone();
        first.set(10);
        assert_eq!(first.get(), Some(&10));
        assert_eq!(second.get(), Some(&5));
    }

    #[test]
    fn payload_is_stored_without_copying() {
        let shared = std::sync::Arc::new(3);
        let holder = Mutable::new(std::sync::Arc::clone(&shared));
        let stored = holder.get().map(std::sync::Arc::as_ptr);
        assert_eq!(stored, Some(std::sync::Arc::as_ptr(&shared)));
    }

    #[test]
    fn conversions_round_through_option() {
        let holder: Mutable<&str> = Some("a").into();
        assert_eq!(holder.as_option(), &Some("a"));
        let back: Option<&str> = holder.into();
        assert_eq!(back, Some("a"));
    }

    #[test]
    fn serializes_as_the_bare_value() {
        let holder = Mutable::new(42_u32);
        let json = serde_json::to_string(&holder).ok();
        assert_eq!(json.as_deref(), Some("42"));

        let empty: Mutable<u32> = Mutable::empty();
        let json = serde_json::to_string(&empty).ok();
        assert_eq!(json.as_deref(), Some("null"));

        let parsed: Option<Mutable<u32>> = serde_json::from_str("7").ok();
        assert_eq!(parsed, Some(Mutable::new(7)));
    }
}

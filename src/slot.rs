//! Three-way broadcast results: present, missing, skipped

use serde::{Deserialize, Serialize};

/// Outcome of a broadcast at a single element position.
///
/// A projection marks elements without the requested member as `Missing`;
/// an invocation carries those markers through as `Skipped`. Keeping the
/// three cases distinct lets chained broadcasts degrade per element instead
/// of failing the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot<T> {
    /// The element produced a value.
    Present(T),
    /// The element does not have the projected member.
    Missing,
    /// The element held no value, so the call was skipped.
    Skipped,
}

impl<T> Slot<T> {
    /// True when this position carries a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    /// Converts to `Option`, discarding the missing/skipped distinction.
    pub fn present(self) -> Option<T> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Missing | Slot::Skipped => None,
        }
    }

    /// Borrows the contained value, keeping the slot shape.
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Present(value) => Slot::Present(value),
            Slot::Missing => Slot::Missing,
            Slot::Skipped => Slot::Skipped,
        }
    }

    /// Maps a present value, leaving the markers untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Slot::Present(value) => Slot::Present(f(value)),
            Slot::Missing => Slot::Missing,
            Slot::Skipped => Slot::Skipped,
        }
    }

    /// Projects through a present value; an absent member becomes `Missing`.
    ///
    /// Markers propagate unchanged, so a chain of projections keeps the
    /// position where an element first dropped out.
    pub fn and_project<U>(self, selector: impl FnOnce(T) -> Option<U>) -> Slot<U> {
        match self {
            Slot::Present(value) => Slot::from(selector(value)),
            Slot::Missing => Slot::Missing,
            Slot::Skipped => Slot::Skipped,
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Slot::Present(value),
            None => Slot::Missing,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a mode computation.
///
/// Holds the winning candidate together with whether it is a true mode,
/// i.e. whether it occurs more than once. When no value repeats the
/// candidate is absent for all observable purposes: [`Mode::value`] returns
/// `None` and the `Display` impl renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mode<T> {
    candidate: T,
    has_mode: bool,
}

impl<T> Mode<T> {
    pub(crate) fn new(candidate: T, occurrences: usize) -> Self {
        Self {
            candidate,
            has_mode: occurrences > 1,
        }
    }

    /// Whether the sample set has a true mode.
    #[inline]
    pub fn has_mode(&self) -> bool {
        self.has_mode
    }

    /// The most frequent value, or `None` when no value repeats.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.has_mode.then_some(&self.candidate)
    }

    /// Consume the result, returning the mode if one exists.
    pub fn into_value(self) -> Option<T> {
        self.has_mode.then_some(self.candidate)
    }
}

impl<T: fmt::Display> fmt::Display for Mode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_mode {
            write!(f, "{}", self.candidate)?;
        }
        Ok(())
    }
}

/// One distinct value paired with its occurrence count, collected in
/// first-seen order during mode computation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frequency<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
}

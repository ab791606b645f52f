use super::mode::{Frequency, Mode};
use super::EmptySamples;
use crate::compare::{greater_than, is_even, less_than, ordering_from};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for [`Samples::sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Least to greatest.
    #[default]
    Ascending,
    /// Greatest to least.
    Descending,
}

/// Owned, fixed-length collection of numeric samples.
///
/// Holds at least one value of a single numeric type and answers the
/// descriptive queries [`mean`], [`median`], and [`mode`]. [`sort`] is the
/// only operation that changes the externally observable order; the queries
/// work on copies or scans and never mutate the container.
///
/// Cloning deep-copies the storage, so no two containers ever alias the
/// same buffer. Serialization goes through `Vec<T>`, and deserialization
/// re-validates the non-empty invariant.
///
/// The container is not synchronized; share it across threads behind a lock.
///
/// [`mean`]: Samples::mean
/// [`median`]: Samples::median
/// [`mode`]: Samples::mode
/// [`sort`]: Samples::sort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>")
)]
pub struct Samples<T> {
    /// Sample values in insertion order. Never empty.
    data: Vec<T>,
}

impl<T> Samples<T> {
    /// Take ownership of a vector of samples.
    ///
    /// Fails with [`EmptySamples`] when the vector holds no values.
    pub fn from_vec(values: Vec<T>) -> Result<Self, EmptySamples> {
        if values.is_empty() {
            return Err(EmptySamples);
        }
        Ok(Self { data: values })
    }

    /// Number of samples. Always at least 1.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty. Always false for a constructed container.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples in current storage order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> Samples<T> {
    /// Deep-copy a slice of samples into a new container.
    ///
    /// Fails with [`EmptySamples`] when the slice holds no values.
    pub fn from_slice(values: &[T]) -> Result<Self, EmptySamples> {
        Self::from_vec(values.to_vec())
    }

    /// Sample at position, in current storage order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }
}

impl<T: Copy + PartialOrd> Samples<T> {
    /// Reorder the stored samples in place.
    ///
    /// Ascending uses the strict [`less_than`] predicate, descending the
    /// strict [`greater_than`] predicate. Samples the predicate cannot order
    /// in either direction compare equal.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.data.sort_by(|a, b| ordering_from(less_than, a, b)),
            SortOrder::Descending => self.data.sort_by(|a, b| ordering_from(greater_than, a, b)),
        }
    }

    /// Find the most frequent value.
    ///
    /// Distinct values are collected in first-seen order by scanning the
    /// stored samples front to back, and the first value seen with the
    /// maximum occurrence count wins ties. The result carries no mode when
    /// the winning count is 1, i.e. when no value repeats.
    pub fn mode(&self) -> Mode<T> {
        let mut classes: Vec<Frequency<T>> = Vec::new();
        for &value in &self.data {
            match classes.iter_mut().find(|f| f.value == value) {
                Some(f) => f.count += 1,
                None => classes.push(Frequency { value, count: 1 }),
            }
        }

        // Only a strictly greater count replaces the current best, so the
        // earliest of tied candidates is kept.
        let mut best = &classes[0];
        for candidate in &classes[1..] {
            if candidate.count > best.count {
                best = candidate;
            }
        }
        Mode::new(best.value, best.count)
    }
}

impl<T: Copy + PartialOrd + ToPrimitive> Samples<T> {
    /// Arithmetic mean of all samples.
    ///
    /// Sums through an `f64` accumulator and divides by the sample count.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| as_f64(v)).sum();
        sum / self.data.len() as f64
    }

    /// Middle value of the samples.
    ///
    /// Works on an ascending-sorted copy; the container itself is left
    /// untouched. An even sample count averages the two central elements,
    /// which keeps the result floating point even for integer samples. An
    /// odd count takes the single central element.
    pub fn median(&self) -> f64 {
        let mut sorted = self.clone();
        sorted.sort(SortOrder::Ascending);

        let mid = sorted.len() / 2;
        if is_even(sorted.len()) {
            (as_f64(sorted.data[mid - 1]) + as_f64(sorted.data[mid])) / 2.0
        } else {
            as_f64(sorted.data[mid])
        }
    }
}

impl<T> TryFrom<Vec<T>> for Samples<T> {
    type Error = EmptySamples;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl<T> From<Samples<T>> for Vec<T> {
    fn from(samples: Samples<T>) -> Self {
        samples.data
    }
}

impl<T: fmt::Display> fmt::Display for Samples<T> {
    /// Renders as `"v0, v1, ..., v(n-1)"` in current storage order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.data.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
        }
        for value in values {
            write!(f, ", {value}")?;
        }
        Ok(())
    }
}

/// Widen a sample to `f64` for averaging.
fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().expect("sample value not representable as f64")
}

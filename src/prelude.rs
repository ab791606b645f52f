//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use sumstats::prelude::*;
//!
//! let samples = Samples::from_slice(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(samples.mean(), 2.5);
//! ```

pub use crate::compare::{greater_than, is_even, less_than};
pub use crate::samples::{EmptySamples, Mode, Samples, SortOrder};

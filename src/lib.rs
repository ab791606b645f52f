//! Sumstats: a generic container for numeric samples with descriptive statistics.
//!
//! This library provides an owned, fixed-length collection of numeric samples
//! that answers the classic descriptive queries (arithmetic mean, median,
//! mode) and sorts its contents in either direction.
//!
//! # Example
//!
//! ```
//! use sumstats::prelude::*;
//!
//! let samples = Samples::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0]).unwrap();
//! assert_eq!(samples.to_string(), "1, 2, 3, 4, 5, 6, 7, 8, 8");
//! assert_eq!(samples.median(), 5.0);
//! assert_eq!(samples.mode().into_value(), Some(8.0));
//! ```

pub mod compare;
pub mod prelude;
pub mod samples;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use. Re-exporting them here makes them available as
// `sumstats::Samples`, `sumstats::Mode`, etc.
pub use samples::{EmptySamples, Mode, Samples, SortOrder};

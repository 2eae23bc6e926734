//! In-memory dataset transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by loading and
//! never mutates its input.
//!
//! - [`filter()`]: row filtering by an arbitrary predicate
//! - [`filter_at_or_below()`]: keep rows whose numeric column is `<=` a threshold
//!
//! ## Example
//!
//! ```rust
//! use dataset_filter::processing::filter_at_or_below;
//! use dataset_filter::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Number),
//!     Field::new("yearLevelID", DataType::Number),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Int64(3)],
//!         vec![Value::Int64(2), Value::Int64(5)],
//!     ],
//! );
//!
//! let kept = filter_at_or_below(&ds, "yearLevelID", 4.0).unwrap();
//! assert_eq!(kept.row_count(), 1);
//! ```

pub mod filter;

pub use filter::{filter, filter_at_or_below};

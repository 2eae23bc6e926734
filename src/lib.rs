//! `dataset-filter` loads a CSV file into an in-memory [`types::DataSet`], keeps the rows whose
//! numeric filter column is at or below a threshold, writes them to a new CSV file, and reports
//! the row counts.
//!
//! The primary entrypoint is [`pipeline::run`], driven by a [`config::FilterConfig`]:
//!
//! ```no_run
//! use dataset_filter::config::FilterConfig;
//! use dataset_filter::pipeline::{run, RunOptions};
//!
//! # fn main() -> Result<(), dataset_filter::FilterError> {
//! // Defaults: filterColumn = "yearLevelID", filterThreshold = 4.
//! let config = FilterConfig::new("students.csv", "students_filtered.csv");
//! let report = run(&config, &RunOptions::default())?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior
//!
//! - The header row is required. The filter column must be present and hold numbers (`4`,
//!   `4.0`, `3.5`); a value like `N/A` fails the load with [`ErrorKind::SchemaValidation`]
//!   before anything is written.
//! - Empty filter cells are treated as missing and their rows are dropped.
//! - Every other column is copied through as text, in the original order.
//! - The output has the same header and no index column.
//!
//! ## Modules
//!
//! - [`config`]: run configuration (JSON, camelCase keys)
//! - [`ingestion`]: loading CSV into a [`types::DataSet`]
//! - [`processing`]: row filtering
//! - [`output`]: writing a [`types::DataSet`] as CSV
//! - [`report`]: the run summary
//! - [`observability`]: stage observers and severities
//! - [`pipeline`]: the load → filter → save sequence
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: the shared error type

pub mod config;
pub mod error;
pub mod ingestion;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{ErrorKind, FilterError, FilterResult};

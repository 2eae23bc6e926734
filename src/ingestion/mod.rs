//! Loading delimited input into an in-memory [`crate::types::DataSet`].
//!
//! Callers pass a *declared* [`crate::types::Schema`] naming the columns they need and their
//! types; loading fails early if one is missing or holds an unparseable value.

pub mod csv;

pub use self::csv::{load_csv_from_path, load_csv_from_reader};

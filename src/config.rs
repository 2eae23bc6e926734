//! Run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::types::{DataType, Field, Schema};

/// Column filtered when none is configured.
pub const DEFAULT_FILTER_COLUMN: &str = "yearLevelID";

/// Threshold used when none is configured.
pub const DEFAULT_FILTER_THRESHOLD: f64 = 4.0;

/// Everything a run needs: where to read, where to write, and what to keep.
///
/// Serialized as JSON with camelCase keys:
///
/// ```json
/// {
///   "inputPath": "students.csv",
///   "outputPath": "students_filtered.csv",
///   "filterColumn": "yearLevelID",
///   "filterThreshold": 4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default = "default_filter_column")]
    pub filter_column: String,
    #[serde(default = "default_filter_threshold")]
    pub filter_threshold: f64,
}

fn default_filter_column() -> String {
    DEFAULT_FILTER_COLUMN.to_string()
}

fn default_filter_threshold() -> f64 {
    DEFAULT_FILTER_THRESHOLD
}

impl FilterConfig {
    /// Config with the default column and threshold.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            filter_column: default_filter_column(),
            filter_threshold: default_filter_threshold(),
        }
    }

    pub fn validate(&self) -> FilterResult<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(FilterError::config("inputPath must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(FilterError::config("outputPath must not be empty"));
        }
        if self.filter_column.trim().is_empty() {
            return Err(FilterError::config("filterColumn must not be blank"));
        }
        if !self.filter_threshold.is_finite() {
            return Err(FilterError::config("filterThreshold must be a finite number"));
        }
        if self.input_path == self.output_path {
            return Err(FilterError::config(format!(
                "outputPath must differ from inputPath ({})",
                self.input_path.display()
            )));
        }
        Ok(())
    }

    /// The columns the input must provide: just the filter column, as a number.
    pub fn declared_schema(&self) -> Schema {
        Schema::new(vec![Field::new(self.filter_column.clone(), DataType::Number)])
    }
}

/// Load and validate a config from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> FilterResult<FilterConfig> {
    let text = fs::read_to_string(path)?;
    let config: FilterConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

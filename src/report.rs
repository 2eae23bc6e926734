//! Human-readable summary of a filter run.

use std::fmt;
use std::path::PathBuf;

/// Row counts and destination of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    /// Column the threshold was applied to.
    pub column: String,
    /// Rows with a value above this were removed.
    pub threshold: f64,
    /// Rows in the input.
    pub original_rows: usize,
    /// Rows written to the output.
    pub filtered_rows: usize,
    /// Where the output was written.
    pub output_path: PathBuf,
}

impl FilterReport {
    /// Rows dropped by the filter.
    pub fn removed_rows(&self) -> usize {
        self.original_rows.saturating_sub(self.filtered_rows)
    }
}

/// Four lines: completion message, original count, filtered count, output path.
impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rows with {} > {} removed successfully!",
            self.column, self.threshold
        )?;
        writeln!(f, "Original rows: {}", self.original_rows)?;
        writeln!(f, "Filtered rows: {}", self.filtered_rows)?;
        write!(f, "Saved as: {}", self.output_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::FilterReport;

    #[test]
    fn renders_four_lines() {
        let report = FilterReport {
            column: "yearLevelID".to_string(),
            threshold: 4.0,
            original_rows: 4,
            filtered_rows: 3,
            output_path: "students_filtered.csv".into(),
        };

        assert_eq!(report.removed_rows(), 1);
        assert_eq!(
            report.to_string(),
            "Rows with yearLevelID > 4 removed successfully!\n\
             Original rows: 4\n\
             Filtered rows: 3\n\
             Saved as: students_filtered.csv"
        );
    }

    #[test]
    fn removed_rows_never_underflows() {
        let report = FilterReport {
            column: "yearLevelID".to_string(),
            threshold: 4.0,
            original_rows: 2,
            filtered_rows: 5,
            output_path: "out.csv".into(),
        };
        assert_eq!(report.removed_rows(), 0);
    }
}

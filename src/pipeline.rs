//! Load → filter → save, once.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::ingestion::load_csv_from_path;
use crate::observability::{PipelineObserver, Severity, Stage, StageContext, StageStats};
use crate::output::write_csv_to_path;
use crate::processing::filter_at_or_below;
use crate::report::FilterReport;

/// Options controlling how a run is observed.
///
/// Use [`Default`] for an unobserved run.
#[derive(Clone)]
pub struct RunOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Run the whole pipeline for `config`.
///
/// The output file is only opened once loading and filtering have succeeded, so a bad input
/// never leaves an output file behind. A failure while writing can leave a partial file.
///
/// ```no_run
/// use dataset_filter::config::FilterConfig;
/// use dataset_filter::pipeline::{run, RunOptions};
///
/// # fn main() -> Result<(), dataset_filter::FilterError> {
/// let config = FilterConfig::new("students.csv", "students_filtered.csv");
/// let report = run(&config, &RunOptions::default())?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub fn run(config: &FilterConfig, options: &RunOptions) -> FilterResult<FilterReport> {
    config.validate()?;

    let loaded = observe(
        options,
        Stage::Load,
        &config.input_path,
        load_csv_from_path(&config.input_path, &config.declared_schema()),
        |ds| ds.row_count(),
    )?;

    let kept = observe(
        options,
        Stage::Filter,
        &config.input_path,
        filter_at_or_below(&loaded, &config.filter_column, config.filter_threshold),
        |ds| ds.row_count(),
    )?;

    observe(
        options,
        Stage::Save,
        &config.output_path,
        write_csv_to_path(&kept, &config.output_path),
        |_| kept.row_count(),
    )?;

    Ok(FilterReport {
        column: config.filter_column.clone(),
        threshold: config.filter_threshold,
        original_rows: loaded.row_count(),
        filtered_rows: kept.row_count(),
        output_path: config.output_path.clone(),
    })
}

fn observe<T>(
    options: &RunOptions,
    stage: Stage,
    path: &Path,
    result: FilterResult<T>,
    rows: impl FnOnce(&T) -> usize,
) -> FilterResult<T> {
    if let Some(obs) = options.observer.as_ref() {
        let ctx = StageContext {
            stage,
            path: path.to_path_buf(),
        };
        match &result {
            Ok(value) => obs.on_success(&ctx, StageStats { rows: rows(value) }),
            Err(e) => {
                let sev = Severity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

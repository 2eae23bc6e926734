//! Observer hooks for pipeline stage outcomes.
//!
//! [`crate::pipeline::run`] reports each stage (load, filter, save) to an optional
//! [`PipelineObserver`]. [`LogObserver`] forwards to the `log` facade, so the binary's
//! `env_logger` setup decides what is shown.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};

use crate::error::{ErrorKind, FilterError};

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (stage failed).
    Error,
    /// Critical error (I/O on the input or output file).
    Critical,
}

impl Severity {
    /// Severity of a failed stage.
    pub fn for_error(e: &FilterError) -> Self {
        match e.kind() {
            ErrorKind::FileNotFound | ErrorKind::Io | ErrorKind::Write => Self::Critical,
            ErrorKind::Parse
            | ErrorKind::MissingColumn
            | ErrorKind::SchemaValidation
            | ErrorKind::TypeComparison
            | ErrorKind::Config => Self::Error,
        }
    }
}

/// Pipeline stage being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Filter,
    Save,
}

/// Context about a stage attempt.
#[derive(Debug, Clone)]
pub struct StageContext {
    pub stage: Stage,
    /// Input path for load/filter, output path for save.
    pub path: PathBuf,
}

/// Stats reported when a stage succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStats {
    /// Rows produced by the stage (loaded, kept, or written).
    pub rows: usize,
}

/// Observer interface for stage outcomes.
pub trait PipelineObserver: Send + Sync {
    /// Called when a stage succeeds.
    fn on_success(&self, _ctx: &StageContext, _stats: StageStats) {}

    /// Called when a stage fails.
    fn on_failure(&self, _ctx: &StageContext, _severity: Severity, _error: &FilterError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &StageContext, severity: Severity, error: &FilterError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_success(&self, ctx: &StageContext, stats: StageStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &StageContext, severity: Severity, error: &FilterError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &StageContext, severity: Severity, error: &FilterError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits stage events through the `log` crate.
#[derive(Debug, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_success(&self, ctx: &StageContext, stats: StageStats) {
        info!(
            "[{:?}][ok] path={} rows={}",
            ctx.stage,
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &StageContext, severity: Severity, err: &FilterError) {
        match severity {
            Severity::Info => info!("[{:?}] path={} err={}", ctx.stage, ctx.path.display(), err),
            Severity::Warning => warn!("[{:?}] path={} err={}", ctx.stage, ctx.path.display(), err),
            Severity::Error | Severity::Critical => error!(
                "[{:?}][{:?}] path={} err={}",
                ctx.stage,
                severity,
                ctx.path.display(),
                err
            ),
        }
    }

    fn on_alert(&self, ctx: &StageContext, severity: Severity, err: &FilterError) {
        error!(
            "[ALERT][{:?}][{:?}] path={} err={}",
            ctx.stage,
            severity,
            ctx.path.display(),
            err
        );
    }
}

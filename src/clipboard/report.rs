//! Operation outcomes shown to the user.

use bevy::prelude::*;
use thiserror::Error;

use crate::config::ConfigResetNotification;
use crate::host::ModifierError;

/// Severity of an operation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

/// One user-facing message produced by a clipboard operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub level: ReportLevel,
    pub message: String,
}

impl OperationReport {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Error,
            message: message.into(),
        }
    }

    fn log(&self) {
        match self.level {
            ReportLevel::Info => info!("{}", self.message),
            ReportLevel::Warning => warn!("{}", self.message),
            ReportLevel::Error => error!("{}", self.message),
        }
    }
}

impl From<&ClipboardError> for OperationReport {
    fn from(err: &ClipboardError) -> Self {
        Self {
            level: err.level(),
            message: err.to_string(),
        }
    }
}

/// What one destination object received during a paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationSummary {
    pub object: String,
    pub modifiers_created: usize,
    pub properties_applied: usize,
    pub properties_skipped: usize,
}

/// Aggregate counts of the last paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteSummary {
    /// Modifiers created across all destinations.
    pub modifiers_pasted: usize,
    /// Destinations that received at least one modifier.
    pub objects_affected: usize,
    /// Properties written successfully.
    pub properties_applied: usize,
    /// Properties left at their defaults.
    pub properties_skipped: usize,
    /// `"modifier -> object"` pairs that could not be created.
    pub failures: Vec<String>,
    /// Per-object breakdown, one entry per eligible destination.
    pub destinations: Vec<DestinationSummary>,
}

/// Last outcome of each clipboard operation, for display.
#[derive(Resource, Debug, Default)]
pub struct OperationStatus {
    pub last_report: Option<OperationReport>,
    pub last_paste: Option<PasteSummary>,
}

impl OperationStatus {
    /// Log `report` and keep it as the latest.
    pub fn report(&mut self, report: OperationReport) {
        report.log();
        self.last_report = Some(report);
    }

    pub fn report_error(&mut self, err: &ClipboardError) {
        self.report(OperationReport::from(err));
    }
}

/// Startup system: show a config reset as the first status message
pub fn report_config_reset(
    mut notification: ResMut<ConfigResetNotification>,
    mut status: ResMut<OperationStatus>,
) {
    if !notification.show {
        return;
    }
    notification.show = false;
    let reason = notification
        .reason
        .take()
        .unwrap_or_else(|| "unknown error".to_string());
    status.report(OperationReport::warning(format!(
        "Settings were reset to defaults: {}",
        reason
    )));
}

/// Operation-level failures. None of these leave partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No modifiers were selected for copying")]
    NothingSelected,

    #[error("No modifiers have been copied")]
    EmptyClipboard,

    #[error("Selected object has no modifiers")]
    NoModifiers,

    #[error("Selected modifier not found: {0}")]
    ModifierNotFound(String),

    #[error("Source object no longer exists")]
    MissingSource,

    #[error("No selected objects can receive modifiers")]
    NoEligibleDestination,

    #[error("Failed to paste modifier: {modifier} to {object}: {source}")]
    CreationFailed {
        modifier: String,
        object: String,
        #[source]
        source: ModifierError,
    },
}

impl ClipboardError {
    pub fn level(&self) -> ReportLevel {
        match self {
            ClipboardError::NothingSelected
            | ClipboardError::EmptyClipboard
            | ClipboardError::NoEligibleDestination
            | ClipboardError::CreationFailed { .. } => ReportLevel::Warning,
            ClipboardError::NoModifiers
            | ClipboardError::ModifierNotFound(_)
            | ClipboardError::MissingSource => ReportLevel::Error,
        }
    }
}

/// `"3 modifiers"`, `"1 object"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, noun)
    } else {
        format!("{} {}", count, noun)
    }
}

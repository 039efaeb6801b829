//! Export steps: day edits, month order, mapping file, CSV output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, trace};

use ghcal_core::Session;
use ghcal_map::{MappingSelection, save_mapping};

use crate::edit::DayEdit;
use crate::logging::redact_value;

/// Where the exported CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    /// A file, or a directory that receives `{org}_export.csv`.
    Path(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub edits: &'a [DayEdit],
    pub month_order: &'a [String],
    pub org: &'a str,
    pub target: ExportTarget,
    pub save_mapping: Option<&'a Path>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Printed(String),
    Written(PathBuf),
}

/// Apply every edit, then the month order, then write.
pub fn export_session(
    session: &mut Session,
    request: &ExportRequest<'_>,
) -> Result<ExportOutcome> {
    for edit in request.edits {
        trace!(
            month = %edit.month,
            day = %edit.day,
            rooms = ?edit.rooms.iter().map(|name| redact_value(name)).collect::<Vec<_>>(),
            "applying day edit"
        );
        session
            .set_day(&edit.month, &edit.day, edit.rooms.clone())
            .with_context(|| format!("apply edit {}/{}", edit.month, edit.day))?;
    }
    if !request.edits.is_empty() {
        info!(edits = request.edits.len(), "applied day edits");
    }

    if !request.month_order.is_empty() {
        let order = request
            .month_order
            .iter()
            .map(|month| month.trim().to_string())
            .collect();
        session.set_month_order(order).context("set month order")?;
    }

    if let Some(path) = request.save_mapping {
        let mapping = session.mapping().context("no mapping confirmed")?;
        save_mapping(path, &MappingSelection::from(*mapping))
            .with_context(|| format!("save mapping to {}", path.display()))?;
        info!(path = %path.display(), "saved mapping");
    }

    match &request.target {
        ExportTarget::Stdout => Ok(ExportOutcome::Printed(session.export_csv()?)),
        ExportTarget::Path(target) => {
            let written = session
                .export_to(target, request.org)
                .with_context(|| format!("export to {}", target.display()))?;
            Ok(ExportOutcome::Written(written))
        }
    }
}

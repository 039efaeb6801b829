use std::env;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use ghcal_cli::export::{ExportOutcome, ExportRequest, ExportTarget, export_session};
use ghcal_core::Session;
use ghcal_ingest::{SAMPLE_CSV, read_csv_text, read_stdin_text};
use ghcal_map::{MappingSelection, load_mapping};

use crate::cli::{
    AvailabilityArgs, BuildArgs, CalendarArgs, ExportArgs, InputArgs, PreviewArgs, ViewFormatArg,
};
use crate::render::{print_availability, print_calendar, print_months, print_preview};

pub fn run_sample() {
    println!("{SAMPLE_CSV}");
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let mut session = Session::new();
    load_input(&mut session, &args.input)?;
    let grid = session.grid().context("no grid loaded")?;
    print_preview(&ghcal_ingest::preview(grid, args.rows));
    Ok(())
}

pub fn run_months(args: &BuildArgs) -> Result<()> {
    let session = build_session(args)?;
    print_months(&session);
    Ok(())
}

pub fn run_calendar(args: &CalendarArgs) -> Result<()> {
    let session = build_session(&args.build)?;
    let months = selected_months(&session, args.month.as_deref());
    let mut views = Vec::with_capacity(months.len());
    for month in &months {
        views.push(session.month_view(month)?);
    }
    match args.format {
        ViewFormatArg::Table => {
            for view in &views {
                print_calendar(view);
            }
        }
        ViewFormatArg::Json => {
            let json = serde_json::to_string_pretty(&views).context("serialize calendar")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_availability(args: &AvailabilityArgs) -> Result<()> {
    let session = build_session(&args.build)?;
    for month in selected_months(&session, args.month.as_deref()) {
        print_availability(&session.availability(&month)?);
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let mut session = build_session(&args.build)?;
    let span = info_span!("export", org = %args.org);
    let _guard = span.enter();
    let target = if args.stdout {
        ExportTarget::Stdout
    } else {
        match &args.output {
            Some(path) => ExportTarget::Path(path.clone()),
            None => ExportTarget::Path(env::current_dir().context("resolve current directory")?),
        }
    };
    let request = ExportRequest {
        edits: &args.set,
        month_order: &args.month_order,
        org: &args.org,
        target,
        save_mapping: args.save_mapping.as_deref(),
    };
    match export_session(&mut session, &request)? {
        ExportOutcome::Printed(csv) => println!("{csv}"),
        ExportOutcome::Written(path) => println!("Exported: {}", path.display()),
    }
    Ok(())
}

fn load_input(session: &mut Session, args: &InputArgs) -> Result<()> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let text = if args.sample {
        debug!("using built-in sample");
        SAMPLE_CSV.to_string()
    } else {
        match args.input.as_deref() {
            Some(path) if path.as_os_str() == "-" => read_stdin_text()?,
            Some(path) => {
                read_csv_text(path).with_context(|| format!("read {}", path.display()))?
            }
            None => bail!("no input: pass a CSV file, `-` for stdin, or --sample"),
        }
    };
    session.load_text(&text)?;
    Ok(())
}

/// Load the input, resolve the mapping and build the table.
fn build_session(args: &BuildArgs) -> Result<Session> {
    let mut session = Session::new().with_skip_rows(args.skip_rows);
    load_input(&mut session, &args.input)?;
    let selection = match &args.mapping {
        Some(path) => load_mapping(path)?,
        None => apply_overrides(session.default_selection(), args),
    };
    let span = info_span!("build");
    let _guard = span.enter();
    debug!(?selection, "confirming mapping");
    let table = session.confirm_mapping(&selection)?;
    info!(
        months = table.len(),
        days = table.day_count(),
        "built occupancy table"
    );
    Ok(session)
}

fn apply_overrides(mut selection: MappingSelection, args: &BuildArgs) -> MappingSelection {
    if let Some(index) = args.month_col {
        selection.month = Some(index);
    }
    if let Some(index) = args.date_col {
        selection.date = Some(index);
    }
    if let Some(rooms) = &args.room_cols {
        selection.rooms.clone_from(rooms);
    }
    selection
}

/// The requested month, or every month in display order.
fn selected_months(session: &Session, month: Option<&str>) -> Vec<String> {
    match month {
        Some(month) => vec![month.trim().to_string()],
        None => session.month_order().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_args() -> BuildArgs {
        BuildArgs {
            input: InputArgs {
                input: None,
                sample: true,
            },
            mapping: None,
            month_col: None,
            date_col: None,
            room_cols: None,
            skip_rows: 0,
        }
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut args = build_args();
        args.date_col = Some(4);
        args.room_cols = Some(vec![1, 2, 3]);
        let selection = apply_overrides(MappingSelection::default_for(8), &args);
        assert_eq!(selection.month, Some(0));
        assert_eq!(selection.date, Some(4));
        assert_eq!(selection.rooms, vec![1, 2, 3]);
    }

    #[test]
    fn sample_builds_with_header_month() {
        let session = build_session(&build_args()).unwrap();
        assert_eq!(
            session.month_order(),
            ["Months", "JANUARY", "FEBRUARY"].map(String::from)
        );
        let header_day = session.table().rooms("Months", "Date").unwrap();
        assert_eq!(header_day[0], "Room 01");
        assert_eq!(header_day[5], "Room 06");
    }

    #[test]
    fn skip_rows_drops_header() {
        let mut args = build_args();
        args.skip_rows = 1;
        let session = build_session(&args).unwrap();
        assert_eq!(
            session.month_order(),
            ["JANUARY", "FEBRUARY"].map(String::from)
        );
    }

    #[test]
    fn bad_room_override_is_rejected() {
        let mut args = build_args();
        args.room_cols = Some(vec![2, 3, 4, 5, 6, 6]);
        let error = build_session(&args).unwrap_err();
        assert!(
            error.to_string().contains("more than one room"),
            "{error}"
        );
    }

    #[test]
    fn selected_months_defaults_to_order() {
        let session = build_session(&build_args()).unwrap();
        assert_eq!(selected_months(&session, None).len(), 3);
        assert_eq!(selected_months(&session, Some(" JANUARY ")), vec!["JANUARY"]);
    }
}

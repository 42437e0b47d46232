//! Update functions for the Elm-style architecture
//!
//! All session state transformations flow through [`update`].

use crate::commands::{Cmd, Notification};
use crate::error::Result;
use crate::messages::GridMsg;
use crate::session::{LoadReport, Session};

/// Apply a message to the session, returning the side effect the host should run
pub fn update(session: &mut Session, msg: GridMsg) -> Result<Option<Cmd>> {
    match msg {
        GridMsg::CreateBlank(column_names) => {
            session.create_blank(column_names);
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::Import(content) => {
            let report = session.import_csv(&content)?;
            Ok(Some(import_feedback(&report)))
        }
        GridMsg::AddRow => {
            session.add_row()?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::RemoveRow(index) => {
            session.remove_row(index)?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::SetCell { row, col, value } => {
            let edit = session.set_cell(row, col, value)?;
            Ok(edit.is_modified().then_some(Cmd::Redraw))
        }
        GridMsg::AddColumn => {
            session.add_column()?;
            Ok(Some(Cmd::Redraw))
        }
        GridMsg::RemoveColumn => {
            let removed = session.remove_column()?;
            Ok(removed.map(|_| Cmd::Redraw))
        }
        GridMsg::Download => {
            let contents = session.export()?;
            Ok(Some(Cmd::Download {
                file_name: session.export_file_name().to_string(),
                contents,
            }))
        }
    }
}

/// Redraw plus the "uploaded" toast, and a warning when rows had to be reshaped
fn import_feedback(report: &LoadReport) -> Cmd {
    let mut cmds = vec![
        Cmd::Redraw,
        Cmd::Notify(Notification::success(
            "File uploaded successfully.",
            format!("Parsed {} rows.", report.rows),
        )),
    ];

    let reshaped = report.padded + report.truncated;
    if reshaped > 0 {
        cmds.push(Cmd::Notify(Notification::warning(
            "Some rows did not match the header.",
            format!(
                "{} rows padded, {} rows truncated to {} columns.",
                report.padded, report.truncated, report.columns
            ),
        )));
    }

    Cmd::batch(cmds)
}

//! Layout editing commands.
//!
//! Every handler loads the file into a `PaneLayoutModel`, applies one edit
//! and writes the result back only if the layout changed.

use std::path::Path;

use panetree_core::config::AppSettings;

use crate::error::CliError;
use crate::util::{edit_layout, report};

/// Split pane command handler
pub fn cmd_split(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    pane: &str,
    tab: Option<&str>,
) -> Result<(), CliError> {
    let new_pane = edit_layout(file, settings, |model| Ok(model.split(pane, tab)?))?;
    report(quiet, &format!("Split {pane}, new pane {new_pane}"));
    Ok(())
}

/// Remove pane command handler
pub fn cmd_remove(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    pane: &str,
) -> Result<(), CliError> {
    let focus = edit_layout(file, settings, |model| {
        model.close_pane(pane)?;
        Ok(model.focused_pane().clone())
    })?;
    report(quiet, &format!("Closed {pane}, focus on {focus}"));
    Ok(())
}

/// Resize split command handler
pub fn cmd_resize(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    split: &str,
    ratio: f64,
) -> Result<(), CliError> {
    let applied = edit_layout(file, settings, |model| Ok(model.resize(split, ratio)?))?;
    report(quiet, &format!("Set {split} ratio to {applied:.2}"));
    Ok(())
}

/// Move tab command handler
pub fn cmd_move_tab(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    from: &str,
    to: &str,
    tab: &str,
) -> Result<(), CliError> {
    let source_closed = edit_layout(file, settings, |model| {
        model.move_tab(from, to, tab)?;
        Ok(!model.root().contains_pane(from))
    })?;
    report(quiet, &format!("Moved {tab} from {from} to {to}"));
    if source_closed {
        report(quiet, &format!("Closed empty pane {from}"));
    }
    Ok(())
}

/// Open tab command handler
pub fn cmd_open(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    tab: &str,
    pane: Option<&str>,
) -> Result<(), CliError> {
    let target = edit_layout(file, settings, |model| match pane {
        Some(pane) => {
            model.open_tab_in(pane, tab)?;
            Ok(model.focused_pane().clone())
        }
        None => Ok(model.open_tab(tab)),
    })?;
    report(quiet, &format!("Opened {tab} in {target}"));
    Ok(())
}

/// Close tab command handler
pub fn cmd_close(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    pane: &str,
    tab: &str,
) -> Result<(), CliError> {
    let collapsed = edit_layout(file, settings, |model| Ok(model.close_tab(pane, tab)?))?;
    report(quiet, &format!("Closed {tab}"));
    if collapsed {
        report(quiet, &format!("Closed empty pane {pane}"));
    }
    Ok(())
}

/// Focus pane command handler
pub fn cmd_focus(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    pane: &str,
) -> Result<(), CliError> {
    edit_layout(file, settings, |model| Ok(model.set_focus(pane)?))?;
    report(quiet, &format!("Focused {pane}"));
    Ok(())
}

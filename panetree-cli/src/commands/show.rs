//! Layout inspection commands.

use std::path::Path;

use panetree_core::config::AppSettings;
use panetree_core::split::{PersistError, SplitLayout, validate_value};

use crate::cli::ShowFormat;
use crate::error::CliError;
use crate::format::{render_ids, render_tree};
use crate::util::load_model;

/// Show layout command handler
pub fn cmd_show(settings: &AppSettings, file: &Path, format: ShowFormat) -> Result<(), CliError> {
    print!("{}", show_output(settings, file, format)?);
    Ok(())
}

fn show_output(settings: &AppSettings, file: &Path, format: ShowFormat) -> Result<String, CliError> {
    let model = load_model(file, settings)?;
    match format {
        ShowFormat::Tree => Ok(render_tree(
            model.root(),
            Some(model.focused_pane().as_str()),
        )),
        ShowFormat::Json => {
            let json = model.layout().to_json().map_err(PersistError::Serialization)?;
            Ok(format!("{json}\n"))
        }
        ShowFormat::Ids => Ok(render_ids(model.root())),
    }
}

/// Validate layout command handler
///
/// Checks the raw JSON shape first, so a file with a missing field or a
/// bad ratio is reported as invalid rather than unreadable.
pub fn cmd_validate(file: &Path, quiet: bool) -> Result<(), CliError> {
    let summary = validate_file(file)?;
    if !quiet {
        println!("{}: {summary}", file.display());
    }
    Ok(())
}

fn validate_file(file: &Path) -> Result<String, CliError> {
    let json = std::fs::read_to_string(file)?;
    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| CliError::InvalidLayout(format!("not JSON: {e}")))?;
    let root = value
        .get("root")
        .ok_or_else(|| CliError::InvalidLayout("missing root".to_string()))?;
    if !validate_value(root) {
        return Err(CliError::InvalidLayout(
            "malformed pane tree or split ratio outside [0, 1]".to_string(),
        ));
    }

    let layout = SplitLayout::from_json(&json)?;
    let root = &layout.root;
    let mut summary = format!(
        "valid, {} pane(s), {} tab(s), depth {}",
        root.count_leaves(),
        root.count_tabs(),
        root.depth()
    );
    match layout.focused_pane {
        Some(focus) if !root.contains_pane(focus.as_str()) => {
            summary.push_str(&format!(", focus {focus} is not a pane"));
        }
        None => summary.push_str(", no focus"),
        Some(_) => {}
    }
    Ok(summary)
}

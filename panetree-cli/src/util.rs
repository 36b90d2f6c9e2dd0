//! Shared utility functions used across command modules.

use std::path::Path;
use std::sync::Arc;

use panetree_core::config::{AppSettings, ConfigManager};
use panetree_core::split::{PaneLayoutModel, SplitLayout};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings from the config directory, defaults if none are saved.
pub fn load_settings(config_path: Option<&Path>) -> Result<AppSettings, CliError> {
    create_config_manager(config_path)?
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Loads a layout file into a model, validating it if the settings ask to.
pub fn load_model(path: &Path, settings: &AppSettings) -> Result<PaneLayoutModel, CliError> {
    let layout = SplitLayout::load(path, settings.layout.validate_on_load)?;
    Ok(PaneLayoutModel::from_layout(layout))
}

/// Writes a layout file, refusing to replace an existing one unless `force`.
pub fn write_new_layout(
    path: &Path,
    layout: &SplitLayout,
    force: bool,
    settings: &AppSettings,
) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    layout.save_to_file(path, settings.layout.pretty)?;
    Ok(())
}

/// Applies `edit` to the layout stored at `path`.
///
/// The file is rewritten only when the edit produced a new tree or moved
/// focus. A rejected edit leaves the file untouched.
pub fn edit_layout<T>(
    path: &Path,
    settings: &AppSettings,
    edit: impl FnOnce(&mut PaneLayoutModel) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let mut model = load_model(path, settings)?;
    let root = Arc::clone(model.root());
    let focus = model.focused_pane().clone();

    let output = edit(&mut model)?;

    if Arc::ptr_eq(&root, model.root()) && focus == *model.focused_pane() {
        tracing::debug!(path = %path.display(), "Layout unchanged, not saving");
    } else {
        model.layout().save_to_file(path, settings.layout.pretty)?;
    }
    Ok(output)
}

/// Prints a status line unless output is suppressed
pub fn report(quiet: bool, message: &str) {
    if !quiet {
        println!("{message}");
    }
}

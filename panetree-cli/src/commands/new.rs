//! Layout creation commands.

use std::path::Path;

use panetree_core::config::AppSettings;
use panetree_core::split::{LegacyTabs, SplitLayout, TabId, migrate_from_tabs};

use crate::error::CliError;
use crate::util::{report, write_new_layout};

/// New layout command handler
pub fn cmd_new(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    force: bool,
) -> Result<(), CliError> {
    write_new_layout(file, &SplitLayout::default(), force, settings)?;
    report(quiet, &format!("Created {}", file.display()));
    Ok(())
}

/// Where `migrate` takes its tab list from
pub enum MigrateSource<'a> {
    /// Tabs given on the command line
    Args {
        /// Tabs in order
        tabs: &'a [String],
        /// Active tab
        active: Option<&'a str>,
    },
    /// A JSON file holding `{"all": [...], "active": ...}`
    File(&'a Path),
}

/// Migrate command handler
pub fn cmd_migrate(
    settings: &AppSettings,
    quiet: bool,
    file: &Path,
    source: MigrateSource<'_>,
    force: bool,
) -> Result<(), CliError> {
    let legacy = match source {
        MigrateSource::Args { tabs, active } => LegacyTabs {
            all: tabs.iter().map(|tab| TabId::from(tab.as_str())).collect(),
            active: active.map(TabId::from),
        },
        MigrateSource::File(path) => read_legacy(path)?,
    };

    let layout = migrate_from_tabs(&legacy);
    write_new_layout(file, &layout, force, settings)?;
    report(
        quiet,
        &format!("Migrated {} tab(s) into {}", legacy.all.len(), file.display()),
    );
    Ok(())
}

fn read_legacy(path: &Path) -> Result<LegacyTabs, CliError> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| CliError::Legacy(format!("{}: {e}", path.display())))
}

//! Command handler modules for the CLI.

mod edit;
mod new;
mod show;

use panetree_core::config::AppSettings;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(settings: &AppSettings, quiet: bool, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::New { file, force } => new::cmd_new(settings, quiet, &file, force),
        Commands::Migrate {
            file,
            tabs,
            active,
            from,
            force,
        } => {
            let source = match from.as_deref() {
                Some(path) => new::MigrateSource::File(path),
                None => new::MigrateSource::Args {
                    tabs: &tabs,
                    active: active.as_deref(),
                },
            };
            new::cmd_migrate(settings, quiet, &file, source, force)
        }
        Commands::Show { file, format } => show::cmd_show(settings, &file, format),
        Commands::Validate { file } => show::cmd_validate(&file, quiet),
        Commands::Split { file, pane, tab } => {
            edit::cmd_split(settings, quiet, &file, &pane, tab.as_deref())
        }
        Commands::Remove { file, pane } => edit::cmd_remove(settings, quiet, &file, &pane),
        Commands::Resize { file, split, ratio } => {
            edit::cmd_resize(settings, quiet, &file, &split, ratio)
        }
        Commands::MoveTab {
            file,
            from,
            to,
            tab,
        } => edit::cmd_move_tab(settings, quiet, &file, &from, &to, &tab),
        Commands::Open { file, tab, pane } => {
            edit::cmd_open(settings, quiet, &file, &tab, pane.as_deref())
        }
        Commands::Close { file, pane, tab } => edit::cmd_close(settings, quiet, &file, &pane, &tab),
        Commands::Focus { file, pane } => edit::cmd_focus(settings, quiet, &file, &pane),
    }
}

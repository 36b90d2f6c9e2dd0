//! `panetree` CLI - Command-line interface for split pane layouts
//!
//! Provides commands for creating, migrating, inspecting, validating and
//! editing layout files: splitting and closing panes, resizing splits,
//! and opening, closing and moving tabs between panes.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use panetree_core::tracing::{TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    let settings = match util::load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    };

    let mut tracing_config = settings.logging.to_tracing_config(cli.verbose);
    if cli.quiet {
        tracing_config = tracing_config.with_level(TracingLevel::Error);
    }
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let result = commands::dispatch(&settings, cli.quiet, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

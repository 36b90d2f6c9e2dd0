//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// `panetree` command-line interface for editing split layout files
#[derive(Parser)]
#[command(name = "panetree-cli")]
#[command(author, version, about = "panetree command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a layout with one empty pane
    #[command(about = "Create a new layout file with a single empty pane")]
    New {
        /// Layout file to create
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Convert a flat tab list into a layout
    #[command(about = "Create a layout from a legacy flat tab list")]
    Migrate {
        /// Layout file to create
        file: PathBuf,

        /// Tabs in display order
        #[arg(required_unless_present = "from", conflicts_with = "from")]
        tabs: Vec<String>,

        /// Active tab
        #[arg(short, long, conflicts_with = "from")]
        active: Option<String>,

        /// Read `{"all": [...], "active": ...}` from a JSON file instead
        #[arg(long)]
        from: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a layout
    #[command(about = "Print the pane tree of a layout file")]
    Show {
        /// Layout file
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "tree", value_enum)]
        format: ShowFormat,
    },

    /// Check a layout file
    #[command(about = "Check the structure of a layout file")]
    Validate {
        /// Layout file
        file: PathBuf,
    },

    /// Split a pane in two
    #[command(about = "Split a pane, optionally moving one tab into the new pane")]
    Split {
        /// Layout file
        file: PathBuf,

        /// Pane to split
        pane: String,

        /// Tab to move into the new pane
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Close a pane
    #[command(about = "Close a pane and collapse its parent split")]
    Remove {
        /// Layout file
        file: PathBuf,

        /// Pane to close
        pane: String,
    },

    /// Set a split ratio
    #[command(about = "Set the share of space given to a split's first pane")]
    Resize {
        /// Layout file
        file: PathBuf,

        /// Split to resize
        split: String,

        /// New ratio, clamped to 0.1..=0.9
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },

    /// Move a tab to another pane
    #[command(about = "Move a tab to another pane, closing the source if it empties")]
    MoveTab {
        /// Layout file
        file: PathBuf,

        /// Source pane
        from: String,

        /// Destination pane
        to: String,

        /// Tab to move
        tab: String,
    },

    /// Open a tab
    #[command(about = "Open a tab in the focused pane or a given pane")]
    Open {
        /// Layout file
        file: PathBuf,

        /// Tab to open
        tab: String,

        /// Pane to open the tab in
        #[arg(short, long)]
        pane: Option<String>,
    },

    /// Close a tab
    #[command(about = "Close a tab, closing its pane too if it empties")]
    Close {
        /// Layout file
        file: PathBuf,

        /// Pane holding the tab
        pane: String,

        /// Tab to close
        tab: String,
    },

    /// Focus a pane
    #[command(about = "Set the focused pane")]
    Focus {
        /// Layout file
        file: PathBuf,

        /// Pane to focus
        pane: String,
    },
}

/// Output formats for `show`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Indented tree
    Tree,
    /// Layout JSON
    Json,
    /// Pane IDs, one per line
    Ids,
}

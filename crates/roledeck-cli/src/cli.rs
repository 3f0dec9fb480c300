//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roledeck::snapshot::DEFAULT_SNAPSHOT;

/// roledeck: keep the design roles table and its snapshot in step
#[derive(Parser)]
#[command(name = "roledeck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the local snapshot file
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every role from the remote table and write the snapshot
    Export {
        /// Write here instead of the snapshot path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Push snapshot changes to the remote table
    Import {
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Also delete remote roles missing from the snapshot
        #[arg(long)]
        delete_orphans: bool,
    },

    /// Trim stray whitespace from every string value in the snapshot
    Clean,

    /// List the distinct org-levels used in the snapshot
    Levels,

    /// Open the role dashboard in a browser
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        /// Serve the snapshot file instead of the remote table
        #[arg(long)]
        offline: bool,
    },
}

//! roledeck CLI - sync and browse the design roles table.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // A missing .env is fine; the variables may come from the shell.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Export { output } => {
            commands::export::run(&cli.snapshot, output, cli.verbose)
        }

        Commands::Import {
            dry_run,
            delete_orphans,
        } => commands::import::run(&cli.snapshot, dry_run, delete_orphans, cli.verbose),

        Commands::Clean => commands::clean::run(&cli.snapshot, cli.verbose),

        Commands::Levels => commands::levels::run(&cli.snapshot),

        Commands::Serve {
            port,
            no_open,
            offline,
        } => commands::serve::run(&cli.snapshot, port, no_open, offline, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise info, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "roledeck=debug,tower_http=debug"
    } else {
        "roledeck=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

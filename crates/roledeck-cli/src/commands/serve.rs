//! Serve command - run the role dashboard.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use roledeck::store::{RoleStore, SnapshotStore, SupabaseStore};
use roledeck::RoleCatalog;

use crate::server::{app, state::AppState};

pub fn run(
    snapshot: &Path,
    port: u16,
    no_open: bool,
    offline: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // The store's HTTP client blocks; build it, and drop the last handle,
    // outside the async runtime.
    let store: Arc<dyn RoleStore> = if offline {
        Arc::new(SnapshotStore::new(snapshot))
    } else {
        Arc::new(SupabaseStore::from_env()?)
    };

    let catalog = RoleCatalog::load(store.as_ref())?;
    if verbose {
        let facets = catalog.facets();
        println!(
            "Loaded {} roles ({} industries, {} levels, {} mediums)",
            catalog.len(),
            facets.industries.len(),
            facets.levels.len(),
            facets.mediums.len()
        );
    }

    let state = AppState::new(catalog, Arc::clone(&store));

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting role dashboard at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Source: {}", store.name());
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(app::run_server(state, port));
    drop(runtime);
    println!("{}", "Shutting down...".yellow());

    drop(store);
    result
}

//! Example: Filter a snapshot file from the command line.
//!
//! Usage:
//!   cargo run --example browse -- <snapshot> [search] [industry=...] [level=...] [medium=...]
//!
//! Example:
//!   cargo run --example browse -- design_roles_data.json sound medium=Digital

use std::env;
use std::process;

use roledeck::filter::{Facet, FacetSelection, FilterQuery};
use roledeck::snapshot::load_snapshot;
use roledeck::{RoleCard, RoleCatalog};

fn main() -> roledeck::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(path) = args.first() else {
        eprintln!("Usage: cargo run --example browse -- <snapshot> [search] [facet=value ...]");
        process::exit(1);
    };

    let mut selection = FacetSelection::new();
    let mut search = String::new();
    for arg in &args[1..] {
        match arg.split_once('=') {
            Some((facet, value)) => match facet.parse::<Facet>() {
                Ok(facet) => {
                    selection.add(facet, value);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            },
            None => search = arg.clone(),
        }
    }

    let catalog = RoleCatalog::from_records(load_snapshot(path)?);
    let view = catalog.query(&FilterQuery::new(selection, search));

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("{} of {} roles", view.len(), catalog.len());
    println!("{}", separator);

    for record in view {
        let card = RoleCard::from(record);
        println!();
        println!("{}", card.name);
        let badges: Vec<&str> = card
            .industries
            .iter()
            .chain(card.level.iter())
            .chain(card.medium.iter())
            .map(|b| b.label.as_str())
            .collect();
        if !badges.is_empty() {
            println!("  [{}]", badges.join("] ["));
        }
        if !card.description.is_empty() {
            println!("  {}", card.description);
        }
    }

    Ok(())
}

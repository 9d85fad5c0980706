//! ButtonDeck - headless front end.
//!
//! Usage: `buttondeck [CONFIG] [BUTTON]`
//!
//! Opens CONFIG, prints the button grid, and launches BUTTON (a 1-based
//! number or an exact name) when given.

use buttondeck::Session;
use buttondeck::functions::formatting::grid_to_text;
use buttondeck::layout::{MAX_COLUMNS, grid_rows};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let button = args.next();

    let mut session = Session::new();

    if let Some(path) = &config_path {
        let warnings = session.open(path)?;

        if !warnings.is_empty() {
            warn!(
                "{} malformed entries in {} were skipped",
                warnings.len(),
                path.display()
            );
        }
    }

    println!("{}", session.title());
    let rows = grid_rows(session.document(), MAX_COLUMNS);
    if rows.is_empty() {
        println!("(no buttons)");
    } else {
        println!("{}", grid_to_text(&rows));
        println!("{}", session.button_listing());
    }

    if let Some(query) = button {
        let Some(index) = session.find_button(&query) else {
            return Err(format!("no button matches '{}'", query).into());
        };

        session.launch(index)?;
        info!("Launched '{}'", query);
    }

    Ok(())
}

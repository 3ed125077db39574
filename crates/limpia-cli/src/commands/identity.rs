//! Identity command: show or reset the persisted client identifier.

use std::path::PathBuf;

use colored::Colorize;
use limpia::{Result, Session};

pub fn run(
    reset: bool,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let store = super::identity_store(identity_file)?;

    if reset {
        Session::reset(&store)?;
        println!("{} identity cleared; the next command generates a fresh one", "✓".green().bold());
        return Ok(());
    }

    let session = Session::obtain(&store)?;
    if verbose {
        println!("identity file: {}", store.path().display());
    }
    println!("{}", session.user_id());
    Ok(())
}

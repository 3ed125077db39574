//! Status command: probe backend health.

use std::path::PathBuf;

use colored::Colorize;
use limpia::Result;

pub fn run(api_url: Option<String>, identity_file: Option<PathBuf>, verbose: bool) -> Result<()> {
    let studio = super::open_studio(api_url, identity_file)?;

    if verbose {
        println!("Probing backend ({})...", studio.backend_name());
    }

    match studio.health() {
        Ok(health) => {
            println!("{} backend: {}", "✓".green().bold(), health.status);
            Ok(())
        }
        Err(err) => {
            println!("{} backend unreachable", "✗".red().bold());
            Err(err)
        }
    }
}

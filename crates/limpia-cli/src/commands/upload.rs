//! Upload command: validate and push a local dataset file.

use std::path::PathBuf;

use colored::Colorize;
use limpia::Result;

pub fn run(
    file: PathBuf,
    api_url: Option<String>,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let studio = super::open_studio(api_url, identity_file)?;

    if verbose {
        println!("Uploading {} as user {}...", file.display(), studio.session().user_id());
    }

    let receipt = studio.upload(&file)?;
    println!(
        "{} {} — {} filas, {} columnas",
        "✓".green().bold(),
        receipt.file_name.bold(),
        receipt.rows,
        receipt.columns
    );
    Ok(())
}

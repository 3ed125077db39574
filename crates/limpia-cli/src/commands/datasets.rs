//! Datasets command: list uploaded or cleaned datasets.

use std::path::PathBuf;

use colored::Colorize;
use limpia::Result;

pub fn run(
    cleaned: bool,
    json: bool,
    api_url: Option<String>,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let studio = super::open_studio(api_url, identity_file)?;

    if cleaned {
        let datasets = studio.cleaned_datasets()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&datasets)?);
            return Ok(());
        }
        if datasets.is_empty() {
            println!("No cleaned datasets. Run `limpia clean <ID> --save` first.");
            return Ok(());
        }
        println!("{}", format!("Cleaned datasets ({})", datasets.len()).bold());
        for dataset in datasets {
            println!(
                "  {:>4}  {}  {} filas × {} columnas  {}",
                dataset.id.to_string().cyan(),
                dataset.name.bold(),
                dataset.num_rows,
                dataset.num_columns,
                dataset.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
            );
        }
        return Ok(());
    }

    let datasets = studio.datasets()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }
    if datasets.is_empty() {
        println!("No datasets. Upload one with `limpia upload <FILE>`.");
        return Ok(());
    }
    println!("{}", format!("Datasets ({})", datasets.len()).bold());
    for dataset in datasets {
        let line = format!(
            "  {:>4}  {}  {} filas × {} columnas  {:.2} MB  {}",
            dataset.id.to_string().cyan(),
            dataset.name.bold(),
            dataset.num_rows,
            dataset.num_columns,
            dataset.file_size_mb,
            dataset.file_type.to_uppercase()
        );
        println!("{}", line);
        if verbose {
            println!(
                "        uploaded {}",
                dataset.uploaded_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }
    Ok(())
}

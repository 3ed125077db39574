//! Train command: submit a training request for a cleaned dataset.

use std::path::PathBuf;

use colored::Colorize;
use limpia::{Algorithm, DatasetId, LimpiaError, Result, TrainRequest};

#[allow(clippy::too_many_arguments)]
pub fn run(
    dataset: DatasetId,
    name: Option<String>,
    algorithm: Algorithm,
    target: Option<String>,
    test_size: f64,
    random_state: i64,
    list_columns: bool,
    api_url: Option<String>,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let studio = super::open_studio(api_url, identity_file)?;

    if list_columns {
        let columns = studio.cleaned_columns(dataset)?;
        println!("{}", format!("Columns of dataset {} ({})", dataset, columns.len()).bold());
        for column in columns {
            println!("  {}", column);
        }
        return Ok(());
    }

    let name = name.ok_or_else(|| {
        LimpiaError::Validation("--name is required unless --list-columns is given".into())
    })?;
    let target = target.ok_or_else(|| {
        LimpiaError::Validation("--target is required unless --list-columns is given".into())
    })?;

    if verbose {
        println!(
            "Training {} ({}) on dataset {}, target '{}'...",
            name,
            algorithm.display_name(),
            dataset,
            target
        );
    }

    let request = TrainRequest::new(studio.session(), dataset, name, algorithm, target)
        .with_test_size(test_size)
        .with_random_state(random_state);

    let outcome = studio.train(&request)?;
    println!(
        "{} {} — precisión {:.2}%",
        "✓".green().bold(),
        outcome.name.bold(),
        outcome.metrics.accuracy * 100.0
    );
    Ok(())
}

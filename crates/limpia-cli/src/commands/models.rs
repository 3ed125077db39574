//! Models command: list trained models with summary stats.

use std::path::PathBuf;

use colored::Colorize;
use limpia::Result;

pub fn run(
    json: bool,
    api_url: Option<String>,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let studio = super::open_studio(api_url, identity_file)?;
    let models = studio.models()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        println!("No trained models. Train one with `limpia train`.");
        return Ok(());
    }

    let ready = models.iter().filter(|m| m.status.is_ready()).count();
    let training = models.len() - ready;
    println!(
        "{}  {} listos, {} en entrenamiento",
        format!("Models ({})", models.len()).bold(),
        ready,
        training
    );

    if let Some(best) = models
        .iter()
        .max_by(|a, b| a.accuracy.total_cmp(&b.accuracy))
    {
        println!(
            "Mejor precisión: {} ({})",
            format!("{:.1}%", best.accuracy * 100.0).green().bold(),
            best.algorithm
        );
    }

    for model in &models {
        println!(
            "  {:>4}  {:<24} {:<20} {:>6.2}%  {}",
            model.id.to_string().cyan(),
            model.name.bold(),
            model.algorithm,
            model.accuracy * 100.0,
            model.status.label()
        );
        if verbose {
            println!(
                "        trained {} in {:.1}s",
                model.trained_at.format("%Y-%m-%d %H:%M:%S"),
                model.training_time
            );
        }
    }
    Ok(())
}

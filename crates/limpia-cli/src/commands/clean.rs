//! Clean command: analyze, preview operations, optionally save.

use std::path::PathBuf;

use colored::Colorize;
use limpia::{
    CellValue, CleanOperation, DatasetId, ImputeMethod, Result, RowStatus, Workbench,
};

#[allow(clippy::too_many_arguments)]
pub fn run(
    dataset: DatasetId,
    replace_nulls: bool,
    impute: Option<ImputeMethod>,
    normalize: bool,
    encode: bool,
    page: usize,
    save: bool,
    api_url: Option<String>,
    identity_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut studio = super::open_studio(api_url, identity_file)?;

    if verbose {
        println!("Analyzing dataset {}...", dataset);
    }
    studio.open_dataset(dataset)?;

    // Queue order is fixed; the backend replays it verbatim.
    if replace_nulls {
        studio.apply(CleanOperation::ReplaceNulls)?;
    }
    if let Some(method) = impute {
        studio.apply(CleanOperation::Impute { method })?;
    }
    if normalize {
        studio.apply(CleanOperation::Normalize)?;
    }
    if encode {
        studio.apply(CleanOperation::Encode)?;
    }

    if let Some(workbench) = studio.workbench_mut() {
        workbench.set_page(page);
    }

    if let Some(workbench) = studio.workbench() {
        print_summary(workbench);
        print_column_quality(workbench);
        print_preview(workbench);
    }

    if save {
        let outcome = studio.save()?;
        println!(
            "{} {} operaciones aplicadas",
            "✓".green().bold(),
            outcome.operations_applied.len()
        );
        if let Some(workbench) = studio.workbench() {
            println!(
                "Fresh analysis: {} nulls remaining",
                workbench.preview().total_nulls
            );
        }
    } else if studio.workbench().map(|w| w.has_pending()).unwrap_or(false) {
        println!(
            "{}",
            "Preview only — re-run with --save to persist these operations.".yellow()
        );
    }

    Ok(())
}

fn print_summary(workbench: &Workbench) {
    let stats = workbench.quality();
    println!(
        "{}  {} registros, {} nulos, calidad {}%",
        "Dataset".bold(),
        stats.total_records,
        stats.total_nulls,
        stats.quality_percent
    );

    if workbench.has_pending() {
        println!("{}", "Operaciones pendientes:".yellow().bold());
        for pending in workbench.pending() {
            println!("  • {}", pending.label);
        }
    }
}

fn print_column_quality(workbench: &Workbench) {
    println!("{}", "Columnas:".bold());
    for (name, info) in &workbench.preview().columns_info {
        let badge = if info.null_percentage > 20.0 {
            "Crítico".red()
        } else if info.null_percentage > 0.0 {
            "Advertencia".yellow()
        } else {
            "OK".green()
        };
        println!(
            "  {:<20} {:<10} {} nulos ({:.1}%)  {}",
            name, info.dtype, info.nulls, info.null_percentage, badge
        );
    }
}

fn print_preview(workbench: &Workbench) {
    let columns = workbench.column_names();
    println!(
        "{} (página {} de {})",
        "Vista previa".bold(),
        workbench.page(),
        workbench.page_count()
    );
    println!("  {}", columns.join(" | "));
    for row in workbench.current_rows() {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                if column == "status" {
                    let label = row.status.label();
                    return match row.status {
                        RowStatus::Active => label.green().to_string(),
                        RowStatus::Inactive => label.red().to_string(),
                    };
                }
                match row.get(column) {
                    Some(CellValue::Missing) => "NULL".red().to_string(),
                    Some(CellValue::Marked) => "N/A".yellow().to_string(),
                    Some(value) => value.display_label(),
                    None => String::new(),
                }
            })
            .collect();
        println!("  {}", cells.join(" | "));
    }
}

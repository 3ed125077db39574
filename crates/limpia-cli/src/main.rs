//! Limpia CLI - cleaning and training workbench for tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let api_url = cli.api_url;
    let identity_file = cli.identity_file;

    let result = match cli.command {
        Commands::Upload { file } => {
            commands::upload::run(file, api_url, identity_file, cli.verbose)
        }

        Commands::Datasets { cleaned, json } => {
            commands::datasets::run(cleaned, json, api_url, identity_file, cli.verbose)
        }

        Commands::Clean {
            dataset,
            replace_nulls,
            impute,
            normalize,
            encode,
            page,
            save,
        } => commands::clean::run(
            dataset,
            replace_nulls,
            impute,
            normalize,
            encode,
            page,
            save,
            api_url,
            identity_file,
            cli.verbose,
        ),

        Commands::Train {
            dataset,
            name,
            algorithm,
            target,
            test_size,
            random_state,
            list_columns,
        } => commands::train::run(
            dataset,
            name,
            algorithm,
            target,
            test_size,
            random_state,
            list_columns,
            api_url,
            identity_file,
            cli.verbose,
        ),

        Commands::Models { json } => commands::models::run(json, api_url, identity_file, cli.verbose),

        Commands::Status => commands::status::run(api_url, identity_file, cli.verbose),

        Commands::Identity { reset } => {
            commands::identity::run(reset, identity_file, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

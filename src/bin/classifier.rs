//! Classifier CLI Binary
//!
//! Command-line interface for the classification tree.

use clap::Parser;
use classifier::logging::init_logging;
use classifier::tooling::cli::{exit_code, Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(exit_code(&e));
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(exit_code(&e));
    }

    // Create CLI context
    let context = match CliContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening record store: {}", e);
            process::exit(exit_code(&e));
        }
    };

    // Execute command
    let result = context.execute(&cli.command);
    let closed = context.close();
    match result.and_then(|output| closed.map(|_| output)) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    }
}

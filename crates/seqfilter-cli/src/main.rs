//! seqfilter CLI - Main entry point

use clap::Parser;
use seqfilter_cli::Cli;
use seqfilter_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Verbose mode logs debug to the console, otherwise only warnings and errors
    let base = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("seqfilter")
        .build();

    // Environment variables take precedence
    let log_config = match base.clone().merge_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring invalid logging environment: {}", e);
            base
        }
    };

    // The filter still runs if logging cannot be set up
    let guard = init_logging(&log_config).unwrap_or_else(|e| {
        eprintln!("Warning: logging disabled: {}", e);
        None
    });

    if let Err(e) = seqfilter_cli::commands::filter::run(&cli) {
        error!(error = %e, "Filtering failed");
        eprintln!("Error: {}", e);
        drop(guard);
        process::exit(1);
    }
}

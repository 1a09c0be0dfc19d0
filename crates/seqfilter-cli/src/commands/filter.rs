//! Filter command implementation
//!
//! Turns parsed arguments and configuration into a [`FilterRequest`], runs it,
//! and reports the outcome.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::progress::{create_record_spinner, format_count};
use crate::Cli;
use colored::Colorize;
use seqfilter_common::SeqFormat;
use seqfilter_core::{parse_columns, FilterOptions, FilterRequest, FilterStats, TableSource};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Outcome of a run, printed as text or JSON
#[derive(Debug, Serialize)]
pub struct Summary {
    pub input: String,
    pub format: SeqFormat,
    pub positive: Option<String>,
    pub negative: Option<String>,
    #[serde(flatten)]
    pub stats: FilterStats,
}

/// Filter the input file as described by `cli`
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "Effective configuration");

    let request = build_request(cli, &config)?;
    let format = request.resolve_format()?;

    let spinner = create_record_spinner(config.progress && !cli.quiet && !cli.json, "Filtering");
    let result = seqfilter_core::run(&request, |stats| spinner.set_position(stats.records));
    spinner.finish_and_clear();
    let stats = result?;

    let summary = Summary {
        input: display(&request.input),
        format,
        positive: request.positive.as_deref().map(display),
        negative: request.negative.as_deref().map(display),
        stats,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        print_summary(&summary);
    }

    Ok(())
}

/// Merge flags over configuration into a filter request
pub fn build_request(cli: &Cli, config: &Config) -> Result<FilterRequest> {
    let input = cli
        .input
        .clone()
        .ok_or_else(|| CliError::config("an input sequence file is required (--input)"))?;

    if cli.tables.len() != cli.columns.len() {
        return Err(CliError::ColumnsMismatch {
            tables: cli.tables.len(),
            columns: cli.columns.len(),
        });
    }

    let tables = cli
        .tables
        .iter()
        .zip(&cli.columns)
        .map(|(path, spec)| -> Result<TableSource> {
            Ok(TableSource {
                path: path.clone(),
                columns: parse_columns(spec)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FilterRequest {
        input,
        format: cli.format,
        tables,
        id_list: cli.id_list.clone(),
        logic: cli.logic.unwrap_or(config.logic),
        positive: cli.positive.clone(),
        negative: cli.negative.clone(),
        options: FilterOptions {
            line_width: cli.line_width.unwrap_or(config.line_width),
            drop_pair_suffix: cli.drop_pair_suffix || config.drop_pair_suffix,
        },
    })
}

fn print_summary(summary: &Summary) {
    let stats = &summary.stats;

    println!(
        "{} Filtered {} {} record(s) against {} identifier(s)",
        "✓".green(),
        format_count(stats.records),
        summary.format,
        format_count(stats.identifiers as u64)
    );
    println!(
        "  With ID:    {} -> {}",
        format_count(stats.matched),
        summary.positive.as_deref().unwrap_or("(not written)")
    );
    println!(
        "  Without ID: {} -> {}",
        format_count(stats.unmatched),
        summary.negative.as_deref().unwrap_or("(not written)")
    );
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

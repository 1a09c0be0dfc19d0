//! Build automation tasks for seqfilter
//!
//! Currently generates the markdown CLI reference from the clap definitions.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for seqfilter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &Path) -> anyhow::Result<()> {
    let markdown = clap_markdown::help_markdown::<seqfilter_cli::Cli>();

    let content = format!(
        r#"# seqfilter CLI Reference

Generated from the CLI source code on {}.

## Overview

seqfilter splits a FASTA or FASTQ file in two: records whose identifier is
listed in a column of a tabular file, and records whose identifier is not.

## Quick Start

```bash
# Records named in column 1 of hits.tsv go to with.fasta, the rest to without.fasta
seqfilter -i input.fasta -t hits.tsv -c 1 -p with.fasta -n without.fasta

# Keep only reads NOT listed in either table column 2 or 3
seqfilter -i reads.fastq.gz -t blast.tabular -c 2,3 -n clean.fastq
```

## Options

{}

## Environment Variables

- `SEQFILTER_CONFIG` - Path to a TOML configuration file
- `SEQFILTER_LINE_WIDTH` - FASTA wrap width (0 = no wrapping)
- `SEQFILTER_LOGIC` - `union` or `intersection` across tables
- `SEQFILTER_DROP_PAIR_SUFFIX` - Ignore `/1` and `/2` read suffixes
- `SEQFILTER_PROGRESS` - Show the progress spinner (`true`/`false`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR`, `LOG_FILTER` - Logging

## Configuration

Example `~/.config/seqfilter/config.toml`:

```toml
line_width = 60
logic = "union"
drop_pair_suffix = false
progress = true
```

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let file_path = output_dir.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());
    Ok(())
}

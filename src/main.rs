// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use docs_validator::{CheckConfig, FsSourceConfig, check_docs, output};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable plain text.
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Static consistency checker for markdown documentation trees.
#[derive(Debug, Parser)]
#[command(name = "docs-validator", version, about)]
struct Cli {
    /// Root directory containing the documentation files.
    #[arg(default_value = "docs")]
    root: PathBuf,

    /// Exclude patterns (glob format), repeatable.
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Follow symbolic links during discovery.
    #[arg(long)]
    follow_links: bool,

    /// Maximum directory traversal depth.
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Maximum file size in bytes.
    #[arg(long, default_value_t = 10_485_760)]
    max_file_size: u64,

    /// File extension (without the dot) identifying documentation files.
    #[arg(long, default_value = "md")]
    extension: String,

    /// File name exempt from the metadata title requirement.
    #[arg(long, default_value = "index.md")]
    index_file: String,
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut source = FsSourceConfig::default();
    source.root.clone_from(&cli.root);
    source.exclude.clone_from(&cli.exclude);
    source.follow_links = cli.follow_links;
    source.max_depth = cli.max_depth;
    source.max_file_size = cli.max_file_size;

    let mut checks = CheckConfig::default();
    checks.doc_extension.clone_from(&cli.extension);
    checks.index_file.clone_from(&cli.index_file);

    let report = check_docs(&source, &checks)?;

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }

    Ok(report.ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

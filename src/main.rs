use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;

use hpp_uml::{
    ClassSummary, ClassifyOptions, FileCollector, HeaderProcessor, ScanOptions, ScanResult,
    file_utils, render_html, render_text,
};

/// Output format of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text UML summary
    Text,
    /// Single-page form embedding source and summary
    Html,
    /// Structured class records
    Json,
}

/// Extract a simplified UML-style summary from C++ header files
#[derive(Debug, Parser)]
#[command(name = "hpp_uml", version)]
struct Cli {
    /// Header files or directories to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Header file extension to collect from directories (repeatable)
    #[arg(long = "extension")]
    extensions: Vec<String>,

    /// Number of parallel threads
    #[arg(long)]
    threads: Option<usize>,

    /// Maximum number of files to process
    #[arg(long)]
    max_files: Option<usize>,

    /// TOML config file with classifier qualifier keywords
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let classify = match &cli.config {
        Some(path) => ClassifyOptions::load(path)?,
        None => ClassifyOptions::default(),
    };
    let options = ScanOptions {
        max_files: cli.max_files,
        parallel_threads: cli.threads,
        classify,
    };
    let collector = if cli.extensions.is_empty() {
        FileCollector::new()
    } else {
        FileCollector::with_extensions(cli.extensions.clone())
    };

    let files = collect_inputs(&cli.inputs, &collector)?;
    if files.is_empty() {
        bail!("no header files found in the given inputs");
    }

    let processor = HeaderProcessor::new(options, collector);
    let result = processor.process_files(&files);
    info!(
        "Scanned {} files ({:.0}% readable), found {} classes",
        result.stats.total_files,
        result.stats.success_rate(),
        result.stats.total_classes
    );

    let report = render_report(cli.format, &result)?;
    match &cli.output {
        Some(path) => file_utils::write_string_to_file(path, &report)?,
        None => print!("{report}"),
    }

    Ok(())
}

/// Expand the given paths into a flat file list: directories are walked
/// for header files, plain files are taken as-is
fn collect_inputs(inputs: &[PathBuf], collector: &FileCollector) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(collector.collect_files(input)?);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("input path does not exist: {}", input.display());
        }
    }
    Ok(files)
}

fn render_report(format: OutputFormat, result: &ScanResult) -> Result<String> {
    let classes: Vec<ClassSummary> = result
        .summaries
        .iter()
        .flat_map(|s| s.classes.iter().cloned())
        .collect();

    match format {
        OutputFormat::Text => Ok(render_text(&classes)),
        OutputFormat::Html => {
            // re-read the scanned sources so the page can embed them;
            // files that disappeared since the scan are skipped
            let source = result
                .summaries
                .iter()
                .filter_map(|s| file_utils::read_file_to_string(&s.file_path).ok())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(render_html(&source, &classes))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize scan result")
        }
    }
}

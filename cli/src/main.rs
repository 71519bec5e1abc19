use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use openapi_preprocess_core::{preprocess, OutputFormat, PreprocessError, PreprocessOptions};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "openapi-preprocess")]
#[command(
    about = "Rewrite anyOf: [{type: T}, {type: null}] to {type: T} so strict OpenAPI 3.1 generators accept the document"
)]
#[command(version)]
struct Cli {
    /// Input OpenAPI document (JSON)
    input: PathBuf,

    /// Output file for the normalized document
    output: PathBuf,

    /// Write a JSON report of every rewritten node to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Pretty)]
    format: FormatArg,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Compact => OutputFormat::Compact,
        }
    }
}

fn main() -> Result<()> {
    // Usage errors exit 1, not clap's default 2; --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    // Logs go to stderr; stdout is never used for document output.
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let data = fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    let options = PreprocessOptions {
        format: cli.format.into(),
    };

    let result = preprocess(&data, &options).map_err(|e| {
        let step = match e {
            PreprocessError::Parse(_) => "Failed to parse",
            PreprocessError::Encode(_) => "Failed to encode",
        };
        anyhow::Error::from(e).context(format!("{step} document: {}", cli.input.display()))
    })?;

    tracing::info!(
        rewrites = result.report.len(),
        input = %cli.input.display(),
        "collapsed nullable unions"
    );

    fs::write(&cli.output, &result.output)
        .with_context(|| format!("Failed to write output file: {}", cli.output.display()))?;

    if let Some(path) = &cli.report {
        write_json(&result.report, path)?;
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(val: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush report file")?;

    Ok(())
}

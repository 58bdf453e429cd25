//! SemEval-2010 Task 8 Converter
//!
//! Converts the relation-classification release files into edge-probing
//! JSON, one output file per input.
//!
//! ```text
//! semeval-convert \
//!     -i SemEval2010_task8_training/TRAIN_FILE.TXT SemEval2010_task8_testing_keys/TEST_FILE_FULL.TXT \
//!     -o data/semeval-2010-task8
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use edgeprobe_core::{ConvertConfig, Converter, OutputFormat};
use tracing::{Level, info};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "semeval-convert")]
#[command(about = "Convert SemEval-2010 Task 8 data into edge probing format")]
#[command(version)]
struct Cli {
    /// Input files in SemEval-2010 Task 8 format
    #[arg(short = 'i', long = "inputs", num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long, env = "EDGEPROBE_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Output format: "json" (one array) or "jsonl" (one record per line)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON arrays
    #[arg(long)]
    pretty: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn convert_config(&self) -> ConvertConfig {
        ConvertConfig::new()
            .with_format(self.format)
            .with_pretty(self.pretty)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    run(&cli)?;
    Ok(())
}

/// Converts every input into the output directory, stopping at the first failure.
fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("Failed to create output directory {}", cli.output_dir.display())
    })?;

    let converter = Converter::new(cli.convert_config())?;
    let mut outputs = Vec::with_capacity(cli.inputs.len());
    for input in &cli.inputs {
        info!("Converting {}", input.display());
        let (output, _) = converter
            .convert_to_dir(input, &cli.output_dir)
            .with_context(|| format!("Failed to convert {}", input.display()))?;
        outputs.push(output);
    }

    Ok(outputs)
}

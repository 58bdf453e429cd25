//! # File Conversion
//!
//! Drives one SemEval file through grouping, record parsing, statistics and
//! serialization.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EdgeProbeError, Result};
use crate::parser::RecordParser;
use crate::stats::DatasetStats;
use crate::writer::{OutputFormat, write_records};

/// Configuration for the converter.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Output layout.
    pub format: OutputFormat,
    /// Pretty-print JSON arrays.
    pub pretty: bool,
}

impl ConvertConfig {
    /// Create a new converter configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable pretty printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Output path for `input` inside `output_dir`.
///
/// The file name is the input's base name, lowercased, with its extension
/// replaced by `.json`.
///
/// # Errors
///
/// Returns `EdgeProbeError::InvalidPath` if `input` has no file name.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use edgeprobe_core::target_path;
///
/// let out = target_path(Path::new("data/TRAIN_FILE.TXT"), Path::new("out")).unwrap();
/// assert_eq!(out, Path::new("out/train_file.json"));
/// ```
pub fn target_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let base = input
        .file_name()
        .ok_or_else(|| EdgeProbeError::InvalidPath(input.to_path_buf()))?
        .to_string_lossy()
        .to_lowercase();
    let stem = Path::new(&base)
        .file_stem()
        .ok_or_else(|| EdgeProbeError::InvalidPath(input.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(".json");
    Ok(output_dir.join(name))
}

/// Converts SemEval-2010 Task 8 files into edge-probing JSON.
pub struct Converter {
    config: ConvertConfig,
    parser: RecordParser,
}

impl Converter {
    /// Create a converter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `EdgeProbeError::RegexError` if the parser patterns fail to compile.
    pub fn new(config: ConvertConfig) -> Result<Self> {
        Ok(Self {
            config,
            parser: RecordParser::new()?,
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts `input` and writes the records to `output`.
    ///
    /// The whole input is parsed before `output` is created, so a malformed
    /// record never leaves a partial file behind. Parent directories of
    /// `output` are created as needed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O, grouping or record error encountered.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<DatasetStats> {
        let text = fs::read_to_string(input)?;
        let records = self.parser.parse_str(&text)?;
        debug!(records = records.len(), input = %input.display(), "parsed input");

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut stats = DatasetStats::new();
        let out = BufWriter::new(File::create(output)?);
        write_records(
            out,
            stats.passthrough(&records),
            self.config.format,
            self.config.pretty,
        )?;

        info!("Wrote {} examples to {}", stats.count, output.display());
        info!("\n{stats}");
        Ok(stats)
    }

    /// Converts `input` into `output_dir`, naming the output with [`target_path`].
    ///
    /// # Errors
    ///
    /// Same as [`Converter::convert_file`], plus `InvalidPath` for inputs
    /// without a file name.
    pub fn convert_to_dir(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<(PathBuf, DatasetStats)> {
        let output = target_path(input, output_dir)?;
        let stats = self.convert_file(input, &output)?;
        Ok((output, stats))
    }
}

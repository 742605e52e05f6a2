// ⌨️ CLI - Argument definitions for the pim-import binary

use crate::logging::{LogConfig, LogFormat};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "pim-import.csv";

#[derive(Debug, Parser)]
#[command(
    name = "pim-import",
    version,
    about = "Normalize merchant SKUs into a catalog import CSV",
    long_about = "Read a CSV with a merchantSku (or sku) column and optional size/color columns,\n\
                  derive product code, size and color for every row, drop duplicate variants\n\
                  and write a sorted import file:\n\n  \
                  sku,variant_size,variant_color,price_excl_vat,stock"
)]
pub struct Cli {
    /// Input CSV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a JSON run report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Normalize and print the summary without writing OUTPUT
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig::from_verbosity(self.verbose)
            .with_format(format)
            .with_log_file(self.log_file.clone())
    }
}

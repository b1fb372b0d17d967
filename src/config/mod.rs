pub mod local;
pub mod toml_config;

use crate::core::etl::DEFAULT_PREVIEW_LIMIT;
use crate::core::ConfigProvider;
use crate::domain::model::LineTerminator;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path};

pub const DEFAULT_INPUT_PATH: &str = "contacts_insert_final.sql";
pub const DEFAULT_OUTPUT_PATH: &str = "contacts.csv";

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// 未指定的選項保持 `None`，讓 TOML 設定可以提供值
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "contacts-csv")]
#[command(about = "Convert contact INSERT statements from a SQL dump into a CSV file")]
pub struct CliConfig {
    /// SQL file to read [default: contacts_insert_final.sql]
    #[arg(short, long)]
    pub input: Option<String>,

    /// CSV file to write [default: contacts.csv]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub work_dir: String,

    /// Number of records listed after the conversion [default: 5]
    #[arg(long)]
    pub preview_limit: Option<usize>,

    /// Terminate CSV records with LF instead of CRLF
    #[arg(long)]
    pub lf: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Extract and report without writing the CSV file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn preview_limit(&self) -> usize {
        self.preview_limit.unwrap_or(DEFAULT_PREVIEW_LIMIT)
    }

    fn line_terminator(&self) -> LineTerminator {
        if self.lf {
            LineTerminator::Lf
        } else {
            LineTerminator::Crlf
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("work_dir", &self.work_dir)?;
        validate_io_paths(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_io_paths<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("input_path", config.input_path())?;
    validate_path("output_path", config.output_path())?;
    validate_distinct_paths("output_path", config.input_path(), config.output_path())
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{local::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::EtlEngine, pipeline::SqlCsvPipeline};
pub use domain::model::{ContactRecord, LineTerminator, RunOutcome, RunReport};
pub use utils::error::{EtlError, Result};

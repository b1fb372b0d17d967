use crate::config::{validate_io_paths, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::etl::DEFAULT_PREVIEW_LIMIT;
use crate::core::ConfigProvider;
use crate::domain::model::LineTerminator;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// 所有區段皆可省略，省略時使用內建預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub report: ReportConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub input_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: String,
    pub line_terminator: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            line_terminator: "crlf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub preview_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACTS_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 命令列明確給定的選項優先於 TOML
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(input) = &cli.input {
            self.source.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            self.load.output_path = output.clone();
        }
        if let Some(limit) = cli.preview_limit {
            self.report.preview_limit = limit;
        }
        if cli.lf {
            self.load.line_terminator = "lf".to_string();
        }
        if cli.monitor {
            self.monitoring.enabled = true;
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn preview_limit(&self) -> usize {
        self.report.preview_limit
    }

    fn line_terminator(&self) -> LineTerminator {
        LineTerminator::parse(&self.load.line_terminator).unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_io_paths(self)?;
        validate_one_of(
            "load.line_terminator",
            &self.load.line_terminator.to_ascii_lowercase(),
            &LineTerminator::NAMES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
input_path = "dumps/contacts.sql"

[load]
output_path = "exports/contacts.csv"
line_terminator = "lf"

[report]
preview_limit = 10

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "dumps/contacts.sql");
        assert_eq!(config.output_path(), "exports/contacts.csv");
        assert_eq!(config.line_terminator(), LineTerminator::Lf);
        assert_eq!(config.preview_limit(), 10);
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_path(), "contacts_insert_final.sql");
        assert_eq!(config.output_path(), "contacts.csv");
        assert_eq!(config.line_terminator(), LineTerminator::Crlf);
        assert_eq!(config.preview_limit(), 5);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTACTS_CSV_TEST_DIR", "/srv/exports");

        let toml_content = r#"
[load]
output_path = "${CONTACTS_CSV_TEST_DIR}/contacts.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/srv/exports/contacts.csv");

        std::env::remove_var("CONTACTS_CSV_TEST_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[source]
input_path = "${CONTACTS_CSV_SURELY_UNDEFINED}.sql"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "${CONTACTS_CSV_SURELY_UNDEFINED}.sql");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[source\ninput_path = 1").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let bad_terminator = r#"
[load]
line_terminator = "cr"
"#;
        let config = TomlConfig::from_toml_str(bad_terminator).unwrap();
        assert!(config.validate().is_err());

        let same_paths = r#"
[source]
input_path = "contacts.csv"
"#;
        let config = TomlConfig::from_toml_str(same_paths).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
input_path = "from-file.sql"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "from-file.sql");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_win() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str(
            r#"
[source]
input_path = "toml.sql"

[load]
output_path = "toml.csv"
"#,
        )
        .unwrap();
        let cli = CliConfig::parse_from(["contacts-csv", "--output", "cli.csv", "--lf"]);

        config.apply_cli_overrides(&cli);

        assert_eq!(config.input_path(), "toml.sql");
        assert_eq!(config.output_path(), "cli.csv");
        assert_eq!(config.line_terminator(), LineTerminator::Lf);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSV 欄位名稱，順序即輸出欄位順序
pub const CONTACT_HEADERS: [&str; 2] = ["name", "phone"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.phone)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    Lf,
    /// Excel-style `\r\n`, used unless LF is asked for.
    #[default]
    Crlf,
}

impl LineTerminator {
    pub const NAMES: [&'static str; 2] = ["lf", "crlf"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lf" => Some(LineTerminator::Lf),
            "crlf" => Some(LineTerminator::Crlf),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ContactRecord>,
    pub csv_output: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: String,
    pub target: String,
    pub found: usize,
    pub written: usize,
    pub sample: Vec<ContactRecord>,
}

impl RunReport {
    /// 預覽行，從 1 開始編號："1. Jane Doe - 555-1234"
    pub fn preview_lines(&self) -> Vec<String> {
        self.sample
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    SourceMissing { source: String },
    Completed(RunReport),
    DryRun(RunReport),
}

impl RunOutcome {
    pub fn report(&self) -> Option<&RunReport> {
        match self {
            RunOutcome::SourceMissing { .. } => None,
            RunOutcome::Completed(report) | RunOutcome::DryRun(report) => Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_lines_are_one_indexed() {
        let report = RunReport {
            source: "in.sql".to_string(),
            target: "out.csv".to_string(),
            found: 2,
            written: 2,
            sample: vec![
                ContactRecord::new("Jane Doe", "555-1234"),
                ContactRecord::new("John Roe", "555-9876"),
            ],
        };

        assert_eq!(
            report.preview_lines(),
            vec!["1. Jane Doe - 555-1234", "2. John Roe - 555-9876"]
        );
    }

    #[test]
    fn test_line_terminator_parse() {
        assert_eq!(LineTerminator::parse("lf"), Some(LineTerminator::Lf));
        assert_eq!(LineTerminator::parse("CRLF"), Some(LineTerminator::Crlf));
        assert_eq!(LineTerminator::parse("cr"), None);
    }
}

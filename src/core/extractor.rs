use crate::domain::model::ContactRecord;
use crate::utils::error::Result;
use regex::Regex;
use std::borrow::Cow;

/// `INSERT INTO contacts (name, phone) VALUES ('NAME', 'PHONE');`
/// Values are non-empty and may not contain a single quote.
const INSERT_PATTERN: &str =
    r"INSERT INTO contacts \(name, phone\) VALUES \('(?P<name>[^']+)', '(?P<phone>[^']+)'\);";

const STATEMENT_PREFIX: &str = "INSERT INTO";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ContactRecord>,
    /// `INSERT INTO` occurrences that did not match the contact statement shape.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct SqlInsertExtractor {
    pattern: Regex,
}

impl SqlInsertExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(INSERT_PATTERN)?,
        })
    }

    pub fn extract(&self, content: &str) -> Vec<ContactRecord> {
        self.scan(content).records
    }

    /// 依檔案順序收集所有不重疊的匹配，欄位去除前後空白
    pub fn scan(&self, content: &str) -> Extraction {
        let mut records = Vec::new();
        let mut skipped = 0;
        let mut last_end = 0;

        for caps in self.pattern.captures_iter(content) {
            // 只計算匹配範圍之外的前綴，值裡面的 "INSERT INTO" 不算
            if let Some(whole) = caps.get(0) {
                skipped += count_candidates(&content[last_end..whole.start()]);
                last_end = whole.end();
            }
            records.push(ContactRecord::new(caps["name"].trim(), caps["phone"].trim()));
        }
        skipped += count_candidates(&content[last_end..]);

        Extraction { records, skipped }
    }
}

fn count_candidates(text: &str) -> usize {
    text.matches(STATEMENT_PREFIX).count()
}

/// Folds `\r\n` and lone `\r` into `\n`, as text-mode reads do.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

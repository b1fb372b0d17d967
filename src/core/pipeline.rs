use crate::core::extractor::{normalize_newlines, SqlInsertExtractor};
use crate::core::writer::ContactCsvWriter;
use crate::core::{ConfigProvider, ContactRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// SQL INSERT dump in, `name,phone` CSV out.
pub struct SqlCsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: SqlInsertExtractor,
}

impl<S: Storage, C: ConfigProvider> SqlCsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            extractor: SqlInsertExtractor::new()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SqlCsvPipeline<S, C> {
    fn source(&self) -> &str {
        self.config.input_path()
    }

    fn target(&self) -> &str {
        self.config.output_path()
    }

    async fn source_exists(&self) -> bool {
        self.storage.exists(self.config.input_path()).await
    }

    async fn extract(&self) -> Result<Vec<ContactRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading SQL file: {}", path);

        let bytes = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        let content = String::from_utf8(bytes).map_err(|source| EtlError::EncodingError {
            path: path.to_string(),
            source,
        })?;

        let extraction = self.extractor.scan(&normalize_newlines(&content));
        if extraction.skipped > 0 {
            tracing::debug!(
                "{} INSERT statement(s) did not match the contact shape and were skipped",
                extraction.skipped
            );
        }

        Ok(extraction.records)
    }

    async fn transform(&self, records: Vec<ContactRecord>) -> Result<TransformResult> {
        let writer = ContactCsvWriter::new(self.config.line_terminator());
        let csv_output = writer.to_bytes(&records)?;

        tracing::debug!(
            "Rendered {} rows into {} bytes of CSV",
            records.len(),
            csv_output.len()
        );

        Ok(TransformResult {
            records,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} bytes ({} contacts) to {}",
            result.csv_output.len(),
            result.records.len(),
            output_path
        );
        self.storage.write_file(output_path, &result.csv_output).await?;

        Ok(output_path.to_string())
    }
}

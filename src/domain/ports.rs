use crate::domain::model::{ContactRecord, LineTerminator, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn preview_limit(&self) -> usize;
    fn line_terminator(&self) -> LineTerminator;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Input location as shown to the user.
    fn source(&self) -> &str;
    /// Output location as shown to the user.
    fn target(&self) -> &str;
    async fn source_exists(&self) -> bool;
    async fn extract(&self) -> Result<Vec<ContactRecord>>;
    async fn transform(&self, records: Vec<ContactRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

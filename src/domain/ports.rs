use crate::domain::model::{SourceFile, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn list_dir(&self, path: &str)
        -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn reports_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_suffix(&self) -> &str;
    fn boundary_fields(&self) -> &[String];
    fn pretty_output(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceFile>>;
    async fn transform(&self, files: Vec<SourceFile>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

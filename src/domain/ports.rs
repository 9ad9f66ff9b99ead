use crate::domain::model::DownloadReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

pub trait Storage: Send + Sync {
    type Writer: Write + Send;

    /// Truncating create: any existing content at `path` is discarded.
    fn create(&self, path: &str) -> Result<Self::Writer>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait Download: Send + Sync {
    async fn download(&self) -> Result<DownloadReport>;
}

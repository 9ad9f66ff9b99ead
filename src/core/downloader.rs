use crate::core::{ConfigProvider, Download, DownloadReport, Storage};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::io::Write;
use std::time::Duration;

/// Resource served by the distributor API.
pub const CSV_RESOURCE: &str = "/pets.csv";

const API_KEY_HEADER: &str = "X-API-Key";
const BODY_EXCERPT_CHARS: usize = 200;

pub struct CsvDownloader<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> CsvDownloader<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }

    fn resource_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url().trim_end_matches('/'),
            CSV_RESOURCE
        )
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Download for CsvDownloader<S, C> {
    async fn download(&self) -> Result<DownloadReport> {
        let url = self.resource_url();
        tracing::debug!("Making API request to: {}", url);

        let mut response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::StatusError {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        // 狀態確認後才開檔，失敗的請求不會碰到既有檔案
        let mut writer = self.storage.create(self.config.output_path())?;

        let mut bytes_written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            writer.write_all(&chunk)?;
            bytes_written += chunk.len() as u64;
        }
        writer.flush()?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            bytes_written,
            self.config.output_path()
        );

        Ok(DownloadReport {
            bytes_written,
            output_path: self.config.output_path().to_string(),
        })
    }
}

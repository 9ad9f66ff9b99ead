use serde::{Deserialize, Serialize};

const BYTES_PER_MB: f64 = 1_048_576.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadReport {
    pub bytes_written: u64,
    pub output_path: String,
}

impl DownloadReport {
    pub fn size_mb(&self) -> f64 {
        self.bytes_written as f64 / BYTES_PER_MB
    }
}

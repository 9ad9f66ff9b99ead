pub mod downloader;

pub use crate::domain::model::DownloadReport;
pub use crate::domain::ports::{ConfigProvider, Download, Storage};
pub use crate::utils::error::Result;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::downloader::CsvDownloader;
pub use crate::domain::model::DownloadReport;
pub use crate::domain::ports::Download;
pub use crate::utils::error::{FetchError, Result};

use clap::Parser;
use pets_fetch::utils::{logger, validation::Validate};
use pets_fetch::{CliConfig, CsvDownloader, Download, FetchError, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pets-fetch CLI");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let downloader = match CsvDownloader::new(storage, config) {
        Ok(downloader) => downloader,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("✗ Error downloading CSV: {}", e);
            std::process::exit(1);
        }
    };

    println!("Downloading latest CSV from API...");

    match downloader.download().await {
        Ok(report) => {
            tracing::info!(
                "✅ Download completed: {} bytes -> {}",
                report.bytes_written,
                report.output_path
            );
            println!("✓ CSV downloaded successfully!");
            println!("  File: {}", report.output_path);
            println!("  Size: {:.2} MB", report.size_mb());
        }
        Err(e) => {
            tracing::error!("❌ Download failed: {}", e);
            eprintln!("✗ Error downloading CSV: {}", e);
            if let FetchError::StatusError { status, body } = &e {
                eprintln!("  Status code: {}", status);
                eprintln!("  Response: {}", body);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

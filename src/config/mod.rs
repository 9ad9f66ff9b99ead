pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pets-fetch")]
#[command(about = "Download the latest pets CSV from the distributor API")]
pub struct CliConfig {
    /// Base URL of the distributor API
    #[arg(
        long,
        env = "PETS_API_BASE_URL",
        default_value = "https://petfinder-database-distributor.onrender.com"
    )]
    pub base_url: String,

    /// API key sent as the X-API-Key request header
    #[arg(long, env = "PETS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Where the downloaded CSV is written (existing content is replaced)
    #[arg(long, env = "PETS_OUTPUT_PATH", default_value = "./pets.csv")]
    pub output_path: String,

    /// Abort the request after this many seconds; unset means no timeout
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(secs) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", secs, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::try_parse_from(["pets-fetch", "--api-key", "test-key"]).unwrap();

        assert_eq!(
            config.base_url,
            "https://petfinder-database-distributor.onrender.com"
        );
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.output_path, "./pets.csv");
        assert_eq!(config.timeout_seconds, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_cli_requires_api_key() {
        assert!(CliConfig::try_parse_from(["pets-fetch"]).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CliConfig::try_parse_from(["pets-fetch", "--api-key", "k"]).unwrap();
        assert!(config.validate().is_ok());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.com".to_string();
        config.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }
}

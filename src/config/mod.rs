use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hh-harvest")]
#[command(about = "Fetch, filter and export job vacancies from the hh.ru search API")]
pub struct CliConfig {
    /// Base URL of the vacancy API.
    #[arg(long, default_value = "https://api.hh.ru")]
    pub base_url: String,

    /// Free-text search query sent to the API.
    #[arg(long, default_value = "python")]
    pub query: String,

    /// Area id to search; with --all-regions this is the root of the region
    /// tree to walk.
    #[arg(long, default_value = "113")]
    pub area: String,

    /// Walk every leaf region under --area instead of searching it directly.
    #[arg(long)]
    pub all_regions: bool,

    /// Page size requested from the API (the service caps this at 100).
    #[arg(long, default_value = "100")]
    pub per_page: u32,

    /// Pause between page requests, in milliseconds.
    #[arg(long, default_value = "500")]
    pub page_delay_ms: u64,

    /// Where the resume cursor is kept. Delete the file to restart from
    /// scratch.
    #[arg(long, default_value = "progress.json")]
    pub progress_file: PathBuf,

    /// Directory for CSV exports.
    #[arg(long, default_value = "./output")]
    pub output_path: PathBuf,

    /// Export to CSV even in single-region mode (default there is console
    /// output; --all-regions always exports CSV).
    #[arg(long)]
    pub csv: bool,

    /// Optional TOML file overriding the default relevance policy.
    #[arg(long)]
    pub policy: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("query", &self.query)?;
        validate_non_empty_string("area", &self.area)?;
        validate_range("per_page", self.per_page, 1, 100)?;
        validate_path("progress_file", &self.progress_file.to_string_lossy())?;
        validate_path("output_path", &self.output_path.to_string_lossy())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig::parse_from(["hh-harvest"])
    }

    #[test]
    fn defaults_are_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_oversized_page() {
        let mut config = config();
        config.per_page = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_base_url() {
        let mut config = config();
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}

pub mod local;

use crate::core::providers::{headhunter, superjob};
use crate::utils::error::{AggError, Result};
use crate::utils::validation::{validate_keyword, validate_positive_number, validate_url, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderSelection {
    Headhunter,
    Superjob,
    Both,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "job-aggregator")]
#[command(about = "Aggregates job vacancies from HeadHunter and Superjob into a local store")]
pub struct CliConfig {
    /// Search keyword, e.g. "Python"
    pub keyword: String,

    /// Number of result pages to fetch per provider
    #[arg(long, default_value = "1")]
    pub pages: u32,

    #[arg(long, value_enum, default_value = "both")]
    pub provider: ProviderSelection,

    /// Directory holding one JSON file per search keyword
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = headhunter::DEFAULT_BASE_URL)]
    pub hh_base_url: String,

    #[arg(long, default_value = superjob::DEFAULT_BASE_URL)]
    pub sj_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Superjob requires an application key, taken from the environment
    /// rather than the command line.
    pub fn superjob_api_key(&self) -> Result<String> {
        std::env::var("SJ_API_KEY").map_err(|_| AggError::Config {
            message: "SJ_API_KEY environment variable is not set".to_string(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_keyword("keyword", &self.keyword)?;
        validate_positive_number("pages", self.pages, 1)?;
        validate_url("hh_base_url", &self.hh_base_url)?;
        validate_url("sj_base_url", &self.sj_base_url)?;
        Ok(())
    }
}

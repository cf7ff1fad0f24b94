use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "measurable-client")]
#[command(about = "Query the measurable endpoints of a waltz-style API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8443/api")]
    pub base_api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// List every measurable
    All,
    /// Fetch a single measurable by id
    Id { id: i64 },
    /// Fetch measurables by external id
    ExternalId { ext_id: String },
    /// Server-side relevance search
    Search { query: String },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_api_url", &self.base_api_url)
    }
}

impl ConfigProvider for CliConfig {
    fn base_api_url(&self) -> &str {
        &self.base_api_url
    }
}

use clap::Parser;
use measurable_client::utils::{logger, validation::Validate};
use measurable_client::{CliConfig, ConfigProvider, HttpTransport, MeasurableClient, Operation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting measurable-client CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = MeasurableClient::new(HttpTransport::new(), config.base_api_url());

    let output = match &config.operation {
        Operation::All => client.find_all().await.map(|m| to_pretty_json(&m)),
        Operation::Id { id } => client.get_by_id(*id).await.map(|m| to_pretty_json(&m)),
        Operation::ExternalId { ext_id } => client
            .find_by_external_id(ext_id)
            .await
            .map(|m| to_pretty_json(&m)),
        Operation::Search { query } => client.search(query).await.map(|m| to_pretty_json(&m)),
    };

    match output {
        Ok(json) => {
            println!("{}", json);
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unprintable>".to_string())
}

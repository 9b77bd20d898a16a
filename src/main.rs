use anyhow::Context;
use holocron_lib::modules::people::SwapiConfig;
use holocron_lib::shared::utils::init_logger;

// Single thread: the fetches are multiplexed, not parallel
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = SwapiConfig::from_env().context("Invalid SWAPI configuration")?;
    log::info!(
        "Aggregating {} with {} style",
        config.root_url(),
        config.style
    );

    let info = holocron_lib::fetch_aggregate(config)
        .await
        .context("Failed to aggregate person info")?;

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

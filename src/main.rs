use std::sync::Arc;

use anyhow::{bail, Context, Result};
use config_manager::SystemConfig;
use horoscope_core::ZodiacReading;
use horoscope_orchestrator::{select_source, HoroscopeService, WalletProfiler};
use openai_client::OpenAiClient;
use serde_json::json;
use tracing::info;

const USAGE: &str = "usage: onchain_horoscope <0x-address> [--narrate]";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(address) = args.next() else {
        bail!(USAGE);
    };
    let narrate = match args.next().as_deref() {
        None => false,
        Some("--narrate") => true,
        Some(other) => bail!("unexpected argument {}\n{}", other, USAGE),
    };

    let config = SystemConfig::load().context("loading configuration")?;
    let source = select_source(&config)?;
    let profiler = WalletProfiler::from_config(source, &config);
    info!("🔭 Reading the chain stars for {}", address);

    let output = if narrate {
        let narrator = Arc::new(OpenAiClient::new(config.openai.clone())?);
        let service = HoroscopeService::new(profiler, narrator, None);
        let result = service.generate(&address).await?;
        json!({
            "profile": result.profile,
            "reading": result.reading,
            "horoscope": result.horoscope,
        })
    } else {
        let profile = profiler.profile_wallet(&address).await?;
        let reading = ZodiacReading::from_profile(&profile);
        json!({ "profile": profile, "reading": reading })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

use bera_project::client::BeraClient;
use bera_project::config::BeraConfig;
use bera_project::menu;
use bera_project::orchestrator::Orchestrator;
use bera_project::services::{CaptchaSolver, ClaimServices, FaucetClient};

use anyhow::{Context, Result};
use clap::Parser;
use core_logic::{setup_logger, ProxyManager, WalletManager};
use dotenv::dotenv;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "chains/berachain/config.toml")]
    config: String,
    /// Write each finished batch report to this JSON file
    #[arg(short, long)]
    export_report: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = setup_logger();
    dotenv().ok();

    let args = Args::parse();
    info!("Loading config from: {}", args.config);

    let config = BeraConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config))?;

    info!(
        "Configuration loaded for {} (chain ID {})",
        config.chain.name, config.chain.chain_id
    );

    let wallets = WalletManager::from_file(&config.files.wallets)?;
    info!("Found {} wallets.", wallets.count());

    let proxies = ProxyManager::load_proxies(&config.files.proxies)?;

    if config.captcha.api_key.trim().is_empty() {
        warn!("Captcha API key is empty. Faucet claims will fail until BERA__CAPTCHA__API_KEY is set.");
    }

    let client = BeraClient::connect(&config)?;
    let claim = ClaimServices {
        captcha: CaptchaSolver::new(config.captcha.clone())?,
        faucet: FaucetClient::new(config.faucet.clone()),
    };
    let orchestrator = Orchestrator::new(client, claim, wallets, proxies, &config);

    menu::run_menu(&orchestrator, args.export_report.as_deref()).await
}

//! Inventory Dashboard
//!
//! Interactive terminal view of the inventory API. Reads commands from stdin:
//! `+ <id>`, `- <id>`, `r`, `q`.

use clap::Parser;
use core_config::tracing::{init_cli_tracing, install_color_eyre};
use eyre::Result;
use inventory_dashboard::{render_once, Dashboard, InventoryClient};
use std::io::IsTerminal;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "inventory-dashboard")]
#[command(about = "Terminal dashboard for the inventory API")]
struct Cli {
    /// Base URL of the inventory API
    #[arg(long, env = "INVENTORY_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    /// Load the product list once, print it and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_cli_tracing();

    let cli = Cli::parse();
    let client = InventoryClient::new(&cli.api_url)?;
    info!("Using inventory API at {}", client.base_url());

    if cli.once {
        print!("{}", render_once(&client).await);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut dashboard = Dashboard::new(client, stdout.lock(), clear_screen);
    dashboard.run(BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}

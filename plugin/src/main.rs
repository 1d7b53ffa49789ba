mod bus;
mod config;
mod connectivity;
mod dialog;
mod display;
mod error;
mod gui;
mod plugin;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bus::BusConnection;
use crate::config::Config;
use crate::connectivity::TcpProbe;
use crate::plugin::GuiNetworkClient;

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gui_network_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    let url = config.bus_url();

    loop {
        match BusConnection::connect(&url).await {
            Ok(mut conn) => {
                tracing::info!("connected to message bus at {}", url);
                let (mut plugin, mut deferred_rx) =
                    GuiNetworkClient::new(conn.handle(), config.clone(), TcpProbe);
                plugin.run(&mut conn, &mut deferred_rx).await;
                tracing::warn!("message bus connection closed");
            }
            Err(e) => {
                tracing::warn!("failed to connect to message bus at {}: {}", url, e);
            }
        }
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

use std::path::PathBuf;

/// Plugin configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Host of the platform message bus
    pub bus_host: String,
    /// Port of the platform message bus
    pub bus_port: u16,
    /// WebSocket route of the message bus
    pub bus_route: String,
    /// Language used for spoken dialogs
    pub lang: String,
    /// Directory holding per-language dialog files
    pub locale_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bus_host: std::env::var("OVOS_BUS_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            bus_port: std::env::var("OVOS_BUS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8181),
            bus_route: std::env::var("OVOS_BUS_ROUTE").unwrap_or_else(|_| "/core".into()),
            lang: std::env::var("OVOS_LANG").unwrap_or_else(|_| "en-us".into()),
            locale_dir: std::env::var("OVOS_LOCALE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locale")),
        }
    }

    pub fn bus_url(&self) -> String {
        format!("ws://{}:{}{}", self.bus_host, self.bus_port, self.bus_route)
    }
}

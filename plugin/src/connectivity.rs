use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

const PROBE_ADDR: &str = "8.8.8.8:53";
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Answers "does this device currently have network access".
pub trait ConnectivityCheck {
    fn is_connected(&self) -> impl Future<Output = bool> + Send;
}

/// Best-effort TCP reachability probe. A failed or timed-out probe reads as
/// "not connected"; the two cases are not distinguished.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

impl ConnectivityCheck for TcpProbe {
    async fn is_connected(&self) -> bool {
        matches!(
            timeout(PROBE_TIMEOUT, TcpStream::connect(PROBE_ADDR)).await,
            Ok(Ok(_))
        )
    }
}

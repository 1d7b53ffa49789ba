use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::PluginError;

/// A message on the platform bus: `{"type": ..., "data": {...}, "context": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    #[serde(default = "empty_object")]
    pub data: serde_json::Value,
    #[serde(default = "empty_object")]
    pub context: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl BusMessage {
    pub fn new(msg_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            msg_type: msg_type.into(),
            data,
            context: empty_object(),
        }
    }

    /// Build a reply to this message, carrying its context forward.
    pub fn reply(&self, msg_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            msg_type: msg_type.into(),
            data,
            context: self.context.clone(),
        }
    }
}

/// Cloneable sender half of the bus connection
#[derive(Debug, Clone)]
pub struct BusHandle {
    tx: mpsc::UnboundedSender<BusMessage>,
}

impl BusHandle {
    pub fn new(tx: mpsc::UnboundedSender<BusMessage>) -> Self {
        Self { tx }
    }

    pub fn emit(&self, msg: BusMessage) {
        if self.tx.send(msg).is_err() {
            tracing::warn!("bus writer gone, message dropped");
        }
    }
}

/// WebSocket client connection to the platform message bus.
///
/// Outbound messages flow through an unbounded channel drained by a spawned
/// writer task; inbound messages are read sequentially by the owner, so
/// handlers run one at a time.
pub struct BusConnection {
    handle: BusHandle,
    reader: futures_util::stream::SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>,
    writer_task: JoinHandle<()>,
}

impl BusConnection {
    pub async fn connect(url: &str) -> Result<Self, PluginError> {
        let (socket, _) = connect_async(url).await?;
        let (mut sender, reader) = socket.split();

        let (tx, mut rx) = mpsc::unbounded_channel::<BusMessage>();

        let writer_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                let json = serde_json::to_string(&msg).unwrap_or_default();
                if sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            handle: BusHandle::new(tx),
            reader,
            writer_task,
        })
    }

    pub fn handle(&self) -> BusHandle {
        self.handle.clone()
    }

    /// Next parsed bus message, or `None` once the connection is gone.
    ///
    /// Malformed frames are logged and skipped, not surfaced.
    pub async fn next_message(&mut self) -> Option<BusMessage> {
        while let Some(Ok(msg)) = self.reader.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<BusMessage>(&text) {
                    Ok(bus_msg) => return Some(bus_msg),
                    Err(e) => {
                        tracing::warn!("Invalid bus message: {}", e);
                    }
                },
                Message::Close(_) => return None,
                _ => {}
            }
        }
        None
    }
}

impl Drop for BusConnection {
    fn drop(&mut self) {
        self.writer_task.abort();
    }
}

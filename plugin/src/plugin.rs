use std::time::Duration;

use tokio::sync::mpsc;

use crate::bus::{BusConnection, BusHandle, BusMessage};
use crate::config::Config;
use crate::connectivity::ConnectivityCheck;
use crate::dialog;
use crate::display::{page_spec, DisplayState, PageType};
use crate::error::PluginError;
use crate::gui::GuiInterface;

/// Identifier this plugin registers with as active GUI client
pub const PLUGIN_ID: &str = "ovos-PHAL-plugin-gui-network-client";

/// QML loader page every screen is rendered through
pub const LOADER_PAGE: &str = "ui/GuiClientLoader.qml";

/// How long status screens stay up before the follow-up transition
const STATUS_PAUSE: Duration = Duration::from_secs(5);

/// Bus event names this plugin consumes and emits
pub mod events {
    pub const ACTIVATE: &str = "ovos.phal.nm.activate.gui.client";
    pub const IS_CONNECTED: &str = "ovos.phal.nm.is.connected";
    pub const IS_CONNECTED_RESPONSE: &str = "ovos.phal.nm.is.connected.response";
    pub const CONNECTION_SUCCESSFUL: &str = "ovos.phal.nm.connection.successful";
    pub const CONNECTION_FAILURE: &str = "ovos.phal.nm.connection.failure";
    pub const MODE_SELECTOR: &str = "ovos.phal.nm.client.mode.selector";
    pub const CLIENT_BACK: &str = "ovos.phal.gui.network.client.back";

    pub const SET_ACTIVE_CLIENT: &str = "ovos.phal.nm.set.active.client";
    pub const REMOVE_ACTIVE_CLIENT: &str = "ovos.phal.nm.remove.active.client";
    pub const DISPLAY_MODE_SELECT: &str = "ovos.phal.nm.display.mode.select";
}

/// Follow-up transitions that fire after a status screen's pause.
///
/// Handlers never block on the pause; they schedule one of these and return,
/// so the bus loop keeps draining events. A transition still pending at
/// shutdown is simply lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Success screen done: drop ownership and release the display
    FinishSuccess,
    /// Failure screen done: re-prompt with the network selector
    ReshowNetworkSelect,
}

/// The display state dispatcher.
///
/// Maps network-manager bus events to GUI screens. All handlers run
/// sequentially on the bus loop; the only mutable state is the active flag.
pub struct GuiNetworkClient<C> {
    bus: BusHandle,
    gui: GuiInterface,
    config: Config,
    probe: C,
    deferred_tx: mpsc::UnboundedSender<Deferred>,
    client_active: bool,
}

impl<C: ConnectivityCheck> GuiNetworkClient<C> {
    pub fn new(bus: BusHandle, config: Config, probe: C) -> (Self, mpsc::UnboundedReceiver<Deferred>) {
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();
        let gui = GuiInterface::new(PLUGIN_ID, bus.clone());
        (
            Self {
                bus,
                gui,
                config,
                probe,
                deferred_tx,
                client_active: false,
            },
            deferred_rx,
        )
    }

    pub fn client_active(&self) -> bool {
        self.client_active
    }

    /// Drive the plugin until the bus connection closes.
    pub async fn run(
        &mut self,
        conn: &mut BusConnection,
        deferred_rx: &mut mpsc::UnboundedReceiver<Deferred>,
    ) {
        loop {
            tokio::select! {
                msg = conn.next_message() => match msg {
                    Some(msg) => {
                        if let Err(e) = self.handle_message(&msg).await {
                            tracing::error!("handler for {} failed: {}", msg.msg_type, e);
                        }
                    }
                    None => break,
                },
                Some(deferred) = deferred_rx.recv() => self.handle_deferred(deferred),
            }
        }
    }

    pub async fn handle_message(&mut self, msg: &BusMessage) -> Result<(), PluginError> {
        match msg.msg_type.as_str() {
            events::ACTIVATE => self.handle_activate(),
            events::IS_CONNECTED => self.handle_is_connected(msg).await,
            events::CONNECTION_SUCCESSFUL => self.display_success(),
            events::CONNECTION_FAILURE => self.display_failure(msg)?,
            events::MODE_SELECTOR => self.display_mode_select(),
            events::CLIENT_BACK => self.display_path_exit().await,
            other => tracing::trace!("ignoring bus message: {}", other),
        }
        Ok(())
    }

    pub fn handle_deferred(&mut self, deferred: Deferred) {
        match deferred {
            Deferred::FinishSuccess => {
                self.client_active = false;
                self.bus
                    .emit(BusMessage::new(events::REMOVE_ACTIVE_CLIENT, serde_json::json!({})));
                self.gui.release();
            }
            Deferred::ReshowNetworkSelect => self.display_network_setup(),
        }
    }

    pub fn handle_activate(&mut self) {
        self.client_active = true;
        self.bus.emit(BusMessage::new(
            events::SET_ACTIVE_CLIENT,
            serde_json::json!({ "client": PLUGIN_ID }),
        ));
        self.display_network_setup();
        tracing::info!("Gui Network Client Plugin Activated");
    }

    async fn handle_is_connected(&mut self, msg: &BusMessage) {
        let connected = self.probe.is_connected().await;
        self.bus.emit(msg.reply(
            events::IS_CONNECTED_RESPONSE,
            serde_json::json!({ "connected": connected }),
        ));
    }

    /// Show the networking-mode choices for the user to pick from
    pub fn display_mode_select(&self) {
        self.manage_setup_display(DisplayState::ModeSelect, PageType::ModeSelector);
    }

    pub fn display_network_setup(&self) {
        self.manage_setup_display(DisplayState::NetworkSelect, PageType::NetworkSelect);
    }

    pub async fn display_path_exit(&mut self) {
        self.client_active = false;
        self.bus
            .emit(BusMessage::new(events::REMOVE_ACTIVE_CLIENT, serde_json::json!({})));

        if !self.probe.is_connected().await {
            self.bus
                .emit(BusMessage::new(events::DISPLAY_MODE_SELECT, serde_json::json!({})));
        } else {
            self.gui.release();
        }
    }

    pub fn display_success(&mut self) {
        self.manage_setup_display(DisplayState::Success, PageType::Status);
        self.schedule(Deferred::FinishSuccess);
    }

    /// Wifi setup failed
    pub fn display_failure(&mut self, msg: &BusMessage) -> Result<(), PluginError> {
        let error_code = msg
            .data
            .get("errorCode")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        if error_code == "0" {
            self.display_failed_password()
        } else {
            self.manage_setup_display(DisplayState::Failure, PageType::Status);
            self.speak_dialog("debug_wifi_error")?;
            self.schedule(Deferred::ReshowNetworkSelect);
            Ok(())
        }
    }

    fn display_failed_password(&mut self) -> Result<(), PluginError> {
        self.manage_setup_display(DisplayState::FailurePassword, PageType::Status);
        self.speak_dialog("debug_wifi_error")?;
        self.schedule(Deferred::ReshowNetworkSelect);
        Ok(())
    }

    /// Resolve and show the page for a (state, page_type) pair.
    ///
    /// Pairs outside the five documented ones clear the display and show
    /// nothing. Inherited no-op behavior, kept as is.
    pub fn manage_setup_display(&self, state: DisplayState, page_type: PageType) {
        self.gui.clear();
        if let Some(spec) = page_spec(state, page_type) {
            self.gui.set_page_values(&spec);
            self.gui.show_page(LOADER_PAGE, spec.override_idle, true);
        }
    }

    fn speak_dialog(&self, key: &str) -> Result<(), PluginError> {
        dialog::speak_dialog(&self.bus, &self.config, PLUGIN_ID, key)
    }

    fn schedule(&self, deferred: Deferred) {
        let tx = self.deferred_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(STATUS_PAUSE).await;
            let _ = tx.send(deferred);
        });
    }
}

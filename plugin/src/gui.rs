use serde_json::json;

use crate::bus::{BusHandle, BusMessage};
use crate::display::PageSpec;

/// Binding to the shared on-screen display, driven over the message bus.
///
/// The rendering side is owned by the host; this type only speaks the GUI
/// namespace protocol (property sink, show, clear, release).
pub struct GuiInterface {
    skill_id: String,
    bus: BusHandle,
}

impl GuiInterface {
    pub fn new(skill_id: impl Into<String>, bus: BusHandle) -> Self {
        Self {
            skill_id: skill_id.into(),
            bus,
        }
    }

    /// Push the page descriptor's properties into the session namespace.
    pub fn set_page_values(&self, spec: &PageSpec) {
        self.bus.emit(BusMessage::new(
            "gui.value.set",
            json!({
                "__from": self.skill_id,
                "page_type": spec.page_type,
                "image": spec.image,
                "label": spec.label,
                "color": spec.color,
            }),
        ));
    }

    pub fn show_page(&self, page: &str, override_idle: bool, override_animations: bool) {
        self.bus.emit(BusMessage::new(
            "gui.page.show",
            json!({
                "__from": self.skill_id,
                "page": [page],
                "index": 0,
                "__idle": override_idle,
                "__animations": override_animations,
            }),
        ));
    }

    pub fn clear(&self) {
        self.bus.emit(BusMessage::new(
            "gui.clear.namespace",
            json!({ "__from": self.skill_id }),
        ));
    }

    /// Give up ownership of the display.
    pub fn release(&self) {
        self.bus.emit(BusMessage::new(
            "mycroft.gui.screen.close",
            json!({ "skill_id": self.skill_id }),
        ));
    }
}

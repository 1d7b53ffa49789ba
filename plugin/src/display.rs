/// The screens this plugin can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    NetworkSelect,
    ModeSelect,
    Success,
    Failure,
    FailurePassword,
}

/// Which loader slot a screen is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    NetworkSelect,
    Status,
    ModeSelector,
}

/// Static page descriptor handed whole to the GUI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub page_type: &'static str,
    pub image: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub override_idle: bool,
}

/// Resolve the page descriptor for a (state, page_type) pair.
///
/// Only the five documented pairs resolve; anything else is a no-op for the
/// caller. That silent drop is inherited behavior, not a validated fallback.
pub fn page_spec(state: DisplayState, page_type: PageType) -> Option<PageSpec> {
    match (state, page_type) {
        (DisplayState::NetworkSelect, PageType::NetworkSelect) => Some(PageSpec {
            page_type: "NetworkingLoader",
            image: "",
            label: "",
            color: "",
            override_idle: true,
        }),
        (DisplayState::Success, PageType::Status) => Some(PageSpec {
            page_type: "Status",
            image: "icons/check-circle.svg",
            label: "Connected",
            color: "#40DBB0",
            override_idle: false,
        }),
        (DisplayState::Failure, PageType::Status) => Some(PageSpec {
            page_type: "Status",
            image: "icons/times-circle.svg",
            label: "Connection Failed",
            color: "#FF0000",
            override_idle: false,
        }),
        (DisplayState::FailurePassword, PageType::Status) => Some(PageSpec {
            page_type: "Status",
            image: "icons/times-circle.svg",
            label: "Incorrect Password",
            color: "#FF0000",
            override_idle: false,
        }),
        (DisplayState::ModeSelect, PageType::ModeSelector) => Some(PageSpec {
            page_type: "ModeChoose",
            image: "",
            label: "",
            color: "",
            override_idle: true,
        }),
        _ => None,
    }
}

//! Navigation controller: translates toolbar and keyboard intents into
//! engine commands targeted at the current tab.
//!
//! Pure command dispatch; no retries, no timeouts, no queuing. Every
//! handler is a no-op (`None`) when there is no current tab, so the shell
//! can wire callbacks without guarding each one.

use crate::managers::tab_manager::{TabManager, TabManagerTrait};

/// A command for the embedded engine view of the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Load(String),
    Back,
    Forward,
    Reload,
}

/// Dispatches user navigation intents against the active tab.
pub struct NavigationController {
    home_url: String,
}

impl NavigationController {
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            home_url: home_url.into(),
        }
    }

    pub fn go_back(&self, tabs: &TabManager) -> Option<NavCommand> {
        tabs.current_tab().map(|_| NavCommand::Back)
    }

    pub fn go_forward(&self, tabs: &TabManager) -> Option<NavCommand> {
        tabs.current_tab().map(|_| NavCommand::Forward)
    }

    pub fn reload_current(&self, tabs: &TabManager) -> Option<NavCommand> {
        tabs.current_tab().map(|_| NavCommand::Reload)
    }

    /// Load the local homepage into the current tab.
    pub fn go_home(&self, tabs: &TabManager) -> Option<NavCommand> {
        tabs.current_tab()
            .map(|_| NavCommand::Load(self.home_url.clone()))
    }

    /// Navigate the current tab to the typed address.
    pub fn submit_address(&self, tabs: &TabManager, text: &str) -> Option<NavCommand> {
        tabs.current_tab()?;
        Some(NavCommand::Load(normalize_address(text)))
    }
}

/// Best-effort normalization of a typed address.
///
/// Trims surrounding whitespace and prepends `https://` when no
/// recognized scheme is present. No host validation and no non-HTTP
/// schemes; malformed input produces a request whose failure the engine
/// renders itself.
pub fn normalize_address(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

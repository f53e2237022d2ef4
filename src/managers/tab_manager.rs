use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{display_title, NewTabTarget, Tab, DEFAULT_TITLE};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn open_tab(&mut self, target: NewTabTarget) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn close_active_tab(&mut self) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn current_tab(&self) -> Option<&Tab>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
    fn address_bar(&self) -> &str;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// In-memory tab manager for the browser shell.
///
/// Owns the ordered tab collection and the active-tab id, and keeps the
/// address-bar string synchronized with whichever tab is active. All
/// mutation happens on the UI event-loop thread; there is no locking here.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    address_bar: String,
    home_url: String,
    new_tab_url: String,
}

impl TabManager {
    /// `home_url` is the homepage file URL, `new_tab_url` the fixed
    /// external destination for non-home tabs.
    pub fn new(home_url: impl Into<String>, new_tab_url: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            address_bar: String::new(),
            home_url: home_url.into(),
            new_tab_url: new_tab_url.into(),
        }
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// Point the address bar at the active tab's URL.
    fn sync_address_bar(&mut self) {
        self.address_bar = self
            .current_tab()
            .map(|t| t.url.clone())
            .unwrap_or_default();
    }
}

impl TabManagerTrait for TabManager {
    /// Open a new tab at the given target and make it active.
    /// Returns the new tab's ID.
    fn open_tab(&mut self, target: NewTabTarget) -> String {
        let url = match target {
            NewTabTarget::Home => self.home_url.clone(),
            NewTabTarget::DefaultSearchPage => self.new_tab_url.clone(),
        };
        let id = Uuid::new_v4().to_string();
        self.tabs.push(Tab {
            id: id.clone(),
            url,
            title: DEFAULT_TITLE.to_string(),
            created_at: Self::now(),
        });
        self.active_tab_id = Some(id.clone());
        self.sync_address_bar();
        id
    }

    /// Close a tab. Refuses to close the last remaining tab so the
    /// collection never becomes empty. If the closed tab was active, the
    /// nearest neighbor in order becomes active and the address bar
    /// resyncs to it.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }

        let was_active = self.active_tab_id.as_deref() == Some(tab_id);
        self.tabs.remove(idx);

        if was_active {
            let neighbor = idx.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[neighbor].id.clone());
            self.sync_address_bar();
        }
        Ok(())
    }

    fn close_active_tab(&mut self) -> Result<(), TabError> {
        let id = self
            .active_tab_id
            .clone()
            .ok_or_else(|| TabError::NotFound(String::new()))?;
        self.close_tab(&id)
    }

    /// Switch the active tab and resync the address bar.
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        self.sync_address_bar();
        Ok(())
    }

    fn current_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| &t.id == id))
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn address_bar(&self) -> &str {
        &self.address_bar
    }

    /// Record an engine-reported URL change. Only the active tab's
    /// changes reach the address bar; background tabs update silently.
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.url = url.to_string();
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.address_bar = url.to_string();
        }
        Ok(())
    }

    /// Record an engine-reported title change, truncated for display.
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.title = display_title(title);
        Ok(())
    }
}

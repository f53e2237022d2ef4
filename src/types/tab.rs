use serde::{Deserialize, Serialize};

/// Display titles are cut to this many characters before showing them
/// in the tab strip.
pub const TITLE_MAX_CHARS: usize = 18;

/// Placeholder label used until the engine reports a title.
pub const DEFAULT_TITLE: &str = "New Tab";

/// Represents one open browsing context with its current state.
///
/// The URL and title are mirrors of what the embedded engine last
/// reported; the engine itself owns the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}

/// Destination for a newly opened tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTabTarget {
    /// The local homepage document, loaded as a file URL.
    Home,
    /// The fixed default search page.
    DefaultSearchPage,
}

/// Truncate a page title for display in the tab strip.
///
/// Char-based so multibyte titles never get split mid-character.
/// An empty result falls back to the placeholder.
pub fn display_title(raw: &str) -> String {
    let truncated: String = raw.chars().take(TITLE_MAX_CHARS).collect();
    if truncated.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        truncated
    }
}

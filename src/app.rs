//! App core for TabShell.
//!
//! Central struct holding the shell's components, created once at process
//! start and torn down at exit.

use crate::config::Config;
use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::navigation::NavigationController;
use crate::types::errors::ConfigError;
use crate::types::tab::NewTabTarget;

/// Process-wide application context.
pub struct App {
    pub config: Config,
    pub tab_manager: TabManager,
    pub navigation: NavigationController,
    pub shortcut_manager: ShortcutManager,
}

impl App {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let home_url = config.homepage_url()?;
        let tab_manager = TabManager::new(home_url.clone(), config.new_tab_url.clone());
        let navigation = NavigationController::new(home_url);
        let shortcut_manager = ShortcutManager::new();

        Ok(Self {
            config,
            tab_manager,
            navigation,
            shortcut_manager,
        })
    }

    /// Startup sequence: open the initial tab pointed at the homepage.
    pub fn startup(&mut self) {
        let id = self.tab_manager.open_tab(NewTabTarget::Home);
        log::info!(
            "opened initial tab {} at {}",
            id,
            self.tab_manager.address_bar()
        );
    }
}

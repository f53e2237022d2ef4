//! TabShell — a minimal multi-tab desktop web browser shell.
//!
//! Entry point: opens a single window with a toolbar-injected WebView and
//! one initial tab loading the local homepage. When built without the
//! `gui` feature, runs a console demo exercising the core components.

#[cfg(feature = "gui")]
fn main() {
    env_logger::init();
    tabshell::ui::shell::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    env_logger::init();

    println!();
    println!("TabShell v{} — demo mode (no gui feature)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_tabs();
    demo_navigation();
    demo_shortcuts();
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("── {} ──", name);
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    use tabshell::app::App;
    use tabshell::config::Config;
    use tabshell::managers::tab_manager::TabManagerTrait;
    use tabshell::types::tab::NewTabTarget;

    section("Tabs");
    let mut app = App::new(Config::default()).expect("Failed to initialize TabShell");
    app.startup();
    println!("  initial tab: {}", app.tab_manager.address_bar());

    let id = app.tab_manager.open_tab(NewTabTarget::DefaultSearchPage);
    println!("  opened tab {} at {}", &id[..8], app.tab_manager.address_bar());

    let _ = app.tab_manager.close_tab(&id);
    println!("  closed it, {} tab(s) remain", app.tab_manager.tab_count());

    // Closing the sole remaining tab is a no-op
    let last = app.tab_manager.current_tab().unwrap().id.clone();
    let refused = app.tab_manager.close_tab(&last).is_err();
    println!("  last-tab close refused: {}", refused);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_navigation() {
    use tabshell::navigation::normalize_address;

    section("Navigation");
    println!("  example.com        -> {}", normalize_address("example.com"));
    println!("  http://example.com -> {}", normalize_address("http://example.com"));
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_shortcuts() {
    use tabshell::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};

    section("Shortcuts");
    let mgr = ShortcutManager::new();
    println!("  new_tab   = {:?}", mgr.get_shortcut("new_tab"));
    println!("  close_tab = {:?}", mgr.get_shortcut("close_tab"));
    println!("  {} bindings total", mgr.list_shortcuts().len());
}

//! WebView-based browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - A single window hosts one WebView; the tab collection lives in
//!   `TabManager` and switching tabs loads the active tab's URL.
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar on every
//!   page: back/forward/reload/home buttons, the URL field, and the tab
//!   strip with a new-tab button.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; engine events
//!   (url-changed, title-changed) arrive the same way, observed by the
//!   injected script.
//! - Back/forward/reload are issued through the page's own session
//!   history (`history.back()` etc.), so they always act on the page the
//!   active tab is showing.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::config::Config;
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::managers::tab_manager::TabManagerTrait;
use crate::navigation::NavCommand;
use crate::types::tab::NewTabTarget;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    /// Open a popup/new-window request as a fresh tab.
    OpenInNewTab(String),
}

struct ShellState {
    app: App,
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

// ─── IPC handler ───

fn handle_ipc(state: &mut ShellState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => {
            // Toolbar just loaded on a page, send it the current tabs state
            Some(UserEvent::EvalScript(build_tabs_update(state)))
        }

        "back" => {
            let cmd = state.app.navigation.go_back(&state.app.tab_manager);
            cmd.map(command_to_event)
        }

        "forward" => {
            let cmd = state.app.navigation.go_forward(&state.app.tab_manager);
            cmd.map(command_to_event)
        }

        "reload" => {
            let cmd = state.app.navigation.reload_current(&state.app.tab_manager);
            cmd.map(command_to_event)
        }

        "home" => {
            let cmd = state.app.navigation.go_home(&state.app.tab_manager);
            if let Some(NavCommand::Load(url)) = &cmd {
                if let Some(tab) = state.app.tab_manager.current_tab() {
                    let tid = tab.id.clone();
                    let _ = state.app.tab_manager.update_tab_url(&tid, url);
                }
            }
            cmd.map(command_to_event)
        }

        "navigate" => {
            let input = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let cmd = state
                .app
                .navigation
                .submit_address(&state.app.tab_manager, input);
            if let Some(NavCommand::Load(url)) = &cmd {
                if let Some(tab) = state.app.tab_manager.current_tab() {
                    let tid = tab.id.clone();
                    let _ = state.app.tab_manager.update_tab_url(&tid, url);
                }
            }
            cmd.map(command_to_event)
        }

        "new_tab" => {
            let home = msg.get("home").and_then(|v| v.as_bool()).unwrap_or(false);
            let target = if home {
                NewTabTarget::Home
            } else {
                NewTabTarget::DefaultSearchPage
            };
            state.app.tab_manager.open_tab(target);
            navigate_to_active(state)
        }

        "close_tab" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                // Closing the last remaining tab is a silent no-op
                let _ = state.app.tab_manager.close_tab(id);
            }
            navigate_to_active(state)
        }

        "close_active_tab" => {
            let _ = state.app.tab_manager.close_active_tab();
            navigate_to_active(state)
        }

        "switch_tab" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                let _ = state.app.tab_manager.switch_tab(id);
            }
            navigate_to_active(state)
        }

        "url_changed" => {
            // The reporting page is always the one shown in the active tab
            if let Some(url) = msg.get("url").and_then(|v| v.as_str()) {
                if let Some(tab) = state.app.tab_manager.current_tab() {
                    let tid = tab.id.clone();
                    let _ = state.app.tab_manager.update_tab_url(&tid, url);
                }
            }
            Some(UserEvent::EvalScript(build_tabs_update(state)))
        }

        "title_changed" => {
            if let Some(title) = msg.get("title").and_then(|v| v.as_str()) {
                if let Some(tab) = state.app.tab_manager.current_tab() {
                    let tid = tab.id.clone();
                    let _ = state.app.tab_manager.update_tab_title(&tid, title);
                }
            }
            Some(UserEvent::EvalScript(build_tabs_update(state)))
        }

        _ => None,
    }
}

/// Map an engine command onto the single shared WebView.
fn command_to_event(cmd: NavCommand) -> UserEvent {
    match cmd {
        NavCommand::Load(url) => UserEvent::LoadUrl(url),
        NavCommand::Back => UserEvent::EvalScript("history.back()".to_string()),
        NavCommand::Forward => UserEvent::EvalScript("history.forward()".to_string()),
        NavCommand::Reload => UserEvent::EvalScript("location.reload()".to_string()),
    }
}

fn navigate_to_active(state: &ShellState) -> Option<UserEvent> {
    let url = state
        .app
        .tab_manager
        .current_tab()
        .map(|t| t.url.clone())?;
    Some(UserEvent::LoadUrl(url))
}

fn build_tabs_update(state: &ShellState) -> String {
    let tabs: Vec<serde_json::Value> = state
        .app
        .tab_manager
        .get_all_tabs()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    let active_id = state
        .app
        .tab_manager
        .current_tab()
        .map(|t| t.id.clone())
        .unwrap_or_default();
    format!(
        "if(window.__ts_updateTabs)__ts_updateTabs({})",
        serde_json::json!({
            "tabs": tabs,
            "activeId": active_id,
            "addressBar": state.app.tab_manager.address_bar(),
        })
    )
}

// ─── Main entry point ───

pub fn run() {
    // Optional overrides from a config file in the working directory
    let config = Config::load(Some(std::path::Path::new("tabshell.json"))).unwrap_or_default();
    let mut app = App::new(config).expect("Failed to initialize TabShell");
    app.startup();

    let title = app.config.window_title.clone();
    let window_cfg = app.config.window.clone();
    let start_url = app
        .tab_manager
        .current_tab()
        .map(|t| t.url.clone())
        .expect("startup opened no tab");

    // Key bindings ride along with the injected toolbar script
    let init_script = format!(
        "window.__ts_keys={};\n{}",
        serde_json::to_string(app.shortcut_manager.list_shortcuts()).unwrap_or_default(),
        TOOLBAR_JS
    );

    let state = Arc::new(Mutex::new(ShellState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(tao::dpi::LogicalSize::new(window_cfg.width, window_cfg.height))
        .with_position(tao::dpi::LogicalPosition::new(window_cfg.x, window_cfg.y))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(init_script.as_str())
        .with_url(start_url.as_str())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            log::debug!("ipc: {}", body);
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            log::debug!("new window request: {}", url);
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::OpenInNewTab(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("window closed, exiting");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    log::debug!("load: {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::OpenInNewTab(url) => {
                    log::debug!("popup as new tab: {}", url);
                    {
                        let mut s = state.lock().unwrap();
                        let id = s.app.tab_manager.open_tab(NewTabTarget::DefaultSearchPage);
                        let _ = s.app.tab_manager.update_tab_url(&id, &url);
                    }
                    let _ = webview.load_url(&url);
                }
            },

            _ => {}
        }
    });
}

pub mod shortcut_manager;
pub mod tab_manager;

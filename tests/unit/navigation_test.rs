use rstest::rstest;

use tabshell::managers::tab_manager::{TabManager, TabManagerTrait};
use tabshell::navigation::{normalize_address, NavCommand, NavigationController};
use tabshell::types::tab::NewTabTarget;

const HOME: &str = "file:///opt/tabshell/homepage.html";
const SEARCH: &str = "https://duckduckgo.com";

fn fixture() -> (NavigationController, TabManager) {
    (NavigationController::new(HOME), TabManager::new(HOME, SEARCH))
}

// --- normalize_address ---

#[rstest]
// Recognized schemes pass through untouched (no double-prefixing)
#[case("http://example.com", "http://example.com")]
#[case("https://example.com", "https://example.com")]
#[case("https://example.com/path?q=1", "https://example.com/path?q=1")]
// Bare hosts get the https scheme
#[case("example.com", "https://example.com")]
#[case("sub.domain.co.uk/page", "https://sub.domain.co.uk/page")]
// Surrounding whitespace is trimmed first
#[case("  example.com  ", "https://example.com")]
#[case("\thttp://example.com\n", "http://example.com")]
// Best-effort: no validation of what follows the scheme
#[case("not a url", "https://not a url")]
#[case("", "https://")]
fn test_normalize_address(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_address(input), expected);
}

// --- dispatch without a current tab ---

#[test]
fn test_all_intents_are_noops_without_a_tab() {
    let (nav, tabs) = fixture();
    assert_eq!(nav.go_back(&tabs), None);
    assert_eq!(nav.go_forward(&tabs), None);
    assert_eq!(nav.reload_current(&tabs), None);
    assert_eq!(nav.go_home(&tabs), None);
    assert_eq!(nav.submit_address(&tabs, "example.com"), None);
}

// --- dispatch with an active tab ---

#[test]
fn test_history_intents_dispatch_commands() {
    let (nav, mut tabs) = fixture();
    tabs.open_tab(NewTabTarget::Home);

    assert_eq!(nav.go_back(&tabs), Some(NavCommand::Back));
    assert_eq!(nav.go_forward(&tabs), Some(NavCommand::Forward));
    assert_eq!(nav.reload_current(&tabs), Some(NavCommand::Reload));
}

#[test]
fn test_go_home_loads_homepage_url() {
    let (nav, mut tabs) = fixture();
    tabs.open_tab(NewTabTarget::DefaultSearchPage);
    assert_eq!(nav.go_home(&tabs), Some(NavCommand::Load(HOME.to_string())));
}

#[test]
fn test_submit_address_prefixes_scheme() {
    let (nav, mut tabs) = fixture();
    tabs.open_tab(NewTabTarget::Home);
    assert_eq!(
        nav.submit_address(&tabs, "example.com"),
        Some(NavCommand::Load("https://example.com".to_string()))
    );
}

#[test]
fn test_submit_address_keeps_explicit_http() {
    let (nav, mut tabs) = fixture();
    tabs.open_tab(NewTabTarget::Home);
    assert_eq!(
        nav.submit_address(&tabs, "http://example.com"),
        Some(NavCommand::Load("http://example.com".to_string()))
    );
}

#[test]
fn test_intents_target_only_the_active_tab() {
    let (nav, mut tabs) = fixture();
    let id1 = tabs.open_tab(NewTabTarget::Home);
    let id2 = tabs.open_tab(NewTabTarget::DefaultSearchPage);

    // Commands are resolved against whichever tab is active at dispatch
    tabs.switch_tab(&id1).unwrap();
    assert_eq!(tabs.current_tab().unwrap().id, id1);
    assert!(nav.reload_current(&tabs).is_some());

    tabs.switch_tab(&id2).unwrap();
    assert_eq!(tabs.current_tab().unwrap().id, id2);
    assert!(nav.reload_current(&tabs).is_some());

    // Background tab state is untouched by dispatch
    assert_eq!(tabs.get_tab(&id1).unwrap().url, HOME);
}

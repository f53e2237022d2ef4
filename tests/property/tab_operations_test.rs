//! Property-based tests for tab lifecycle operations.
//!
//! For any sequence of opens, closes, switches, and engine URL reports,
//! the collection never becomes empty once the first tab exists, the
//! active id always refers to an existing tab, and the address bar
//! mirrors the active tab's URL exactly.

use proptest::prelude::*;

use tabshell::managers::tab_manager::{TabManager, TabManagerTrait};
use tabshell::types::tab::NewTabTarget;

const HOME: &str = "file:///opt/tabshell/homepage.html";
const SEARCH: &str = "https://duckduckgo.com";

#[derive(Debug, Clone)]
enum TabOp {
    Open(bool),        // true = Home
    Close(usize),      // index into current tab list
    Switch(usize),     // index into current tab list
    UrlChange(usize, u32), // engine reports a new URL on some tab
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<bool>().prop_map(TabOp::Open),
            3 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Switch),
            2 => ((0..20usize), any::<u32>()).prop_map(|(i, n)| TabOp::UrlChange(i, n)),
        ],
        1..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn tab_collection_never_empties_and_address_bar_tracks_active(ops in arb_tab_ops()) {
        let mut mgr = TabManager::new(HOME, SEARCH);
        mgr.open_tab(NewTabTarget::Home);

        for op in &ops {
            match op {
                TabOp::Open(home) => {
                    let target = if *home { NewTabTarget::Home } else { NewTabTarget::DefaultSearchPage };
                    mgr.open_tab(target);
                }
                TabOp::Close(idx) => {
                    let ids: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
                    let id = ids[idx % ids.len()].clone();
                    // May be refused on the last tab; either way the
                    // invariants below must hold
                    let _ = mgr.close_tab(&id);
                }
                TabOp::Switch(idx) => {
                    let ids: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
                    let id = ids[idx % ids.len()].clone();
                    mgr.switch_tab(&id).unwrap();
                }
                TabOp::UrlChange(idx, n) => {
                    let ids: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
                    let id = ids[idx % ids.len()].clone();
                    mgr.update_tab_url(&id, &format!("https://example.com/{}", n)).unwrap();
                }
            }

            prop_assert!(mgr.tab_count() >= 1);
            let active = mgr.current_tab();
            prop_assert!(active.is_some());
            prop_assert_eq!(mgr.address_bar(), active.unwrap().url.as_str());
        }
    }

    #[test]
    fn close_requests_alone_never_empty_the_collection(closes in 1..40usize) {
        let mut mgr = TabManager::new(HOME, SEARCH);
        mgr.open_tab(NewTabTarget::Home);
        mgr.open_tab(NewTabTarget::DefaultSearchPage);

        for _ in 0..closes {
            let id = mgr.current_tab().unwrap().id.clone();
            let _ = mgr.close_tab(&id);
            prop_assert!(mgr.tab_count() >= 1);
        }
        // Eventually pinned at exactly one surviving tab
        prop_assert_eq!(mgr.tab_count(), 1);
    }
}

//! Property-based tests for range selection.
//!
//! Range-select between an anchor and a target selects exactly the closed
//! interval between them in current visual order, regardless of which
//! endpoint comes first, and the selection bar shows exactly when more than
//! one row is selected.

use proptest::prelude::*;

use sidetabs::panel::selection::{ClickModifiers, SelectionModel};
use sidetabs::panel::view::{ViewList, ViewNode};
use sidetabs::types::tab::{MutedInfo, Tab, TabId, WindowId};

fn view_of(len: usize) -> ViewList {
    let mut view = ViewList::new();
    for id in 0..len as i64 {
        view.push(ViewNode::for_tab(&Tab {
            id: TabId(id),
            window_id: WindowId(1),
            index: 0,
            title: Some(format!("tab {}", id)),
            url: None,
            fav_icon_url: None,
            active: false,
            audible: false,
            muted_info: MutedInfo::default(),
        }));
    }
    view.reindex();
    view
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn range_select_is_the_closed_interval(
        len in 1..16usize,
        anchor_pick in 0..16usize,
        target_pick in 0..16usize,
    ) {
        let mut view = view_of(len);
        let mut selection = SelectionModel::new();

        let anchor = TabId((anchor_pick % len) as i64);
        let target = TabId((target_pick % len) as i64);

        selection.handle_click(&mut view, anchor, ClickModifiers::ctrl());
        selection.handle_click(&mut view, target, ClickModifiers::shift());

        let ids = view.ids();
        let a = ids.iter().position(|id| *id == anchor).unwrap();
        let b = ids.iter().position(|id| *id == target).unwrap();
        let (from, to) = if a < b { (a, b) } else { (b, a) };

        let expected: Vec<TabId> = ids[from..=to].to_vec();
        prop_assert_eq!(selection.selected_in_order(&view), expected);
        prop_assert_eq!(selection.bar_visible(), to - from > 0);
        prop_assert_eq!(selection.anchor(), Some(target));
    }

    // Selection never references rows outside the view, whatever the gesture
    // sequence.
    #[test]
    fn selection_is_subset_of_view(
        len in 1..10usize,
        gestures in prop::collection::vec((0..20i64, 0..3u8), 1..40),
    ) {
        let mut view = view_of(len);
        let mut selection = SelectionModel::new();

        for (id, kind) in gestures {
            let mods = match kind {
                0 => ClickModifiers::ctrl(),
                1 => ClickModifiers::shift(),
                _ => ClickModifiers::none(),
            };
            selection.handle_click(&mut view, TabId(id), mods);

            for selected in selection.selected_in_order(&view) {
                prop_assert!(view.contains(selected));
            }
            prop_assert_eq!(selection.bar_visible(), selection.len() > 1);
            let marked = view.iter().filter(|n| n.selected).count();
            prop_assert_eq!(marked, selection.len());
        }
    }
}

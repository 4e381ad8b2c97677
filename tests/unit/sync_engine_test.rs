use sidetabs::panel::sync::{SyncEngine, UpdateOutcome};
use sidetabs::panel::view::{Badge, ViewNode};
use sidetabs::types::tab::{MutedInfo, Tab, TabId, WindowId};

fn tab(id: i64, index: usize) -> Tab {
    Tab {
        id: TabId(id),
        window_id: WindowId(1),
        index,
        title: Some(format!("tab {}", id)),
        url: Some(format!("https://example.com/{}", id)),
        fav_icon_url: None,
        active: false,
        audible: false,
        muted_info: MutedInfo::default(),
    }
}

fn active_tab(id: i64, index: usize) -> Tab {
    Tab {
        active: true,
        ..tab(id, index)
    }
}

fn snapshot(engine: &SyncEngine) -> Vec<ViewNode> {
    engine.view().iter().cloned().collect()
}

#[test]
fn test_bulk_load_renders_in_order() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0), tab(2, 1)]);

    assert!(engine.is_initialized());
    assert_eq!(engine.view().ids(), vec![TabId(1), TabId(2)]);
    assert_eq!(engine.view().active_id(), Some(TabId(1)));
    assert!(!engine.view().has_empty_state());
}

#[test]
fn test_bulk_load_empty_shows_empty_state() {
    let mut engine = SyncEngine::new();
    engine.render(&[]);
    assert!(engine.is_initialized());
    assert!(engine.view().has_empty_state());
    assert_eq!(engine.view().len(), 0);
}

#[test]
fn test_remove_leaves_no_active_marker() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0), tab(2, 1)]);

    assert!(engine.remove(TabId(1)));
    assert_eq!(engine.view().ids(), vec![TabId(2)]);
    assert_eq!(engine.view().active_id(), None);
}

#[test]
fn test_remove_all_shows_empty_state() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0), tab(2, 1)]);
    engine.remove(TabId(1));
    engine.remove(TabId(2));
    assert!(engine.view().has_empty_state());
}

#[test]
fn test_remove_absent_is_noop() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0)]);
    assert!(!engine.remove(TabId(9)));
    assert_eq!(engine.view().len(), 1);
}

#[test]
fn test_insert_clamps_out_of_range_index() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1)]);
    engine.insert(&tab(3, 99));
    assert_eq!(engine.view().ids(), vec![TabId(1), TabId(2), TabId(3)]);
}

#[test]
fn test_insert_at_position() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1)]);
    engine.insert(&tab(3, 1));
    assert_eq!(engine.view().ids(), vec![TabId(1), TabId(3), TabId(2)]);
}

#[test]
fn test_insert_clears_empty_state() {
    let mut engine = SyncEngine::new();
    engine.render(&[]);
    assert!(engine.view().has_empty_state());
    engine.insert(&tab(1, 0));
    assert!(!engine.view().has_empty_state());
    assert_eq!(engine.view().len(), 1);
}

#[test]
fn test_duplicate_insert_refreshes_in_place() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1)]);

    let mut again = tab(1, 0);
    again.title = Some("renamed".to_string());
    engine.insert(&again);

    assert_eq!(engine.view().len(), 2);
    assert_eq!(engine.view().get(TabId(1)).unwrap().title, "renamed");
}

#[test]
fn test_update_absent_in_scope_is_implicit_insert() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0)]);
    let outcome = engine.update(&tab(9, 1));
    assert_eq!(outcome, UpdateOutcome::Inserted);
    assert!(engine.view().contains(TabId(9)));
}

#[test]
fn test_update_refreshes_attributes_and_badge() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0)]);

    let mut changed = tab(1, 0);
    changed.title = Some("Loud".to_string());
    changed.fav_icon_url = Some("https://example.com/icon.png".to_string());
    changed.audible = true;
    assert_eq!(engine.update(&changed), UpdateOutcome::Refreshed);

    let node = engine.view().get(TabId(1)).unwrap();
    assert_eq!(node.title, "Loud");
    assert_eq!(node.tooltip, "Loud");
    assert_eq!(node.favicon.as_deref(), Some("https://example.com/icon.png"));
    assert_eq!(node.badge, Some(Badge::Audible));

    // Mute wins over audible.
    changed.muted_info.muted = true;
    engine.update(&changed);
    assert_eq!(engine.view().get(TabId(1)).unwrap().badge, Some(Badge::Muted));
}

#[test]
fn test_update_is_idempotent() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0), tab(2, 1)]);

    let mut changed = tab(2, 1);
    changed.title = Some("twice".to_string());
    changed.active = true;

    engine.update(&changed);
    let first = snapshot(&engine);
    engine.update(&changed);
    assert_eq!(snapshot(&engine), first);
}

#[test]
fn test_active_marker_is_unique() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0), tab(2, 1), tab(3, 2)]);

    engine.activate(TabId(2));
    engine.update(&active_tab(3, 2));
    engine.activate(TabId(2));

    let active: Vec<TabId> = engine
        .view()
        .iter()
        .filter(|n| n.active)
        .map(|n| n.id)
        .collect();
    assert_eq!(active, vec![TabId(2)]);
}

#[test]
fn test_activate_absent_is_noop() {
    let mut engine = SyncEngine::new();
    engine.render(&[active_tab(1, 0)]);
    assert!(!engine.activate(TabId(9)));
    assert_eq!(engine.view().active_id(), Some(TabId(1)));
}

#[test]
fn test_move_repositions_and_clamps() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1), tab(3, 2)]);

    assert!(engine.move_to(TabId(1), 2));
    assert_eq!(engine.view().ids(), vec![TabId(2), TabId(3), TabId(1)]);

    assert!(engine.move_to(TabId(1), 99));
    assert_eq!(engine.view().ids(), vec![TabId(2), TabId(3), TabId(1)]);

    assert!(engine.move_to(TabId(3), 0));
    assert_eq!(engine.view().ids(), vec![TabId(3), TabId(2), TabId(1)]);
}

#[test]
fn test_move_absent_is_noop() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0)]);
    assert!(!engine.move_to(TabId(9), 0));
}

#[test]
fn test_entrance_indices_rederived() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1)]);
    engine.insert(&tab(3, 0));

    let indices: Vec<usize> = engine.view().iter().map(|n| n.entrance_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    engine.remove(TabId(1));
    let indices: Vec<usize> = engine.view().iter().map(|n| n.entrance_index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_reorder_preserves_node_identity() {
    let mut engine = SyncEngine::new();
    engine.render(&[tab(1, 0), tab(2, 1)]);
    engine.view_mut().get_mut(TabId(2)).unwrap().selected = true;
    engine.move_to(TabId(2), 0);
    assert!(engine.view().get(TabId(2)).unwrap().selected);
}

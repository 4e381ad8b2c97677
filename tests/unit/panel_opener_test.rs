use sidetabs::background::PanelOpener;
use sidetabs::host::memory::MemoryTabHost;
use sidetabs::types::events::RemoveInfo;
use sidetabs::types::tab::WindowId;

#[test]
fn test_panel_opens_once_per_window() {
    let (mut host, _pump) = MemoryTabHost::new();
    let mut opener = PanelOpener::new();

    opener.on_tab_created(&mut host, WindowId(1));
    opener.on_tab_created(&mut host, WindowId(1));
    opener.on_tab_created(&mut host, WindowId(2));

    assert_eq!(host.opened_panels(), &[WindowId(1), WindowId(2)]);
}

#[test]
fn test_startup_sweeps_all_windows() {
    let (mut host, _pump) = MemoryTabHost::new();
    host.spawn_tab(WindowId(1), None);
    host.spawn_tab(WindowId(1), None);
    host.spawn_tab(WindowId(2), None);

    let mut opener = PanelOpener::new();
    opener.handle_startup(&mut host);

    assert_eq!(host.opened_panels(), &[WindowId(1), WindowId(2)]);
    assert!(host.open_on_action());
}

#[test]
fn test_missing_capability_is_skipped_silently() {
    let (host, _pump) = MemoryTabHost::new();
    let mut host = host.without_side_panel();
    host.spawn_tab(WindowId(1), None);

    let mut opener = PanelOpener::new();
    opener.handle_installed(&mut host);
    opener.on_tab_created(&mut host, WindowId(2));

    assert!(host.opened_panels().is_empty());
    assert!(!host.open_on_action());
    // The windows are still remembered, so a capability appearing later
    // would not re-trigger opens for them.
    assert!(opener.has_opened(WindowId(1)));
}

#[test]
fn test_rejected_open_is_swallowed_and_not_retried() {
    let (host, _pump) = MemoryTabHost::new();
    let mut host = host.rejecting_panel_open();

    let mut opener = PanelOpener::new();
    opener.on_tab_created(&mut host, WindowId(1));
    opener.on_tab_created(&mut host, WindowId(1));

    assert!(host.opened_panels().is_empty());
    assert!(opener.has_opened(WindowId(1)));
}

#[test]
fn test_window_close_allows_reopen() {
    let (mut host, _pump) = MemoryTabHost::new();
    let mut opener = PanelOpener::new();

    opener.on_tab_created(&mut host, WindowId(1));
    opener.on_tab_removed(&RemoveInfo {
        window_id: WindowId(1),
        is_window_closing: true,
    });
    opener.on_tab_created(&mut host, WindowId(1));

    assert_eq!(host.opened_panels(), &[WindowId(1), WindowId(1)]);
}

#[test]
fn test_plain_tab_removal_keeps_window_marked() {
    let (mut host, _pump) = MemoryTabHost::new();
    let mut opener = PanelOpener::new();

    opener.on_tab_created(&mut host, WindowId(1));
    opener.on_tab_removed(&RemoveInfo {
        window_id: WindowId(1),
        is_window_closing: false,
    });
    opener.on_tab_created(&mut host, WindowId(1));

    assert_eq!(host.opened_panels(), &[WindowId(1)]);
}

//! End-to-end workflows over the split view controller

use std::cell::RefCell;
use std::rc::Rc;

use reqforge::split_view::{MAX_PANELS, SplitViewController};
use reqforge_core::split::{ContentId, Orientation, PanelSnapshot, ScrollOffset};

fn lengths(controller: &SplitViewController, extent: f64) -> Vec<f64> {
    controller
        .regions(extent)
        .iter()
        .map(|r| r.length)
        .collect()
}

/// The walkthrough a user performing a three-way comparison goes
/// through: split twice, close the middle panel, flip the axis, then
/// scroll with sync on.
#[test]
fn comparison_session_walkthrough() {
    let mut controller = SplitViewController::with_content(ContentId::new());
    assert_eq!(controller.panel_count(), 1);

    controller.add_split(Some(ContentId::new())).unwrap();
    controller.add_split(None).unwrap();
    assert_eq!(controller.panel_count(), 3);
    for length in lengths(&controller, 999.0) {
        assert!((length - 333.0).abs() < 1e-6);
    }

    // Close the middle panel; the survivors split the axis evenly.
    let ids = controller.layout().panel_ids();
    controller.close_split(ids[1]);
    assert_eq!(controller.panel_count(), 2);
    for length in lengths(&controller, 1000.0) {
        assert!((length - 500.0).abs() < 1e-6);
    }

    // Flipping the axis re-interprets the same shares vertically.
    let before = lengths(&controller, 1000.0);
    assert_eq!(controller.toggle_orientation(), Orientation::Vertical);
    assert_eq!(lengths(&controller, 1000.0), before);

    // With sync on, a scroll in the first panel lands in the second.
    controller.set_sync_scrolling(true);
    let ids = controller.layout().panel_ids();
    let targets = controller.on_panel_scroll(ids[0], ScrollOffset::new(40.0, 120.0));
    assert_eq!(targets, vec![(ids[1], ScrollOffset::new(40.0, 120.0))]);
    assert_eq!(
        controller.scroll_offset(ids[1]),
        ScrollOffset::new(40.0, 120.0)
    );
}

/// A divider drag in a 1000px container: starting from 50/50 and
/// releasing 400px to the right lands on 90/10, stopped by the floor.
#[test]
fn divider_drag_clamps_at_floor() {
    let mut controller = SplitViewController::new();
    controller.add_split(None).unwrap();

    assert!(controller.begin_resize(0, 500.0));
    controller.update_resize(700.0, 1000.0);
    let mid = lengths(&controller, 1000.0);
    assert!((mid[0] - 700.0).abs() < 1e-6);
    assert!((mid[1] - 300.0).abs() < 1e-6);

    controller.end_resize(1100.0, 1000.0);
    let done = lengths(&controller, 1000.0);
    assert!((done[0] - 900.0).abs() < 1e-6);
    assert!((done[1] - 100.0).abs() < 1e-6);
    assert!(!controller.is_resizing());
}

/// Filling the workspace and asking for one more panel shows the
/// passive capacity notice and leaves the layout alone.
#[test]
fn capacity_notice_on_fifth_panel() {
    let mut controller = SplitViewController::new();
    let notices = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notices);
    controller.set_on_capacity_notice(move |max| sink.borrow_mut().push(max));

    for _ in 0..MAX_PANELS - 1 {
        assert!(controller.add_split(None).is_some());
    }
    let ids_before = controller.layout().panel_ids();

    assert!(controller.add_split(None).is_none());
    assert_eq!(*notices.borrow(), vec![MAX_PANELS]);
    assert_eq!(controller.layout().panel_ids(), ids_before);
}

/// The layout-changed callback always carries the full panel list, so
/// a persistence layer can serialize the workspace from it alone.
#[test]
fn layout_changed_snapshots_are_persistable() {
    let mut controller = SplitViewController::new();
    let last: Rc<RefCell<Vec<PanelSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&last);
    controller.set_on_layout_changed(move |panels| {
        *sink.borrow_mut() = panels.to_vec();
    });

    let content = ContentId::new();
    let id = controller.add_split(Some(content)).unwrap();
    controller.rename_panel(id, "Staging response");

    let snapshot = last.borrow();
    assert_eq!(snapshot.len(), 2);
    let renamed = snapshot.iter().find(|p| p.id == id).unwrap();
    assert_eq!(renamed.title.as_deref(), Some("Staging response"));
    assert_eq!(renamed.content, Some(content));

    let json = serde_json::to_string(&*snapshot).unwrap();
    let restored: Vec<PanelSnapshot> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, *snapshot);
}

/// Closing every split returns the workspace to a single full-size
/// panel with fresh scroll state.
#[test]
fn close_all_splits_resets_the_workspace() {
    let mut controller = SplitViewController::new();
    controller.add_split(None).unwrap();
    controller.add_split(None).unwrap();
    controller.set_sync_scrolling(true);
    let ids = controller.layout().panel_ids();
    controller.on_panel_scroll(ids[0], ScrollOffset::new(0.0, 300.0));

    let kept = ContentId::new();
    let id = controller.close_all_splits(Some(kept));
    assert_eq!(controller.panel_count(), 1);
    assert_eq!(controller.panel_content(id), Some(kept));
    assert_eq!(controller.scroll_offset(id), ScrollOffset::default());

    let regions = controller.regions(640.0);
    assert_eq!(regions.len(), 1);
    assert!((regions[0].length - 640.0).abs() < 1e-6);
}

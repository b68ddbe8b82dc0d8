//! Property-based tests for the split view layout engine
//!
//! These exercise the layout through arbitrary operation sequences and
//! check the structural invariants that every stable state must hold:
//! sizes sum to 100, every panel sits at or above the minimum floor,
//! and the panel count stays between one and the ceiling.

use proptest::prelude::*;
use reqforge_core::split::{
    ContentId, FULL_SIZE, MAX_PANELS, MIN_PANEL_SIZE, PanelId, ResizeSession, ScrollOffset,
    ScrollSync, SplitLayout,
};

// Looser than SIZE_EPSILON to absorb float error accumulated across
// long operation sequences.
const SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Test Strategies
// ============================================================================

/// An operation that can be performed on a `SplitLayout`
#[derive(Debug, Clone)]
enum LayoutOperation {
    /// Add a panel, optionally with content
    Add { with_content: bool },
    /// Remove a panel (by index into `panel_ids`)
    Remove { panel_index: usize },
    /// Rebalance all sizes equally
    Reset,
    /// Flip the orientation
    Toggle,
    /// Run a complete resize drag on a boundary
    Resize {
        boundary: usize,
        start_pos: f64,
        end_pos: f64,
        extent: f64,
    },
    /// Collapse back to a single panel
    Collapse,
}

fn layout_operation_strategy() -> impl Strategy<Value = LayoutOperation> {
    prop_oneof![
        4 => any::<bool>().prop_map(|with_content| LayoutOperation::Add { with_content }),
        3 => (0usize..10).prop_map(|panel_index| LayoutOperation::Remove { panel_index }),
        1 => Just(LayoutOperation::Reset),
        2 => Just(LayoutOperation::Toggle),
        4 => (0usize..10, -2000.0..2000.0f64, -2000.0..2000.0f64, 100.0..2000.0f64).prop_map(
            |(boundary, start_pos, end_pos, extent)| LayoutOperation::Resize {
                boundary,
                start_pos,
                end_pos,
                extent,
            }
        ),
        1 => Just(LayoutOperation::Collapse),
    ]
}

fn layout_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LayoutOperation>> {
    proptest::collection::vec(layout_operation_strategy(), 0..=max_ops)
}

/// Apply an operation to a layout, ignoring refusals (for property testing)
fn apply_operation(layout: &mut SplitLayout, op: &LayoutOperation) {
    match op {
        LayoutOperation::Add { with_content } => {
            let content = with_content.then(ContentId::new);
            let _ = layout.add_panel(content);
        }
        LayoutOperation::Remove { panel_index } => {
            let panel_ids = layout.panel_ids();
            if panel_ids.len() > 1 {
                let idx = panel_index % panel_ids.len();
                let _ = layout.remove_panel(panel_ids[idx]);
            }
        }
        LayoutOperation::Reset => layout.reset_sizes(),
        LayoutOperation::Toggle => {
            layout.toggle_orientation();
        }
        LayoutOperation::Resize {
            boundary,
            start_pos,
            end_pos,
            extent,
        } => {
            if layout.panel_count() > 1 {
                let b = boundary % (layout.panel_count() - 1);
                if let Ok(session) = ResizeSession::begin(layout, b, *start_pos) {
                    if let Some(pair) = session.proposal(*end_pos, *extent) {
                        let _ = layout.apply_pair(b, pair);
                    }
                }
            }
        }
        LayoutOperation::Collapse => {
            layout.collapse_to_single(None);
        }
    }
}

fn sizes_of(layout: &SplitLayout) -> Vec<f64> {
    layout.panels().iter().map(|p| p.size).collect()
}

// ============================================================================
// Structural Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sizes sum to the full axis after any operation sequence
    #[test]
    fn sizes_always_sum_to_full(ops in layout_operations_strategy(30)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
            prop_assert!(
                (layout.total_size() - FULL_SIZE).abs() < SUM_TOLERANCE,
                "sizes should sum to {FULL_SIZE}, got {} after {op:?}",
                layout.total_size()
            );
        }
    }

    /// Panel count stays between one and the ceiling
    #[test]
    fn panel_count_stays_in_bounds(ops in layout_operations_strategy(30)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
            let count = layout.panel_count();
            prop_assert!(
                (1..=MAX_PANELS).contains(&count),
                "panel count {count} out of bounds after {op:?}"
            );
        }
    }

    /// No panel ever falls below the minimum floor
    #[test]
    fn no_panel_falls_below_floor(ops in layout_operations_strategy(30)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
            for panel in layout.panels() {
                prop_assert!(
                    panel.size >= MIN_PANEL_SIZE - SUM_TOLERANCE,
                    "panel size {} below floor after {op:?}",
                    panel.size
                );
            }
        }
    }

    /// Panel IDs stay unique through any operation sequence
    #[test]
    fn panel_ids_stay_unique(ops in layout_operations_strategy(30)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
            let mut ids = layout.panel_ids();
            ids.sort_by_key(|id| id.0);
            ids.dedup();
            prop_assert_eq!(ids.len(), layout.panel_count());
        }
    }

    /// Spans are the prefix sums of the sizes and tile the axis
    #[test]
    fn spans_tile_the_axis(ops in layout_operations_strategy(30)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
        }

        let spans = layout.spans();
        let mut cursor = 0.0;
        for span in &spans {
            prop_assert!(
                (span.offset - cursor).abs() < SUM_TOLERANCE,
                "span offset {} does not match running sum {cursor}",
                span.offset
            );
            cursor += span.size;
        }
        prop_assert!((cursor - FULL_SIZE).abs() < SUM_TOLERANCE);
    }
}

// ============================================================================
// Refusal Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A refused add at the ceiling leaves the layout untouched
    #[test]
    fn refused_add_changes_nothing(extra_adds in 1usize..5) {
        let mut layout = SplitLayout::new();
        for _ in 0..MAX_PANELS - 1 {
            layout.add_panel(None).unwrap();
        }
        let ids_before = layout.panel_ids();
        let sizes_before = sizes_of(&layout);

        for _ in 0..extra_adds {
            prop_assert!(layout.add_panel(None).is_err());
        }
        prop_assert_eq!(layout.panel_ids(), ids_before);
        prop_assert_eq!(sizes_of(&layout), sizes_before);
    }

    /// Removing an unknown panel leaves the layout untouched
    #[test]
    fn refused_remove_changes_nothing(ops in layout_operations_strategy(10)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
        }
        let ids_before = layout.panel_ids();
        let sizes_before = sizes_of(&layout);

        prop_assert!(layout.remove_panel(PanelId::new()).is_err());
        prop_assert_eq!(layout.panel_ids(), ids_before);
        prop_assert_eq!(sizes_of(&layout), sizes_before);
    }
}

// ============================================================================
// Reset and Orientation Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reset is idempotent and yields exactly equal shares
    #[test]
    fn reset_is_idempotent(ops in layout_operations_strategy(20)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
        }

        layout.reset_sizes();
        let once = sizes_of(&layout);
        layout.reset_sizes();
        prop_assert_eq!(&once, &sizes_of(&layout));

        let share = FULL_SIZE / layout.panel_count() as f64;
        for size in once {
            prop_assert!((size - share).abs() < SUM_TOLERANCE);
        }
    }

    /// Toggling orientation never touches sizes, order, or content
    #[test]
    fn toggle_preserves_everything_but_axis(ops in layout_operations_strategy(20)) {
        let mut layout = SplitLayout::new();
        for op in &ops {
            apply_operation(&mut layout, op);
        }
        let ids_before = layout.panel_ids();
        let sizes_before = sizes_of(&layout);
        let orientation_before = layout.orientation();

        layout.toggle_orientation();
        prop_assert_eq!(layout.panel_ids(), ids_before);
        prop_assert_eq!(sizes_of(&layout), sizes_before);
        prop_assert_ne!(layout.orientation(), orientation_before);

        layout.toggle_orientation();
        prop_assert_eq!(layout.orientation(), orientation_before);
    }
}

// ============================================================================
// Resize Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every resize proposal is zero-sum over the dragged pair
    #[test]
    fn resize_is_zero_sum(
        panel_adds in 1usize..MAX_PANELS,
        boundary in 0usize..10,
        start_pos in -1000.0..1000.0f64,
        positions in proptest::collection::vec(-5000.0..5000.0f64, 1..20),
        extent in 100.0..2000.0f64,
    ) {
        let mut layout = SplitLayout::new();
        for _ in 0..panel_adds {
            layout.add_panel(None).unwrap();
        }
        let b = boundary % (layout.panel_count() - 1);
        let combined = layout.panels()[b].size + layout.panels()[b + 1].size;

        let session = ResizeSession::begin(&layout, b, start_pos).unwrap();
        for pos in positions {
            let pair = session.proposal(pos, extent).unwrap();
            prop_assert!((pair.left + pair.right - combined).abs() < SUM_TOLERANCE);
            prop_assert!(pair.left >= MIN_PANEL_SIZE - SUM_TOLERANCE);
            prop_assert!(pair.right >= MIN_PANEL_SIZE - SUM_TOLERANCE);
        }
    }

    /// Proposals move monotonically with the pointer
    #[test]
    fn resize_tracks_pointer_monotonically(
        start_pos in -500.0..500.0f64,
        delta_a in -3000.0..3000.0f64,
        delta_b in -3000.0..3000.0f64,
        extent in 100.0..2000.0f64,
    ) {
        let mut layout = SplitLayout::new();
        layout.add_panel(None).unwrap();

        let session = ResizeSession::begin(&layout, 0, start_pos).unwrap();
        let (lo, hi) = if delta_a <= delta_b { (delta_a, delta_b) } else { (delta_b, delta_a) };
        let pair_lo = session.proposal(start_pos + lo, extent).unwrap();
        let pair_hi = session.proposal(start_pos + hi, extent).unwrap();
        prop_assert!(pair_lo.left <= pair_hi.left + SUM_TOLERANCE);
    }
}

// ============================================================================
// Scroll Sync Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Mirroring updates every panel and skips only the origin
    #[test]
    fn mirror_reaches_all_other_panels(
        panel_count in 1usize..=MAX_PANELS,
        origin_index in 0usize..10,
        x in -1000.0..1000.0f64,
        y in -1000.0..1000.0f64,
    ) {
        let panels: Vec<PanelId> = (0..panel_count).map(|_| PanelId::new()).collect();
        let origin = panels[origin_index % panel_count];
        let offset = ScrollOffset::new(x, y);

        let mut sync = ScrollSync::new();
        let targets = sync.mirror(origin, offset, &panels);

        prop_assert_eq!(targets.len(), panel_count - 1);
        prop_assert!(targets.iter().all(|&(id, _)| id != origin));
        for &id in &panels {
            prop_assert_eq!(sync.offset_of(id), offset);
        }
    }

    /// The last mirror wins regardless of origin order
    #[test]
    fn last_mirror_wins(
        events in proptest::collection::vec(
            (0usize..10, -1000.0..1000.0f64, -1000.0..1000.0f64),
            1..15,
        ),
    ) {
        let panels: Vec<PanelId> = (0..3).map(|_| PanelId::new()).collect();
        let mut sync = ScrollSync::new();

        let mut last_offset = ScrollOffset::default();
        for (origin_index, x, y) in events {
            last_offset = ScrollOffset::new(x, y);
            sync.mirror(panels[origin_index % panels.len()], last_offset, &panels);
        }
        for &id in &panels {
            prop_assert_eq!(sync.offset_of(id), last_offset);
        }
    }
}

//! Property-based invariant tests for the carousel engine.
//!
//! Random sequences of pointer, navigation, resize, item-count, and clock
//! operations are replayed against a `SimHost`. After every step:
//!
//! 1. `current_index` stays within `[0, max_index]`.
//! 2. `total_slides` and `max_index` follow the item count and cards per view.
//! 3. Cards per view is one of the breakpoint values.
//! 4. Window listeners are attached exactly while a drag is open.
//! 5. At most one autoplay timer is queued, and none while dragging or static.
//! 6. The track has no drag offset outside a drag.

use carousel::Carousel;
use carousel::bounds::Bounds;
use carousel::sim::{ClickOutcome, SimHost};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Down(f64),
    Move(f64),
    Up,
    Next,
    Prev,
    GoTo(i64),
    Resize(f64),
    SetItems(usize),
    Advance(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0f64..2000.0).prop_map(Op::Down),
        (-500.0f64..2500.0).prop_map(Op::Move),
        Just(Op::Up),
        Just(Op::Next),
        Just(Op::Prev),
        (-20i64..40).prop_map(Op::GoTo),
        (200.0f64..2000.0).prop_map(Op::Resize),
        (0usize..15).prop_map(Op::SetItems),
        (0u64..7000).prop_map(Op::Advance),
    ]
}

fn apply(host: &mut SimHost, op: &Op) {
    match *op {
        Op::Down(x) => host.pointer_down(x),
        Op::Move(x) => host.pointer_move(x),
        Op::Up => host.pointer_up(),
        Op::Next => {
            host.carousel_mut().next();
        }
        Op::Prev => {
            host.carousel_mut().prev();
        }
        Op::GoTo(i) => {
            host.carousel_mut().go_to(i);
        }
        Op::Resize(w) => host.dispatch(|c| c.resize(w)),
        Op::SetItems(n) => host.dispatch(|c| c.set_item_count(n)),
        Op::Advance(ms) => host.advance(ms),
    }
}

fn check_invariants(host: &SimHost) -> Result<(), TestCaseError> {
    let c = host.carousel();
    let expected = Bounds::new(c.item_count(), c.items_per_view());
    prop_assert!(c.current_index() <= c.max_index());
    prop_assert_eq!(c.total_slides(), expected.total_slides);
    prop_assert_eq!(c.max_index(), expected.max_index);
    prop_assert!((1..=3).contains(&c.items_per_view()));
    prop_assert_eq!(host.is_listening(), c.is_dragging());
    prop_assert!(host.autoplay_timers() <= 1);
    if c.is_dragging() || c.total_slides() <= 1 {
        prop_assert_eq!(host.autoplay_timers(), 0);
    }
    if !c.is_dragging() {
        prop_assert!(c.translate_x().abs() < f64::EPSILON);
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// Invariants under random operation sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_step(
        items in 0usize..15,
        width in 200.0f64..2000.0,
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let mut host = SimHost::with_items(items, width);
        check_invariants(&host)?;
        for op in &ops {
            apply(&mut host, op);
            check_invariants(&host)?;
        }
    }

    #[test]
    fn navigation_is_idempotent_at_the_ends(items in 0usize..15, width in 200.0f64..2000.0) {
        let mut host = SimHost::with_items(items, width);
        let c = host.carousel_mut();
        c.go_to(i64::MAX);
        let last = c.current_index();
        prop_assert_eq!(c.next(), last);
        c.go_to(i64::MIN);
        prop_assert_eq!(c.prev(), 0);
    }

    #[test]
    fn release_moves_at_most_one_slide(
        items in 4usize..15,
        start in 0i64..12,
        from in 0i32..1500,
        delta in -1500i32..1500,
    ) {
        let mut host = SimHost::with_items(items, 1280.0);
        host.carousel_mut().go_to(start);
        let before = host.carousel().current_index();
        host.drag(f64::from(from), f64::from(from + delta));
        let after = host.carousel().current_index();
        prop_assert!(before.abs_diff(after) <= 1);
        if delta.abs() <= 50 {
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn click_suppression_matches_movement(
        items in 4usize..15,
        delta in -200i32..200,
    ) {
        let mut host = SimHost::with_items(items, 1280.0);
        host.drag(700.0, f64::from(700 + delta));
        let expected = if delta.abs() > 5 { ClickOutcome::Suppressed } else { ClickOutcome::Delivered };
        prop_assert_eq!(host.click(), expected);
        host.advance(100);
        prop_assert_eq!(host.click(), ClickOutcome::Delivered);
    }

    #[test]
    fn resize_is_idempotent(items in 0usize..15, index in 0i64..15, width in 200.0f64..2000.0) {
        let mut c = Carousel::default();
        c.set_item_count(items);
        c.go_to(index);
        c.resize(width);
        let snapshot = (c.current_index(), c.items_per_view(), c.total_slides());
        prop_assert!(c.resize(width).is_empty());
        prop_assert_eq!((c.current_index(), c.items_per_view(), c.total_slides()), snapshot);
    }
}

use super::*;

const DESKTOP: f64 = 1280.0;
const MOBILE: f64 = 375.0;

// =============================================================
// Click suppression
// =============================================================

#[test]
fn click_after_real_drag_is_suppressed_then_delivered() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.drag(500.0, 490.0);
    assert_eq!(host.click(), ClickOutcome::Suppressed);
    host.advance(99);
    assert_eq!(host.click(), ClickOutcome::Suppressed);
    host.advance(1);
    assert_eq!(host.click(), ClickOutcome::Delivered);
}

#[test]
fn click_after_tap_is_delivered() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.drag(500.0, 497.0);
    assert_eq!(host.click(), ClickOutcome::Delivered);
}

#[test]
fn plain_click_is_delivered() {
    let host = SimHost::with_items(7, DESKTOP);
    assert_eq!(host.click(), ClickOutcome::Delivered);
}

#[test]
fn stale_settle_does_not_clear_new_drag() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.drag(500.0, 480.0);
    host.advance(50);
    host.pointer_down(300.0);
    host.pointer_move(280.0);
    host.advance(60);
    assert_eq!(host.click(), ClickOutcome::Suppressed);
    host.pointer_up();
    host.advance(100);
    assert_eq!(host.click(), ClickOutcome::Delivered);
}

// =============================================================
// Listener lifecycle
// =============================================================

#[test]
fn listeners_attach_per_drag_and_detach_on_release() {
    let mut host = SimHost::with_items(7, DESKTOP);
    assert!(!host.is_listening());
    host.pointer_down(200.0);
    assert!(host.is_listening());
    host.pointer_up();
    assert!(!host.is_listening());
    host.drag(200.0, 100.0);
    assert_eq!(host.listener_attach_count(), 2);
}

#[test]
fn move_without_press_is_not_delivered() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.pointer_move(900.0);
    host.pointer_up();
    assert_eq!(host.carousel().current_index(), 0);
    assert_eq!(host.listener_attach_count(), 0);
}

#[test]
fn static_carousel_never_listens() {
    let mut host = SimHost::with_items(2, DESKTOP);
    host.drag(500.0, 300.0);
    assert_eq!(host.listener_attach_count(), 0);
    assert_eq!(host.carousel().current_index(), 0);
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn autoplay_advances_every_interval() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.advance(4_999);
    assert_eq!(host.carousel().current_index(), 0);
    host.advance(1);
    assert_eq!(host.carousel().current_index(), 1);
    host.advance(10_000);
    assert_eq!(host.carousel().current_index(), 3);
}

#[test]
fn autoplay_wraps_to_first_slide() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.carousel_mut().go_to(4);
    host.advance(5_000);
    assert_eq!(host.carousel().current_index(), 0);
}

#[test]
fn held_drag_blocks_autoplay() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.pointer_down(500.0);
    host.pointer_move(498.0);
    host.advance(6_000);
    assert_eq!(host.carousel().current_index(), 0);
    assert_eq!(host.autoplay_timers(), 0);
    host.pointer_up();
    assert_eq!(host.autoplay_timers(), 1);
    host.advance(5_000);
    assert_eq!(host.carousel().current_index(), 1);
}

#[test]
fn release_restarts_autoplay_interval() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.advance(4_000);
    host.pointer_down(500.0);
    host.pointer_up();
    host.advance(1_500);
    assert_eq!(host.carousel().current_index(), 0);
    host.advance(3_500);
    assert_eq!(host.carousel().current_index(), 1);
}

#[test]
fn two_items_never_autoplay() {
    let mut host = SimHost::with_items(2, DESKTOP);
    assert_eq!(host.autoplay_timers(), 0);
    host.advance(60_000);
    assert_eq!(host.carousel().current_index(), 0);
}

#[test]
fn resize_keeps_a_single_autoplay_timer() {
    let mut host = SimHost::with_items(7, MOBILE);
    host.dispatch(|c| c.resize(900.0));
    host.dispatch(|c| c.resize(DESKTOP));
    assert_eq!(host.autoplay_timers(), 1);
}

#[test]
fn shutdown_clears_timers_and_listeners() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.pointer_down(100.0);
    host.dispatch(Carousel::shutdown);
    assert!(!host.is_listening());
    assert_eq!(host.autoplay_timers(), 0);
    host.advance(20_000);
    assert_eq!(host.carousel().current_index(), 0);
}

// =============================================================
// Swipes
// =============================================================

#[test]
fn swipe_left_then_right() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.drag(600.0, 520.0);
    assert_eq!(host.carousel().current_index(), 1);
    host.advance(200);
    host.drag(300.0, 400.0);
    assert_eq!(host.carousel().current_index(), 0);
}

#[test]
fn clock_only_moves_forward() {
    let mut host = SimHost::with_items(7, DESKTOP);
    host.advance(250);
    host.advance(0);
    assert_eq!(host.now_ms(), 250);
}

use super::*;

#[test]
fn window_larger_than_total_shows_all() {
    assert_eq!(indicator_window(1, 3, 5), 0..3);
}

#[test]
fn window_centres_on_current() {
    assert_eq!(indicator_window(6, 12, 5), 4..9);
}

#[test]
fn window_clips_at_start() {
    assert_eq!(indicator_window(0, 12, 5), 0..5);
    assert_eq!(indicator_window(1, 12, 5), 0..5);
}

#[test]
fn window_clips_at_end() {
    assert_eq!(indicator_window(11, 12, 5), 7..12);
    assert_eq!(indicator_window(10, 12, 5), 7..12);
}

#[test]
fn empty_inputs_yield_no_dots() {
    assert_eq!(indicator_window(0, 0, 5), 0..0);
    assert_eq!(indicator_window(3, 10, 0), 0..0);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(indicator_window(50, 12, 5), 7..12);
}

#[test]
fn exactly_one_dot_is_active() {
    let dots = indicators(3, 8, 5);
    assert_eq!(dots.len(), 5);
    assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
    assert_eq!(dots.iter().find(|d| d.active).map(|d| d.index), Some(3));
}

use super::*;

fn key(total_slides: usize, dragging: bool) -> AutoplayKey {
    AutoplayKey { total_slides, max_index: total_slides.saturating_sub(1), dragging }
}

#[test]
fn should_run_needs_two_slides_and_no_drag() {
    assert!(!key(0, false).should_run());
    assert!(!key(1, false).should_run());
    assert!(key(2, false).should_run());
    assert!(!key(5, true).should_run());
}

#[test]
fn first_sync_starts_timer() {
    let mut sup = AutoplaySupervisor::new(true);
    assert_eq!(sup.sync(key(5, false)), Some(AutoplayCommand::Start { generation: 1 }));
    assert!(sup.is_running());
    assert!(sup.is_current(1));
}

#[test]
fn unchanged_key_is_a_noop() {
    let mut sup = AutoplaySupervisor::new(true);
    sup.sync(key(5, false));
    assert_eq!(sup.sync(key(5, false)), None);
    assert_eq!(sup.generation(), 1);
}

#[test]
fn drag_stops_and_release_restarts() {
    let mut sup = AutoplaySupervisor::new(true);
    sup.sync(key(5, false));
    assert_eq!(sup.sync(key(5, true)), Some(AutoplayCommand::Stop));
    assert!(!sup.is_current(1));
    assert!(!sup.is_current(2));
    assert_eq!(sup.sync(key(5, false)), Some(AutoplayCommand::Start { generation: 3 }));
}

#[test]
fn bounds_change_supersedes_old_generation() {
    let mut sup = AutoplaySupervisor::new(true);
    sup.sync(key(5, false));
    assert_eq!(sup.sync(key(6, false)), Some(AutoplayCommand::Start { generation: 2 }));
    assert!(!sup.is_current(1));
    assert!(sup.is_current(2));
}

#[test]
fn single_slide_never_starts() {
    let mut sup = AutoplaySupervisor::new(true);
    assert_eq!(sup.sync(key(1, false)), None);
    assert!(!sup.is_running());
}

#[test]
fn disabled_supervisor_never_starts() {
    let mut sup = AutoplaySupervisor::new(false);
    assert_eq!(sup.sync(key(5, false)), None);
    assert!(!sup.is_current(sup.generation()));
}

#[test]
fn stop_forgets_key() {
    let mut sup = AutoplaySupervisor::new(true);
    sup.sync(key(5, false));
    assert_eq!(sup.stop(), Some(AutoplayCommand::Stop));
    assert_eq!(sup.stop(), None);
    assert!(matches!(sup.sync(key(5, false)), Some(AutoplayCommand::Start { .. })));
}

use std::time::Duration;

use pretty_assertions::assert_eq;

use keydrill::drill::clock::{Clock, ManualClock};
use keydrill::drill::practice::{self, PracticeMode, PRACTICE_MODES};
use keydrill::drill::session::{
    Outcome, Phase, SessionEvent, SessionState, ERROR_DELAY, SUCCESS_DELAY,
};

fn started() -> SessionState {
    let mut s = SessionState::new();
    s.start();
    s
}

/// Index of the mode whose keys begin with `A S D F`.
fn home_row_mode() -> usize {
    PRACTICE_MODES
        .iter()
        .position(|m| m.keys.starts_with(&["A", "S", "D", "F"]))
        .unwrap()
}

#[test]
fn test_submit_while_idle_changes_nothing() {
    let clock = ManualClock::new();
    let mut s = SessionState::new();
    let before = s.clone();

    for input in ["a", "x", " ", "Enter", ";"] {
        assert_eq!(s.submit(input, clock.now()), None);
    }
    assert_eq!(s, before);
}

#[test]
fn test_submit_after_reset_is_ignored() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    s.reset();
    let before = s.clone();

    s.submit("a", clock.now());
    assert_eq!(s, before);
}

#[test]
fn test_correct_key_scores_full_accuracy() {
    let clock = ManualClock::new();
    let mut s = started();
    assert_eq!(s.current_target, Some("A"));

    assert_eq!(s.submit("a", clock.now()), Some(Outcome::Correct));
    assert_eq!(s.correct_count, 1);
    assert_eq!(s.total_count, 1);
    assert_eq!(s.accuracy(), 100);
}

#[test]
fn test_wrong_key_scores_zero_accuracy() {
    let clock = ManualClock::new();
    let mut s = started();
    assert_eq!(s.current_target, Some("A"));

    assert_eq!(s.submit("x", clock.now()), Some(Outcome::Wrong));
    assert_eq!(s.correct_count, 0);
    assert_eq!(s.total_count, 1);
    assert_eq!(s.accuracy(), 0);
}

#[test]
fn test_accuracy_and_count_invariant_hold_after_every_submit() {
    let clock = ManualClock::new();
    let mut s = started();
    let inputs = ["a", "s", "x", "f", "j", "q", "k", "l", ";", "Tab", " "];

    for input in inputs {
        s.submit(input, clock.now());
        assert!(s.correct_count <= s.total_count);
        let expected =
            (f64::from(s.correct_count) / f64::from(s.total_count) * 100.0).round() as u32;
        assert_eq!(s.accuracy(), expected);

        clock.advance(ERROR_DELAY);
        s.tick(clock.now());
    }
}

#[test]
fn test_key_selection_is_cyclic() {
    let mode = PracticeMode {
        name: "asdf",
        keys: &["A", "S", "D", "F"],
        description: "",
    };
    let seen: Vec<&str> = (0..5).map(|cursor| mode.key_at(cursor)).collect();
    assert_eq!(seen, vec!["A", "S", "D", "F", "A"]);
}

#[test]
fn test_advance_cycles_through_mode_keys() {
    let mut s = SessionState::new();
    s.select_mode(home_row_mode());
    let seen: Vec<&str> = (0..5).map(|_| s.advance()).collect();
    assert_eq!(seen, vec!["A", "S", "D", "F", "J"]);

    s.select_mode(3);
    let seen: Vec<&str> = (0..5).map(|_| s.advance()).collect();
    assert_eq!(seen, vec!["Q", "P", "Z", "M", "Q"]);
    assert_eq!(s.key_cursor, 5);
}

#[test]
fn test_digit_mode_wraps_at_thirteen() {
    let mut s = SessionState::new();
    let digits = practice::resolve_mode("数字键训练").unwrap();
    s.select_mode(digits);

    let seen: Vec<&str> = (0..16).map(|_| s.advance()).collect();
    assert_eq!(
        seen,
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1", "2", "3", "1", "2", "3"]
    );
}

#[test]
fn test_change_mode_while_active_restarts_cycle() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    clock.advance(SUCCESS_DELAY);
    s.tick(clock.now());
    assert_eq!(s.current_target, Some("S"));
    assert_eq!(s.key_cursor, 2);

    s.change_mode();
    assert_eq!(s.mode_index, 1);
    assert_eq!(s.current_target, Some(PRACTICE_MODES[1].keys[0]));
    assert_eq!(s.key_cursor, 1);
    assert!(s.is_active);
    assert!(s.pending.is_empty());
}

#[test]
fn test_change_mode_while_idle_shows_no_target() {
    let mut s = SessionState::new();
    s.change_mode();
    assert_eq!(s.mode_index, 1);
    assert_eq!(s.current_target, None);
    assert_eq!(s.key_cursor, 0);
    assert_eq!(s.phase(), Phase::Idle);
}

#[test]
fn test_change_mode_wraps_to_first() {
    let mut s = SessionState::new();
    for _ in 0..practice::mode_count() {
        s.change_mode();
    }
    assert_eq!(s.mode_index, 0);
}

#[test]
fn test_success_advances_after_short_delay() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    assert_eq!(s.phase(), Phase::Feedback(Outcome::Correct));

    clock.advance(SUCCESS_DELAY - Duration::from_millis(1));
    assert_eq!(s.tick(clock.now()), 0);
    assert_eq!(s.current_target, Some("A"));

    clock.advance_ms(1);
    assert_eq!(s.tick(clock.now()), 1);
    assert_eq!(s.current_target, Some("S"));
    assert_eq!(s.phase(), Phase::AwaitingInput);
}

#[test]
fn test_error_advances_after_long_delay() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("x", clock.now());
    assert_eq!(s.phase(), Phase::Feedback(Outcome::Wrong));

    clock.advance(SUCCESS_DELAY);
    assert_eq!(s.tick(clock.now()), 0);

    clock.advance(ERROR_DELAY - SUCCESS_DELAY);
    assert_eq!(s.tick(clock.now()), 1);
    assert_eq!(s.current_target, Some("S"));
    assert_eq!(s.total_count, 1);
    assert_eq!(s.correct_count, 0);
}

#[test]
fn test_keystrokes_during_feedback_each_schedule_an_advance() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    s.submit("a", clock.now());
    assert_eq!(s.correct_count, 2);
    assert_eq!(s.pending.len(), 2);

    clock.advance(SUCCESS_DELAY);
    assert_eq!(s.tick(clock.now()), 2);
    assert_eq!(s.current_target, Some("D"));
}

#[test]
fn test_reset_clears_everything() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    s.submit("x", clock.now());

    s.reset();
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.correct_count, 0);
    assert_eq!(s.total_count, 0);
    assert_eq!(s.key_cursor, 0);
    assert_eq!(s.current_target, None);
    assert_eq!(s.next_deadline(), None);

    clock.advance(ERROR_DELAY);
    assert_eq!(s.tick(clock.now()), 0);
    assert_eq!(s.current_target, None);
}

#[test]
fn test_restart_keeps_counters_and_rewinds_cursor() {
    let clock = ManualClock::new();
    let mut s = started();
    s.submit("a", clock.now());
    clock.advance(SUCCESS_DELAY);
    s.tick(clock.now());

    s.start();
    assert_eq!(s.current_target, Some("A"));
    assert_eq!(s.key_cursor, 1);
    assert_eq!(s.total_count, 1);
}

#[test]
fn test_space_matches_space_target() {
    let mut s = SessionState::new();
    s.is_active = true;
    s.current_target = Some("Space");
    assert_eq!(
        s.submit(" ", ManualClock::new().now()),
        Some(Outcome::Correct)
    );
}

#[test]
fn test_apply_is_state_in_state_out() {
    let clock = ManualClock::new();
    let now = clock.now();
    let s = SessionState::new()
        .apply(SessionEvent::Start, now)
        .apply(SessionEvent::Submit("a".into()), now)
        .apply(SessionEvent::Tick, now + SUCCESS_DELAY)
        .apply(SessionEvent::Submit("q".into()), now + SUCCESS_DELAY);

    assert_eq!(s.current_target, Some("S"));
    assert_eq!(s.correct_count, 1);
    assert_eq!(s.total_count, 2);
    assert_eq!(s.accuracy(), 50);

    let s = s.apply(SessionEvent::ChangeMode, now).apply(SessionEvent::Reset, now);
    assert_eq!(s.mode_index, 1);
    assert_eq!(s.phase(), Phase::Idle);
}

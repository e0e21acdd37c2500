use std::time::{Duration, Instant};

use crate::game::*;
use crate::settings::Settings;

fn test_settings() -> Settings {
    Settings {
        seed: Some(7),
        ..Settings::default()
    }
}

fn make_session(now: Instant) -> Session {
    Session::new(&test_settings(), now)
}

/// Fast-forward through the setup phase: three more ticks after the one the
/// constructor runs, leaving the board full and the clock started.
fn finish_setup(session: &mut Session, t0: Instant) {
    for step in 1..BOARD_HEIGHT {
        session.run_due(t0 + SETUP_STEP_DELAY * step as u32);
    }
}

fn bottom_lane(session: &Session) -> Lane {
    let row = BOARD_HEIGHT - 1;
    for (lane, col) in [(Lane::Left, 0), (Lane::Down, 1), (Lane::Right, 2)] {
        if session.grid.is_occupied(col, row) {
            return lane;
        }
    }
    panic!("bottom row is empty");
}

fn empty_bottom_lane(session: &Session) -> Lane {
    let row = BOARD_HEIGHT - 1;
    for (lane, col) in [(Lane::Left, 0), (Lane::Down, 1), (Lane::Right, 2)] {
        if !session.grid.is_occupied(col, row) {
            return lane;
        }
    }
    panic!("bottom row is full");
}

#[test]
fn construction_enters_setup() {
    let t0 = Instant::now();
    let session = make_session(t0);
    assert!(session.active_game);
    assert_eq!(session.setup_rows, 1);
    assert_eq!(session.grid.len(), 1);
    assert_eq!(session.grid.row_count(0), 1);
    assert!(matches!(
        session.banner.as_ref().map(|b| b.kind),
        Some(BannerKind::Countdown(3))
    ));
}

#[test]
fn setup_fills_one_row_per_tick() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    for step in 1..BOARD_HEIGHT {
        session.run_due(t0 + SETUP_STEP_DELAY * step as u32);
        assert_eq!(session.setup_rows, step + 1);
        assert_eq!(session.grid.len(), step + 1);
    }
    // One block in every row, start banner showing, clock running.
    for row in 0..BOARD_HEIGHT {
        assert_eq!(session.grid.row_count(row), 1);
    }
    assert!(matches!(
        session.banner.as_ref().map(|b| b.kind),
        Some(BannerKind::Start)
    ));
    assert!(session.scoreboard.timer.is_running());
}

#[test]
fn setup_stops_after_board_is_full() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);
    session.run_due(t0 + SETUP_STEP_DELAY * (BOARD_HEIGHT as u32 + 2));
    assert_eq!(session.setup_rows, BOARD_HEIGHT);
    assert_eq!(session.grid.len(), BOARD_HEIGHT);
}

#[test]
fn same_seed_same_board() {
    let t0 = Instant::now();
    let mut a = make_session(t0);
    let mut b = make_session(t0);
    finish_setup(&mut a, t0);
    finish_setup(&mut b, t0);
    assert_eq!(a.grid, b.grid);
}

#[test]
fn hit_scores_and_shifts() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let at = t0 + RESTART_GUARD_DELAY + Duration::from_millis(50);
    session.run_due(at);
    session.handle_key(GameKey::Lane(bottom_lane(&session)), at);

    assert_eq!(session.scoreboard.score, 1);
    assert_eq!(session.scoreboard.mistakes, 0);
    assert_eq!(session.grid.len(), BOARD_HEIGHT);
    for row in 0..BOARD_HEIGHT {
        assert_eq!(session.grid.row_count(row), 1);
    }
}

#[test]
fn miss_counts_mistake_and_leaves_board() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let at = t0 + RESTART_GUARD_DELAY + Duration::from_millis(50);
    session.run_due(at);
    let before = session.grid.clone();
    session.handle_key(GameKey::Lane(empty_bottom_lane(&session)), at);

    assert_eq!(session.scoreboard.score, 0);
    assert_eq!(session.scoreboard.mistakes, 1);
    assert_eq!(session.grid, before);
}

#[test]
fn mistakes_shrink_remaining_time() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let at = t0 + RESTART_GUARD_DELAY + Duration::from_millis(50);
    session.run_due(at);
    let before = session.scoreboard.elapsed(at);
    session.handle_key(GameKey::Lane(empty_bottom_lane(&session)), at);
    let after = session.scoreboard.elapsed(at);
    assert!((after - before - 0.5).abs() < 1e-9);
}

#[test]
fn restart_is_debounced() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    session.scoreboard.score = 5;

    session.restart(t0 + Duration::from_millis(500));

    assert_eq!(session.scoreboard.score, 5);
    assert_eq!(session.setup_rows, 1);
    assert!(session.is_restarting());
}

#[test]
fn restart_guard_clears_after_delay() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);
    assert!(!session.is_restarting());
}

#[test]
fn space_ends_active_game_after_guard() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let at = t0 + RESTART_GUARD_DELAY + Duration::from_millis(500);
    session.run_due(at);
    session.handle_key(GameKey::Space, at);

    assert!(!session.active_game);
    assert!(session.grid.is_empty());
    assert!(matches!(
        session.banner.as_ref().map(|b| b.kind),
        Some(BannerKind::GameOver)
    ));
}

#[test]
fn space_quit_suppressed_during_restart_window() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    session.handle_key(GameKey::Space, t0 + Duration::from_millis(500));
    assert!(session.active_game);
}

#[test]
fn space_restarts_after_game_over() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let end_at = t0 + RESTART_GUARD_DELAY + Duration::from_millis(500);
    session.run_due(end_at);
    session.handle_key(GameKey::Space, end_at);
    assert!(!session.active_game);

    let again = end_at + Duration::from_secs(1);
    session.handle_key(GameKey::Space, again);
    assert!(session.active_game);
    assert_eq!(session.scoreboard.score, 0);
    assert_eq!(session.setup_rows, 1);
    assert_eq!(session.grid.len(), 1);
}

#[test]
fn time_expiry_ends_game_and_wipes_grid() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    let past_limit = t0 + RESTART_GUARD_DELAY + Duration::from_millis(10_200);
    session.run_due(past_limit);

    assert!(!session.active_game);
    assert!(session.grid.is_empty());
    assert!(matches!(
        session.banner.as_ref().map(|b| b.kind),
        Some(BannerKind::GameOver)
    ));
}

#[test]
fn input_ignored_once_time_is_up() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    finish_setup(&mut session, t0);

    // The clock started at the guard boundary; well past the limit now,
    // even though no tick has ended the game yet.
    let late = t0 + RESTART_GUARD_DELAY + Duration::from_secs(11);
    session.handle_key(GameKey::Lane(Lane::Left), late);
    session.handle_key(GameKey::Lane(Lane::Down), late);

    assert_eq!(session.scoreboard.score, 0);
    assert_eq!(session.scoreboard.mistakes, 0);
}

#[test]
fn stale_setup_step_is_a_noop_after_end() {
    let t0 = Instant::now();
    let mut session = make_session(t0);
    session.end_game(t0 + Duration::from_millis(100));

    session.run_due(t0 + RESTART_GUARD_DELAY);

    assert!(!session.active_game);
    assert!(session.grid.is_empty());
    assert_eq!(session.setup_rows, 1);
}

#[test]
fn lane_targets_are_the_bottom_row() {
    assert_eq!(Lane::Left.target_cell(), (0, BOARD_HEIGHT - 1));
    assert_eq!(Lane::Down.target_cell(), (1, BOARD_HEIGHT - 1));
    assert_eq!(Lane::Right.target_cell(), (2, BOARD_HEIGHT - 1));
}

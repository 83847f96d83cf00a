//! Frame loop behavior: gravity, difficulty ramp, locking, scoring, loss

use retro_tetris::core::{GameConfig, GameState, LockEvent, LockedCells, Phase, Piece};
use retro_tetris::types::{Command, Rgb, ShapeKind, BOARD_WIDTH};

const GRAY: Rgb = Rgb::new(90, 90, 90);

fn game() -> GameState {
    GameState::new(GameConfig::default().with_seed(12345))
}

#[test]
fn test_game_lifecycle() {
    let state = game();
    assert_eq!(state.score(), 0);
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.fall_interval_ms(), 270);
    assert!((state.fall_speed_seconds() - 0.27).abs() < 1e-6);

    let active = state.active();
    assert_eq!((active.x, active.y, active.rotation), (5, 0, 0));
}

#[test]
fn test_same_seed_same_pieces() {
    let a = GameState::new(GameConfig::default().with_seed(99));
    let b = GameState::new(GameConfig::default().with_seed(99));
    assert_eq!(a.active(), b.active());
    assert_eq!(a.next(), b.next());
}

#[test]
fn test_gravity_moves_one_row_per_interval() {
    let mut state = game();
    for _ in 0..16 {
        state.step(16, &[]);
    }
    // 256ms: not yet past the 270ms interval.
    assert_eq!(state.active().y, 0);

    state.step(16, &[]);
    assert_eq!(state.active().y, 1);
    assert_eq!(state.fall_timer_ms(), 0);
}

#[test]
fn test_commands_move_and_rotate() {
    let mut state = game().with_active(Piece::spawn(ShapeKind::T, 5, 10));

    state.step(0, &[Command::MoveLeft]);
    assert_eq!(state.active().x, 4);

    state.step(0, &[Command::MoveRight, Command::MoveRight]);
    assert_eq!(state.active().x, 6);

    state.step(0, &[Command::SoftDrop]);
    assert_eq!(state.active().y, 11);

    state.step(0, &[Command::Rotate]);
    assert_eq!(state.active().rotation, 1);
}

#[test]
fn test_blocked_move_is_reverted() {
    // Vertical I against the left wall.
    let mut state = game().with_active(Piece::spawn(ShapeKind::I, 0, 10));
    state.step(0, &[Command::MoveLeft]);
    assert_eq!(state.active().x, 0);
}

#[test]
fn test_difficulty_ramp_after_one_period() {
    let mut state = game();
    state.step(5000, &[]);
    assert_eq!(state.fall_interval_ms(), 270);

    state.step(1, &[]);
    assert_eq!(state.fall_interval_ms(), 265);
    assert!((state.fall_speed_seconds() - 0.265).abs() < 1e-6);
    assert_eq!(state.level_timer_ms(), 0);
}

#[test]
fn test_difficulty_ramp_from_default_reaches_floor() {
    let mut state = game();
    for period in 1..=45u32 {
        state.step(5001, &[]);
        let expected = 270u32.saturating_sub(5 * period).max(120);
        assert_eq!(state.fall_interval_ms(), expected, "period {period}");
    }
    assert!(!state.game_over());
    assert!((state.fall_speed_seconds() - 0.12).abs() < 1e-6);
}

#[test]
fn test_difficulty_ramp_stops_at_floor() {
    let config = GameConfig {
        initial_fall_ms: 130,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config);
    for _ in 0..4 {
        state.step(5001, &[]);
    }
    assert_eq!(state.fall_interval_ms(), 120);
}

#[test]
fn test_lock_scores_two_rows() {
    let mut locked = LockedCells::new();
    for y in [18, 19] {
        for x in 1..BOARD_WIDTH as i8 {
            locked.insert(x, y, GRAY);
        }
    }
    // Vertical I resting in the gap at column 0 (rows 16-19).
    let mut state = game()
        .with_locked(locked)
        .with_active(Piece::spawn(ShapeKind::I, 0, 20));

    state.step(271, &[]);

    assert_eq!(state.score(), 20);
    assert_eq!(
        state.take_last_event(),
        Some(LockEvent {
            rows_cleared: 2,
            points: 20
        })
    );
    // The two I cells above the cleared rows drop into them.
    assert_eq!(state.locked().len(), 2);
    assert!(state.locked().contains(0, 18));
    assert!(state.locked().contains(0, 19));
}

#[test]
fn test_lock_without_clear_scores_nothing() {
    let mut state = game().with_active(Piece::spawn(ShapeKind::O, 5, 20));
    state.step(271, &[]);
    assert_eq!(state.score(), 0);
    assert_eq!(state.locked().len(), 4);
    assert_eq!(
        state.take_last_event(),
        Some(LockEvent {
            rows_cleared: 0,
            points: 0
        })
    );
}

#[test]
fn test_next_piece_is_promoted_on_lock() {
    let mut state = game().with_active(Piece::spawn(ShapeKind::O, 5, 20));
    let queued = state.next();
    state.step(271, &[]);
    assert_eq!(state.active(), queued);
}

#[test]
fn test_soft_drop_alone_never_locks() {
    let resting = Piece::spawn(ShapeKind::O, 5, 20);
    let mut state = game().with_active(resting);
    for _ in 0..10 {
        state.step(0, &[Command::SoftDrop]);
    }
    assert_eq!(state.active(), resting);
    assert!(state.locked().is_empty());
}

#[test]
fn test_loss_with_cells_in_top_row() {
    let mut locked = LockedCells::new();
    locked.insert(3, 0, GRAY);
    locked.insert(7, 0, GRAY);
    let mut state = game().with_locked(locked);

    assert_eq!(state.step(16, &[]), Phase::GameOver);
    assert!(state.game_over());
    assert!(state.snapshot().game_over);
}

#[test]
fn test_no_loss_below_top_row() {
    let mut locked = LockedCells::new();
    locked.insert(3, 1, GRAY);
    let mut state = game().with_locked(locked);
    assert_eq!(state.step(16, &[]), Phase::Falling);
}

#[test]
fn test_snapshot_paints_active_piece_only_on_display_board() {
    let mut state = game().with_active(Piece::spawn(ShapeKind::T, 5, 10));
    state.step(0, &[]);

    let snap = state.snapshot();
    let painted = snap.board.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(painted, 4);
    assert!(state.locked().is_empty());
    assert_eq!(snap.next, state.next().kind);
}

#[test]
fn test_high_score_is_carried_into_snapshot() {
    let state = game().with_high_score(420);
    assert_eq!(state.high_score(), 420);
    assert_eq!(state.snapshot().high_score, 420);
}

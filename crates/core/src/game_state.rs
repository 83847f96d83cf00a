//! Game state module - the frame-driven state machine
//!
//! One call to [`GameState::step`] is one frame. Within a frame the state
//! rebuilds the board from the locked cells, advances the accumulators, applies
//! gravity and player commands, locks the piece if gravity could not move it,
//! clears rows, and finally checks for a loss.

use crate::config::GameConfig;
use crate::grid::{Grid, LockedCells};
use crate::line_clear::clear_completed_rows;
use crate::piece::Piece;
use crate::placement::is_valid;
use crate::rng::ShapePicker;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::Command;

/// Result of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
}

/// Coarse game phase reported after every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    locked: LockedCells,
    /// Board shown for the current frame (locked cells plus the active piece)
    grid: Grid,
    active: Piece,
    next: Piece,
    picker: ShapePicker,
    score: u32,
    high_score: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    level_timer_ms: u32,
    lock_pending: bool,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game; the active and next pieces are drawn immediately
    pub fn new(config: GameConfig) -> Self {
        let mut picker = ShapePicker::new(config.seed);
        let active = Piece::spawn(picker.draw(), config.spawn_x, config.spawn_y);
        let next = Piece::spawn(picker.draw(), config.spawn_x, config.spawn_y);

        Self {
            config,
            locked: LockedCells::new(),
            grid: Grid::new(),
            active,
            next,
            picker,
            score: 0,
            high_score: 0,
            fall_interval_ms: config.initial_fall_ms,
            fall_timer_ms: 0,
            level_timer_ms: 0,
            lock_pending: false,
            game_over: false,
            last_event: None,
        }
    }

    /// Set the high score shown next to the current score
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Start from an existing set of locked cells
    pub fn with_locked(mut self, locked: LockedCells) -> Self {
        self.grid = Grid::build(&locked);
        self.locked = locked;
        self
    }

    /// Replace the active piece
    pub fn with_active(mut self, piece: Piece) -> Self {
        self.active = piece;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Gravity interval in seconds (0.27 at the start of a game)
    pub fn fall_speed_seconds(&self) -> f32 {
        self.fall_interval_ms as f32 / 1000.0
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn level_timer_ms(&self) -> u32 {
        self.level_timer_ms
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn locked(&self) -> &LockedCells {
        &self.locked
    }

    /// Board as displayed for the last frame
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Falling
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance one frame.
    ///
    /// `elapsed_ms` is the real time since the previous frame; `commands` are
    /// the key presses polled for this frame, applied in order. Does nothing
    /// once the game is over.
    pub fn step(&mut self, elapsed_ms: u32, commands: &[Command]) -> Phase {
        if self.game_over {
            return Phase::GameOver;
        }

        let board = Grid::build(&self.locked);
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        self.level_timer_ms = self.level_timer_ms.saturating_add(elapsed_ms);

        self.ramp_difficulty();
        self.apply_gravity(&board);

        for &command in commands {
            self.apply_command(command, &board);
        }

        // Display-only projection of the active piece.
        self.grid = board;
        let color = self.active.color();
        for (x, y) in self.active.occupied_cells() {
            if y >= 0 {
                self.grid.paint(x, y, color);
            }
        }

        if self.lock_pending {
            self.lock_active();
        }

        if self.has_lost() {
            self.game_over = true;
        }
        self.phase()
    }

    /// Speed gravity up once per ramp period, never past the floor
    fn ramp_difficulty(&mut self) {
        if self.level_timer_ms > self.config.ramp_period_ms {
            self.level_timer_ms = 0;
            self.fall_interval_ms = self
                .fall_interval_ms
                .saturating_sub(self.config.fall_ramp_step_ms)
                .max(self.config.min_fall_ms);
        }
    }

    fn apply_gravity(&mut self, board: &Grid) {
        if self.fall_timer_ms <= self.fall_interval_ms {
            return;
        }
        self.fall_timer_ms = 0;
        self.active = self.active.translate(0, 1);
        if !is_valid(&self.active, board) && self.active.y > 0 {
            self.active = self.active.translate(0, -1);
            self.lock_pending = true;
        }
    }

    /// Apply one player command against `board`, reverting it if the result
    /// is not a legal placement. Returns whether the piece moved.
    pub fn apply_command(&mut self, command: Command, board: &Grid) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0, board),
            Command::MoveRight => self.try_move(1, 0, board),
            Command::SoftDrop => self.try_move(0, 1, board),
            Command::Rotate => self.try_rotate(board),
        }
    }

    fn try_move(&mut self, dx: i8, dy: i8, board: &Grid) -> bool {
        let moved = self.active.translate(dx, dy);
        if is_valid(&moved, board) {
            self.active = moved;
            true
        } else {
            false
        }
    }

    fn try_rotate(&mut self, board: &Grid) -> bool {
        self.active = self.active.rotate_next();
        if is_valid(&self.active, board) {
            return true;
        }
        self.active = self.active.rotate_previous();
        false
    }

    /// Lock the active piece, promote the next one and clear rows
    fn lock_active(&mut self) {
        let color = self.active.color();
        for (x, y) in self.active.occupied_cells() {
            self.locked.insert(x, y, color);
        }

        self.active = self.next;
        self.next = Piece::spawn(self.picker.draw(), self.config.spawn_x, self.config.spawn_y);
        self.lock_pending = false;

        let board = Grid::build(&self.locked);
        let rows_cleared = clear_completed_rows(&board, &mut self.locked);
        let points = rows_cleared * self.config.points_per_row;
        self.score = self.score.saturating_add(points);
        self.last_event = Some(LockEvent {
            rows_cleared,
            points,
        });
    }

    /// True once any locked cell sits in the top row or above it
    pub fn has_lost(&self) -> bool {
        self.locked.reaches_row(1)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next.kind;
        out.score = self.score;
        out.high_score = self.high_score;
        out.fall_interval_ms = self.fall_interval_ms;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

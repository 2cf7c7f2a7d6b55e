//! Session module - turn-by-turn state transitions and the status machine
//!
//! Ties the board, piece catalog, scoring and piece source together. All
//! updates that belong to one transition (score, lines, level, gravity
//! interval, lookahead) happen in a single lock path so the session can
//! never be observed half-updated.

use crate::core::pieces::{shape_of, Shape};
use crate::core::rng::{PieceSource, UniformPieceSource};
use crate::core::scoring;
use crate::core::Board;
use crate::types::{GameAction, GameStatus, PieceKind, RotationDir, BASE_DROP_MS, BOARD_WIDTH};

/// The falling tetromino: kind, current (post-rotation) shape matrix and the
/// board position of the matrix's top-left cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// New piece at the spawn position: horizontally centered, top row
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: (BOARD_WIDTH / 2 - 2) as i8,
            y: 0,
        }
    }
}

/// Notable transition outcome, consumed by the outer loop (coach triggers,
/// status messages). At most one event is produced per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A lock cleared `rows` full lines; `level_up` marks a level increase
    LinesCleared { rows: u32, level_up: bool },
    /// A piece would have locked at the spawn row; the session is over
    ToppedOut,
}

/// Complete game session state
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<PieceKind>,
    source: Box<dyn PieceSource + Send>,
    score: u32,
    lines: u32,
    level: u32,
    status: GameStatus,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    last_event: Option<SessionEvent>,
}

impl GameSession {
    /// Create an idle session with the given piece source
    pub fn new(source: Box<dyn PieceSource + Send>) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            source,
            score: 0,
            lines: 0,
            level: 0,
            status: GameStatus::Idle,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            last_event: None,
        }
    }

    /// Create an idle session with a seeded uniform piece source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Box::new(UniformPieceSource::new(seed)))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Take and clear the last transition event
    pub fn take_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Start or restart the session.
    ///
    /// Legal only from IDLE or GAME_OVER; otherwise a no-op. Clears the
    /// board, zeroes score/lines/level, restores the base gravity interval
    /// and draws the active and lookahead pieces.
    pub fn reset(&mut self) -> bool {
        match self.status {
            GameStatus::Idle | GameStatus::GameOver => {}
            _ => return false,
        }

        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.last_event = None;

        let first = self.source.next_kind();
        self.active = Some(ActivePiece::spawn(first));
        self.next = Some(self.source.next_kind());
        self.status = GameStatus::Playing;
        true
    }

    /// Toggle between PLAYING and PAUSED; no-op in other states.
    ///
    /// Pausing freezes the gravity timer in place; resuming keeps the
    /// interval of the current level.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                true
            }
            _ => false,
        }
    }

    /// Apply a player intent. Manual piece actions are rejected unless the
    /// session is PLAYING; illegal moves are rejected silently.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => self.reset(),
            GameAction::TogglePause => self.toggle_pause(),
            _ if self.status != GameStatus::Playing => false,
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => {
                self.descend();
                true
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(RotationDir::Clockwise),
            GameAction::RotateCcw => self.rotate(RotationDir::CounterClockwise),
        }
    }

    /// Advance time. One automatic descent fires when the accumulated time
    /// reaches the current gravity interval. Returns true if a descent ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            self.descend();
            return true;
        }
        false
    }

    /// Try to shift the active piece horizontally
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        if self.board.collides(&active.shape, active.x, active.y, dx, 0) {
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.x += dx;
        }
        true
    }

    /// Rotate the active piece, resolving blocked rotations with the
    /// alternating horizontal kick search (+1, -2, +3, -4, ...).
    ///
    /// The search aborts once the offset magnitude exceeds the rotated
    /// shape's row width; the piece then keeps its pre-rotation shape and
    /// position entirely.
    pub fn rotate(&mut self, dir: RotationDir) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let rotated = active.shape.rotated(dir);
        let y = active.y;
        let mut x = active.x;
        let mut offset: i8 = 1;

        while self.board.collides(&rotated, x, y, 0, 0) {
            x += offset;
            offset = -(offset + if offset > 0 { 1 } else { -1 });
            if offset.unsigned_abs() as usize > rotated.width() {
                return false;
            }
        }

        if let Some(active) = self.active.as_mut() {
            active.shape = rotated;
            active.x = x;
        }
        true
    }

    /// Drop the active piece to its resting row and lock it immediately,
    /// awarding a bonus point per row fallen.
    pub fn hard_drop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let mut fallen: i8 = 0;
        while !self
            .board
            .collides(&active.shape, active.x, active.y, 0, fallen + 1)
        {
            fallen += 1;
        }
        let topped_out = active.y + fallen < 1;

        if let Some(active) = self.active.as_mut() {
            active.y += fallen;
        }

        if topped_out {
            self.top_out();
        } else {
            self.lock_and_advance(scoring::hard_drop_bonus(fallen as u32));
        }
        true
    }

    /// One descent step: fall one row, or lock when resting. A piece that
    /// would lock while still at the spawn row ends the session instead.
    fn descend(&mut self) {
        let (can_fall, at_top) = match self.active.as_ref() {
            Some(p) => (
                !self.board.collides(&p.shape, p.x, p.y, 0, 1),
                p.y < 1,
            ),
            None => return,
        };

        if can_fall {
            if let Some(active) = self.active.as_mut() {
                active.y += 1;
            }
        } else if at_top {
            self.top_out();
        } else {
            self.lock_and_advance(0);
        }
    }

    fn top_out(&mut self) {
        self.status = GameStatus::GameOver;
        self.last_event = Some(SessionEvent::ToppedOut);
    }

    /// The single lock path: merge the piece, compact full rows, update
    /// score/lines/level/gravity together, then promote the lookahead.
    fn lock_and_advance(&mut self, bonus: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.stamp(&piece.shape, piece.x, piece.y, piece.kind);
        let cleared = self.board.clear_full_rows().len();

        // Reward uses the level at clear time, before any promotion.
        self.score = self
            .score
            .saturating_add(scoring::line_score(cleared, self.level))
            .saturating_add(bonus);

        if cleared > 0 {
            self.lines += cleared as u32;
            let new_level = scoring::level_for_lines(self.lines);
            let level_up = new_level > self.level;
            if level_up {
                self.level = new_level;
                self.drop_interval_ms = scoring::drop_interval_ms(new_level);
            }
            self.last_event = Some(SessionEvent::LinesCleared {
                rows: cleared as u32,
                level_up,
            });
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        self.active = Some(ActivePiece::spawn(kind));
        self.next = Some(self.source.next_kind());
    }

    /// Row where the active piece would rest if dropped now.
    ///
    /// Pure read: scans downward from the current row to the last
    /// collision-free row without touching piece or board.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active.as_ref()?;
        let mut ghost = active.y;
        while !self.board.collides(&active.shape, active.x, ghost, 0, 1) {
            ghost += 1;
        }
        Some(ghost)
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

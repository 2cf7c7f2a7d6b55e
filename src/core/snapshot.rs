//! Snapshot module - read-only session projection for renderers and the coach
//!
//! A snapshot is taken once per frame (or per coach request) so consumers
//! never hold references into the live session.

use crate::core::session::GameSession;
use crate::types::{GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Point-in-time copy of the observable session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Locked cells only (0 = empty, 1-7 = piece kind code); the active
    /// piece is not part of the grid
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut board = [[0u8; BOARD_WIDTH]; BOARD_HEIGHT];
        self.board().write_code_grid(&mut board);
        SessionSnapshot {
            board,
            score: self.score(),
            level: self.level(),
            lines: self.lines(),
            status: self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedPieceSource;
    use crate::types::{GameAction, PieceKind};

    #[test]
    fn test_snapshot_reflects_locked_cells_only() {
        let mut session =
            GameSession::new(Box::new(ScriptedPieceSource::new(vec![PieceKind::O])));
        session.reset();

        // Active piece is not in the grid before locking.
        let snap = session.snapshot();
        assert!(snap.board.iter().flatten().all(|&c| c == 0));

        session.apply_action(GameAction::HardDrop);
        let snap = session.snapshot();
        assert_eq!(snap.board[19][3], PieceKind::O.code());
        assert_eq!(snap.board[19][4], PieceKind::O.code());
        assert_eq!(snap.score, session.score());
        assert_eq!(snap.status, GameStatus::Playing);
    }
}

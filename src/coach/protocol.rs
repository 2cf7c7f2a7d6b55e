//! Coach protocol - JSON wire types for the advice service
//!
//! The coach endpoint receives the locked board as a 2D occupancy grid plus
//! the session counters, and answers with one short line of advice. The
//! canned strings below cover every situation where no fetch happens or a
//! fetch degrades.

use serde::{Deserialize, Serialize};

use crate::core::SessionSnapshot;

/// Shown while the session is idle, before the first game
pub const READY_ADVICE: &str = "Ready to play? Let's see your moves.";
/// Shown right after a reset, before the coach has anything to react to
pub const START_ADVICE: &str = "Focus on the foundations. Keep it flat.";
/// Shown on top-out; no fetch is made for a finished board
pub const GAME_OVER_ADVICE: &str = "Game over! Don't let the blocks bury your spirit. Try again?";
/// Substituted for any transport or decode failure
pub const FALLBACK_ADVICE: &str = "The coach is pondering its own existence. Just keep playing!";
/// Substituted when the service answers successfully but with empty text
pub const EMPTY_RESPONSE_ADVICE: &str = "Keep calm and drop blocks.";

/// Request body sent to the coach endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// 20 rows of 10 characters each: '.' empty, 'X' occupied
    pub board: Vec<String>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl AdviceRequest {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let board = snapshot
            .board
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| if code == 0 { '.' } else { 'X' })
                    .collect()
            })
            .collect();
        Self {
            board,
            score: snapshot.score,
            level: snapshot.level,
            lines: snapshot.lines,
        }
    }
}

/// Response body from the coach endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, ScriptedPieceSource};
    use crate::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_request_renders_occupancy_rows() {
        let mut session =
            GameSession::new(Box::new(ScriptedPieceSource::new(vec![PieceKind::O])));
        session.reset();
        session.apply_action(GameAction::HardDrop);

        let request = AdviceRequest::from_snapshot(&session.snapshot());
        assert_eq!(request.board.len(), BOARD_HEIGHT);
        assert!(request.board.iter().all(|row| row.len() == BOARD_WIDTH));
        // O locked at the bottom left-of-center: columns 3-4 of rows 18-19.
        assert_eq!(request.board[19], "...XX.....");
        assert_eq!(request.board[18], "...XX.....");
        assert_eq!(request.board[0], "..........");
    }

    #[test]
    fn test_request_serde_roundtrip() {
        let request = AdviceRequest {
            board: vec!["..........".to_string(); 20],
            score: 1240,
            level: 3,
            lines: 31,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: AdviceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_response_decodes_minimal_payload() {
        let response: AdviceResponse =
            serde_json::from_str(r#"{"advice":"Flatten the left side."}"#).unwrap();
        assert_eq!(response.advice, "Flatten the left side.");
    }
}

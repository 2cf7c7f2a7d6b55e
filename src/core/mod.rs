//! Core module - pure game rules with no I/O dependencies
//!
//! Everything in here is deterministic given a piece source: board storage
//! and collision, the tetromino catalog and rotation, scoring, and the
//! session controller that ties them together.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use board::Board;
pub use pieces::{shape_of, Shape};
pub use rng::{PieceSource, ScriptedPieceSource, UniformPieceSource};
pub use session::{ActivePiece, GameSession, SessionEvent};
pub use snapshot::SessionSnapshot;

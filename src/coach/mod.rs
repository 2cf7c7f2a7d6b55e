//! Coach module - best-effort advice from an external LLM service
//!
//! Strictly display-only: nothing in here can affect board, score or
//! status, and no failure propagates past the bridge boundary.

pub mod bridge;
pub mod client;
pub mod protocol;

pub use bridge::CoachBridge;
pub use client::{fetch_advice, CoachConfig};
pub use protocol::{
    AdviceRequest, AdviceResponse, EMPTY_RESPONSE_ADVICE, FALLBACK_ADVICE, GAME_OVER_ADVICE,
    READY_ADVICE, START_ADVICE,
};

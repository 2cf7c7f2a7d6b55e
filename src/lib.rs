//! neontris - terminal falling-block puzzle with an LLM strategy coach
//!
//! The simulation core lives in [`core`]: a 10x20 board, the seven-piece
//! catalog, matrix rotation with a horizontal kick search, line clearing
//! and scoring, and the session status machine. The [`coach`] module talks
//! to an external advice service without ever touching game state, and
//! [`term`]/[`input`] provide the thin terminal front end.

pub mod coach;
pub mod core;
pub mod input;
pub mod term;
pub mod types;

//! Terminal module - frame buffer, view projection and raw-mode output

pub mod frame;
pub mod renderer;
pub mod view;

pub use frame::{Frame, Glyph};
pub use renderer::TerminalRenderer;
pub use view::{GameView, FRAME_HEIGHT, FRAME_WIDTH};

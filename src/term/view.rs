//! GameView: maps the session and the current advice into a frame
//!
//! Pure projection, no I/O. Board cells are two columns wide to compensate
//! for the terminal glyph aspect ratio.

use crossterm::style::Color;

use crate::core::pieces::shape_of;
use crate::core::GameSession;
use crate::term::frame::{Frame, Glyph};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board cell width in terminal columns
const CELL_W: u16 = 2;
/// Left edge of the side panel
const PANEL_X: u16 = (BOARD_WIDTH as u16) * CELL_W + 4;
/// Width reserved for panel text
const PANEL_W: u16 = 26;

/// Total frame dimensions
pub const FRAME_WIDTH: u16 = PANEL_X + PANEL_W;
pub const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

/// Greedy word wrap; words longer than the width are hard-split.
/// Widths are counted in chars so multi-byte advice text cannot panic.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(chars[..width].iter().collect());
            chars.drain(..width);
        }
        if chars.is_empty() {
            continue;
        }

        if line_len == 0 {
            line.extend(chars.iter());
            line_len = chars.len();
        } else if line_len + 1 + chars.len() <= width {
            line.push(' ');
            line.extend(chars.iter());
            line_len += 1 + chars.len();
        } else {
            lines.push(std::mem::take(&mut line));
            line.extend(chars.iter());
            line_len = chars.len();
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Renders the session into a fixed-size frame
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, session: &GameSession, advice: &str) -> Frame {
        let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);

        self.draw_border(&mut frame);
        self.draw_board(&mut frame, session);
        self.draw_ghost(&mut frame, session);
        self.draw_active(&mut frame, session);
        self.draw_panel(&mut frame, session, advice);
        self.draw_overlay(&mut frame, session);

        frame
    }

    fn cell_origin(&self, bx: u16, by: u16) -> (u16, u16) {
        (1 + bx * CELL_W, 1 + by)
    }

    fn fill_cell(&self, frame: &mut Frame, bx: u16, by: u16, ch: char, color: Color, dim: bool) {
        let (x, y) = self.cell_origin(bx, by);
        for dx in 0..CELL_W {
            frame.put(x + dx, y, Glyph { ch, color, dim });
        }
    }

    fn draw_border(&self, frame: &mut Frame) {
        let w = (BOARD_WIDTH as u16) * CELL_W + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        let color = Color::Grey;

        for x in 0..w {
            frame.put_char(x, 0, '─', color);
            frame.put_char(x, h - 1, '─', color);
        }
        for y in 0..h {
            frame.put_char(0, y, '│', color);
            frame.put_char(w - 1, y, '│', color);
        }
        frame.put_char(0, 0, '┌', color);
        frame.put_char(w - 1, 0, '┐', color);
        frame.put_char(0, h - 1, '└', color);
        frame.put_char(w - 1, h - 1, '┘', color);
    }

    fn draw_board(&self, frame: &mut Frame, session: &GameSession) {
        for by in 0..BOARD_HEIGHT as i8 {
            for bx in 0..BOARD_WIDTH as i8 {
                match session.board().get(bx, by).flatten() {
                    Some(kind) => self.fill_cell(
                        frame,
                        bx as u16,
                        by as u16,
                        '█',
                        kind_color(kind),
                        false,
                    ),
                    None => {
                        // Faint grid dot in the right half of each cell.
                        let (x, y) = self.cell_origin(bx as u16, by as u16);
                        frame.put(
                            x + 1,
                            y,
                            Glyph {
                                ch: '.',
                                color: Color::DarkGrey,
                                dim: true,
                            },
                        );
                    }
                }
            }
        }
    }

    fn draw_ghost(&self, frame: &mut Frame, session: &GameSession) {
        let (Some(active), Some(ghost_y)) = (session.active(), session.ghost_y()) else {
            return;
        };
        for (dx, dy) in active.shape.occupied() {
            let x = active.x + dx;
            let y = ghost_y + dy;
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.fill_cell(frame, x as u16, y as u16, '░', Color::DarkGrey, true);
            }
        }
    }

    fn draw_active(&self, frame: &mut Frame, session: &GameSession) {
        let Some(active) = session.active() else {
            return;
        };
        for (dx, dy) in active.shape.occupied() {
            let x = active.x + dx;
            let y = active.y + dy;
            // Cells above the visible grid are clipped.
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.fill_cell(frame, x as u16, y as u16, '█', kind_color(active.kind), false);
            }
        }
    }

    fn draw_panel(&self, frame: &mut Frame, session: &GameSession, advice: &str) {
        let x = PANEL_X;
        frame.put_str(x, 1, &format!("SCORE  {}", session.score()), Color::White);
        frame.put_str(x, 2, &format!("LEVEL  {}", session.level()), Color::White);
        frame.put_str(x, 3, &format!("LINES  {}", session.lines()), Color::White);

        frame.put_str(x, 5, "NEXT", Color::Grey);
        if let Some(kind) = session.next_kind() {
            let shape = shape_of(kind);
            for (dx, dy) in shape.occupied() {
                let px = x + (dx as u16) * CELL_W;
                let py = 6 + dy as u16;
                for i in 0..CELL_W {
                    frame.put_char(px + i, py, '█', kind_color(kind));
                }
            }
        }

        frame.put_str(x, 11, "COACH", Color::Grey);
        let width = PANEL_W.saturating_sub(1) as usize;
        for (i, line) in wrap_text(advice, width).into_iter().take(6).enumerate() {
            frame.put_str(x, 12 + i as u16, &line, Color::Cyan);
        }

        frame.put_str(x, 19, "arrows move  space drop", Color::DarkGrey);
        frame.put_str(x, 20, "p pause  r start  q quit", Color::DarkGrey);
    }

    fn draw_overlay(&self, frame: &mut Frame, session: &GameSession) {
        let lines: Vec<String> = match session.status() {
            GameStatus::Idle => vec![
                "NEON TETRIS".to_string(),
                "press r to start".to_string(),
            ],
            GameStatus::Paused => vec!["PAUSED".to_string()],
            GameStatus::GameOver => vec![
                "GAME OVER".to_string(),
                format!("final score {}", session.score()),
                "press r to reboot".to_string(),
            ],
            GameStatus::Playing => return,
        };

        let board_w = (BOARD_WIDTH as u16) * CELL_W + 2;
        let mid_y = FRAME_HEIGHT / 2 - lines.len() as u16 / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = board_w.saturating_sub(line.len() as u16) / 2;
            frame.put_str(x, mid_y + i as u16, line, Color::White);
        }
    }
}

//! Terminal renderer - thin drawing glue over a state snapshot

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::game::{Position, Snapshot};

const HEAD: &str = "■ ";
const BODY: &str = "□ ";
const FOOD: &str = "O ";
const EMPTY: &str = "· ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame. The field spans `grid_size + 1` cells per axis, the
    /// same inclusive coordinate range the simulation uses.
    pub fn draw<W: Write>(&self, out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            out,
            Print(format!(
                "score: {}   (arrows/wasd to steer, r to restart, q to quit)",
                snapshot.score
            ))
        )?;

        let extent = drawable_extent(snapshot.grid_size);
        for y in 0..=extent {
            queue!(out, MoveTo(0, (y + 1) as u16))?;
            for x in 0..=extent {
                let pos = Position::new(x, y);
                let cell = if pos == snapshot.head {
                    HEAD
                } else if snapshot.tail.contains(&pos) {
                    BODY
                } else if pos == snapshot.food {
                    FOOD
                } else {
                    EMPTY
                };
                queue!(out, Print(cell))?;
            }
        }

        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest cell index the cursor can still address; the header takes row 0,
/// so cell rows run from 1 to `u16::MAX`. Cells past this are not drawn.
fn drawable_extent(grid_size: i32) -> i32 {
    grid_size.min(i32::from(u16::MAX) - 1)
}

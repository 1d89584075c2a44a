use macroquad::prelude::*;

mod palette;

pub use palette::{DEFAULT_DEAD, DEFAULT_LIVE, Palette};

use crate::application::GameState;
use crate::domain::GridEngine;
use crate::ui::{MENU_BAR_HEIGHT, MENU_TITLE_WIDTH};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Maps logical cells to pixels: each cell is a `cell_size` square and
/// neighbours are `cell_size + cell_gap` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    cell_size: f32,
    cell_gap: f32,
    origin: Vec2,
}

impl BoardLayout {
    /// Board drawn directly under the menu bar
    pub fn new(cell_size: u32, cell_gap: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
            cell_gap: cell_gap as f32,
            origin: vec2(0.0, MENU_BAR_HEIGHT),
        }
    }

    pub fn pitch(&self) -> f32 {
        self.cell_size + self.cell_gap
    }

    /// Side of a `size` board in pixels
    pub fn extent(&self, size: usize) -> f32 {
        size as f32 * self.pitch()
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            self.origin.x + x as f32 * self.pitch(),
            self.origin.y + y as f32 * self.pitch(),
            self.cell_size,
            self.cell_size,
        )
    }

    /// Logical cell under a screen position, gaps included
    pub fn cell_at(&self, pos: (f32, f32), size: usize) -> Option<(usize, usize)> {
        let dx = pos.0 - self.origin.x;
        let dy = pos.1 - self.origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let (x, y) = ((dx / self.pitch()) as usize, (dy / self.pitch()) as usize);
        (x < size && y < size).then_some((x, y))
    }
}

/// Fill the board with the dead colour and paint live cells over it
pub fn draw_board(engine: &GridEngine, palette: &Palette, layout: &BoardLayout) {
    let side = layout.extent(engine.size());
    draw_rectangle(layout.origin.x, layout.origin.y, side, side, palette.dead());

    let size = engine.size();
    for y in 0..size {
        for x in 0..size {
            if engine.is_alive(x, y) {
                let r = layout.cell_rect(x, y);
                draw_rectangle(r.x, r.y, r.w, r.h, palette.live());
            }
        }
    }
}

/// Generation, population and timer state to the right of the menus
pub fn draw_status(state: &GameState, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    let engine = &state.engine;
    let mut status = format!(
        "Gen {}  Pop {}  {}  {}",
        engine.generation(),
        format_number(engine.population()),
        state.speed.name(),
        if state.is_running() { "Running" } else { "Paused" },
    );
    if let Some((x, y)) = layout.cell_at(mouse_pos, engine.size()) {
        status.push_str(&format!("  ({x}, {y})"));
    }

    let color = if state.is_running() {
        Color::new(0.0, 1.0, 0.6, 1.0)
    } else {
        Color::new(1.0, 0.65, 0.0, 1.0)
    };
    draw_text(&status, 3.0 * MENU_TITLE_WIDTH + 12.0, MENU_BAR_HEIGHT - 9.0, 16.0, color);
}

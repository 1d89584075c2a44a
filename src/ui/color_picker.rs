use macroquad::prelude::*;

use crate::application::Command;

const SWATCH: f32 = 28.0;
const GAP: f32 = 6.0;
const PADDING: f32 = 10.0;
const TITLE_HEIGHT: f32 = 24.0;
const COLUMNS: usize = 4;

/// Colours offered by the chooser
pub const SWATCHES: [(&str, Color); 12] = [
    ("Red", Color::new(1.0, 0.0, 0.0, 1.0)),
    ("Orange", Color::new(1.0, 0.65, 0.0, 1.0)),
    ("Yellow", Color::new(1.0, 1.0, 0.0, 1.0)),
    ("Green", Color::new(0.0, 1.0, 0.0, 1.0)),
    ("Cyan", Color::new(0.0, 1.0, 1.0, 1.0)),
    ("Blue", Color::new(0.0, 0.0, 1.0, 1.0)),
    ("Magenta", Color::new(1.0, 0.0, 1.0, 1.0)),
    ("Pink", Color::new(1.0, 0.69, 0.69, 1.0)),
    ("White", Color::new(1.0, 1.0, 1.0, 1.0)),
    ("Light gray", Color::new(0.75, 0.75, 0.75, 1.0)),
    ("Dark gray", Color::new(0.25, 0.25, 0.25, 1.0)),
    ("Black", Color::new(0.0, 0.0, 0.0, 1.0)),
];

/// Which palette entry a chooser edits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerTarget {
    Foreground,
    Background,
}

impl PickerTarget {
    pub fn title(&self) -> &'static str {
        match self {
            PickerTarget::Foreground => "Choose cell colour",
            PickerTarget::Background => "Choose background colour",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerOutcome {
    Chosen(Color),
    Cancelled,
}

impl PickerOutcome {
    /// A cancelled chooser still yields a command; the palette ignores `None`.
    pub fn into_command(self, target: PickerTarget) -> Command {
        let color = match self {
            PickerOutcome::Chosen(color) => Some(color),
            PickerOutcome::Cancelled => None,
        };
        match target {
            PickerTarget::Foreground => Command::SetLiveColor(color),
            PickerTarget::Background => Command::SetDeadColor(color),
        }
    }
}

/// Modal swatch grid standing in for a full colour dialog
#[derive(Clone, Debug)]
pub struct ColorPicker {
    target: PickerTarget,
    current: Color,
    x: f32,
    y: f32,
}

impl ColorPicker {
    pub fn open(target: PickerTarget, current: Color, center: (f32, f32)) -> Self {
        Self {
            target,
            current,
            x: center.0 - Self::width() / 2.0,
            y: center.1 - Self::height() / 2.0,
        }
    }

    pub fn width() -> f32 {
        PADDING * 2.0 + COLUMNS as f32 * SWATCH + (COLUMNS - 1) as f32 * GAP
    }

    pub fn height() -> f32 {
        let rows = SWATCHES.len().div_ceil(COLUMNS);
        TITLE_HEIGHT + PADDING * 2.0 + rows as f32 * SWATCH + (rows - 1) as f32 * GAP
    }

    pub fn target(&self) -> PickerTarget {
        self.target
    }

    fn swatch_origin(&self, index: usize) -> (f32, f32) {
        let (col, row) = (index % COLUMNS, index / COLUMNS);
        (
            self.x + PADDING + col as f32 * (SWATCH + GAP),
            self.y + TITLE_HEIGHT + PADDING + row as f32 * (SWATCH + GAP),
        )
    }

    pub fn swatch_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        (0..SWATCHES.len()).find(|&i| {
            let (sx, sy) = self.swatch_origin(i);
            mouse_pos.0 >= sx
                && mouse_pos.0 <= sx + SWATCH
                && mouse_pos.1 >= sy
                && mouse_pos.1 <= sy + SWATCH
        })
    }

    fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        Rect::new(self.x, self.y, Self::width(), Self::height())
            .contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Poll input; Escape cancels
    pub fn update(&self, mouse_pos: (f32, f32)) -> Option<PickerOutcome> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PickerOutcome::Cancelled);
        }
        self.handle_click(mouse_pos, is_mouse_button_pressed(MouseButton::Left))
    }

    pub fn handle_click(&self, mouse_pos: (f32, f32), pressed: bool) -> Option<PickerOutcome> {
        if !pressed {
            return None;
        }
        match self.swatch_at(mouse_pos) {
            Some(index) => Some(PickerOutcome::Chosen(SWATCHES[index].1)),
            None if !self.contains(mouse_pos) => Some(PickerOutcome::Cancelled),
            None => None,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let background = Color::new(0.15, 0.15, 0.15, 0.95);
        draw_rectangle(self.x, self.y, Self::width(), Self::height(), background);
        draw_rectangle_lines(self.x, self.y, Self::width(), Self::height(), 2.0, WHITE);
        draw_text(self.target.title(), self.x + PADDING, self.y + 18.0, 16.0, WHITE);

        let hovered = self.swatch_at(mouse_pos);
        for (i, (_, color)) in SWATCHES.iter().enumerate() {
            let (sx, sy) = self.swatch_origin(i);
            draw_rectangle(sx, sy, SWATCH, SWATCH, *color);
            if *color == self.current {
                draw_rectangle_lines(sx - 2.0, sy - 2.0, SWATCH + 4.0, SWATCH + 4.0, 2.0, WHITE);
            }
            if hovered == Some(i) {
                draw_rectangle_lines(sx, sy, SWATCH, SWATCH, 2.0, YELLOW);
            }
        }

        if let Some(i) = hovered {
            draw_text(SWATCHES[i].0, self.x + PADDING, self.y + Self::height() - 2.0, 14.0, GRAY);
        }
    }
}

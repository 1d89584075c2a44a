use macroquad::prelude::Color;

pub const DEFAULT_LIVE: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const DEFAULT_DEAD: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Live and dead cell colours for one board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    live: Color,
    dead: Color,
}

impl Palette {
    pub const fn new(live: Color, dead: Color) -> Self {
        Self { live, dead }
    }

    pub const fn live(&self) -> Color {
        self.live
    }

    pub const fn dead(&self) -> Color {
        self.dead
    }

    /// `None` (a cancelled chooser) keeps the current colour.
    pub fn set_live(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.live = color;
        }
    }

    pub fn set_dead(&mut self, color: Option<Color>) {
        if let Some(color) = color {
            self.dead = color;
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_LIVE, DEFAULT_DEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_red_on_black() {
        let palette = Palette::default();
        assert_eq!(palette.live(), DEFAULT_LIVE);
        assert_eq!(palette.dead(), DEFAULT_DEAD);
    }

    #[test]
    fn test_none_is_ignored() {
        let mut palette = Palette::default();
        palette.set_live(None);
        palette.set_dead(None);
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_palettes_are_independent() {
        let mut a = Palette::default();
        let b = Palette::default();
        let green = Color::new(0.0, 1.0, 0.0, 1.0);
        a.set_live(Some(green));
        assert_eq!(a.live(), green);
        assert_eq!(b.live(), DEFAULT_LIVE);
    }
}

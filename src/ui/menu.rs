use macroquad::prelude::*;

use super::Button;

/// Height of one entry in an open menu
pub const ITEM_HEIGHT: f32 = 26.0;

/// Pull-down menu hanging from a title in the menu bar.
/// Radio menus (see [`Menu::with_checked`]) also remember the last pick.
#[derive(Clone)]
pub struct Menu {
    title: Button,
    items: Vec<String>,
    width: f32,
    checked: Option<usize>,
    is_open: bool,
}

impl Menu {
    pub fn new(x: f32, y: f32, width: f32, height: f32, title: &str, items: &[&str]) -> Self {
        Self {
            title: Button::new(x, y, width, height, title),
            items: items.iter().map(|item| item.to_string()).collect(),
            width: width.max(140.0),
            checked: None,
            is_open: false,
        }
    }

    /// Turn into a radio menu with `index` selected
    pub fn with_checked(mut self, index: usize) -> Self {
        self.set_checked(index);
        self
    }

    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    pub fn set_checked(&mut self, index: usize) {
        if index < self.items.len() {
            self.checked = Some(index);
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    fn item_top(&self, index: usize) -> f32 {
        let title = self.title.rect();
        title.y + title.h + index as f32 * ITEM_HEIGHT
    }

    /// Item under the mouse, only while open
    pub fn item_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !self.is_open {
            return None;
        }
        let left = self.title.rect().x;
        (0..self.items.len()).find(|&i| {
            let top = self.item_top(i);
            mouse_pos.0 >= left
                && mouse_pos.0 <= left + self.width
                && mouse_pos.1 >= top
                && mouse_pos.1 <= top + ITEM_HEIGHT
        })
    }

    /// Poll the mouse; returns the activated item, if any
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        self.handle_click(mouse_pos, is_mouse_button_pressed(MouseButton::Left))
    }

    /// Clicking the title toggles the menu, clicking an item activates it,
    /// clicking anywhere else closes it.
    pub fn handle_click(&mut self, mouse_pos: (f32, f32), pressed: bool) -> Option<usize> {
        if !pressed {
            return None;
        }

        if self.title.is_hovered(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if self.is_open {
            let picked = self.item_at(mouse_pos);
            self.is_open = false;
            if let Some(index) = picked {
                if self.checked.is_some() {
                    self.checked = Some(index);
                }
            }
            return picked;
        }

        None
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.title.draw(mouse_pos, self.is_open);

        if !self.is_open {
            return;
        }

        let left = self.title.rect().x;
        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        let background = Color::new(0.12, 0.12, 0.12, 1.0);
        draw_rectangle(left, self.item_top(0), self.width, menu_height, background);

        let hovered = self.item_at(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let top = self.item_top(i);
            if hovered == Some(i) {
                let highlight = Color::new(0.39, 0.58, 0.93, 1.0);
                draw_rectangle(left, top, self.width, ITEM_HEIGHT, highlight);
            }
            if self.checked == Some(i) {
                draw_circle(left + 12.0, top + ITEM_HEIGHT / 2.0, 4.0, WHITE);
            }
            draw_text(item, left + 24.0, top + 18.0, 18.0, WHITE);
        }

        draw_rectangle_lines(left, self.item_top(0), self.width, menu_height, 1.0, GRAY);
    }
}

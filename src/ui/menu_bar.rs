use macroquad::prelude::*;

use super::{Menu, PickerTarget, MENU_BAR_HEIGHT, MENU_TITLE_WIDTH};
use crate::application::{Command, Speed};

const FILE: usize = 0;
const COLOURS: usize = 1;
const SPEED: usize = 2;

/// What a menu pick asks the host to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuAction {
    Command(Command),
    /// Open the colour chooser for one palette entry
    Pick(PickerTarget),
}

/// File / Colours / Speed menus along the top of the window
pub struct MenuBar {
    menus: [Menu; 3],
}

impl MenuBar {
    pub fn new(speed: Speed) -> Self {
        let speeds: Vec<&str> = Speed::ALL.iter().map(|s| s.name()).collect();
        let at = |i: usize| i as f32 * MENU_TITLE_WIDTH;
        Self {
            menus: [
                Menu::new(
                    at(FILE),
                    0.0,
                    MENU_TITLE_WIDTH,
                    MENU_BAR_HEIGHT,
                    "File",
                    &["New", "Stop/Start", "Exit"],
                ),
                Menu::new(
                    at(COLOURS),
                    0.0,
                    MENU_TITLE_WIDTH,
                    MENU_BAR_HEIGHT,
                    "Colours",
                    &["Foreground", "Background"],
                ),
                Menu::new(at(SPEED), 0.0, MENU_TITLE_WIDTH, MENU_BAR_HEIGHT, "Speed", &speeds)
                    .with_checked(speed.index()),
            ],
        }
    }

    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<MenuAction> {
        self.handle_click(mouse_pos, is_mouse_button_pressed(MouseButton::Left))
    }

    /// Only one menu stays open at a time.
    pub fn handle_click(&mut self, mouse_pos: (f32, f32), pressed: bool) -> Option<MenuAction> {
        let mut action = None;
        for idx in 0..self.menus.len() {
            let was_open = self.menus[idx].is_open();
            if let Some(item) = self.menus[idx].handle_click(mouse_pos, pressed) {
                action = Self::action(idx, item);
            }
            if !was_open && self.menus[idx].is_open() {
                self.menus
                    .iter_mut()
                    .enumerate()
                    .filter(|(other, _)| *other != idx)
                    .for_each(|(_, menu)| menu.close());
            }
        }
        action
    }

    fn action(menu: usize, item: usize) -> Option<MenuAction> {
        match (menu, item) {
            (FILE, 0) => Some(MenuAction::Command(Command::New)),
            (FILE, 1) => Some(MenuAction::Command(Command::StopStart)),
            (FILE, 2) => Some(MenuAction::Command(Command::Exit)),
            (COLOURS, 0) => Some(MenuAction::Pick(PickerTarget::Foreground)),
            (COLOURS, 1) => Some(MenuAction::Pick(PickerTarget::Background)),
            (SPEED, i) => Speed::ALL
                .get(i)
                .map(|&speed| MenuAction::Command(Command::SetSpeed(speed))),
            _ => None,
        }
    }

    /// Keep the Speed radio mark in step with keyboard changes
    pub fn sync_speed(&mut self, speed: Speed) {
        self.menus[SPEED].set_checked(speed.index());
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let background = Color::new(0.18, 0.18, 0.18, 1.0);
        draw_rectangle(0.0, 0.0, screen_width(), MENU_BAR_HEIGHT, background);
        // Open menu last so it overlaps its neighbours
        self.menus.iter().filter(|m| !m.is_open()).for_each(|m| m.draw(mouse_pos));
        self.menus.iter().filter(|m| m.is_open()).for_each(|m| m.draw(mouse_pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ITEM_HEIGHT;

    fn title(menu: usize) -> (f32, f32) {
        (menu as f32 * MENU_TITLE_WIDTH + 5.0, 5.0)
    }

    fn item(menu: usize, item: usize) -> (f32, f32) {
        (
            menu as f32 * MENU_TITLE_WIDTH + 10.0,
            MENU_BAR_HEIGHT + (item as f32 + 0.5) * ITEM_HEIGHT,
        )
    }

    #[test]
    fn test_file_menu_commands() {
        let mut bar = MenuBar::new(Speed::Normal);
        let expected = [Command::New, Command::StopStart, Command::Exit];
        for (i, command) in expected.into_iter().enumerate() {
            bar.handle_click(title(FILE), true);
            assert_eq!(
                bar.handle_click(item(FILE, i), true),
                Some(MenuAction::Command(command))
            );
        }
    }

    #[test]
    fn test_colour_menu_opens_chooser() {
        let mut bar = MenuBar::new(Speed::Normal);
        bar.handle_click(title(COLOURS), true);
        assert_eq!(
            bar.handle_click(item(COLOURS, 1), true),
            Some(MenuAction::Pick(PickerTarget::Background))
        );
    }

    #[test]
    fn test_speed_menu_sets_speed() {
        let mut bar = MenuBar::new(Speed::Normal);
        bar.handle_click(title(SPEED), true);
        assert_eq!(
            bar.handle_click(item(SPEED, 4), true),
            Some(MenuAction::Command(Command::SetSpeed(Speed::Insane)))
        );
        assert_eq!(bar.menus[SPEED].checked(), Some(4));
    }

    #[test]
    fn test_opening_one_menu_closes_others() {
        let mut bar = MenuBar::new(Speed::Normal);
        bar.handle_click(title(FILE), true);
        bar.handle_click(title(SPEED), true);
        assert!(!bar.menus[FILE].is_open());
        assert!(bar.menus[SPEED].is_open());
        assert!(!bar.menus[COLOURS].is_open());
    }

    #[test]
    fn test_sync_speed() {
        let mut bar = MenuBar::new(Speed::Normal);
        assert_eq!(bar.menus[SPEED].checked(), Some(1));
        bar.sync_speed(Speed::Fast);
        assert_eq!(bar.menus[SPEED].checked(), Some(2));
    }
}

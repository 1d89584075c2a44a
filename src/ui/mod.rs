mod button;
mod color_picker;
mod menu;
mod menu_bar;

pub use button::Button;
pub use color_picker::{ColorPicker, PickerOutcome, PickerTarget};
pub use menu::{ITEM_HEIGHT, Menu};
pub use menu_bar::{MenuAction, MenuBar};

pub const MENU_BAR_HEIGHT: f32 = 28.0;
pub const MENU_TITLE_WIDTH: f32 = 90.0;

/// Narrowest window that still fits the menu bar and status text
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

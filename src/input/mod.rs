use macroquad::prelude::*;

use crate::application::{Command, Speed};

/// Keyboard shortcuts, mirroring the menu mnemonics
pub const KEY_BINDINGS: [(KeyCode, Command); 10] = [
    (KeyCode::N, Command::New),
    (KeyCode::S, Command::StopStart),
    (KeyCode::Space, Command::StopStart),
    (KeyCode::Q, Command::Exit),
    (KeyCode::X, Command::Exit),
    (KeyCode::Key1, Command::SetSpeed(Speed::Slow)),
    (KeyCode::Key2, Command::SetSpeed(Speed::Normal)),
    (KeyCode::Key3, Command::SetSpeed(Speed::Fast)),
    (KeyCode::Key4, Command::SetSpeed(Speed::Zoom)),
    (KeyCode::Key5, Command::SetSpeed(Speed::Insane)),
];

/// Commands for the keys pressed this frame
pub fn process_keyboard_input() -> Vec<Command> {
    commands_for(is_key_pressed)
}

fn commands_for(pressed: impl Fn(KeyCode) -> bool) -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_commands() {
        assert!(commands_for(|_| false).is_empty());
    }

    #[test]
    fn test_pressed_keys_map_in_binding_order() {
        let commands = commands_for(|key| matches!(key, KeyCode::Key4 | KeyCode::N));
        assert_eq!(commands, vec![Command::New, Command::SetSpeed(Speed::Zoom)]);
    }

    #[test]
    fn test_every_speed_has_a_key() {
        for speed in Speed::ALL {
            assert!(
                KEY_BINDINGS
                    .iter()
                    .any(|(_, c)| *c == Command::SetSpeed(speed)),
                "{speed:?}"
            );
        }
    }
}

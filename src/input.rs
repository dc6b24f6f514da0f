use macroquad::prelude::{KeyCode, get_keys_pressed};

use crate::app::Command;
use crate::grid::Direction;

/// Maps a key to a command. Keys without a binding are ignored.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(Command::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(Command::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Steer(Direction::Right)),
        KeyCode::Space => Some(Command::Restart),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Commands for every key pressed since the last frame.
pub fn poll_commands() -> Vec<Command> {
    get_keys_pressed().into_iter().filter_map(command_for_key).collect()
}

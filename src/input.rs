use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Pause,
    Quit,
}

/// Everything the player asked for during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Turn requests in the order they were pressed.
    pub directions: Vec<Direction>,
    pub start: bool,
    pub pause: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn from_keys(keys: &[KeyEvent]) -> Self {
        let mut input = FrameInput::default();

        for command in keys.iter().filter_map(command_for) {
            match command {
                Command::Turn(dir) => input.directions.push(dir),
                Command::Start => input.start = true,
                // Two presses in one frame cancel out
                Command::Pause => input.pause = !input.pause,
                Command::Quit => input.quit = true,
            }
        }

        input
    }
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }

    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    let command = match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Right => Command::Turn(Right),
        KeyCode::Char(' ') | KeyCode::Enter => Command::Start,
        KeyCode::Esc | KeyCode::Char('p') => Command::Pause,
        KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };

    Some(command)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

use std::{sync::mpsc::Sender, thread};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction::{self, *};

/// What a key press means to the game
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Other,
}

impl Command {
    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if ev.kind != KeyEventKind::Press {
            return None;
        }

        let cmd = match ev {
            ev if is_ctrl_c(ev) => Command::Quit,
            KeyEvent { code, .. } => match code {
                KeyCode::Char('w') | KeyCode::Up => Command::Turn(Up),
                KeyCode::Char('a') | KeyCode::Left => Command::Turn(Left),
                KeyCode::Char('s') | KeyCode::Down => Command::Turn(Down),
                KeyCode::Char('d') | KeyCode::Right => Command::Turn(Right),
                KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
                _ => Command::Other,
            },
        };

        Some(cmd)
    }
}

/// Blocks on the terminal's event source and forwards every key press.
/// Stops once the receiving side is gone or reading fails. The thread is
/// detached: it sits in a blocking read and dies with the process.
pub fn spawn(tx: Sender<Command>) {
    thread::spawn(move || loop {
        let ev = match read() {
            Ok(Event::Key(ev)) => ev,
            Ok(_) => continue,
            Err(e) => {
                log::error!("input source failed: {}", e);
                break;
            }
        };

        if let Some(cmd) = Command::from_key_event(&ev) {
            if tx.send(cmd).is_err() {
                break;
            }
        }
    });
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

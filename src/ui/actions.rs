use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::{App, PresentationOutcome};

/// Everything the user can ask the presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    /// Jump to a 0-based slide index.
    Jump(usize),
    Quit,
}

impl Command {
    /// Map a key press to a command.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let command = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Esc | KeyCode::Char('q') => Self::Quit,
            KeyCode::Right
            | KeyCode::PageDown
            | KeyCode::Char(' ' | 'l' | 'n') => Self::Next,
            KeyCode::Left
            | KeyCode::PageUp
            | KeyCode::Backspace
            | KeyCode::Char('h' | 'p') => Self::Previous,
            KeyCode::Home | KeyCode::Char('g') => Self::First,
            KeyCode::End | KeyCode::Char('G') => Self::Last,
            KeyCode::Char(digit @ '1'..='9') => {
                let position = digit.to_digit(10)? as usize;
                Self::Jump(position - 1)
            }
            _ => return None,
        };
        Some(command)
    }
}

impl App {
    /// Process a key press and return the outcome if the user quits.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PresentationOutcome> {
        let command = Command::from_key(key)?;
        if self.apply(command) {
            return Some(self.outcome());
        }
        None
    }

    /// Left clicks on the footer controls navigate.
    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let hit = |area: Option<Rect>| area.is_some_and(|area| area.contains(position));

        if hit(self.controls.previous) {
            self.apply(Command::Previous);
        } else if hit(self.controls.next) {
            self.apply(Command::Next);
        }
    }
}

//! Input to action mapping.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use datatable_lib::Column;

use crate::term::Rect;

/// Something the user asked the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    Sort(Column),
    ToggleSortMode,
    CursorUp,
    CursorDown,
    /// Toggle the row under the cursor.
    ToggleRow,
    /// Toggle a row by its index on the current page.
    ToggleRowAt(usize),
    NextPage,
    PreviousPage,
    ClearSelection,
}

/// Clickable region kinds produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Header(Column),
    Row(usize),
    Previous,
    Next,
}

/// Clickable regions of the last frame. Later entries win on overlap.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rect: Rect, target: Target) {
        self.regions.push((rect, target));
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    /// Region of the first entry for `target`.
    #[cfg(test)]
    pub fn rect_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }
}

/// Translate a terminal event, using `hits` for mouse positions.
pub fn action_for_event(event: &Event, hits: &HitMap) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match hits.target_at(mouse.column, mouse.row)? {
                    Target::Header(column) => Some(Action::Sort(column)),
                    Target::Row(index) => Some(Action::ToggleRowAt(index)),
                    Target::Previous => Some(Action::PreviousPage),
                    Target::Next => Some(Action::NextPage),
                }
            }
            MouseEventKind::ScrollUp => Some(Action::CursorUp),
            MouseEventKind::ScrollDown => Some(Action::CursorDown),
            _ => None,
        },
        _ => None,
    }
}

pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::SearchClear),
        KeyCode::Char('x') if ctrl => Some(Action::ClearSelection),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::F(n @ 1..=4) => Column::from_index(n as usize - 1).map(Action::Sort),
        KeyCode::F(5) => Some(Action::ToggleSortMode),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Enter => Some(Action::ToggleRow),
        KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::PageUp => Some(Action::PreviousPage),
        KeyCode::Right if ctrl => Some(Action::NextPage),
        KeyCode::Left if ctrl => Some(Action::PreviousPage),
        _ => None,
    }
}

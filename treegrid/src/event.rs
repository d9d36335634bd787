use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::trace;

use crate::id::RowId;
use crate::layout::TableLayout;

/// High-level events produced from raw terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A row's expand/collapse control was activated.
    ToggleActivated { target: RowId },
    /// A left click that landed outside every control.
    Click { x: u16, y: u16 },
    /// Key press, regardless of focus.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse wheel; positive delta scrolls down.
    Wheel { delta: i16 },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Tab => Self::Tab,
            KeyCode::Esc => Self::Escape,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::F(n) => Self::F(n),
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Map raw crossterm events to crate events, resolving left clicks against
/// the control rects of the last layout.
pub fn process_events(raw: &[CrosstermEvent], layout: &TableLayout) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                // Only key presses (not release/repeat on some terminals).
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;
                match mouse_event.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(id) = layout.control_at(x, y) {
                            trace!("[events] control hit on {id} at ({x}, {y})");
                            events.push(Event::ToggleActivated { target: id.clone() });
                        } else {
                            events.push(Event::Click { x, y });
                        }
                    }
                    MouseEventKind::ScrollUp => events.push(Event::Wheel { delta: -1 }),
                    MouseEventKind::ScrollDown => events.push(Event::Wheel { delta: 1 }),
                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }

            _ => {}
        }
    }

    events
}

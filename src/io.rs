use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::Event;
use crate::events::SimEvent;

/// Converts a crossterm event into a gridlife event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::SimEvent(SimEvent::ToggleRunning)),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Event::SimEvent(SimEvent::Reset)),
            _ => None,
        },
        _ => None,
    }
}

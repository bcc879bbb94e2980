use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,
    Refresh,

    // Search box
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    ClearQuery,

    // Country list
    SelectPrev,
    SelectNext,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,

    Resize,
}

/// Poll for an event, blocking up to `timeout`. Events that map to nothing
/// (mouse moves, focus changes, key releases) come back as `None` too.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    read_event(timeout).and_then(translate)
}

/// Every event already queued, translated. Events that map to nothing are
/// skipped without ending the drain; it stops only when the queue is empty.
pub fn drain_pending() -> impl Iterator<Item = TuiEvent> {
    translate_all(std::iter::from_fn(|| read_event(std::time::Duration::ZERO)))
}

fn read_event(timeout: std::time::Duration) -> Option<Event> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(event) => Some(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate_all(events: impl Iterator<Item = Event>) -> impl Iterator<Item = TuiEvent> {
    events.filter_map(translate)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::SelectPrev),
            MouseEventKind::ScrollDown => Some(TuiEvent::SelectNext),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports both press and release
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        // Ctrl+R or F5 is the terminal's pull-to-refresh
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::F(5)) => Some(TuiEvent::Refresh),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::ClearQuery),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            Some(TuiEvent::InputChar(c))
        }
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Esc) => Some(TuiEvent::ClearQuery),
        (_, KeyCode::Up) => Some(TuiEvent::SelectPrev),
        (_, KeyCode::Down) => Some(TuiEvent::SelectNext),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        (_, KeyCode::Home) => Some(TuiEvent::SelectFirst),
        (_, KeyCode::End) => Some(TuiEvent::SelectLast),
        _ => None,
    }
}

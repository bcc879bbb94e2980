use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that knows how to draw itself.
///
/// Props arrive as struct fields; anything that must survive between
/// frames (scroll offset, text cursor) lives in a state struct the component
/// borrows mutably. `render` takes `&mut self` so that state can be updated
/// during the draw, the same way ratatui's `StatefulWidget` works.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component reports to the loop.
    type Event;

    /// Handle a `TuiEvent`, returning `Some` when the parent needs to react.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

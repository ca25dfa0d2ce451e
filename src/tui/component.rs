//! Component trait pattern for TUI features.
//!
//! Features that need to signal the parent (the nav menu, the form wizard)
//! implement [`Component`]: they own their state, consume key events, and
//! emit a typed event when the parent has work to do. Features that are
//! purely self-contained (carousel, tabs, stats) expose plain methods
//! instead.

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use crate::tui::Theme;

/// A feature that handles its own input and renders as page lines.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Produce the component's content as styled lines for the given width.
    ///
    /// The page renderer stacks section lines into one column and crops to
    /// the scroll window, so components render to lines rather than to a
    /// frame directly.
    fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>>;
}

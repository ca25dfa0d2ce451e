//! Bottom status bar: contextual key hints plus the current status message.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::Theme;

/// Severity of the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// A completed action
    Success,
    /// A recoverable failure
    Error,
}

/// A user-visible status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity, which picks the color
    pub kind: StatusKind,
    /// Message text
    pub text: String,
}

impl StatusMessage {
    /// Convenience constructor for an info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    /// Convenience constructor for a success message.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Convenience constructor for an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the hint line and, below it, the status message if any.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        hints: &str,
        message: Option<&StatusMessage>,
        theme: &Theme,
    ) {
        let hint_area = Rect { height: 1, ..area };
        let hint_widget = Paragraph::new(Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(theme.text_muted),
        )))
        .style(Style::default().bg(theme.surface));
        f.render_widget(hint_widget, hint_area);

        if area.height < 2 {
            return;
        }
        let message_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        if let Some(message) = message {
            let color = match message.kind {
                StatusKind::Info => theme.text_secondary,
                StatusKind::Success => theme.success,
                StatusKind::Error => theme.error,
            };
            let widget = Paragraph::new(Line::from(Span::styled(
                format!(" {}", message.text),
                Style::default().fg(color),
            )));
            f.render_widget(widget, message_area);
        }
    }
}

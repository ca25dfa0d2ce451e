//! Hero carousel: rotating slides with dot indicators and arrow controls.
//!
//! Wraps a [`PanelController`] with an [`AutoAdvance`] timer. Manual
//! navigation always restarts the countdown; hovering the carousel with the
//! mouse pauses it, matching pointer-enter/leave behavior.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

use crate::controller::{AutoAdvance, PanelController};
use crate::models::Slide;
use crate::tui::text::wrap_text;
use crate::tui::Theme;

/// Carousel feature state.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    controller: PanelController,
    timer: AutoAdvance,
    auto_advance: bool,
    hovered: bool,
}

impl Carousel {
    /// Initializes the carousel from content.
    ///
    /// Returns `None` (with a logged warning) when there are no slides; the
    /// rest of the page is unaffected.
    #[must_use]
    pub fn init(slides: &[Slide], interval: Duration, auto_advance: bool, now: Instant) -> Option<Self> {
        let Some(controller) = PanelController::new(slides.len()) else {
            tracing::warn!("carousel disabled: no slides in content");
            return None;
        };
        let mut timer = AutoAdvance::new(interval);
        if auto_advance {
            timer.start(now);
        }
        Some(Self {
            slides: slides.to_vec(),
            controller,
            timer,
            auto_advance,
            hovered: false,
        })
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.controller.current()
    }

    /// Whether the auto-advance timer is currently armed.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    fn reset_countdown(&mut self, now: Instant) {
        // Stop-before-start: the old deadline must be gone before the new
        // window is armed, or a stale fire would double-advance.
        if self.auto_advance && !self.hovered {
            self.timer.restart(now);
        }
    }

    /// Advances to the next slide manually, resetting the countdown.
    pub fn next(&mut self, now: Instant) {
        self.controller.next();
        self.reset_countdown(now);
    }

    /// Steps to the previous slide manually, resetting the countdown.
    pub fn previous(&mut self, now: Instant) {
        self.controller.previous();
        self.reset_countdown(now);
    }

    /// Jumps to a specific slide (dot selection), resetting the countdown.
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.controller.go_to(index) {
            self.reset_countdown(now);
        }
    }

    /// Directional key handling. Only called while the carousel section is
    /// visible. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => {
                self.previous(now);
                true
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => {
                self.next(now);
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.select(index, now);
                true
            }
            _ => false,
        }
    }

    /// Updates hover state from mouse position. Entering pauses the
    /// slideshow; leaving resumes it with a fresh window.
    pub fn set_hover(&mut self, inside: bool, now: Instant) {
        if inside == self.hovered {
            return;
        }
        self.hovered = inside;
        if !self.auto_advance {
            return;
        }
        if inside {
            self.timer.stop();
        } else {
            self.timer.stop();
            self.timer.start(now);
        }
    }

    /// Ticks the auto-advance timer, advancing the slide when the period
    /// elapses.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.poll(now) {
            self.controller.next();
        }
    }

    /// Maps a column on the rendered dot row to a dot index. `None` when the
    /// column lands on the lead-in or the gap between dots; bounds are left
    /// to [`Carousel::select`].
    #[must_use]
    pub fn dot_at(column: u16) -> Option<usize> {
        let col = column.checked_sub(5)?;
        (col % 2 == 0).then(|| usize::from(col / 2))
    }

    /// Renders the carousel as page lines: arrows flanking the slide body,
    /// then the dot row.
    #[must_use]
    pub fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let slide = &self.slides[self.controller.current()];
        let inner = width.saturating_sub(8).max(10);

        lines.push(Line::from(""));
        for (i, text) in wrap_text(&slide.title, inner).into_iter().enumerate() {
            let mut spans = Vec::new();
            if i == 0 {
                spans.push(Span::styled("  ❮  ".to_string(), Style::default().fg(theme.text_muted)));
            } else {
                spans.push(Span::raw("     ".to_string()));
            }
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            if i == 0 {
                spans.push(Span::styled("  ❯".to_string(), Style::default().fg(theme.text_muted)));
            }
            lines.push(Line::from(spans));
        }
        for text in wrap_text(&slide.subtitle, inner) {
            lines.push(Line::from(Span::styled(
                format!("     {text}"),
                Style::default().fg(theme.text_secondary),
            )));
        }
        lines.push(Line::from(""));

        let mut dots = vec![Span::raw("     ".to_string())];
        for i in 0..self.controller.len() {
            let (symbol, style) = if self.controller.indicator_is_active(i) {
                ("●", Style::default().fg(theme.active))
            } else {
                ("○", Style::default().fg(theme.inactive))
            };
            dots.push(Span::styled(symbol.to_string(), style));
            dots.push(Span::raw(" ".to_string()));
        }
        lines.push(Line::from(dots));
        lines.push(Line::from(""));
        lines
    }
}

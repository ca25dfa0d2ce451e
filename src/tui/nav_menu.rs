//! Navigation menu overlay.
//!
//! The terminal stand-in for the hamburger menu: toggled open over the page,
//! closed by selecting an entry, pressing Esc, or any interaction outside
//! it. Selecting an entry asks the parent to smooth-scroll to the section.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::{NavItem, SectionId};
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events the nav menu reports to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMenuEvent {
    /// Scroll to a section (optionally landing on a tab) and close the menu
    Navigate {
        /// Target section
        section: SectionId,
        /// About tab to activate after the scroll settles
        tab: Option<String>,
    },
    /// Menu dismissed without a selection
    Closed,
}

/// Nav menu state.
#[derive(Debug, Clone)]
pub struct NavMenu {
    items: Vec<NavItem>,
    open: bool,
    selected: usize,
}

impl NavMenu {
    /// Creates a closed menu over the given entries.
    #[must_use]
    pub fn new(items: &[NavItem]) -> Self {
        Self {
            items: items.to_vec(),
            open: false,
            selected: 0,
        }
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Menu entries.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Opens or closes the overlay. Opening resets the highlight to the
    /// first entry.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Closes the overlay (clicking outside, feature switch).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mouse selection of the entry at `index`; behaves like highlighting it
    /// and pressing Enter. Clicks on rows without an entry do nothing.
    pub fn click(&mut self, index: usize) -> Option<NavMenuEvent> {
        if !self.open || index >= self.items.len() {
            return None;
        }
        self.selected = index;
        let item = self.items[index].clone();
        self.open = false;
        Some(NavMenuEvent::Navigate {
            section: item.section,
            tab: item.tab,
        })
    }
}

impl Component for NavMenu {
    type Event = NavMenuEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if !self.open {
            return None;
        }
        match key.code {
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                let item = self.items.get(self.selected)?.clone();
                self.open = false;
                Some(NavMenuEvent::Navigate {
                    section: item.section,
                    tab: item.tab,
                })
            }
            KeyCode::Esc => {
                self.open = false;
                Some(NavMenuEvent::Closed)
            }
            _ => None,
        }
    }

    fn lines(&self, _width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            " Go to ".to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))];
        for (i, item) in self.items.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if i == self.selected { "▸" } else { " " };
            lines.push(Line::from(Span::styled(
                format!(" {marker} {}", item.label),
                style,
            )));
        }
        lines
    }
}

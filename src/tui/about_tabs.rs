//! Tabbed about panel, keyed by stable tab identifiers.
//!
//! Tab switches requested from the nav menu are deferred behind a fixed
//! settle delay, so the smooth scroll to the about section visibly finishes
//! before the panel flips. The scroll API gives no completion callback, so a
//! timeout stands in for one.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::{Duration, Instant};

use crate::constants::SCROLL_SETTLE_MS;
use crate::controller::KeyedPanelController;
use crate::models::AboutTab;
use crate::tui::text::wrap_text;
use crate::tui::Theme;

/// About tabs feature state.
#[derive(Debug, Clone)]
pub struct AboutTabs {
    tabs: Vec<AboutTab>,
    controller: KeyedPanelController,
    pending: Option<(String, Instant)>,
}

impl AboutTabs {
    /// Initializes the tab panel from content.
    ///
    /// A tab button only pairs with a panel when the tab has body text;
    /// buttons without a panel exist but are not navigable. Returns `None`
    /// (with a logged warning) when no complete pair exists.
    #[must_use]
    pub fn init(tabs: &[AboutTab]) -> Option<Self> {
        let indicator_keys: Vec<String> = tabs.iter().map(|t| t.key.clone()).collect();
        let panel_keys: Vec<String> = tabs
            .iter()
            .filter(|t| !t.body.is_empty())
            .map(|t| t.key.clone())
            .collect();
        let Some(controller) = KeyedPanelController::new(&panel_keys, &indicator_keys) else {
            tracing::warn!("about tabs disabled: no complete tab/panel pair in content");
            return None;
        };
        Some(Self {
            tabs: tabs.to_vec(),
            controller,
            pending: None,
        })
    }

    /// Key of the active tab.
    #[must_use]
    pub fn current(&self) -> &str {
        self.controller.current()
    }

    /// Switches tabs immediately. Unknown keys are a logged no-op.
    pub fn activate(&mut self, key: &str) -> bool {
        self.controller.go_to(key)
    }

    /// Requests a tab switch to apply after the scroll settle delay.
    pub fn activate_after_settle(&mut self, key: &str, now: Instant) {
        self.pending = Some((
            key.to_string(),
            now + Duration::from_millis(SCROLL_SETTLE_MS),
        ));
    }

    /// Applies a pending switch once its settle deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some((key, deadline)) = &self.pending {
            if now >= *deadline {
                let key = key.clone();
                self.pending = None;
                self.controller.go_to(&key);
            }
        }
    }

    /// Directional key handling. Only called while the about section is
    /// visible; the controller always has an active tab, so the guard that
    /// some indicator is active holds by construction.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.controller.previous();
                true
            }
            KeyCode::Right | KeyCode::Down => {
                self.controller.next();
                true
            }
            _ => false,
        }
    }

    /// Renders the tab bar and the active panel body.
    #[must_use]
    pub fn lines(&self, width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let mut bar = vec![Span::raw("  ".to_string())];
        for tab in &self.tabs {
            let style = if self.controller.is_active(&tab.key) {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.inactive)
            };
            bar.push(Span::styled(format!(" {} ", tab.label), style));
            bar.push(Span::raw(" ".to_string()));
        }
        lines.push(Line::from(bar));
        lines.push(Line::from(""));

        if let Some(tab) = self.tabs.iter().find(|t| self.controller.is_active(&t.key)) {
            let inner = width.saturating_sub(4).max(10);
            for paragraph in &tab.body {
                for text in wrap_text(paragraph, inner) {
                    lines.push(Line::from(Span::styled(
                        format!("  {text}"),
                        Style::default().fg(theme.text),
                    )));
                }
                lines.push(Line::from(""));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<AboutTab> {
        ["story", "mission", "values"]
            .iter()
            .map(|key| AboutTab {
                key: (*key).to_string(),
                label: key.to_uppercase(),
                body: vec![format!("{key} body")],
            })
            .collect()
    }

    #[test]
    fn test_init_refuses_empty() {
        assert!(AboutTabs::init(&[]).is_none());
    }

    #[test]
    fn test_init_refuses_all_bodyless() {
        let bodyless = vec![AboutTab {
            key: "a".to_string(),
            label: "A".to_string(),
            body: vec![],
        }];
        assert!(AboutTabs::init(&bodyless).is_none());
    }

    #[test]
    fn test_unknown_key_keeps_current() {
        let mut about = AboutTabs::init(&tabs()).unwrap();
        assert!(about.activate("mission"));
        assert!(!about.activate("z"));
        assert_eq!(about.current(), "mission");
    }

    #[test]
    fn test_pending_activation_waits_for_settle() {
        let t0 = Instant::now();
        let mut about = AboutTabs::init(&tabs()).unwrap();
        about.activate_after_settle("values", t0);

        about.tick(t0 + Duration::from_millis(400));
        assert_eq!(about.current(), "story");

        about.tick(t0 + Duration::from_millis(SCROLL_SETTLE_MS));
        assert_eq!(about.current(), "values");
    }

    #[test]
    fn test_arrow_keys_cycle_tabs() {
        let mut about = AboutTabs::init(&tabs()).unwrap();
        about.handle_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(about.current(), "mission");
        about.handle_key(KeyEvent::from(KeyCode::Left));
        about.handle_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(about.current(), "values");
    }
}

//! Terminal user interface: page state, event loop, and rendering.
//!
//! The page is one tall column of sections scrolled behind a header and a
//! status bar. Each feature initializes independently from content; a
//! feature that cannot initialize is simply absent from the page and the
//! rest keeps working.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod about_tabs;
pub mod carousel;
pub mod component;
pub mod nav_menu;
pub mod scroll;
pub mod stats;
pub mod status_bar;
pub mod text;
pub mod theme;
pub mod wizard;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::TICK_MS;
use crate::models::{SectionId, SiteContent, Submission};
use crate::services::SubmissionStore;

pub use about_tabs::AboutTabs;
pub use carousel::Carousel;
pub use component::Component;
pub use nav_menu::{NavMenu, NavMenuEvent};
pub use scroll::{PageScroll, SectionExtent};
pub use stats::StatCounters;
pub use status_bar::{StatusBar, StatusKind, StatusMessage};
pub use theme::Theme;
pub use wizard::{FormWizard, WizardEvent};

/// Header height in rows when fully shown.
const HEADER_HEIGHT: u16 = 2;
/// Status bar height in rows.
const STATUS_HEIGHT: u16 = 2;

/// Top-level application state.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Page content
    pub content: SiteContent,
    /// Resolved color theme
    pub theme: Theme,
    /// Page scroll model
    pub scroll: PageScroll,
    /// Navigation overlay
    pub menu: NavMenu,
    /// Hero carousel, absent when content has no slides
    pub carousel: Option<Carousel>,
    /// About tabs, absent when content has no complete tab pair
    pub about: Option<AboutTabs>,
    /// Stats counters, absent when content has no stats
    pub stats: Option<StatCounters>,
    /// Application form, absent when content has no steps
    pub wizard: Option<FormWizard>,
    /// Submission writer
    pub store: SubmissionStore,
    /// Current status line
    pub status: Option<StatusMessage>,
    /// Set when the user quits
    pub should_quit: bool,

    page_lines: Vec<Line<'static>>,
    content_rect: Rect,
    carousel_rect: Option<Rect>,
    carousel_dots_row: Option<u16>,
    menu_rect: Rect,
}

impl AppState {
    /// Builds the page state from content and configuration. Features
    /// initialize independently; a missing one degrades only itself.
    #[must_use]
    pub fn new(content: SiteContent, config: Config) -> Self {
        let now = Instant::now();
        let interval = Duration::from_millis(config.ui.carousel_interval_ms);
        let auto_advance = !config.ui.reduce_motion;

        let carousel = Carousel::init(&content.slides, interval, auto_advance, now);
        let about = AboutTabs::init(&content.about);
        let stats = StatCounters::init(&content.stats, config.ui.reduce_motion);
        let wizard = FormWizard::init(&content.form);
        let menu = NavMenu::new(&content.nav);
        let store = SubmissionStore::new(config.paths.submissions_dir.clone());
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            theme,
            scroll: PageScroll::new(HEADER_HEIGHT),
            menu,
            carousel,
            about,
            stats,
            wizard,
            store,
            status: None,
            should_quit: false,
            page_lines: Vec::new(),
            content_rect: Rect::default(),
            carousel_rect: None,
            carousel_dots_row: None,
            menu_rect: Rect::default(),
            content,
            config,
        }
    }

    /// Begins a smooth scroll to `section`, queueing a tab activation for
    /// after the settle delay when the target is an about tab.
    pub fn navigate_to(&mut self, section: SectionId, tab: Option<&str>) {
        self.scroll.scroll_to_section(section);
        if section == SectionId::About {
            if let (Some(about), Some(tab)) = (self.about.as_mut(), tab) {
                about.activate_after_settle(tab, Instant::now());
            }
        }
    }

    /// Advances all timed state one loop turn.
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick();
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(now);
        }
        if let Some(about) = self.about.as_mut() {
            about.tick(now);
        }
        if let Some(stats) = self.stats.as_mut() {
            if self.scroll.section_is_visible(SectionId::Stats) {
                stats.trigger(now);
            }
            stats.tick(now);
        }
    }

    fn header_height(&self) -> u16 {
        if self.scroll.header_hidden() {
            0
        } else if self.scroll.header_compact() {
            1
        } else {
            HEADER_HEIGHT
        }
    }

    fn section_header(&self, section: SectionId, width: u16) -> Vec<Line<'static>> {
        let title = section.title();
        let dashes = usize::from(width).saturating_sub(title.len() + 8);
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("── {title} {}", "─".repeat(dashes)),
                Style::default().fg(self.theme.primary),
            )),
            Line::from(""),
        ]
    }

    fn service_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let inner = width.saturating_sub(6).max(10);
        for service in &self.content.services {
            lines.push(Line::from(Span::styled(
                format!("  ▪ {}", service.title),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            for wrapped in text::wrap_text(&service.blurb, inner) {
                lines.push(Line::from(Span::styled(
                    format!("    {wrapped}"),
                    Style::default().fg(self.theme.text_secondary),
                )));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    /// Lays the page out for the current terminal size: builds every
    /// section's lines, records section geometry, and computes the screen
    /// rect of the carousel for hover tracking.
    pub fn prepare(&mut self, area: Rect) {
        let header_height = self.header_height();
        let content_height = area
            .height
            .saturating_sub(header_height)
            .saturating_sub(STATUS_HEIGHT);
        self.content_rect = Rect::new(0, header_height, area.width, content_height);
        let width = area.width;

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut extents = Vec::new();
        let mut push_section = |id: SectionId, body: Vec<Line<'static>>| {
            if body.is_empty() {
                return;
            }
            let top = lines.len() as u16;
            let height = body.len() as u16;
            lines.extend(body);
            extents.push(SectionExtent { id, top, height });
        };

        push_section(
            SectionId::Home,
            self.carousel
                .as_ref()
                .map(|c| c.lines(width, &self.theme))
                .unwrap_or_default(),
        );
        push_section(
            SectionId::About,
            self.about
                .as_ref()
                .map(|about| {
                    let mut body = self.section_header(SectionId::About, width);
                    body.extend(about.lines(width, &self.theme));
                    body
                })
                .unwrap_or_default(),
        );
        if !self.content.services.is_empty() {
            let mut body = self.section_header(SectionId::Services, width);
            body.extend(self.service_lines(width));
            push_section(SectionId::Services, body);
        }
        push_section(
            SectionId::Stats,
            self.stats
                .as_ref()
                .map(|stats| {
                    let mut body = self.section_header(SectionId::Stats, width);
                    body.extend(stats.lines(width, &self.theme));
                    body
                })
                .unwrap_or_default(),
        );
        push_section(
            SectionId::Careers,
            self.wizard
                .as_ref()
                .map(|wizard| {
                    let mut body = self.section_header(SectionId::Careers, width);
                    body.extend(wizard.lines(width, &self.theme));
                    body
                })
                .unwrap_or_default(),
        );

        self.page_lines = lines;
        self.scroll.set_layout(extents.clone(), content_height);

        // Carousel screen rect for pointer hover, if any of it is on screen.
        let home = extents.iter().find(|e| e.id == SectionId::Home).copied();
        self.carousel_rect = home.and_then(|home| {
            let offset = self.scroll.offset();
            let view_end = offset.saturating_add(content_height);
            let top = home.top.max(offset);
            let bottom = home.top.saturating_add(home.height).min(view_end);
            if top >= bottom {
                return None;
            }
            Some(Rect::new(
                self.content_rect.x,
                self.content_rect.y + (top - offset),
                width,
                bottom - top,
            ))
        });
        // The dot indicator row is the second-to-last line of the hero.
        self.carousel_dots_row = home.and_then(|home| {
            let offset = self.scroll.offset();
            let dots = home.top.saturating_add(home.height).saturating_sub(2);
            if dots >= offset && dots < offset.saturating_add(content_height) {
                Some(self.content_rect.y + (dots - offset))
            } else {
                None
            }
        });

        let menu_height = (self.menu.items().len() as u16).saturating_add(3);
        self.menu_rect = Rect::new(
            2,
            header_height.saturating_add(1),
            28.min(width.saturating_sub(4)),
            menu_height.min(area.height.saturating_sub(2)),
        );
    }

    fn hints(&self) -> &'static str {
        if self.menu.is_open() {
            " ↑↓: navigate   Enter: go   Esc: close"
        } else if self.scroll.active_section() == Some(SectionId::Careers) {
            " Type to fill in   Tab: next field   Enter: continue   PgUp: leave form"
        } else {
            " j/k: scroll   arrows: slides & tabs   m: menu   q: quit"
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        state.tick(Instant::now());
        state.prepare(area);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with the tick timeout so timers stay live.
        if event::poll(Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                Event::Resize(_, _) => {
                    // Terminal resized, will re-layout on next loop
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles one key event. Returns `Ok(true)` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // The open menu swallows all input until dismissed.
    if state.menu.is_open() {
        if let Some(event) = state.menu.handle_input(key) {
            apply_nav_event(state, event);
        }
        return Ok(false);
    }

    // Page-level scrolling is always reachable, even with the form focused.
    let viewport = i32::from(state.content_rect.height.max(1));
    match key.code {
        KeyCode::PageUp => {
            state.scroll.scroll_by(-viewport);
            return Ok(false);
        }
        KeyCode::PageDown => {
            state.scroll.scroll_by(viewport);
            return Ok(false);
        }
        _ => {}
    }

    // The form captures typing while the careers section is the active one.
    if state.scroll.active_section() == Some(SectionId::Careers) {
        if let Some(wizard) = state.wizard.as_mut() {
            if let Some(event) = wizard.handle_input(key) {
                match event {
                    WizardEvent::Invalid(count) => {
                        state.status = Some(StatusMessage::error(format!(
                            "Please fix {count} field(s) before continuing"
                        )));
                    }
                    WizardEvent::SteppedBack => {
                        state.status = None;
                    }
                    WizardEvent::Submit(values) => {
                        let submission = Submission::new(values);
                        match state.store.write(&submission) {
                            Ok(path) => {
                                wizard.reset();
                                state.status = Some(StatusMessage::success(format!(
                                    "Application received. Saved to {}",
                                    path.display()
                                )));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to write submission");
                                state.status = Some(StatusMessage::error(format!(
                                    "Could not save application: {e}"
                                )));
                            }
                        }
                    }
                }
            }
            return Ok(false);
        }
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('m') => {
            state.menu.toggle();
        }
        KeyCode::Char('k') => state.scroll.scroll_by(-2),
        KeyCode::Char('j') => state.scroll.scroll_by(2),
        KeyCode::Home => state.scroll.scroll_by(-i32::from(u16::MAX)),
        KeyCode::End => state.scroll.scroll_by(i32::from(u16::MAX)),
        // Directional panel navigation is scoped to the visible region; the
        // hero takes precedence over the tabs on boundary rows.
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h' | 'l' | '1'..='9') => {
            let now = Instant::now();
            if state.scroll.section_is_visible(SectionId::Home) {
                if let Some(carousel) = state.carousel.as_mut() {
                    if carousel.handle_key(key, now) {
                        return Ok(false);
                    }
                }
            }
            if state.scroll.section_is_visible(SectionId::About) {
                if let Some(about) = state.about.as_mut() {
                    if about.handle_key(key) {
                        return Ok(false);
                    }
                }
            }
            // No visible feature took the key; vertical arrows scroll.
            match key.code {
                KeyCode::Up => state.scroll.scroll_by(-2),
                KeyCode::Down => state.scroll.scroll_by(2),
                _ => {}
            }
        }
        _ => {}
    }
    Ok(false)
}

fn apply_nav_event(state: &mut AppState, event: NavMenuEvent) {
    match event {
        NavMenuEvent::Navigate { section, tab } => {
            state.status = None;
            state.navigate_to(section, tab.as_deref());
        }
        NavMenuEvent::Closed => {}
    }
}

/// Handles one mouse event: hover pause for the carousel, wheel scrolling,
/// and clicks on the menu or the carousel arrows.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => {
            let inside = state
                .carousel_rect
                .is_some_and(|rect| rect.contains(position));
            if let Some(carousel) = state.carousel.as_mut() {
                carousel.set_hover(inside, Instant::now());
            }
        }
        MouseEventKind::ScrollUp => state.scroll.scroll_by(-3),
        MouseEventKind::ScrollDown => state.scroll.scroll_by(3),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.menu.is_open() {
                if state.menu_rect.contains(position) {
                    // Entries start below the border and the overlay title.
                    let first_entry_row = state.menu_rect.y + 2;
                    if mouse.row < first_entry_row {
                        return;
                    }
                    let row = usize::from(mouse.row - first_entry_row);
                    if let Some(event) = state.menu.click(row) {
                        apply_nav_event(state, event);
                    }
                } else {
                    // Clicking outside dismisses, same as the page click-away.
                    state.menu.close();
                }
                return;
            }
            if state.carousel_dots_row == Some(mouse.row) {
                if let Some(index) = Carousel::dot_at(mouse.column) {
                    if let Some(carousel) = state.carousel.as_mut() {
                        carousel.select(index, Instant::now());
                    }
                    return;
                }
            }
            if let Some(rect) = state.carousel_rect {
                if rect.contains(position) {
                    let now = Instant::now();
                    if let Some(carousel) = state.carousel.as_mut() {
                        if mouse.column < rect.x + rect.width / 3 {
                            carousel.previous(now);
                        } else if mouse.column > rect.x + 2 * rect.width / 3 {
                            carousel.next(now);
                        }
                    }
                }
            }
        }
        _ => {}
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let header_height = state.header_height();
    if header_height > 0 {
        render_header(f, Rect::new(0, 0, f.area().width, header_height), state);
    }

    let content = Paragraph::new(state.page_lines.clone()).scroll((state.scroll.offset(), 0));
    f.render_widget(content, state.content_rect);

    let status_rect = Rect::new(
        0,
        f.area().height.saturating_sub(STATUS_HEIGHT),
        f.area().width,
        STATUS_HEIGHT,
    );
    StatusBar::render(f, status_rect, state.hints(), state.status.as_ref(), &state.theme);

    if state.menu.is_open() {
        render_menu_overlay(f, state);
    }
}

/// Render the header: company line plus the nav strip with the active
/// section highlighted. The company line drops away in compact mode.
fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let mut y = area.y;
    if area.height >= HEADER_HEIGHT {
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", state.content.company),
                Style::default()
                    .fg(state.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                state.content.tagline.clone(),
                Style::default().fg(state.theme.text_muted),
            ),
        ]);
        f.render_widget(
            Paragraph::new(title).style(Style::default().bg(state.theme.surface)),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    let active = state.scroll.active_section();
    let mut spans = vec![Span::raw(" ".to_string())];
    for item in state.menu.items() {
        let style = if item.tab.is_none() && active == Some(item.section) {
            Style::default()
                .fg(state.theme.active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(state.theme.text_secondary)
        };
        spans.push(Span::styled(item.label.clone(), style));
        spans.push(Span::raw("   ".to_string()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(state.theme.surface)),
        Rect::new(area.x, y, area.width, 1),
    );
}

fn render_menu_overlay(f: &mut Frame, state: &AppState) {
    let area = state.menu_rect;
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.primary))
        .style(Style::default().bg(state.theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(state.menu.lines(inner.width, &state.theme)),
        inner,
    );
}

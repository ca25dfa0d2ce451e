//! Integration tests for page navigation: the nav menu overlay, smooth
//! scrolling to sections, and the settle-delay tab activation.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use kiosk::config::Config;
use kiosk::constants::SCROLL_SETTLE_MS;
use kiosk::models::{SectionId, SiteContent};
use kiosk::tui::{handle_key_event, handle_mouse_event, AppState};

fn test_state() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.paths.submissions_dir = dir.path().to_path_buf();
    // Keep the tempdir alive for the test's duration by leaking it; the OS
    // cleans up the temp root.
    std::mem::forget(dir);
    AppState::new(SiteContent::default(), config)
}

fn prepared(width: u16, height: u16) -> AppState {
    let mut state = test_state();
    state.prepare(Rect::new(0, 0, width, height));
    state
}

fn settle_scroll(state: &mut AppState) {
    for _ in 0..300 {
        state.tick(Instant::now());
        state.prepare(Rect::new(0, 0, 80, 24));
        if !state.scroll.is_animating() {
            break;
        }
    }
}

#[test]
fn test_menu_navigates_to_section() {
    let mut state = prepared(80, 24);
    assert_eq!(state.scroll.active_section(), Some(SectionId::Home));

    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('m'))).unwrap();
    assert!(state.menu.is_open());

    // Highlight "Services" (third entry) and select it.
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Down)).unwrap();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Down)).unwrap();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Enter)).unwrap();
    assert!(!state.menu.is_open());
    assert!(state.scroll.is_animating());

    settle_scroll(&mut state);
    assert_eq!(state.scroll.active_section(), Some(SectionId::Services));
}

#[test]
fn test_menu_chrome_clicks_do_not_navigate() {
    let mut state = prepared(80, 24);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('m'))).unwrap();

    // The overlay opens at x=2, y=3: a border row, then the title row,
    // then the entries. Clicking the chrome must not select anything.
    let click = |column, row| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    };
    handle_mouse_event(&mut state, click(5, 3));
    assert!(state.menu.is_open());
    handle_mouse_event(&mut state, click(5, 4));
    assert!(state.menu.is_open());
    assert!(!state.scroll.is_animating());

    // The first entry row still selects and closes the menu.
    handle_mouse_event(&mut state, click(5, 5));
    assert!(!state.menu.is_open());
}

#[test]
fn test_menu_esc_closes_without_moving() {
    let mut state = prepared(80, 24);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('m'))).unwrap();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Esc)).unwrap();
    assert!(!state.menu.is_open());
    assert_eq!(state.scroll.offset(), 0);
}

#[test]
fn test_nav_deep_link_activates_tab_after_settle() {
    let mut state = prepared(80, 24);
    let t0 = Instant::now();

    state.navigate_to(SectionId::About, Some("mission"));
    assert_eq!(state.about.as_ref().unwrap().current(), "story");

    // Before the settle delay the tab is unchanged even if ticked.
    state.tick(t0 + Duration::from_millis(100));
    assert_eq!(state.about.as_ref().unwrap().current(), "story");

    state.tick(t0 + Duration::from_millis(SCROLL_SETTLE_MS + 100));
    assert_eq!(state.about.as_ref().unwrap().current(), "mission");
}

#[test]
fn test_arrow_keys_reach_tabs_when_about_visible() {
    let mut state = prepared(80, 24);
    state.navigate_to(SectionId::About, None);
    settle_scroll(&mut state);
    // Nudge past the last rows of the hero so arrows reach the tabs, not
    // the carousel.
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('j'))).unwrap();
    state.prepare(Rect::new(0, 0, 80, 24));
    assert!(state.scroll.section_is_visible(SectionId::About));
    assert!(!state.scroll.section_is_visible(SectionId::Home));

    handle_key_event(&mut state, KeyEvent::from(KeyCode::Right)).unwrap();
    assert_eq!(state.about.as_ref().unwrap().current(), "mission");
}

#[test]
fn test_vertical_arrows_scroll_when_no_panel_feature_visible() {
    let mut state = prepared(80, 24);
    let mut guard = 0;
    while state.scroll.section_is_visible(SectionId::Home)
        || state.scroll.section_is_visible(SectionId::About)
    {
        handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('j'))).unwrap();
        guard += 1;
        assert!(guard < 100, "never scrolled past the hero and tabs");
    }
    assert_ne!(state.scroll.active_section(), Some(SectionId::Careers));

    let offset = state.scroll.offset();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Down)).unwrap();
    assert_eq!(state.scroll.offset(), offset + 2);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Up)).unwrap();
    assert_eq!(state.scroll.offset(), offset);
}

#[test]
fn test_stats_trigger_on_first_visibility_only() {
    let mut state = prepared(80, 24);
    let t0 = Instant::now();
    assert!(!state.stats.as_ref().unwrap().has_animated());

    state.navigate_to(SectionId::Stats, None);
    settle_scroll(&mut state);
    state.tick(t0);
    assert!(state.stats.as_ref().unwrap().has_animated());

    // Scrolling away and back does not rewind the counters.
    state.tick(t0 + Duration::from_millis(3000));
    let finished = state.stats.as_ref().unwrap().value(0);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Home)).unwrap();
    state.prepare(Rect::new(0, 0, 80, 24));
    state.navigate_to(SectionId::Stats, None);
    settle_scroll(&mut state);
    state.tick(t0 + Duration::from_millis(4000));
    assert_eq!(state.stats.as_ref().unwrap().value(0), finished);
}

#[test]
fn test_missing_slides_disable_only_the_carousel() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.paths.submissions_dir = dir.path().to_path_buf();

    let mut content = SiteContent::default();
    content.slides.clear();
    let mut state = AppState::new(content, config);
    state.prepare(Rect::new(0, 0, 80, 24));

    assert!(state.carousel.is_none());
    assert!(state.about.is_some());
    assert!(state.stats.is_some());
    assert!(state.wizard.is_some());
    // The page lays out without a home section.
    assert!(!state.scroll.section_is_visible(SectionId::Home));
    assert!(state.scroll.active_section().is_some());
}

#[test]
fn test_quit_key() {
    let mut state = prepared(80, 24);
    let quit = handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('q'))).unwrap();
    assert!(quit);
}

//! Integration tests for the carousel at the page level: key routing while
//! the hero is visible, mouse hover pause, and arrow-region clicks.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use kiosk::config::Config;
use kiosk::models::SiteContent;
use kiosk::tui::{handle_key_event, handle_mouse_event, AppState};

fn prepared() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.paths.submissions_dir = dir.path().to_path_buf();
    std::mem::forget(dir);
    let mut state = AppState::new(SiteContent::default(), config);
    state.prepare(Rect::new(0, 0, 80, 24));
    state
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn test_arrow_and_digit_keys_drive_slides_at_top() {
    let mut state = prepared();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Right)).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 1);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Left)).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 0);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('3'))).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 2);
}

#[test]
fn test_vertical_arrows_drive_slides_while_hero_visible() {
    let mut state = prepared();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Down)).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 1);
    assert_eq!(state.scroll.offset(), 0);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Up)).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 0);
}

#[test]
fn test_auto_advance_through_page_tick() {
    let mut state = prepared();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 0);
    state.tick(Instant::now() + Duration::from_millis(5000));
    assert_eq!(state.carousel.as_ref().unwrap().current(), 1);
}

#[test]
fn test_hover_over_hero_pauses_slideshow() {
    let mut state = prepared();
    assert!(state.carousel.as_ref().unwrap().timer_running());

    // The hero starts right below the two header rows.
    handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, 10, 3));
    assert!(!state.carousel.as_ref().unwrap().timer_running());

    // Leaving re-arms the countdown.
    handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, 10, 22));
    assert!(state.carousel.as_ref().unwrap().timer_running());
}

#[test]
fn test_clicking_arrow_regions_changes_slide() {
    let mut state = prepared();
    handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 70, 3));
    assert_eq!(state.carousel.as_ref().unwrap().current(), 1);
    handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 2, 3));
    assert_eq!(state.carousel.as_ref().unwrap().current(), 0);
}

#[test]
fn test_h_l_keys_drive_slides_at_top() {
    let mut state = prepared();
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('l'))).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 1);
    handle_key_event(&mut state, KeyEvent::from(KeyCode::Char('h'))).unwrap();
    assert_eq!(state.carousel.as_ref().unwrap().current(), 0);
}

#[test]
fn test_clicking_a_dot_jumps_to_its_slide() {
    let mut state = prepared();
    // At the top the hero occupies rows 2-7; the dot row is second to last,
    // with dot `i` at column 5 + 2i.
    handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 9, 6));
    assert_eq!(state.carousel.as_ref().unwrap().current(), 2);
    // A dot column past the slide count is ignored.
    handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 21, 6));
    assert_eq!(state.carousel.as_ref().unwrap().current(), 2);
}

#[test]
fn test_wheel_scrolling_moves_the_page() {
    let mut state = prepared();
    handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollDown, 10, 10));
    assert_eq!(state.scroll.offset(), 3);
    handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(state.scroll.offset(), 0);
}

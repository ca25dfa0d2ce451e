//! Vertical page scrolling with smooth animation and section geometry.
//!
//! The page is a fixed column of sections taller than the terminal. This
//! model owns the scroll offset, animates it toward a target a bit at a time
//! (the event loop ticks it), and answers geometry questions: which section
//! is visible, which one the nav should highlight, and whether the header
//! should compact or hide.
//!
//! Scroll targeting is fire-and-forget: callers set a target and never get a
//! completion callback, so anything that must wait for the motion (the
//! pending tab activation) uses a fixed settle delay instead.

use crate::constants::{HEADER_HIDE_THRESHOLD, HEADER_SCROLL_THRESHOLD};
use crate::models::SectionId;

/// One laid-out section: its top row within the page and its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    /// Section identifier
    pub id: SectionId,
    /// Top row offset within the page
    pub top: u16,
    /// Height in rows
    pub height: u16,
}

/// Scroll state for the page.
#[derive(Debug, Clone)]
pub struct PageScroll {
    offset: u16,
    target: Option<u16>,
    prev_offset: u16,
    header_height: u16,
    viewport_height: u16,
    sections: Vec<SectionExtent>,
}

impl PageScroll {
    /// Creates a scroll model at the top of an empty page.
    #[must_use]
    pub const fn new(header_height: u16) -> Self {
        Self {
            offset: 0,
            target: None,
            prev_offset: 0,
            header_height,
            viewport_height: 0,
            sections: Vec::new(),
        }
    }

    /// Replaces the laid-out section geometry. Called whenever the terminal
    /// is resized or content heights change.
    pub fn set_layout(&mut self, sections: Vec<SectionExtent>, viewport_height: u16) {
        self.sections = sections;
        self.viewport_height = viewport_height;
        self.offset = self.clamp(self.offset);
        if let Some(target) = self.target {
            self.target = Some(self.clamp(target));
        }
    }

    /// Total page height in rows.
    #[must_use]
    pub fn page_height(&self) -> u16 {
        self.sections
            .last()
            .map(|s| s.top.saturating_add(s.height))
            .unwrap_or(0)
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    fn max_offset(&self) -> u16 {
        self.page_height().saturating_sub(self.viewport_height)
    }

    fn clamp(&self, offset: u16) -> u16 {
        offset.min(self.max_offset())
    }

    /// Begins a smooth scroll so `section` lands just below the header.
    ///
    /// Unknown sections are ignored; the page cannot scroll to what was
    /// never laid out.
    pub fn scroll_to_section(&mut self, section: SectionId) {
        if let Some(extent) = self.sections.iter().find(|s| s.id == section) {
            let target = extent.top.saturating_sub(self.header_height);
            self.target = Some(self.clamp(target));
        }
    }

    /// Scrolls immediately by a signed number of rows, cancelling any
    /// animated target.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = i32::from(self.offset) + delta;
        let next = next.clamp(0, i32::from(self.max_offset()));
        self.prev_offset = self.offset;
        self.offset = next as u16;
    }

    /// Advances the scroll animation one tick. Covers a quarter of the
    /// remaining distance per tick (at least one row), which reads as an
    /// ease-out in practice.
    pub fn tick(&mut self) {
        let Some(target) = self.target else { return };
        self.prev_offset = self.offset;
        if self.offset == target {
            self.target = None;
            return;
        }
        let distance = i32::from(target) - i32::from(self.offset);
        let step = (distance / 4).clamp(-i32::from(u16::MAX), i32::from(u16::MAX));
        let step = if step == 0 { distance.signum() } else { step };
        self.offset = (i32::from(self.offset) + step) as u16;
        if self.offset == target {
            self.target = None;
        }
    }

    /// Whether a scroll animation is still in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Whether any row of `section` intersects the viewport.
    #[must_use]
    pub fn section_is_visible(&self, section: SectionId) -> bool {
        self.sections.iter().any(|s| {
            s.id == section
                && s.top < self.offset.saturating_add(self.viewport_height)
                && s.top.saturating_add(s.height) > self.offset
        })
    }

    /// The section the nav should highlight: the deepest one whose top is at
    /// or above the first content row. At the page end the last section
    /// counts as reached even when it is shorter than the viewport.
    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        let max = self.max_offset();
        if max > 0 && self.offset >= max {
            return self.sections.last().map(|s| s.id);
        }
        let anchor = self.offset.saturating_add(self.header_height);
        self.sections
            .iter()
            .take_while(|s| s.top <= anchor)
            .last()
            .or_else(|| self.sections.first())
            .map(|s| s.id)
    }

    /// Whether the header should render in its compact "scrolled" form.
    #[must_use]
    pub const fn header_compact(&self) -> bool {
        self.offset > HEADER_SCROLL_THRESHOLD
    }

    /// Whether the header should hide entirely: scrolling down, away from
    /// the top.
    #[must_use]
    pub const fn header_hidden(&self) -> bool {
        self.offset > self.prev_offset && self.offset > HEADER_HIDE_THRESHOLD
    }
}

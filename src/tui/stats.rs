//! Animated statistics counters.
//!
//! Counters run from zero to their target the first time the stats section
//! scrolls into view, then never again. The animation is a fixed number of
//! steps over a fixed duration, resampled from elapsed time on each tick so
//! the 100ms poll loop doesn't have to divide the duration evenly.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;

use crate::constants::{STATS_DURATION_MS, STATS_STEPS};
use crate::models::Stat;
use crate::tui::Theme;

/// Stats feature state.
#[derive(Debug, Clone)]
pub struct StatCounters {
    stats: Vec<Stat>,
    current: Vec<u64>,
    started: Option<Instant>,
    animated: bool,
    skip_animation: bool,
}

impl StatCounters {
    /// Initializes the counters from content. Returns `None` (with a logged
    /// warning) when there are no stats.
    #[must_use]
    pub fn init(stats: &[Stat], skip_animation: bool) -> Option<Self> {
        if stats.is_empty() {
            tracing::warn!("stats section disabled: no stats in content");
            return None;
        }
        Some(Self {
            stats: stats.to_vec(),
            current: vec![0; stats.len()],
            started: None,
            animated: false,
            skip_animation,
        })
    }

    /// Starts the count-up the first time the section becomes visible.
    /// Subsequent calls are no-ops.
    pub fn trigger(&mut self, now: Instant) {
        if self.animated {
            return;
        }
        self.animated = true;
        if self.skip_animation {
            for (value, stat) in self.current.iter_mut().zip(&self.stats) {
                *value = stat.target;
            }
        } else {
            self.started = Some(now);
        }
    }

    /// Whether the count-up has been triggered.
    #[must_use]
    pub const fn has_animated(&self) -> bool {
        self.animated
    }

    /// Advances the counters toward their targets.
    pub fn tick(&mut self, now: Instant) {
        let Some(started) = self.started else { return };
        let elapsed_ms = now.duration_since(started).as_millis() as u64;
        let step = ((elapsed_ms * u64::from(STATS_STEPS)) / STATS_DURATION_MS)
            .min(u64::from(STATS_STEPS));
        for (value, stat) in self.current.iter_mut().zip(&self.stats) {
            // Widened so large targets cannot overflow mid-animation.
            *value =
                (u128::from(stat.target) * u128::from(step) / u128::from(STATS_STEPS)) as u64;
        }
        if step == u64::from(STATS_STEPS) {
            self.started = None;
        }
    }

    /// Current displayed value for stat `index` (tests and render).
    #[must_use]
    pub fn value(&self, index: usize) -> u64 {
        self.current.get(index).copied().unwrap_or(0)
    }

    /// Renders the counters as a single row of number-over-label pairs.
    #[must_use]
    pub fn lines(&self, _width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let mut numbers = vec![Span::raw("  ".to_string())];
        let mut labels = vec![Span::raw("  ".to_string())];
        for (value, stat) in self.current.iter().zip(&self.stats) {
            let cell = stat.label.len().max(8) + 3;
            numbers.push(Span::styled(
                format!("{value:<cell$}"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::styled(
                format!("{:<cell$}", stat.label),
                Style::default().fg(theme.text_secondary),
            ));
        }
        vec![
            Line::from(""),
            Line::from(numbers),
            Line::from(labels),
            Line::from(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn stats() -> Vec<Stat> {
        vec![
            Stat {
                label: "Projects".to_string(),
                target: 600,
            },
            Stat {
                label: "Years".to_string(),
                target: 20,
            },
        ]
    }

    #[test]
    fn test_init_refuses_empty() {
        assert!(StatCounters::init(&[], false).is_none());
    }

    #[test]
    fn test_counts_up_and_finishes() {
        let t0 = Instant::now();
        let mut counters = StatCounters::init(&stats(), false).unwrap();
        counters.trigger(t0);

        counters.tick(t0 + Duration::from_millis(STATS_DURATION_MS / 2));
        let halfway = counters.value(0);
        assert!(halfway > 0 && halfway < 600);

        counters.tick(t0 + Duration::from_millis(STATS_DURATION_MS));
        assert_eq!(counters.value(0), 600);
        assert_eq!(counters.value(1), 20);
    }

    #[test]
    fn test_triggers_only_once() {
        let t0 = Instant::now();
        let mut counters = StatCounters::init(&stats(), false).unwrap();
        counters.trigger(t0);
        counters.tick(t0 + Duration::from_millis(STATS_DURATION_MS));
        assert_eq!(counters.value(0), 600);

        // A second trigger must not restart the count.
        counters.trigger(t0 + Duration::from_millis(5000));
        counters.tick(t0 + Duration::from_millis(5100));
        assert_eq!(counters.value(0), 600);
    }

    #[test]
    fn test_large_targets_do_not_overflow_midway() {
        let t0 = Instant::now();
        let big = vec![Stat {
            label: "Nails driven".to_string(),
            target: u64::MAX / 2,
        }];
        let mut counters = StatCounters::init(&big, false).unwrap();
        counters.trigger(t0);

        counters.tick(t0 + Duration::from_millis(STATS_DURATION_MS / 2));
        let halfway = counters.value(0);
        assert!(halfway > 0 && halfway < u64::MAX / 2);

        counters.tick(t0 + Duration::from_millis(STATS_DURATION_MS));
        assert_eq!(counters.value(0), u64::MAX / 2);
    }

    #[test]
    fn test_reduced_motion_jumps_to_target() {
        let mut counters = StatCounters::init(&stats(), true).unwrap();
        counters.trigger(Instant::now());
        assert_eq!(counters.value(0), 600);
    }
}

//! Index-based panel controller.
//!
//! Tracks a current index over a fixed-size ordered collection of panels and
//! a parallel collection of indicators (dots, progress markers). Exactly one
//! panel and its corresponding indicator carry the active flag at any time.

/// Controller state for positionally-paired panels and indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelController {
    current: usize,
    panel_active: Vec<bool>,
    indicator_active: Vec<bool>,
}

impl PanelController {
    /// Creates a controller over `count` panel/indicator pairs, with the
    /// first pair active.
    ///
    /// Returns `None` when `count` is zero; an empty collection has no valid
    /// selection and the owning feature should skip initialization.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        Self::with_counts(count, count)
    }

    /// Creates a controller from separately-sized panel and indicator
    /// collections.
    ///
    /// Returns `None` when the collections are empty or their lengths
    /// disagree, so a half-present feature never initializes.
    #[must_use]
    pub fn with_counts(panels: usize, indicators: usize) -> Option<Self> {
        if panels == 0 || panels != indicators {
            return None;
        }
        let mut controller = Self {
            current: 0,
            panel_active: vec![false; panels],
            indicator_active: vec![false; panels],
        };
        controller.panel_active[0] = true;
        controller.indicator_active[0] = true;
        Some(controller)
    }

    /// Number of panel/indicator pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panel_active.len()
    }

    /// Always false: construction rejects empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panel_active.is_empty()
    }

    /// The currently active index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether the panel at `index` carries the active flag.
    #[must_use]
    pub fn panel_is_active(&self, index: usize) -> bool {
        self.panel_active.get(index).copied().unwrap_or(false)
    }

    /// Whether the indicator at `index` carries the active flag.
    #[must_use]
    pub fn indicator_is_active(&self, index: usize) -> bool {
        self.indicator_active.get(index).copied().unwrap_or(false)
    }

    /// Jumps to `index`: deactivates every pair, then activates the pair at
    /// `index`.
    ///
    /// An out-of-range target is a silent no-op returning `false`; nothing is
    /// mutated and nothing is raised to the caller.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.panel_active.len() {
            return false;
        }
        for flag in &mut self.panel_active {
            *flag = false;
        }
        for flag in &mut self.indicator_active {
            *flag = false;
        }
        self.panel_active[index] = true;
        self.indicator_active[index] = true;
        self.current = index;
        true
    }

    /// Advances to the next pair, wrapping from the last back to the first.
    pub fn next(&mut self) -> bool {
        let count = self.panel_active.len();
        self.go_to((self.current + 1) % count)
    }

    /// Steps to the previous pair, wrapping from the first to the last.
    pub fn previous(&mut self) -> bool {
        let count = self.panel_active.len();
        self.go_to((self.current + count - 1) % count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exactly one panel and its matching indicator may be active.
    fn assert_single_active(controller: &PanelController) {
        let active: Vec<usize> = (0..controller.len())
            .filter(|&i| controller.panel_is_active(i))
            .collect();
        assert_eq!(active.len(), 1, "expected exactly one active panel");
        let index = active[0];
        assert_eq!(index, controller.current());
        for i in 0..controller.len() {
            assert_eq!(
                controller.panel_is_active(i),
                controller.indicator_is_active(i),
                "panel/indicator flags diverged at {i}"
            );
        }
    }

    #[test]
    fn test_new_starts_at_zero() {
        let controller = PanelController::new(4).unwrap();
        assert_eq!(controller.current(), 0);
        assert_single_active(&controller);
    }

    #[test]
    fn test_empty_refuses_init() {
        assert!(PanelController::new(0).is_none());
    }

    #[test]
    fn test_mismatched_counts_refuse_init() {
        assert!(PanelController::with_counts(3, 2).is_none());
        assert!(PanelController::with_counts(0, 0).is_none());
        assert!(PanelController::with_counts(3, 3).is_some());
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let mut controller = PanelController::new(3).unwrap();
        controller.go_to(1);
        assert!(!controller.go_to(3));
        assert_eq!(controller.current(), 1);
        assert_single_active(&controller);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut controller = PanelController::new(5).unwrap();
        let mut seen = Vec::new();
        for _ in 0..5 {
            controller.next();
            seen.push(controller.current());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0]);
        assert_single_active(&controller);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut controller = PanelController::new(3).unwrap();
        controller.previous();
        assert_eq!(controller.current(), 2);
        controller.previous();
        assert_eq!(controller.current(), 1);
        assert_single_active(&controller);
    }

    #[test]
    fn test_invariant_under_mixed_sequence() {
        let mut controller = PanelController::new(4).unwrap();
        controller.next();
        controller.go_to(3);
        controller.previous();
        controller.go_to(99); // no-op
        controller.next();
        controller.next();
        assert_single_active(&controller);
    }

    #[test]
    fn test_single_panel_cycles_in_place() {
        let mut controller = PanelController::new(1).unwrap();
        controller.next();
        assert_eq!(controller.current(), 0);
        controller.previous();
        assert_eq!(controller.current(), 0);
        assert_single_active(&controller);
    }
}

/// Header switches to its compact style once the page is scrolled past this offset.
pub const SCROLL_THRESHOLD: f64 = 80.0;

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Remembers the last published value so consumers only hear about changes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    scrolled: bool,
}

impl ScrollTracker {
    /// Returns `Some(new_value)` when the offset flips the signal.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let scrolled = is_past_threshold(offset);
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(79.0));
        assert!(!is_past_threshold(80.0));
        assert!(is_past_threshold(80.5));
        assert!(is_past_threshold(81.0));
        assert!(is_past_threshold(5000.0));
    }

    #[test]
    fn publishes_only_on_change() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.observe(10.0), None);
        assert_eq!(tracker.observe(80.0), None);
        assert_eq!(tracker.observe(81.0), Some(true));
        assert_eq!(tracker.observe(300.0), None);
        assert_eq!(tracker.observe(80.0), Some(false));
        assert_eq!(tracker.observe(0.0), None);
    }
}

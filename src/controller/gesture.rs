//! Double-tap classification
//!
//! A tap counts as a double-tap when it lands inside the window of the
//! previous press. Every press refreshes the timestamp, including presses
//! that were themselves classified as double-taps.

use crate::config::DoubleTapScope;
use smallvec::{SmallVec, smallvec};
use std::time::{Duration, Instant};

/// How a tap was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    /// Ordinary tap
    Single,
    /// Second tap inside the double-tap window
    Double,
}

/// Tracks last-press timestamps, either one shared slot or one per heart
#[derive(Debug, Clone)]
pub struct TapClassifier {
    window: Duration,
    scope: DoubleTapScope,
    last_press: SmallVec<[Option<Instant>; 8]>,
}

impl TapClassifier {
    /// Classifier for `item_count` hearts
    pub fn new(window: Duration, scope: DoubleTapScope, item_count: usize) -> Self {
        let slots = match scope {
            DoubleTapScope::Shared => 1,
            DoubleTapScope::PerItem => item_count,
        };
        Self {
            window,
            scope,
            last_press: smallvec![None; slots],
        }
    }

    /// Classify a press on heart `index` at `now` and remember it
    ///
    /// `index` must be in range; the controller guards it.
    pub fn classify(&mut self, index: usize, now: Instant) -> TapKind {
        let slot = match self.scope {
            DoubleTapScope::Shared => 0,
            DoubleTapScope::PerItem => index,
        };
        let kind = match self.last_press[slot] {
            Some(previous) if now.saturating_duration_since(previous) < self.window => {
                TapKind::Double
            }
            _ => TapKind::Single,
        };
        self.last_press[slot] = Some(now);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::at;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_first_tap_is_single() {
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::PerItem, 7);
        assert_eq!(taps.classify(0, Instant::now()), TapKind::Single);
    }

    #[test]
    fn test_second_tap_inside_window_is_double() {
        let t0 = Instant::now();
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::PerItem, 7);
        taps.classify(2, t0);
        assert_eq!(taps.classify(2, at(t0, 299)), TapKind::Double);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let t0 = Instant::now();
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::PerItem, 7);
        taps.classify(2, t0);
        assert_eq!(taps.classify(2, at(t0, 300)), TapKind::Single);
    }

    #[test]
    fn test_double_tap_refreshes_timestamp() {
        let t0 = Instant::now();
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::PerItem, 7);
        taps.classify(1, t0);
        assert_eq!(taps.classify(1, at(t0, 200)), TapKind::Double);
        assert_eq!(taps.classify(1, at(t0, 400)), TapKind::Double);
    }

    #[test]
    fn test_per_item_scope_ignores_other_hearts() {
        let t0 = Instant::now();
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::PerItem, 7);
        taps.classify(0, t0);
        assert_eq!(taps.classify(1, at(t0, 50)), TapKind::Single);
    }

    #[test]
    fn test_shared_scope_crosses_hearts() {
        let t0 = Instant::now();
        let mut taps = TapClassifier::new(WINDOW, DoubleTapScope::Shared, 7);
        taps.classify(0, t0);
        assert_eq!(taps.classify(1, at(t0, 50)), TapKind::Double);
    }
}

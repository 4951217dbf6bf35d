//! Tooltip pop-in / pop-out animation

use lilt::{Animated, Easing};
use std::time::Instant;

/// Duration in milliseconds of the springy pop-in and of the pop-out
pub const POP_DURATION_MS: f32 = 260.0;

/// One animated value driving both tooltip scale and opacity
///
/// Showing overshoots past 1.0 before settling; hiding never goes below 0.0.
#[derive(Debug, Clone)]
pub struct TooltipAnimation {
    shown: Animated<bool, Instant>,
}

impl Default for TooltipAnimation {
    fn default() -> Self {
        Self::resting(false)
    }
}

impl TooltipAnimation {
    fn resting(visible: bool) -> Self {
        Self {
            shown: Animated::new(visible)
                .duration(POP_DURATION_MS)
                .easing(Easing::EaseOutBack),
        }
    }

    /// Animate toward shown (`true`) or hidden (`false`)
    pub fn start(&mut self, now: Instant, visible: bool) {
        self.shown.transition(visible, now);
    }

    /// Jump to the final value without animating
    pub fn set(&mut self, visible: bool) {
        *self = Self::resting(visible);
    }

    /// Progress at `now`; may exceed 1.0 while popping in
    pub fn value_at(&self, now: Instant) -> f32 {
        self.shown.animate_bool(0.0, 1.0, now).max(0.0)
    }

    /// Whether the value still moves at `now`
    pub fn is_running(&self, now: Instant) -> bool {
        self.shown.in_progress(now)
    }
}

//! Heart bounce animation

use lilt::{Animated, Easing};
use std::time::Instant;

/// Duration in milliseconds of each half of the bounce (toward the peak, back to rest)
pub const BOUNCE_PHASE_MS: f32 = 120.0;

/// Resting scale of a heart
pub const REST_SCALE: f32 = 1.0;

/// Scale animation owned by one heart
///
/// Plays `current -> peak -> 1.0` once. Restarting mid-flight begins from the
/// value shown at that instant, so rapid taps never jump.
#[derive(Debug, Clone)]
pub struct BounceAnimation {
    from: f32,
    peak: f32,
    // false -> true carries the scale from `from` to `peak`
    rise: Animated<bool, Instant>,
    // false -> true carries it from `peak` back to rest, one phase later
    settle: Animated<bool, Instant>,
}

impl Default for BounceAnimation {
    fn default() -> Self {
        Self {
            from: REST_SCALE,
            peak: REST_SCALE,
            rise: phase(0.0),
            settle: phase(BOUNCE_PHASE_MS),
        }
    }
}

fn phase(delay_ms: f32) -> Animated<bool, Instant> {
    Animated::new(false)
        .duration(BOUNCE_PHASE_MS)
        .easing(Easing::EaseOutCubic)
        .delay(delay_ms)
}

impl BounceAnimation {
    /// Start (or redirect) the bounce toward `peak`
    pub fn start(&mut self, now: Instant, peak: f32) {
        self.from = self.value_at(now);
        self.peak = peak;
        self.rise = phase(0.0);
        self.rise.transition(true, now);
        self.settle = phase(BOUNCE_PHASE_MS);
        self.settle.transition(true, now);
    }

    /// Scale at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let rising = self.rise.animate_bool(self.from, self.peak, now);
        let settled = self.settle.animate_bool(0.0, 1.0, now);
        rising + (REST_SCALE - rising) * settled
    }

    /// Whether the bounce still moves at `now`
    pub fn is_running(&self, now: Instant) -> bool {
        self.rise.in_progress(now) || self.settle.in_progress(now)
    }
}

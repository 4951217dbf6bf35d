//! Animation state for the heart column
//!
//! Animations are `lilt` values sampled against an `Instant`. The controller
//! starts them and never waits for them; starting a new one on a running
//! handle redirects it from whatever value it currently shows.
//!
//! - `BounceAnimation`: heart scale, current -> peak -> 1.0
//! - `TooltipAnimation`: tooltip scale/opacity, 0 -> 1 with overshoot on show,
//!   1 -> 0 on hide

pub mod bounce;
pub mod tooltip;

pub use bounce::BounceAnimation;
pub use tooltip::TooltipAnimation;

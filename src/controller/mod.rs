//! Heart interaction controller module
//!
//! This module holds the state machine behind the heart column.
//!
//! # Overview
//!
//! The controller is the single owner of interaction state. It:
//! - **Receives input** (`tap`, `double_tap`, `tooltip_tap`) with the time it happened
//! - **Classifies double-taps** itself (star variant)
//! - **Owns the timers** for delayed tooltip hides and auto-dismiss
//! - **Starts animations** without waiting on them
//! - **Notifies the view** through a `ViewSink`
//!
//! # Architecture
//!
//! - `HeartController`: the state machine
//! - `TapClassifier`: double-tap window, shared or per heart
//! - `TimerTable`: cancellable scheduled actions keyed by slot
//!
//! # Event Flow
//!
//! ```text
//! GUI input → ControllerEvent → ControllerLoop → HeartController
//!                                                      ↓
//!                                               ViewUpdate → GUI
//! ```
//!
//! # Variants
//!
//! 1. **Star**:
//!    - Single tap toggles fill; filling shows the tooltip
//!    - Double-tap empties the heart and drops its star
//!    - Tooltip tap toggles the star, then hides the tooltip after a delay
//!
//! 2. **Auto-dismiss**:
//!    - Every tap toggles fill
//!    - Filling schedules a dismiss that empties the heart after a delay
//!    - Dismiss timers live in one global slot or one slot per heart
//!
//! Timer handlers re-read current state when they fire; nothing acts on
//! values captured at scheduling time beyond the heart index.

pub mod gesture;
pub mod heart_controller;
pub mod timers;

pub use gesture::{TapClassifier, TapKind};
pub use heart_controller::{HeartController, HeartState};
pub use timers::{TimerAction, TimerKey, TimerTable};

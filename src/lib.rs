//! Heartboard - a column of tappable hearts
//!
//! Each heart toggles between empty and filled with a small bounce. Filling a
//! heart shows a tooltip beside it. Two interaction variants are supported:
//! the star variant (double-tap empties a heart, tapping the tooltip toggles a
//! star) and the auto-dismiss variant (filled hearts revert on their own after
//! a delay).
//!
//! `HeartController` holds the whole interaction state machine and is driven
//! by `ControllerLoop` on its own thread. Renderers receive `ViewUpdate`s
//! through the `ViewSink` trait; the Slint GUI lives in the binary.

// Module declarations
pub mod animation;
pub mod assets;
pub mod config;
pub mod controller;
pub mod error;
pub mod runtime;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use controller::{HeartController, HeartState};
pub use error::{HeartboardError, Result};
pub use runtime::{ControllerEvent, ControllerLoop};
pub use view::{ItemVisual, ScreenState, ViewSink, ViewUpdate};

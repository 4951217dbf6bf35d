//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::error::{HeartboardError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on the number of hearts in the column
pub const MAX_ITEM_COUNT: usize = 64;

/// Which interaction flavour the screen runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Double-tap removes a heart; the tooltip toggles a star
    #[default]
    Star,
    /// Every tap toggles; filled hearts revert after the dismiss delay
    AutoDismiss,
}

/// How the double-tap window is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DoubleTapScope {
    /// One last-press timestamp shared by every heart
    Shared,
    /// Each heart remembers its own last press
    #[default]
    PerItem,
}

/// How pending dismiss timers are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DismissScope {
    /// A single timer slot; any tap cancels whatever is pending
    Global,
    /// One timer slot per heart
    #[default]
    PerItem,
}

/// Behavior of the heart column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    /// Interaction variant
    pub variant: Variant,
    /// Number of hearts, fixed for the lifetime of the screen
    pub item_count: usize,
    /// Two taps closer than this count as a double-tap (star variant)
    pub double_tap_window_ms: u64,
    /// Delay between toggling the star and hiding the tooltip
    pub tooltip_hide_delay_ms: u64,
    /// Delay before a filled heart reverts (auto-dismiss variant)
    pub dismiss_delay_ms: u64,
    /// Double-tap tracking
    pub double_tap_scope: DoubleTapScope,
    /// Dismiss timer tracking
    pub dismiss_scope: DismissScope,
    /// Peak scale of the bounce played when a heart fills
    pub grow_peak: f32,
    /// Peak scale of the bounce played when a heart empties
    pub shrink_peak: f32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            item_count: 7,
            double_tap_window_ms: 300,
            tooltip_hide_delay_ms: 300,
            dismiss_delay_ms: 1000,
            double_tap_scope: DoubleTapScope::default(),
            dismiss_scope: DismissScope::default(),
            grow_peak: 1.2,
            shrink_peak: 0.9,
        }
    }
}

impl ScreenSettings {
    /// Settings for the given variant with every other value at its default
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Double-tap window as a `Duration`
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }

    /// Tooltip hide delay as a `Duration`
    pub fn tooltip_hide_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_delay_ms)
    }

    /// Dismiss delay as a `Duration`
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    /// Reject settings the controller cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.item_count == 0 {
            return Err(HeartboardError::InvalidSettings(
                "item_count must be at least 1".to_string(),
            ));
        }
        if self.item_count > MAX_ITEM_COUNT {
            return Err(HeartboardError::InvalidSettings(format!(
                "item_count must be at most {MAX_ITEM_COUNT}, got {}",
                self.item_count
            )));
        }
        if self.double_tap_window_ms == 0
            || self.tooltip_hide_delay_ms == 0
            || self.dismiss_delay_ms == 0
        {
            return Err(HeartboardError::InvalidSettings(
                "timings must be non-zero".to_string(),
            ));
        }
        if !(self.grow_peak.is_finite() && self.grow_peak > 0.0)
            || !(self.shrink_peak.is_finite() && self.shrink_peak > 0.0)
        {
            return Err(HeartboardError::InvalidSettings(
                "bounce peaks must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heart column behavior
    pub screen: ScreenSettings,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// Window state for size persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 360,
            height: 640,
        }
    }
}

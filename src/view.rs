//! Contract between the controller and whatever draws the hearts
//!
//! The controller never draws. It pushes two kinds of notification through a
//! `ViewSink`: the visual state of one heart, and the visibility of one
//! heart's tooltip. A `ScreenState` snapshot bundles everything for initial
//! population.

use smallvec::SmallVec;
use std::sync::mpsc;
use tracing::warn;

/// Everything a renderer needs to draw one heart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemVisual {
    /// Heart is filled
    pub filled: bool,
    /// Star badge is shown
    pub starred: bool,
    /// This heart owns the visible tooltip
    pub tooltip_visible: bool,
    /// Heart scale, 1.0 at rest
    pub scale: f32,
    /// Tooltip scale; opacity is this value clamped to `0.0..=1.0`
    pub tooltip_progress: f32,
}

/// Snapshot of the whole column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    /// One entry per heart, in index order
    pub items: SmallVec<[ItemVisual; 8]>,
    /// Heart whose tooltip is visible
    pub active_tooltip: Option<usize>,
}

impl ScreenState {
    /// Number of hearts currently showing a tooltip
    pub fn visible_tooltips(&self) -> usize {
        self.items.iter().filter(|item| item.tooltip_visible).count()
    }
}

/// A single notification for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewUpdate {
    /// Redraw heart `index` with `visual`
    Item {
        /// Heart index
        index: usize,
        /// New visual state
        visual: ItemVisual,
    },
    /// Show or hide the tooltip of heart `index`
    Tooltip {
        /// Heart index
        index: usize,
        /// Whether the tooltip is shown
        visible: bool,
    },
}

/// Receiver of controller notifications
pub trait ViewSink {
    /// Set the visual state of heart `index`
    fn set_item(&mut self, index: usize, visual: ItemVisual);

    /// Show or hide the tooltip of heart `index`
    fn set_tooltip(&mut self, index: usize, visible: bool);
}

/// Collects updates in order; handy for tests and headless runs
impl ViewSink for Vec<ViewUpdate> {
    fn set_item(&mut self, index: usize, visual: ItemVisual) {
        self.push(ViewUpdate::Item { index, visual });
    }

    fn set_tooltip(&mut self, index: usize, visible: bool) {
        self.push(ViewUpdate::Tooltip { index, visible });
    }
}

/// Forwards updates to the GUI thread
///
/// Never blocks the controller: when the channel is full the update is
/// dropped and logged. Item updates carry full state, so the next one repairs
/// the view.
impl ViewSink for mpsc::SyncSender<ViewUpdate> {
    fn set_item(&mut self, index: usize, visual: ItemVisual) {
        if let Err(e) = self.try_send(ViewUpdate::Item { index, visual }) {
            warn!("Dropped view update for heart {}: {}", index, e);
        }
    }

    fn set_tooltip(&mut self, index: usize, visible: bool) {
        if let Err(e) = self.try_send(ViewUpdate::Tooltip { index, visible }) {
            warn!("Dropped tooltip update for heart {}: {}", index, e);
        }
    }
}

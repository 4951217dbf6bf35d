//! Heart interaction controller implementation
//!
//! Owns the per-heart flags, the single tooltip slot, the tap classifier, the
//! timer table and one bounce/tooltip animation per heart. Every operation
//! takes the current `Instant` so the whole state machine can be driven
//! deterministically.

use crate::animation::{BounceAnimation, TooltipAnimation};
use crate::config::{DismissScope, ScreenSettings, Variant};
use crate::controller::gesture::{TapClassifier, TapKind};
use crate::controller::timers::{TimerAction, TimerKey, TimerTable};
use crate::error::Result;
use crate::view::{ItemVisual, ScreenState, ViewSink};
use smallvec::SmallVec;
use std::time::Instant;
use tracing::{debug, info};

/// Observable state of one heart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartState {
    /// Outline only
    Empty,
    /// Filled, no star
    Filled,
    /// Filled with the star badge (star variant)
    FilledStarred,
}

#[derive(Debug, Clone, Default)]
struct HeartItem {
    filled: bool,
    starred: bool,
    bounce: BounceAnimation,
    tooltip: TooltipAnimation,
    // Set while an animation needs frames; cleared after the resting frame
    needs_frame: bool,
}

impl HeartItem {
    fn state(&self) -> HeartState {
        match (self.filled, self.starred) {
            (false, _) => HeartState::Empty,
            (true, false) => HeartState::Filled,
            (true, true) => HeartState::FilledStarred,
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.bounce.is_running(now) || self.tooltip.is_running(now)
    }
}

/// Heart interaction controller
///
/// Input is ignored until [`mark_ready`](Self::mark_ready) is called and after
/// [`shutdown`](Self::shutdown). Out-of-range indices are ignored.
pub struct HeartController<S: ViewSink> {
    settings: ScreenSettings,
    items: SmallVec<[HeartItem; 8]>,
    active_tooltip: Option<usize>,
    taps: TapClassifier,
    timers: TimerTable,
    sink: S,
    ready: bool,
    torn_down: bool,
}

impl<S: ViewSink> HeartController<S> {
    /// Create a controller with every heart empty
    pub fn new(settings: ScreenSettings, sink: S) -> Result<Self> {
        settings.validate()?;

        info!(
            "Creating heart controller: {:?} variant, {} hearts",
            settings.variant, settings.item_count
        );

        let items = std::iter::repeat_with(HeartItem::default)
            .take(settings.item_count)
            .collect();
        let taps = TapClassifier::new(
            settings.double_tap_window(),
            settings.double_tap_scope,
            settings.item_count,
        );

        Ok(Self {
            settings,
            items,
            active_tooltip: None,
            taps,
            timers: TimerTable::default(),
            sink,
            ready: false,
            torn_down: false,
        })
    }

    /// Settings the controller was built with
    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    /// Number of hearts
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// State of heart `index`, `None` when out of range
    pub fn state(&self, index: usize) -> Option<HeartState> {
        self.items.get(index).map(HeartItem::state)
    }

    /// Whether heart `index` is filled
    pub fn is_filled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.filled)
    }

    /// Whether heart `index` carries a star
    pub fn is_starred(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.starred)
    }

    /// Heart whose tooltip is visible
    pub fn active_tooltip(&self) -> Option<usize> {
        self.active_tooltip
    }

    /// Whether assets are ready and input is accepted
    pub fn is_ready(&self) -> bool {
        self.ready && !self.torn_down
    }

    /// Whether the controller has been torn down
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of pending timers
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Whether any heart still needs animation frames
    pub fn needs_frames(&self) -> bool {
        self.items.iter().any(|item| item.needs_frame)
    }

    /// The view sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The view sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Assets resolved: start accepting input and publish the full column
    pub fn mark_ready(&mut self, now: Instant) {
        if self.torn_down || self.ready {
            return;
        }
        info!("Assets ready, accepting input");
        self.ready = true;
        for index in 0..self.items.len() {
            self.publish(index, now);
        }
    }

    /// A tap on heart `index`
    pub fn tap(&mut self, index: usize, now: Instant) {
        if !self.accepts(index, "tap") {
            return;
        }

        match self.settings.variant {
            Variant::Star => match self.taps.classify(index, now) {
                TapKind::Double => {
                    debug!("Tap on heart {} classified as double-tap", index);
                    self.clear_heart(index, now);
                }
                TapKind::Single => self.toggle(index, now),
            },
            Variant::AutoDismiss => {
                let key = self.dismiss_key(index);
                self.timers.cancel(key);
                let filling = !self.items[index].filled;
                self.toggle(index, now);
                if filling {
                    let deadline = now + self.settings.dismiss_delay();
                    self.timers
                        .schedule(key, deadline, TimerAction::Dismiss { index });
                }
            }
        }
    }

    /// A double-tap on heart `index` classified by the input layer
    pub fn double_tap(&mut self, index: usize, now: Instant) {
        if !self.accepts(index, "double-tap") {
            return;
        }
        if self.settings.variant != Variant::Star {
            debug!("Double-tap on heart {} ignored by auto-dismiss variant", index);
            return;
        }
        self.clear_heart(index, now);
    }

    /// A tap on the tooltip of heart `index`
    pub fn tooltip_tap(&mut self, index: usize, now: Instant) {
        if !self.accepts(index, "tooltip tap") {
            return;
        }
        if self.settings.variant != Variant::Star {
            debug!("Tooltip tap on heart {} ignored by auto-dismiss variant", index);
            return;
        }
        if self.active_tooltip != Some(index) || !self.items[index].filled {
            debug!("Tooltip tap on heart {} ignored: tooltip not shown", index);
            return;
        }

        let item = &mut self.items[index];
        item.starred = !item.starred;
        debug!("Heart {} starred: {}", index, item.starred);
        self.publish(index, now);

        self.timers.schedule(
            TimerKey::TooltipHide(index),
            now + self.settings.tooltip_hide_delay(),
            TimerAction::HideTooltip { index },
        );
    }

    /// Fire due timers and emit frames for running animations
    pub fn advance(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }

        for action in self.timers.take_due(now) {
            self.fire(action, now);
        }

        for index in 0..self.items.len() {
            if !self.items[index].needs_frame {
                continue;
            }
            let visual = self.visual(index, now);
            self.sink.set_item(index, visual);
            if !self.items[index].is_animating(now) {
                self.items[index].needs_frame = false;
            }
        }
    }

    /// Snapshot of the whole column at `now`
    pub fn snapshot(&self, now: Instant) -> ScreenState {
        ScreenState {
            items: (0..self.items.len())
                .map(|index| self.visual(index, now))
                .collect(),
            active_tooltip: self.active_tooltip,
        }
    }

    /// Tear down: cancel every pending timer and ignore all further input
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        let cancelled = self.timers.cancel_all();
        info!("Heart controller torn down, {} pending timer(s) cancelled", cancelled);
    }

    fn accepts(&self, index: usize, what: &str) -> bool {
        if self.torn_down {
            debug!("Ignoring {} on heart {}: controller torn down", what, index);
            return false;
        }
        if !self.ready {
            debug!("Ignoring {} on heart {}: assets not ready", what, index);
            return false;
        }
        if index >= self.items.len() {
            debug!(
                "Ignoring {} on heart {}: only {} hearts",
                what,
                index,
                self.items.len()
            );
            return false;
        }
        true
    }

    fn dismiss_key(&self, index: usize) -> TimerKey {
        match self.settings.dismiss_scope {
            DismissScope::Global => TimerKey::GlobalDismiss,
            DismissScope::PerItem => TimerKey::Dismiss(index),
        }
    }

    fn toggle(&mut self, index: usize, now: Instant) {
        if self.items[index].filled {
            self.unfill(index, now);
        } else {
            self.fill(index, now);
        }
    }

    /// Double-tap: empty the heart, bouncing even when it already was
    fn clear_heart(&mut self, index: usize, now: Instant) {
        if self.items[index].filled {
            self.unfill(index, now);
            return;
        }
        debug!("Heart {} already empty, shrink bounce only", index);
        let shrink_peak = self.settings.shrink_peak;
        let item = &mut self.items[index];
        item.bounce.start(now, shrink_peak);
        item.needs_frame = true;
        self.publish(index, now);
    }

    fn fill(&mut self, index: usize, now: Instant) {
        debug!("Heart {} filled", index);
        let grow_peak = self.settings.grow_peak;
        let item = &mut self.items[index];
        item.filled = true;
        item.bounce.start(now, grow_peak);
        item.needs_frame = true;
        self.show_tooltip(index, now);
        self.publish(index, now);
    }

    fn unfill(&mut self, index: usize, now: Instant) {
        debug!("Heart {} emptied", index);
        let shrink_peak = self.settings.shrink_peak;
        let item = &mut self.items[index];
        item.filled = false;
        item.starred = false;
        item.bounce.start(now, shrink_peak);
        item.needs_frame = true;
        self.hide_tooltip(index, now);
        self.publish(index, now);
    }

    fn show_tooltip(&mut self, index: usize, now: Instant) {
        if let Some(previous) = self.active_tooltip
            && previous != index
        {
            self.hide_tooltip(previous, now);
        }
        self.active_tooltip = Some(index);
        self.timers.cancel(TimerKey::TooltipHide(index));
        self.animate_tooltip(index, true, now);
        self.sink.set_tooltip(index, true);
    }

    /// Hides the tooltip only if it belongs to `index`
    fn hide_tooltip(&mut self, index: usize, now: Instant) {
        if self.active_tooltip != Some(index) {
            return;
        }
        self.active_tooltip = None;
        self.timers.cancel(TimerKey::TooltipHide(index));
        self.animate_tooltip(index, false, now);
        self.sink.set_tooltip(index, false);
        self.publish(index, now);
    }

    fn animate_tooltip(&mut self, index: usize, visible: bool, now: Instant) {
        let item = &mut self.items[index];
        match self.settings.variant {
            Variant::AutoDismiss => {
                item.tooltip.start(now, visible);
                item.needs_frame = true;
            }
            Variant::Star => item.tooltip.set(visible),
        }
    }

    fn fire(&mut self, action: TimerAction, now: Instant) {
        match action {
            TimerAction::HideTooltip { index } => {
                if self.active_tooltip == Some(index) {
                    debug!("Hiding tooltip of heart {} after star toggle", index);
                    self.hide_tooltip(index, now);
                } else {
                    debug!("Tooltip hide for heart {} is stale", index);
                }
            }
            TimerAction::Dismiss { index } => {
                let still_wanted = match self.settings.dismiss_scope {
                    DismissScope::Global => self.active_tooltip == Some(index),
                    DismissScope::PerItem => self.items[index].filled,
                };
                if still_wanted {
                    debug!("Auto-dismissing heart {}", index);
                    self.unfill(index, now);
                } else {
                    debug!("Dismiss for heart {} is stale", index);
                }
            }
        }
    }

    fn visual(&self, index: usize, now: Instant) -> ItemVisual {
        let item = &self.items[index];
        ItemVisual {
            filled: item.filled,
            starred: item.starred,
            tooltip_visible: self.active_tooltip == Some(index),
            scale: item.bounce.value_at(now),
            tooltip_progress: item.tooltip.value_at(now),
        }
    }

    fn publish(&mut self, index: usize, now: Instant) {
        let visual = self.visual(index, now);
        self.sink.set_item(index, visual);
    }
}

impl<S: ViewSink> Drop for HeartController<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

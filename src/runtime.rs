//! Controller event loop
//!
//! The controller lives on one thread that owns it outright. Input arrives as
//! `ControllerEvent`s over an mpsc channel; between events the loop sleeps
//! until the next timer deadline or animation frame, whichever comes first.
//! Since only this thread touches the controller, events, timer fires and
//! frames never overlap.

use crate::controller::HeartController;
use crate::view::ViewSink;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Spacing of animation frames (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest sleep when nothing is scheduled
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Input for the controller thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Assets resolved; input may be accepted
    AssetsReady,
    /// Tap on a heart
    Tap(usize),
    /// Double-tap on a heart classified by the input layer
    DoubleTap(usize),
    /// Tap on a heart's tooltip
    TooltipTap(usize),
    /// Tear the controller down and exit the loop
    Shutdown,
}

/// Apply one input event to the controller at `now`
pub fn dispatch<S: ViewSink>(controller: &mut HeartController<S>, event: ControllerEvent, now: Instant) {
    debug!("Dispatching {:?}", event);
    match event {
        ControllerEvent::AssetsReady => controller.mark_ready(now),
        ControllerEvent::Tap(index) => controller.tap(index, now),
        ControllerEvent::DoubleTap(index) => controller.double_tap(index, now),
        ControllerEvent::TooltipTap(index) => controller.tooltip_tap(index, now),
        ControllerEvent::Shutdown => controller.shutdown(),
    }
}

/// Owns a controller and feeds it events, timer fires and frames
pub struct ControllerLoop<S: ViewSink> {
    controller: HeartController<S>,
    events: mpsc::Receiver<ControllerEvent>,
}

impl<S: ViewSink> ControllerLoop<S> {
    /// Wrap `controller`, reading input from `events`
    pub fn new(controller: HeartController<S>, events: mpsc::Receiver<ControllerEvent>) -> Self {
        Self { controller, events }
    }

    /// Run until `Shutdown` arrives or every sender is dropped
    ///
    /// Returns the torn-down controller.
    pub fn run(self) -> HeartController<S> {
        let Self {
            mut controller,
            events,
        } = self;

        info!("Entering controller event loop");
        loop {
            let timeout = wait_timeout(&controller, Instant::now());
            match events.recv_timeout(timeout) {
                Ok(ControllerEvent::Shutdown) => {
                    info!("Shutdown requested");
                    break;
                }
                Ok(event) => dispatch(&mut controller, event, Instant::now()),
                Err(RecvTimeoutError::Timeout) => {
                    // Timeout is normal - timers and frames are handled below
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Controller event channel disconnected. Exiting event loop.");
                    break;
                }
            }

            controller.advance(Instant::now());
        }

        controller.shutdown();
        info!("Controller event loop exited");
        controller
    }

    /// Run the loop on a background thread
    pub fn spawn(self) -> JoinHandle<HeartController<S>>
    where
        S: Send + 'static,
    {
        std::thread::spawn(move || self.run())
    }
}

/// How long the loop may sleep before something needs doing
fn wait_timeout<S: ViewSink>(controller: &HeartController<S>, now: Instant) -> Duration {
    if controller.needs_frames() {
        return FRAME_INTERVAL;
    }
    controller
        .next_deadline()
        .map_or(IDLE_POLL, |deadline| {
            deadline.saturating_duration_since(now).min(IDLE_POLL)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScreenSettings, Variant};
    use crate::view::ViewUpdate;

    fn spawn(
        settings: ScreenSettings,
    ) -> (
        mpsc::Sender<ControllerEvent>,
        JoinHandle<HeartController<Vec<ViewUpdate>>>,
    ) {
        let controller = HeartController::new(settings, Vec::new()).unwrap();
        let (tx, rx) = mpsc::channel();
        (tx, ControllerLoop::new(controller, rx).spawn())
    }

    #[test]
    fn test_dispatch_routes_events() {
        let now = Instant::now();
        let mut controller =
            HeartController::new(ScreenSettings::default(), Vec::<ViewUpdate>::new()).unwrap();

        dispatch(&mut controller, ControllerEvent::AssetsReady, now);
        dispatch(&mut controller, ControllerEvent::Tap(1), now);
        assert!(controller.is_filled(1));
        dispatch(&mut controller, ControllerEvent::Shutdown, now);
        assert!(controller.is_torn_down());
    }

    #[test]
    fn test_wait_timeout_prefers_frames() {
        let now = Instant::now();
        let mut controller =
            HeartController::new(ScreenSettings::default(), Vec::<ViewUpdate>::new()).unwrap();
        assert_eq!(wait_timeout(&controller, now), IDLE_POLL);

        controller.mark_ready(now);
        controller.tap(0, now);
        assert_eq!(wait_timeout(&controller, now), FRAME_INTERVAL);
    }

    #[test]
    fn test_loop_applies_events_and_exits_on_shutdown() {
        let (tx, handle) = spawn(ScreenSettings::default());

        tx.send(ControllerEvent::AssetsReady).unwrap();
        tx.send(ControllerEvent::Tap(2)).unwrap();
        tx.send(ControllerEvent::Shutdown).unwrap();

        let controller = handle.join().unwrap();
        assert!(controller.is_filled(2));
        assert!(controller.is_torn_down());
        assert!(controller.sink().iter().any(|update| matches!(
            update,
            ViewUpdate::Tooltip {
                index: 2,
                visible: true
            }
        )));
    }

    #[test]
    fn test_loop_fires_dismiss_timer() {
        let (tx, handle) = spawn(ScreenSettings {
            dismiss_delay_ms: 30,
            ..ScreenSettings::for_variant(Variant::AutoDismiss)
        });

        tx.send(ControllerEvent::AssetsReady).unwrap();
        tx.send(ControllerEvent::Tap(1)).unwrap();
        std::thread::sleep(Duration::from_millis(300));
        tx.send(ControllerEvent::Shutdown).unwrap();

        let controller = handle.join().unwrap();
        assert!(!controller.is_filled(1));
        assert_eq!(controller.active_tooltip(), None);
    }

    #[test]
    fn test_disconnect_tears_down_with_timer_pending() {
        let (tx, handle) = spawn(ScreenSettings::for_variant(Variant::AutoDismiss));

        tx.send(ControllerEvent::AssetsReady).unwrap();
        tx.send(ControllerEvent::Tap(4)).unwrap();
        drop(tx);

        let controller = handle.join().unwrap();
        assert!(controller.is_torn_down());
        assert!(controller.is_filled(4));
        assert_eq!(controller.pending_timers(), 0);
    }
}

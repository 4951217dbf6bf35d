//! GUI controller
//!
//! Bridges the Slint window and the controller thread. Taps become
//! `ControllerEvent`s on one channel; `ViewUpdate`s come back on another and
//! are applied to the window's row model by a frame timer on the GUI thread.

use crate::{HeartRow, MainWindow};
use heartboard::assets::AssetSet;
use heartboard::config::WindowState;
use heartboard::error::{HeartboardError, Result};
use heartboard::{ControllerEvent, ItemVisual, ScreenState, ViewUpdate};
use image::RgbaImage;
use slint::{ComponentHandle, Model, ModelRc, Rgba8Pixel, SharedPixelBuffer, Timer, TimerMode, VecModel};
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How often pending view updates are applied
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Owns the main window and keeps it in sync with the controller
pub struct GuiController {
    window: MainWindow,
    events: mpsc::Sender<ControllerEvent>,
    // Dropping the timer stops view updates
    _poll_timer: Timer,
}

impl GuiController {
    /// Build the window from the controller's initial snapshot
    ///
    /// Without `assets` the window stays blank.
    pub fn new(
        initial: &ScreenState,
        assets: Option<&AssetSet>,
        window_state: &WindowState,
        events: mpsc::Sender<ControllerEvent>,
        updates: mpsc::Receiver<ViewUpdate>,
    ) -> Result<Self> {
        info!("Creating main window");
        let window = MainWindow::new().map_err(|e| HeartboardError::GuiError(Box::new(e)))?;

        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        let size = slint::LogicalSize::new(window_state.width as f32, window_state.height as f32);
        window.window().set_size(size);

        if let Some(assets) = assets {
            window.set_heart_empty(to_slint_image(&assets.heart_empty));
            window.set_heart_filled(to_slint_image(&assets.heart_filled));
            window.set_star_badge(to_slint_image(&assets.star_badge));
            window.set_tooltip_image(to_slint_image(&assets.tooltip));
            window.set_tooltip_filled(to_slint_image(&assets.tooltip_filled));
            window.set_assets_ready(true);
        } else {
            warn!("Assets unavailable, the window stays blank");
        }

        let rows: Vec<HeartRow> = initial.items.iter().copied().map(to_row).collect();
        let model = Rc::new(VecModel::from(rows));
        window.set_hearts(ModelRc::from(Rc::clone(&model)));

        let tap_events = events.clone();
        window.on_heart_tapped(move |index| {
            if let Ok(index) = usize::try_from(index) {
                forward(&tap_events, ControllerEvent::Tap(index));
            }
        });

        let tooltip_events = events.clone();
        window.on_tooltip_tapped(move |index| {
            if let Ok(index) = usize::try_from(index) {
                forward(&tooltip_events, ControllerEvent::TooltipTap(index));
            }
        });

        let poll_timer = Timer::default();
        poll_timer.start(TimerMode::Repeated, POLL_INTERVAL, move || {
            while let Ok(update) = updates.try_recv() {
                apply_update(&model, update);
            }
        });

        Ok(Self {
            window,
            events,
            _poll_timer: poll_timer,
        })
    }

    /// Show the window and block until it closes, then stop the controller
    pub fn run(&self) -> Result<()> {
        info!("Starting GUI event loop");
        let result = self
            .window
            .run()
            .map_err(|e| HeartboardError::GuiError(Box::new(e)));
        forward(&self.events, ControllerEvent::Shutdown);
        result
    }

    /// Current logical window size
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Logical window sizes are small positive values"
    )]
    pub fn window_state(&self) -> WindowState {
        let window = self.window.window();
        let size = window.size().to_logical(window.scale_factor());
        WindowState {
            width: size.width.round() as u32,
            height: size.height.round() as u32,
        }
    }
}

fn forward(events: &mpsc::Sender<ControllerEvent>, event: ControllerEvent) {
    if let Err(e) = events.send(event) {
        warn!("Controller thread gone, dropping {:?}: {}", event, e);
    }
}

fn apply_update(model: &VecModel<HeartRow>, update: ViewUpdate) {
    match update {
        ViewUpdate::Item { index, visual } => {
            if index < model.row_count() {
                model.set_row_data(index, to_row(visual));
            }
        }
        ViewUpdate::Tooltip { index, visible } => {
            if let Some(mut row) = model.row_data(index) {
                debug!("Tooltip of heart {} visible: {}", index, visible);
                row.tooltip_visible = visible;
                model.set_row_data(index, row);
            }
        }
    }
}

fn to_row(visual: ItemVisual) -> HeartRow {
    HeartRow {
        filled: visual.filled,
        starred: visual.starred,
        tooltip_visible: visual.tooltip_visible,
        scale: visual.scale,
        tooltip_progress: visual.tooltip_progress,
    }
}

fn to_slint_image(image: &RgbaImage) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    );
    slint::Image::from_rgba8(buffer)
}

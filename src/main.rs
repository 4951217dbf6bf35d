//! Heartboard - a column of tappable hearts
//!
//! Loads configuration and assets, starts the controller thread and runs the
//! Slint window until it is closed.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use gui::GuiController;
use heartboard::{
    ControllerEvent, ControllerLoop, HeartController, ViewUpdate,
    assets::AssetSet,
    config::{AppConfig, ConfigManager, Variant},
    error::get_user_friendly_error,
    utils,
};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Capacity of the controller → GUI update channel
const VIEW_CHANNEL_CAPACITY: usize = 256;

/// Command line options; each overrides the loaded configuration
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Interaction variant
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Number of hearts in the column
    #[arg(long)]
    items: Option<usize>,

    /// Directory holding the image assets
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Double-tap removes, tooltip toggles a star
    Star,
    /// Filled hearts revert after a delay
    AutoDismiss,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Star => Variant::Star,
            VariantArg::AutoDismiss => Variant::AutoDismiss,
        }
    }
}

/// Main entry point for the application
fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::init_logging().context("Failed to initialize logging system")?;
    info!("Heartboard v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(ConfigManager::get_config_path);
    let mut config =
        ConfigManager::load_from(&config_path).context("Failed to load application configuration")?;
    apply_overrides(&mut config, &cli);
    config
        .screen
        .validate()
        .context("Invalid screen settings")?;
    info!(
        "Configuration loaded: {:?} variant, {} hearts",
        config.screen.variant, config.screen.item_count
    );

    let asset_dir = cli.assets.clone().unwrap_or_else(AssetSet::default_dir);
    let assets = match AssetSet::load(&asset_dir) {
        Ok(assets) => Some(assets),
        Err(e) => {
            error!("Failed to load assets: {}", e);
            eprintln!("{}", get_user_friendly_error(&e));
            None
        }
    };

    let (event_tx, event_rx) = mpsc::channel::<ControllerEvent>();
    let (view_tx, view_rx) = mpsc::sync_channel::<ViewUpdate>(VIEW_CHANNEL_CAPACITY);

    let controller = HeartController::new(config.screen.clone(), view_tx)
        .context("Failed to create heart controller")?;
    let initial = controller.snapshot(Instant::now());

    info!("Starting controller thread");
    let controller_handle = ControllerLoop::new(controller, event_rx).spawn();

    let gui_controller = GuiController::new(
        &initial,
        assets.as_ref(),
        &config.window_state,
        event_tx.clone(),
        view_rx,
    )
    .context("Failed to create GUI controller")?;

    if assets.is_some() {
        event_tx
            .send(ControllerEvent::AssetsReady)
            .context("Controller thread exited before start")?;
    }

    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    // Persist only the window size; command line overrides stay one-off
    if let Err(e) = ConfigManager::save_window_state(&gui_controller.window_state(), &config_path) {
        warn!("Failed to save window state: {}", e);
    }

    drop(event_tx);
    controller_handle
        .join()
        .map_err(|_| anyhow!("Controller thread panicked"))?;

    info!("Heartboard shutting down");
    Ok(())
}

/// Apply command line overrides on top of the loaded configuration
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(variant) = cli.variant {
        config.screen.variant = variant.into();
    }
    if let Some(items) = cli.items {
        config.screen.item_count = items;
    }
}

//! Image assets for the heart column
//!
//! The screen needs five images. They are decoded up front; the controller
//! only starts accepting input once every one of them is available.

use crate::error::{HeartboardError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outline heart
pub const HEART_EMPTY: &str = "Heart.png";
/// Filled heart
pub const HEART_FILLED: &str = "green-heart-filled.png";
/// Star badge shown on starred hearts
pub const STAR_BADGE: &str = "small-star-filled.png";
/// Tooltip bubble without a star
pub const TOOLTIP: &str = "tooltip-image.png";
/// Tooltip bubble with the star filled in
pub const TOOLTIP_FILLED: &str = "tooltip-filled.png";

/// Every asset the screen loads, in load order
pub const ASSET_NAMES: [&str; 5] = [HEART_EMPTY, HEART_FILLED, STAR_BADGE, TOOLTIP, TOOLTIP_FILLED];

/// Decoded images for the screen
#[derive(Debug, Clone)]
pub struct AssetSet {
    /// Outline heart
    pub heart_empty: RgbaImage,
    /// Filled heart
    pub heart_filled: RgbaImage,
    /// Star badge
    pub star_badge: RgbaImage,
    /// Tooltip bubble
    pub tooltip: RgbaImage,
    /// Tooltip bubble with star
    pub tooltip_filled: RgbaImage,
}

impl AssetSet {
    /// Default asset directory: `assets/images` next to the executable's working dir
    pub fn default_dir() -> PathBuf {
        PathBuf::from("assets").join("images")
    }

    /// Decode every asset from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        info!("Loading assets from {}", dir.display());
        let assets = Self {
            heart_empty: load_one(dir, HEART_EMPTY)?,
            heart_filled: load_one(dir, HEART_FILLED)?,
            star_badge: load_one(dir, STAR_BADGE)?,
            tooltip: load_one(dir, TOOLTIP)?,
            tooltip_filled: load_one(dir, TOOLTIP_FILLED)?,
        };
        info!("Loaded {} assets", ASSET_NAMES.len());
        Ok(assets)
    }
}

fn load_one(dir: &Path, name: &str) -> Result<RgbaImage> {
    let path = dir.join(name);
    let image = image::open(&path).map_err(|e| HeartboardError::AssetError {
        name: name.to_string(),
        source: Box::new(e),
    })?;
    let rgba = image.to_rgba8();
    debug!("Decoded {} ({}x{})", name, rgba.width(), rgba.height());
    Ok(rgba)
}

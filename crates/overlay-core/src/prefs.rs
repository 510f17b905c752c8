//! Panel preferences: how the overlay panel scales and where it opens.
//!
//! Persisted as JSON between sessions. Unknown or missing fields fall back to
//! their defaults so older files keep loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locals::UiScale;

pub const MIN_PANEL_SCALE: f32 = 0.5;
pub const MAX_PANEL_SCALE: f32 = 2.0;

/// Distance kept between the reset panel and the top of the region.
const RESET_TOP_MARGIN: i32 = 40;
/// Fallback x when the region width is unknown.
const RESET_FALLBACK_X: i32 = 100;

/// Top-left corner of the panel in top-origin logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Follow the host's interface resolution scale.
    pub bind_ui_scale: bool,
    /// Panel scale applied on top of the host scale.
    pub panel_scale: f32,
    /// Keep the panel's distance to the viewport's bottom border on resize.
    pub slide_with_viewport: bool,
    /// Open at the last position used in any scene rather than per scene.
    pub share_position_across_scenes: bool,
    pub last_position: Option<PanelPosition>,
    pub panel_size: PanelSize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            bind_ui_scale: true,
            panel_scale: 1.0,
            slide_with_viewport: false,
            share_position_across_scenes: false,
            last_position: None,
            panel_size: PanelSize::default(),
        }
    }
}

impl Preferences {
    /// Reads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ReadPreferences {
            path: path.to_path_buf(),
            source,
        })?;
        let mut prefs: Preferences = serde_json::from_str(&raw)?;
        prefs.sanitize();
        Ok(prefs)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| Error::WritePreferences {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Clamps values a hand-edited file may have pushed out of range.
    pub fn sanitize(&mut self) {
        let clamped = if self.panel_scale.is_finite() {
            self.panel_scale.clamp(MIN_PANEL_SCALE, MAX_PANEL_SCALE)
        } else {
            1.0
        };
        if clamped != self.panel_scale {
            log::warn!("panel scale {} out of range, using {clamped}", self.panel_scale);
            self.panel_scale = clamped;
        }
    }

    pub fn ui_scale(&self, value: f32, host_scale: f32) -> f32 {
        if self.bind_ui_scale {
            value * host_scale
        } else {
            value
        }
    }

    pub fn over_scale(&self, value: f32, host_scale: f32) -> f32 {
        self.ui_scale(value, host_scale) * self.panel_scale
    }

    /// Scale to install with `with_ui_scale` while laying out the panel.
    pub fn effective_scale(&self, host_scale: f32) -> UiScale {
        UiScale(self.over_scale(1.0, host_scale))
    }

    /// Moves the panel back to the top of the region, horizontally centered,
    /// and remembers that position.
    pub fn reset_position(&mut self, region_width: Option<f32>, host_scale: f32) -> PanelPosition {
        let PanelSize { width, height } = self.panel_size;
        let x = match region_width {
            Some(rw) => {
                let scaled_w = width * self.effective_scale(host_scale).0;
                ((rw - scaled_w) / 2.0).trunc() as i32 + 1
            }
            None => RESET_FALLBACK_X,
        };
        let pos = PanelPosition {
            x,
            y: height as i32 + RESET_TOP_MARGIN - 1,
        };
        self.last_position = Some(pos);
        pos
    }

    /// Position as shown to the user: the stored y is corrected by the
    /// height the panel gains or loses through scaling.
    pub fn displayed_position(&self, pos: PanelPosition, host_scale: f32) -> PanelPosition {
        let grow = self.panel_size.height * (self.over_scale(1.0, host_scale) - 1.0);
        PanelPosition {
            x: pos.x,
            y: pos.y + grow.trunc() as i32,
        }
    }

    /// Applies a viewport height change to a panel position.
    pub fn slide(&self, pos: PanelPosition, old_height: f32, new_height: f32) -> PanelPosition {
        if !self.slide_with_viewport {
            return pos;
        }
        PanelPosition {
            x: pos.x,
            y: pos.y + (new_height - old_height).round() as i32,
        }
    }

    /// Where the panel opens, given the position saved with the current
    /// scene (if any).
    pub fn initial_position(&self, scene_saved: Option<PanelPosition>) -> Option<PanelPosition> {
        if self.share_position_across_scenes {
            self.last_position.or(scene_saved)
        } else {
            scene_saved.or(self.last_position)
        }
    }
}

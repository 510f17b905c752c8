use crate::{Scene, Size};

/// DPI the host's text API is driven at.
pub const TEXT_DPI: u32 = 72;

/// Graphics side of the host: consumes a recorded frame.
pub trait RenderBackend {
    fn configure_surface(&mut self, width: u32, height: u32);
    fn frame(&mut self, scene: &Scene);
}

/// Text measurement used while recording a frame.
pub trait TextMeasure {
    /// Pixel extent of `text` rendered at `size` points and `dpi`.
    fn dimensions(&mut self, text: &str, size: f32, dpi: u32) -> Size;
}

/// Every glyph has the same advance and the same height, both proportional
/// to the pixel size. Useful for headless hosts and deterministic tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    /// Advance per char, as a fraction of the pixel size.
    pub advance: f32,
    /// Glyph height, as a fraction of the pixel size.
    pub height: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            height: 0.75,
        }
    }
}

impl TextMeasure for FixedMetrics {
    fn dimensions(&mut self, text: &str, size: f32, dpi: u32) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let px = size * dpi as f32 / TEXT_DPI as f32;
        Size {
            width: text.chars().count() as f32 * px * self.advance,
            height: px * self.height,
        }
    }
}

//! `TextMeasure` backed by cosmic-text.
//!
//! One font system and glyph cache live for the whole process; the measured
//! extent of each `(text, pixel size)` pair is memoized since labels rarely
//! change between frames.

use ahash::AHashMap;
use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache};
use once_cell::sync::OnceCell;
use overlay_core::{Size, TEXT_DPI, TextMeasure};
use parking_lot::Mutex;

struct Engine {
    fs: FontSystem,
    cache: SwashCache,
    measured: AHashMap<(String, u32), Size>,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        let fs = FontSystem::new();
        log::debug!("font system ready ({} faces)", fs.db().len());
        Mutex::new(Engine {
            fs,
            cache: SwashCache::new(),
            measured: AHashMap::new(),
        })
    })
}

/// Points at `dpi` to pixels.
pub fn px_for(size: f32, dpi: u32) -> f32 {
    size * dpi as f32 / TEXT_DPI as f32
}

// Shape a single line (no wrapping) and return its advance width and ink
// height (highest glyph top to lowest glyph bottom).
fn shape_extent(eng: &mut Engine, text: &str, px: f32) -> Size {
    let mut buf = Buffer::new(&mut eng.fs, Metrics::new(px, px * 1.3));
    {
        let mut b = buf.borrow_with(&mut eng.fs);
        b.set_size(None, None);
        b.set_text(text, &Attrs::new(), Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }

    let mut width = 0.0f32;
    let mut top = f32::MIN;
    let mut bottom = f32::MAX;
    for run in buf.layout_runs() {
        width = width.max(run.line_w);
        for g in run.glyphs {
            let phys = g.physical((0.0, 0.0), 1.0);
            if let Some(img) = eng.cache.get_image(&mut eng.fs, phys.cache_key).as_ref() {
                let t = img.placement.top as f32;
                top = top.max(t);
                bottom = bottom.min(t - img.placement.height as f32);
            }
        }
    }
    let height = if top >= bottom { top - bottom } else { 0.0 };
    Size { width, height }
}

/// Measures with the system fonts through cosmic-text.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicMeasure;

impl TextMeasure for CosmicMeasure {
    fn dimensions(&mut self, text: &str, size: f32, dpi: u32) -> Size {
        if text.is_empty() || size <= 0.0 {
            return Size::default();
        }
        let px = px_for(size, dpi);
        let mut guard = engine().lock();
        let eng = &mut *guard;
        let key = (text.to_string(), px.to_bits());
        if let Some(s) = eng.measured.get(&key) {
            return *s;
        }
        let s = shape_extent(eng, text, px);
        eng.measured.insert(key, s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_conversion() {
        assert_eq!(px_for(16.0, 72), 16.0);
        assert_eq!(px_for(16.0, 144), 32.0);
    }

    #[test]
    fn empty_or_sizeless_text_measures_zero() {
        let mut m = CosmicMeasure;
        assert_eq!(m.dimensions("", 16.0, 72), Size::default());
        assert_eq!(m.dimensions("abc", 0.0, 72), Size::default());
    }

    #[test]
    fn measurements_are_monotonic_and_memoized() {
        // hosts without fonts measure everything as zero; the orderings
        // still hold
        let mut m = CosmicMeasure;
        let short = m.dimensions("Grid", 16.0, 72);
        let long = m.dimensions("Grid lines", 16.0, 72);
        let big = m.dimensions("Grid", 16.0, 144);
        assert!(long.width >= short.width);
        assert!(big.width >= short.width);
        assert!(big.height >= short.height);
        assert_eq!(m.dimensions("Grid", 16.0, 72), short);
    }
}

pub use crate::color::Color;
pub use crate::error::{Error, Result};
pub use crate::geometry::{Rect, Size, Vec2, flip_y};
pub use crate::input::*;
pub use crate::locals::{
    UiScale, Viewport, scaled, ui_scale, viewport, with_ui_scale, with_viewport,
};
pub use crate::prefs::{PanelPosition, PanelSize, Preferences};
pub use crate::render_api::{FixedMetrics, RenderBackend, TEXT_DPI, TextMeasure};
pub use crate::scene::{Scene, SceneNode, Topology, VertexSet};

//! Widgets drawn on top of a host viewport.
//!
//! Every widget implements [`Widget`]: `update` on layout change, `draw`
//! once per frame, `is_in_rect` / `mouse_down` / `mouse_up` for pointer
//! input. A [`Panel`] owns widgets and routes host events to all of them.
//!
//! Host locals (`overlay_core::with_viewport`, `with_ui_scale`) must be in
//! effect around `update`, `draw` and event dispatch.

pub mod checkbox;
pub mod listener;
pub mod panel;
pub mod widget;

pub use checkbox::Checkbox;
pub use listener::Listener;
pub use panel::{Panel, WidgetId};
pub use widget::{DrawContext, Widget, WidgetBase};

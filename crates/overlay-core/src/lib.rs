//! # Overlay core
//!
//! Building blocks shared by every overlay widget. Widgets are drawn on top
//! of a host viewport whose drawing origin is the *bottom*‑left corner, while
//! layouts are written top‑down. Everything here exists to keep those two
//! spaces apart:
//!
//! - `geometry`: `Vec2`, `Size`, `Rect` and `flip_y`.
//! - `locals`: the host's `Viewport` and `UiScale`, pushed with
//!   `with_viewport` / `with_ui_scale` around a frame or event.
//! - `scene`: a recorded frame: line batches and text runs.
//! - `render_api`: `RenderBackend` (consumes a scene) and `TextMeasure`.
//! - `input`: pointer events in flipped space.
//! - `prefs`: persisted panel scaling and position.
//!
//! ## Recording a frame
//!
//! ```rust
//! use overlay_core::*;
//!
//! let mut scene = Scene::new();
//! with_viewport(Viewport { width: 800.0, height: 500.0 }, || {
//!     let top = flip_y(viewport().height, 10.0);
//!     scene.push_batch(
//!         Topology::LineLoop,
//!         &[
//!             Vec2::new(10.0, top),
//!             Vec2::new(26.0, top),
//!             Vec2::new(26.0, top - 16.0),
//!             Vec2::new(10.0, top - 16.0),
//!         ],
//!         2.0,
//!         Color::WHITE,
//!     );
//! });
//! assert_eq!(scene.nodes.len(), 1);
//! ```
//!
//! A backend then receives the scene once per frame through
//! `RenderBackend::frame`.

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod prefs;
pub mod prelude;
pub mod render_api;
pub mod scene;

pub use color::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use prefs::*;
pub use render_api::*;
pub use scene::*;

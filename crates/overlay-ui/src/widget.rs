//! Widget trait and the state every widget shares.
//!
//! A widget is laid out in top‑origin logical pixels and drawn in the host's
//! bottom‑origin screen space. `WidgetBase::update` owns the first half of
//! that conversion (logical → scaled screen position); each widget finishes
//! it (the vertical flip) when it rebuilds its vertex sets.

use std::any::Any;

use overlay_core::{
    PointerButton, PointerEvent, PointerEventKind, Scene, Size, TextMeasure, Vec2, flip_y,
    ui_scale, viewport,
};

/// What a widget draws into for one frame.
pub struct DrawContext<'a> {
    pub scene: &'a mut Scene,
    pub text: &'a mut dyn TextMeasure,
}

impl<'a> DrawContext<'a> {
    pub fn new(scene: &'a mut Scene, text: &'a mut dyn TextMeasure) -> Self {
        Self { scene, text }
    }
}

/// Geometry shared by all widgets.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetBase {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    x_screen: f32,
    y_screen: f32,
    laid_out: bool,
}

impl WidgetBase {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            x_screen: x,
            y_screen: y,
            laid_out: false,
        }
    }

    /// Stores the new logical position and derives the screen position from
    /// it under the current `UiScale`.
    pub fn update(&mut self, x: f32, y: f32) {
        let scale = ui_scale().0;
        self.x = x;
        self.y = y;
        self.x_screen = x * scale;
        self.y_screen = y * scale;
        self.laid_out = true;
        log::trace!(
            "widget at ({x}, {y}) -> screen ({}, {})",
            self.x_screen,
            self.y_screen
        );
    }

    pub fn position(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Scaled position, still top-origin.
    pub fn screen_position(&self) -> Vec2 {
        Vec2 {
            x: self.x_screen,
            y: self.y_screen,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether `update` has run at least once.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Top edge of the widget in the host's bottom-origin space, for the
    /// current viewport.
    pub fn flipped_top(&self) -> f32 {
        flip_y(viewport().height, self.y_screen)
    }
}

/// Capability set of an overlay widget.
///
/// Object-safe so a `Panel` can hold heterogeneous widgets. Pointer
/// coordinates passed to the hit-test and mouse methods are in the host's
/// bottom-origin space.
pub trait Widget {
    fn base(&self) -> &WidgetBase;

    /// Moves the widget to logical `(x, y)` and regenerates its geometry.
    /// Call on creation and on every host resize or scroll.
    fn update(&mut self, x: f32, y: f32);

    /// Records the widget into the frame. Must not mutate and must tolerate
    /// running before `update`.
    fn draw(&self, cx: &mut DrawContext<'_>);

    fn is_in_rect(&self, x: f32, y: f32) -> bool;

    /// A press inside the widget is consumed.
    fn mouse_down(&mut self, x: f32, y: f32) -> bool {
        self.is_in_rect(x, y)
    }

    fn mouse_up(&mut self, _x: f32, _y: f32) -> bool {
        false
    }

    /// Re-runs `update` at the current logical position.
    fn layout(&mut self) {
        let p = self.base().position();
        self.update(p.x, p.y);
    }

    /// Routes a host pointer event. Returns true if consumed.
    fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let Vec2 { x, y } = event.position;
        match event.event {
            PointerEventKind::Down(PointerButton::Primary) => self.mouse_down(x, y),
            PointerEventKind::Up(PointerButton::Primary) => self.mouse_up(x, y),
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

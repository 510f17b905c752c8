use std::any::Any;
use std::fmt;
use std::rc::Rc;

use overlay_core::{Color, Rect, Size, TEXT_DPI, Topology, Vec2, VertexSet, viewport};
use smallvec::smallvec;

use crate::listener::{Listener, notify};
use crate::widget::{DrawContext, Widget, WidgetBase};

/// The glyph box. Fixed: it does not follow the widget's width/height.
pub const BOX_SIZE: Size = Size {
    width: 16.0,
    height: 16.0,
};
/// Inset of the mark's diagonals from the box edges.
pub const MARK_INSET: f32 = 4.0;
/// Horizontal gap from the widget's x to the label.
pub const TEXT_GAP: f32 = 26.0;
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const MARK_WIDTH: f32 = 3.0;

/// A two-state check box with a text label on its right.
///
/// Only the glyph box is hit-testable. A release inside it toggles the box
/// and notifies the state listener.
///
/// ```rust
/// use overlay_core::{Viewport, with_viewport};
/// use overlay_ui::{Checkbox, Widget};
///
/// let mut cb = Checkbox::new(10.0, 10.0, 120.0, 20.0);
/// cb.set_text("Show grid");
/// with_viewport(Viewport { width: 800.0, height: 500.0 }, || {
///     cb.update(10.0, 10.0);
///     assert!(cb.mouse_up(15.0, 485.0));
/// });
/// assert!(cb.is_checked());
/// ```
pub struct Checkbox {
    base: WidgetBase,
    text_color: Color,
    box_color: Color,
    mark_color: Color,
    text: String,
    text_size: f32,
    text_pos: Vec2,
    checked: bool,
    outline: Option<VertexSet>,
    mark: Option<VertexSet>,
    state_changed: Option<Listener<Checkbox>>,
}

impl Checkbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            base: WidgetBase::new(x, y, width, height),
            text_color: Color::WHITE,
            box_color: Color::WHITE,
            mark_color: Color::from_rgba_f32(0.2, 0.9, 0.9, 1.0),
            text: "Checkbox".to_string(),
            text_size: 16.0,
            text_pos: Vec2 { x, y },
            checked: false,
            outline: None,
            mark: None,
            state_changed: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
    pub fn text_size(&self) -> f32 {
        self.text_size
    }
    pub fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }
    pub fn text_color(&self) -> Color {
        self.text_color
    }
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }
    pub fn box_color(&self) -> Color {
        self.box_color
    }
    pub fn set_box_color(&mut self, color: Color) {
        self.box_color = color;
    }
    pub fn mark_color(&self) -> Color {
        self.mark_color
    }
    pub fn set_mark_color(&mut self, color: Color) {
        self.mark_color = color;
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the state. The listener runs only if the value changes.
    pub fn set_checked(&mut self, checked: bool) {
        if checked != self.checked {
            self.checked = checked;
            self.notify();
        }
    }

    /// Flips the state and always notifies.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        self.notify();
    }

    pub fn set_state_changed(&mut self, f: impl Fn(&Checkbox) -> anyhow::Result<()> + 'static) {
        self.state_changed = Some(Rc::new(f));
    }

    pub fn clear_state_changed(&mut self) {
        self.state_changed = None;
    }

    /// Outline corners (top-left, top-right, bottom-right, bottom-left) in
    /// flipped space, once laid out.
    pub fn outline_vertices(&self) -> Option<&[Vec2]> {
        self.outline.as_deref()
    }

    /// Endpoints of the two mark diagonals, once laid out.
    pub fn mark_vertices(&self) -> Option<&[Vec2]> {
        self.mark.as_deref()
    }

    /// Label anchor, top-origin.
    pub fn text_position(&self) -> Vec2 {
        self.text_pos
    }

    fn notify(&self) {
        if let Some(listener) = &self.state_changed {
            notify(listener, self, "checkbox");
        }
    }

    fn draw_text(&self, cx: &mut DrawContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        let area_height = viewport().height;
        let size = cx.text.dimensions(&self.text, self.text_size, TEXT_DPI);
        let y = area_height - self.text_pos.y - (self.base.size().height + size.height) / 2.0;
        cx.scene.push_text(
            Vec2 {
                x: self.text_pos.x,
                y,
            },
            self.text.clone(),
            self.text_size,
            TEXT_DPI,
            self.text_color,
        );
    }
}

impl Widget for Checkbox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn update(&mut self, x: f32, y: f32) {
        self.base.update(x, y);

        let Vec2 { x: xs, y: ys } = self.base.screen_position();
        self.text_pos = Vec2 {
            x: xs + TEXT_GAP,
            y: ys,
        };

        let top = self.base.flipped_top();
        let Size {
            width: sx,
            height: sy,
        } = BOX_SIZE;

        // top left, top right, bottom right, bottom left
        self.outline = Some(smallvec![
            Vec2::new(xs, top),
            Vec2::new(xs + sx, top),
            Vec2::new(xs + sx, top - sy),
            Vec2::new(xs, top - sy),
        ]);

        // top-left -> bottom-right | top-right -> bottom-left
        self.mark = Some(smallvec![
            Vec2::new(xs + MARK_INSET, top - MARK_INSET),
            Vec2::new(xs + sx - MARK_INSET, top - sy + MARK_INSET),
            Vec2::new(xs + sx - MARK_INSET, top - MARK_INSET),
            Vec2::new(xs + MARK_INSET, top - sy + MARK_INSET),
        ]);
    }

    fn draw(&self, cx: &mut DrawContext<'_>) {
        let (Some(outline), Some(mark)) = (&self.outline, &self.mark) else {
            return;
        };

        if self.checked {
            cx.scene.push_batch(Topology::Lines, mark, MARK_WIDTH, self.mark_color);
        }
        cx.scene.push_batch(Topology::LineLoop, outline, OUTLINE_WIDTH, self.box_color);

        self.draw_text(cx);
    }

    fn is_in_rect(&self, x: f32, y: f32) -> bool {
        if !self.base.is_laid_out() {
            return false;
        }
        let widget_y = self.base.flipped_top();
        let hit_box = Rect {
            x: self.base.screen_position().x,
            y: widget_y - BOX_SIZE.height,
            w: BOX_SIZE.width,
            h: BOX_SIZE.height,
        };
        hit_box.contains(Vec2 { x, y })
    }

    fn mouse_up(&mut self, x: f32, y: f32) -> bool {
        if self.is_in_rect(x, y) {
            self.toggle();
            return true;
        }
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("base", &self.base)
            .field("text", &self.text)
            .field("checked", &self.checked)
            .field(
                "state_changed",
                &self.state_changed.as_ref().map(|_| "<callback>"),
            )
            .finish_non_exhaustive()
    }
}

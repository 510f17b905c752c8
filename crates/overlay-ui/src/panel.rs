//! A panel owns a set of widgets and routes host events to them.

use overlay_core::{PointerEvent, Vec2};
use slotmap::{SlotMap, new_key_type};

use crate::widget::{DrawContext, Widget};

new_key_type! {
    /// Stable handle to a widget inside a `Panel`.
    pub struct WidgetId;
}

#[derive(Default)]
pub struct Panel {
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
    // draw and dispatch order
    order: Vec<WidgetId>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `widget` and lays it out at its logical position under the
    /// current locals.
    pub fn add<W: Widget + 'static>(&mut self, mut widget: W) -> WidgetId {
        widget.layout();
        let id = self.widgets.insert(Box::new(widget));
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let w = self.widgets.remove(id)?;
        self.order.retain(|&o| o != id);
        Some(w)
    }

    pub fn get<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id)?.as_any().downcast_ref::<W>()
    }

    pub fn get_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id)?.as_any_mut().downcast_mut::<W>()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.order.iter().copied()
    }

    /// Re-runs every widget's `update` at its stored position. Call after a
    /// host resize or scroll, or when the UI scale changes.
    pub fn layout(&mut self) {
        log::debug!("laying out {} widgets", self.order.len());
        for id in &self.order {
            if let Some(w) = self.widgets.get_mut(*id) {
                w.layout();
            }
        }
    }

    /// Moves every widget by `(dx, dy)` logical pixels.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for id in &self.order {
            if let Some(w) = self.widgets.get_mut(*id) {
                let Vec2 { x, y } = w.base().position();
                w.update(x + dx, y + dy);
            }
        }
    }

    pub fn draw(&self, cx: &mut DrawContext<'_>) {
        for id in &self.order {
            if let Some(w) = self.widgets.get(*id) {
                w.draw(cx);
            }
        }
    }

    /// Offers `event` to every widget. True if any of them consumed it.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let mut consumed = false;
        for id in &self.order {
            if let Some(w) = self.widgets.get_mut(*id)
                && w.handle_event(event)
            {
                consumed = true;
            }
        }
        log::debug!(
            "{:?} at ({}, {}) consumed={consumed}",
            event.event,
            event.position.x,
            event.position.y
        );
        consumed
    }

    pub fn mouse_down(&mut self, x: f32, y: f32) -> bool {
        self.handle_event(&PointerEvent::primary_down(x, y))
    }

    pub fn mouse_up(&mut self, x: f32, y: f32) -> bool {
        self.handle_event(&PointerEvent::primary_up(x, y))
    }
}

//! Pointer input as delivered by the host.
//!
//! Positions are in the host's region pixel space, origin at the bottom-left
//! of the viewport (the same flipped space widget geometry is built in).

use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    /// Motion with or without a button held. Widgets ignore it.
    Move,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn mouse(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            event,
            position: Vec2 { x, y },
        }
    }

    pub fn primary_down(x: f32, y: f32) -> Self {
        Self::mouse(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    pub fn primary_up(x: f32, y: f32) -> Self {
        Self::mouse(PointerEventKind::Up(PointerButton::Primary), x, y)
    }
}

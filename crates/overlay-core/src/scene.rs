use smallvec::SmallVec;

use crate::{Color, Vec2};

/// Points of one shape, in flipped screen space.
pub type VertexSet = SmallVec<[Vec2; 4]>;

/// How a batch's points are joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Consecutive points joined, last joined back to first.
    LineLoop,
    /// Independent segments, two points each.
    Lines,
}

/// Frame recorded by widgets and handed to a `RenderBackend`.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Batch {
        topology: Topology,
        points: VertexSet,
        line_width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        dpi: u32,
        color: Color,
    },
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(
        &mut self,
        topology: Topology,
        points: &[Vec2],
        line_width: f32,
        color: Color,
    ) {
        self.nodes.push(SceneNode::Batch {
            topology,
            points: SmallVec::from_slice(points),
            line_width,
            color,
        });
    }

    pub fn push_text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        size: f32,
        dpi: u32,
        color: Color,
    ) {
        self.nodes.push(SceneNode::Text {
            pos,
            text: text.into(),
            size,
            dpi,
            color,
        });
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

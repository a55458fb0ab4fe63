use glam::Vec2;
use serde::Serialize;

use crate::api::types::EntityId;
use crate::core::physics::PhysicsBody;
use crate::systems::text::TextImage;

/// What an entity looks like, recorded once at spawn time.
/// Render-time decorations dispatch on this tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    Circle { radius: f32 },
    /// Thick line between two body-local points.
    Segment { a: Vec2, b: Vec2, thickness: f32 },
    /// Body-local vertex ring.
    Polygon { vertices: Vec<Vec2> },
    /// Ring drawn as an outer disc with an inner cut-out.
    HollowCircle { radius: f32, inner_radius: f32 },
    LabeledBox { half_extents: Vec2 },
}

/// Fat Entity: a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by role ("floor", "wall", ...).
    pub tag: String,
    /// Position in world space, synced from the physics body every step.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    pub shape: ShapeKind,
    /// Rasterized label drawn at the entity's position every frame.
    pub label: Option<TextImage>,
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId, shape: ShapeKind) -> Self {
        Self {
            id,
            tag: String::new(),
            pos: Vec2::ZERO,
            rotation: 0.0,
            shape,
            label: None,
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_label(mut self, label: TextImage) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}

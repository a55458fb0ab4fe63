use glam::Vec2;
use serde::Serialize;

use crate::api::types::{Color, EntityId};
use crate::components::entity::ShapeKind;
use crate::systems::text::TextImage;

/// Where a text command's position sits relative to the drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    Center,
}

/// One live shape, posed at its current world position and rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeInstance {
    pub entity: EntityId,
    pub pos: Vec2,
    pub rotation: f32,
    pub shape: ShapeKind,
    pub is_static: bool,
}

/// Decorations and 2D overlays, drawn in queue order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Two axis-aligned strokes crossing at `center`.
    Cross {
        center: Vec2,
        half_len: f32,
        color: Color,
    },
    /// A pre-rasterized image centered at `pos`.
    Image {
        image: TextImage,
        pos: Vec2,
        alpha: u8,
    },
    Text {
        text: String,
        size: u32,
        pos: Vec2,
        color: Color,
        alpha: u8,
        anchor: Anchor,
    },
}

/// Everything the renderer needs for one frame. Rebuilt every tick.
#[derive(Debug, Clone, Serialize)]
pub struct FrameData {
    pub world_width: f32,
    pub world_height: f32,
    pub background: Color,
    pub title: String,
    /// Drawn before the shapes (watermark, help text).
    pub underlay: Vec<DrawCommand>,
    pub shapes: Vec<ShapeInstance>,
    /// Drawn after the shapes (decorations, labels, HUD).
    pub overlay: Vec<DrawCommand>,
}

impl FrameData {
    pub fn new(world_width: f32, world_height: f32, title: impl Into<String>) -> Self {
        Self {
            world_width,
            world_height,
            background: Color::BLACK,
            title: title.into(),
            underlay: Vec::new(),
            shapes: Vec::with_capacity(256),
            overlay: Vec::new(),
        }
    }

    /// Drop last frame's draw lists, keeping dimensions and title.
    pub fn clear(&mut self) {
        self.background = Color::BLACK;
        self.underlay.clear();
        self.shapes.clear();
        self.overlay.clear();
    }

    /// Serialize for hosts that render from JSON (the browser canvas).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_title_and_size() {
        let mut frame = FrameData::new(800.0, 600.0, "sandbox");
        frame.background = Color::WHITE;
        frame.overlay.push(DrawCommand::Cross {
            center: Vec2::ZERO,
            half_len: 1.0,
            color: Color::WHITE,
        });
        frame.clear();
        assert!(frame.overlay.is_empty());
        assert_eq!(frame.background, Color::BLACK);
        assert_eq!(frame.title, "sandbox");
        assert_eq!(frame.world_width, 800.0);
    }

    #[test]
    fn json_is_tagged() {
        let mut frame = FrameData::new(800.0, 600.0, "t");
        frame.shapes.push(ShapeInstance {
            entity: EntityId(3),
            pos: Vec2::new(1.0, 2.0),
            rotation: 0.0,
            shape: ShapeKind::Circle { radius: 4.0 },
            is_static: false,
        });
        let json = frame.to_json().unwrap();
        assert!(json.contains(r#""kind":"circle""#), "{json}");
        assert!(json.contains(r#""entity":3"#), "{json}");
    }
}

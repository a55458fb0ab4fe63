use crate::api::types::Color;
use crate::components::entity::{Entity, ShapeKind};
use crate::core::physics::PhysicsWorld;
use crate::renderer::frame::{DrawCommand, FrameData, ShapeInstance};

/// Stroke color of the cross drawn over circles.
const CROSS_COLOR: Color = Color::WHITE;

/// Collect the live scene into the frame: one instance per entity, plus the
/// per-shape decorations (circle crosses, attached labels) in the overlay.
pub fn build_frame<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    physics: &PhysicsWorld,
    frame: &mut FrameData,
) {
    frame.shapes.clear();

    for entity in entities {
        let is_static = entity
            .body
            .as_ref()
            .map_or(true, |body| !physics.is_dynamic(body));

        frame.shapes.push(ShapeInstance {
            entity: entity.id,
            pos: entity.pos,
            rotation: entity.rotation,
            shape: entity.shape.clone(),
            is_static,
        });

        if let ShapeKind::Circle { radius } = entity.shape {
            frame.overlay.push(DrawCommand::Cross {
                center: entity.pos,
                half_len: (radius / 2.0).floor(),
                color: CROSS_COLOR,
            });
        }

        if let Some(label) = &entity.label {
            frame.overlay.push(DrawCommand::Image {
                image: label.clone(),
                pos: entity.pos,
                alpha: u8::MAX,
            });
        }
    }
}

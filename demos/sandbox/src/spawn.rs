//! Entity factory: one constructor per body the sandbox can create.
//!
//! Each derives mass and inertia from the shape, registers the body with
//! the world and spawns the entity. Dynamic bodies carry their mass
//! explicitly, so their colliders have zero density.

use glam::Vec2;
use physbox_engine::systems::geometry::{
    centroid, convex_hull, moment_for_box, moment_for_circle, moment_for_polygon,
    moment_for_segment, regular_polygon_vertices, segment_length, signed_area_mass,
};
use physbox_engine::{
    BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, EntityId, PhysicsError,
    ShapeKind, TextImage,
};
use std::f32::consts::PI;

/// Bounce of everything that moves.
const DYNAMIC_RESTITUTION: f32 = 0.8;
/// Grip of floors, walls and lines.
const GRIP_FRICTION: f32 = 0.9;
/// Half thickness of the floor.
const FLOOR_RADIUS: f32 = 5.0;
/// Distance from the bottom edge of the world to the floor's center line.
const FLOOR_INSET: f32 = 20.0;
/// Width of a hollow circle's ring.
const RING_WIDTH: f32 = 3.0;
/// Mass per unit length of a line.
const SEGMENT_LINEAR_DENSITY: f32 = 0.1;
/// Mass per unit area of a labeled box.
const LABEL_AREA_DENSITY: f32 = 0.01;

fn dynamic_material(friction: f32) -> ColliderMaterial {
    ColliderMaterial {
        restitution: DYNAMIC_RESTITUTION,
        friction,
        density: 0.0,
    }
}

fn static_material() -> ColliderMaterial {
    ColliderMaterial {
        restitution: 0.0,
        friction: GRIP_FRICTION,
        density: 1.0,
    }
}

fn spawn(
    ctx: &mut EngineContext,
    tag: &str,
    shape: ShapeKind,
    desc: BodyDesc,
) -> Result<EntityId, PhysicsError> {
    let id = ctx.next_id();
    let entity = Entity::new(id, shape).with_tag(tag);
    ctx.spawn_with_body(entity, desc)?;
    log::debug!("spawned {tag} {id:?} at {}", ctx.scene.get(id).map_or(Vec2::ZERO, |e| e.pos));
    Ok(id)
}

/// The static floor spanning the world's width near its bottom edge.
pub fn floor(ctx: &mut EngineContext) -> Result<EntityId, PhysicsError> {
    let (width, height) = (ctx.config().world_width, ctx.config().world_height);
    let half = width / 2.0;
    let a = Vec2::new(-half, 0.0);
    let b = Vec2::new(half, 0.0);
    let desc = BodyDesc::fixed(ColliderDesc::Segment { a, b, radius: FLOOR_RADIUS })
        .with_position(Vec2::new(half, height - FLOOR_INSET))
        .with_material(static_material());
    let shape = ShapeKind::Segment { a, b, thickness: FLOOR_RADIUS };
    spawn(ctx, "floor", shape, desc)
}

pub fn circle(ctx: &mut EngineContext, at: Vec2, radius: f32) -> Result<EntityId, PhysicsError> {
    let mass = PI * radius * radius;
    let inertia = moment_for_circle(mass, 0.0, radius);
    let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius })
        .with_position(at)
        .with_material(dynamic_material(0.0))
        .with_mass(mass, inertia);
    spawn(ctx, "circle", ShapeKind::Circle { radius }, desc)
}

/// A line from `start` to `start + offset`, with its body origin at `start`.
pub fn segment(
    ctx: &mut EngineContext,
    start: Vec2,
    offset: Vec2,
    thickness: f32,
) -> Result<EntityId, PhysicsError> {
    let (a, b) = (Vec2::ZERO, offset);
    let mass = segment_length(a, b) * SEGMENT_LINEAR_DENSITY;
    let inertia = moment_for_segment(mass, a, b, thickness);
    let desc = BodyDesc::dynamic(ColliderDesc::Segment { a, b, radius: thickness })
        .with_position(start)
        .with_material(dynamic_material(GRIP_FRICTION))
        .with_mass(mass, inertia);
    spawn(ctx, "segment", ShapeKind::Segment { a, b, thickness }, desc)
}

/// A regular polygon with `sides` vertices on a circle of `radius`.
pub fn polygon(
    ctx: &mut EngineContext,
    at: Vec2,
    sides: u8,
    radius: f32,
) -> Result<EntityId, PhysicsError> {
    let vertices = regular_polygon_vertices(u32::from(sides), radius);
    let mass = signed_area_mass(&vertices);
    let inertia = moment_for_polygon(mass, &vertices);
    let desc = BodyDesc::dynamic(ColliderDesc::ConvexPolygon { points: vertices.clone() })
        .with_position(at)
        .with_material(dynamic_material(0.0))
        .with_mass(mass, inertia);
    spawn(ctx, "polygon", ShapeKind::Polygon { vertices }, desc)
}

/// A ring: the outer circle collides, the inner one is a sensor that only
/// marks the cut-out.
pub fn hollow_circle(ctx: &mut EngineContext, at: Vec2, radius: f32) -> Result<EntityId, PhysicsError> {
    let inner_radius = radius - RING_WIDTH;
    let mass = PI * (radius * radius - inner_radius * inner_radius);
    let inertia = moment_for_circle(mass, inner_radius, radius);
    let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius })
        .with_position(at)
        .with_material(dynamic_material(0.0))
        .with_sensor(ColliderDesc::Ball { radius: inner_radius })
        .with_mass(mass, inertia);
    spawn(ctx, "hollow_circle", ShapeKind::HollowCircle { radius, inner_radius }, desc)
}

/// A box sized to the rasterized `label`, which stays attached for drawing.
pub fn labeled_box(ctx: &mut EngineContext, at: Vec2, label: TextImage) -> Result<EntityId, PhysicsError> {
    let (width, height) = (label.width, label.height);
    let mass = width * height * LABEL_AREA_DENSITY;
    let inertia = moment_for_box(mass, width, height);
    let half_extents = Vec2::new(width / 2.0, height / 2.0);
    let desc = BodyDesc::dynamic(ColliderDesc::Cuboid {
        half_width: half_extents.x,
        half_height: half_extents.y,
    })
    .with_position(at)
    .with_material(dynamic_material(0.0))
    .with_mass(mass, inertia);

    let id = ctx.next_id();
    let entity = Entity::new(id, ShapeKind::LabeledBox { half_extents })
        .with_tag("label")
        .with_label(label);
    ctx.spawn_with_body(entity, desc)?;
    log::debug!("spawned label {id:?} at {at}");
    Ok(id)
}

/// One static wall piece between two world points.
pub fn brush_wall(ctx: &mut EngineContext, a: Vec2, b: Vec2, thickness: f32) -> Result<EntityId, PhysicsError> {
    let desc = BodyDesc::fixed(ColliderDesc::Segment { a, b, radius: thickness })
        .with_material(static_material());
    spawn(ctx, "wall", ShapeKind::Segment { a, b, thickness }, desc)
}

/// A dynamic blob from a freeform outline, positioned at the points'
/// centroid with vertices relative to it. Collides as the outline's convex
/// hull. Collinear outlines are rejected.
pub fn freeform(ctx: &mut EngineContext, points: &[Vec2]) -> Result<EntityId, PhysicsError> {
    let center = centroid(points).ok_or(PhysicsError::DegenerateShape(0))?;
    let vertices: Vec<Vec2> = points.iter().map(|p| *p - center).collect();
    let (mass, inertia) = outline_mass(&vertices);
    let desc = BodyDesc::dynamic(ColliderDesc::ConvexPolygon { points: vertices.clone() })
        .with_position(center)
        .with_material(dynamic_material(0.0))
        .with_mass(mass, inertia);
    spawn(ctx, "freeform", ShapeKind::Polygon { vertices }, desc)
}

/// Area and moment of the outline, or of its hull when the outline crosses
/// itself and its lobes cancel.
fn outline_mass(vertices: &[Vec2]) -> (f32, f32) {
    let mass = signed_area_mass(vertices);
    let inertia = moment_for_polygon(mass, vertices);
    if mass > 0.0 && inertia > 0.0 {
        return (mass, inertia);
    }
    let hull = convex_hull(vertices);
    let mass = signed_area_mass(&hull);
    (mass, moment_for_polygon(mass, &hull))
}

#[cfg(test)]
mod tests {
    use super::*;
    use physbox_engine::{AtlasText, GameConfig, TextRasterizer};
    use proptest::prelude::*;

    fn ctx() -> EngineContext {
        EngineContext::new(&GameConfig::default())
    }

    /// Registered mass and inertia after the world has seen the body once.
    fn mass_props(ctx: &mut EngineContext, id: EntityId) -> (f32, f32) {
        ctx.step_physics();
        let body = ctx.scene.get(id).and_then(|e| e.body.clone()).unwrap();
        (ctx.physics.mass(&body), ctx.physics.inertia(&body))
    }

    #[test]
    fn floor_spans_the_world() {
        let mut ctx = ctx();
        let id = floor(&mut ctx).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        assert_eq!(entity.tag, "floor");
        assert_eq!(entity.pos, Vec2::new(400.0, 580.0));
        assert_eq!(
            entity.shape,
            ShapeKind::Segment {
                a: Vec2::new(-400.0, 0.0),
                b: Vec2::new(400.0, 0.0),
                thickness: 5.0
            }
        );
        assert!(!ctx.physics.is_dynamic(entity.body.as_ref().unwrap()));
    }

    #[test]
    fn circle_mass_is_area() {
        let mut ctx = ctx();
        let id = circle(&mut ctx, Vec2::new(100.0, 100.0), 10.0).unwrap();
        let (mass, inertia) = mass_props(&mut ctx, id);
        assert!((mass - PI * 100.0).abs() < 0.01, "mass {mass}");
        assert!((inertia - PI * 100.0 * 50.0).abs() < 1.0, "inertia {inertia}");
    }

    #[test]
    fn segment_uses_fixed_offset() {
        let mut ctx = ctx();
        let id = segment(&mut ctx, Vec2::new(50.0, 60.0), Vec2::new(50.0, 0.0), 5.0).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        assert_eq!(entity.pos, Vec2::new(50.0, 60.0));
        assert_eq!(
            entity.shape,
            ShapeKind::Segment { a: Vec2::ZERO, b: Vec2::new(50.0, 0.0), thickness: 5.0 }
        );
        assert_eq!(entity.body.as_ref().and_then(|b| b.mass).map(|m| m.mass), Some(5.0));
    }

    #[test]
    fn hollow_circle_inner_is_sensor() {
        let mut ctx = ctx();
        let id = hollow_circle(&mut ctx, Vec2::ZERO, 25.0).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        let body = entity.body.as_ref().unwrap();
        assert_eq!(body.collider_handles.len(), 2);
        assert!(!ctx.physics.is_sensor(body.collider_handles[0]));
        assert!(ctx.physics.is_sensor(body.collider_handles[1]));
        assert_eq!(entity.shape, ShapeKind::HollowCircle { radius: 25.0, inner_radius: 22.0 });
    }

    #[test]
    fn labeled_box_fits_its_text() {
        let mut ctx = ctx();
        let label = AtlasText::default().rasterize("Pusat", 20);
        let (w, h) = (label.width, label.height);
        let id = labeled_box(&mut ctx, Vec2::new(300.0, 100.0), label).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        assert_eq!(entity.shape, ShapeKind::LabeledBox { half_extents: Vec2::new(w / 2.0, h / 2.0) });
        assert_eq!(entity.label.as_ref().map(|l| l.text.as_str()), Some("Pusat"));
        let mass = entity.body.as_ref().and_then(|b| b.mass).unwrap().mass;
        assert!((mass - w * h * 0.01).abs() < 1e-4);
    }

    #[test]
    fn brush_wall_uses_world_endpoints() {
        let mut ctx = ctx();
        let (a, b) = (Vec2::new(10.0, 10.0), Vec2::new(30.0, 40.0));
        let id = brush_wall(&mut ctx, a, b, 5.0).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        assert_eq!(entity.pos, Vec2::ZERO);
        assert_eq!(entity.shape, ShapeKind::Segment { a, b, thickness: 5.0 });
        ctx.step_physics();
        assert_eq!(ctx.scene.get(id).unwrap().pos, Vec2::ZERO, "walls never move");
    }

    #[test]
    fn collinear_freeform_is_rejected() {
        let mut ctx = ctx();
        let line = [Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
        assert_eq!(freeform(&mut ctx, &line), Err(PhysicsError::DegenerateShape(3)));
        assert!(ctx.scene.is_empty());
        assert_eq!(ctx.physics.body_count(), 0);
    }

    #[test]
    fn self_crossing_freeform_takes_hull_mass() {
        let mut ctx = ctx();
        let bowtie = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ];
        let id = freeform(&mut ctx, &bowtie).unwrap();
        let entity = ctx.scene.get(id).unwrap();
        assert_eq!(entity.pos, Vec2::new(5.0, 5.0));
        assert!(matches!(&entity.shape, ShapeKind::Polygon { vertices } if vertices.len() == 4));
        let props = entity.body.as_ref().and_then(|b| b.mass).unwrap();
        assert_eq!(props.mass, 100.0, "area of the 10 x 10 hull");
        assert!((props.inertia - 100.0 * 200.0 / 12.0).abs() < 0.1, "inertia {}", props.inertia);
    }

    proptest! {
        #[test]
        fn every_spawn_has_positive_mass(radius in 5.0f32..120.0, sides in 3u8..=8) {
            let mut ctx = ctx();
            let at = Vec2::new(400.0, 200.0);
            let label = AtlasText::default().rasterize("Pusat", (radius * 0.8) as u32);
            let ids = [
                circle(&mut ctx, at, radius).unwrap(),
                segment(&mut ctx, at, Vec2::new(50.0, 0.0), radius / 5.0).unwrap(),
                polygon(&mut ctx, at, sides, radius).unwrap(),
                hollow_circle(&mut ctx, at, radius).unwrap(),
                labeled_box(&mut ctx, at, label).unwrap(),
            ];
            for id in ids {
                let props = ctx.scene.get(id).and_then(|e| e.body.as_ref()).and_then(|b| b.mass).unwrap();
                prop_assert!(props.mass > 0.0 && props.inertia > 0.0, "{:?}", props);
            }
        }

        #[test]
        fn freeform_vertices_reconstruct_points(
            raw in prop::collection::vec((0.0f32..800.0, 0.0f32..600.0), 3..24)
        ) {
            let points: Vec<Vec2> = raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            // Self-crossing outlines included; only near-collinear ones are skipped.
            prop_assume!(signed_area_mass(&convex_hull(&points)) > 100.0);
            let mut ctx = ctx();
            let id = freeform(&mut ctx, &points).unwrap();
            let entity = ctx.scene.get(id).unwrap();
            let ShapeKind::Polygon { vertices } = &entity.shape else {
                panic!("freeform must be a polygon");
            };
            prop_assert_eq!(vertices.len(), points.len());
            for (v, p) in vertices.iter().zip(&points) {
                prop_assert!((*v + entity.pos).distance(*p) < 1e-2);
            }
        }
    }
}

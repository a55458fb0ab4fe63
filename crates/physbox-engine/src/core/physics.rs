use glam::Vec2;
use rapier2d::prelude::*;
use thiserror::Error;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// Conversion helpers (private): glam to nalgebra and back
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn vec2_to_point(v: Vec2) -> nalgebra::Point2<f32> {
    nalgebra::Point2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_rot(iso: &nalgebra::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let rot = iso.rotation.angle();
    (pos, rot)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors raised while registering a body with the world.
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    #[error("body description has no collision shapes")]
    NoShapes,
    #[error("polygon has no convex hull ({0} points, all collinear or coincident)")]
    DegenerateShape(usize),
    #[error("mass and inertia must be strictly positive (mass={mass}, inertia={inertia})")]
    NonPositiveMass { mass: f32, inertia: f32 },
}

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Collision geometry, expressed in body-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
    /// A thick line between two local points; `radius` is the half thickness.
    Segment { a: Vec2, b: Vec2, radius: f32 },
    /// Convex hull of the given local points.
    ConvexPolygon { points: Vec<Vec2> },
}

impl ColliderDesc {
    fn build_collider(&self) -> Result<ColliderBuilder, PhysicsError> {
        match self {
            ColliderDesc::Ball { radius } => Ok(ColliderBuilder::ball(*radius)),
            ColliderDesc::Cuboid { half_width, half_height } => {
                Ok(ColliderBuilder::cuboid(*half_width, *half_height))
            }
            ColliderDesc::Segment { a, b, radius } => Ok(ColliderBuilder::new(
                SharedShape::capsule(vec2_to_point(*a), vec2_to_point(*b), *radius),
            )),
            ColliderDesc::ConvexPolygon { points } => {
                let pts: Vec<nalgebra::Point2<f32>> =
                    points.iter().map(|p| vec2_to_point(*p)).collect();
                ColliderBuilder::convex_hull(&pts)
                    .ok_or(PhysicsError::DegenerateShape(points.len()))
            }
        }
    }
}

/// Physical material properties for a collider.
///
/// Coefficients of touching colliders are multiplied together, so a
/// bouncy ball dropped on a zero-restitution floor does not bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.3,
            friction: 0.5,
            density: 1.0,
        }
    }
}

/// One collision shape attached to a body.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDesc {
    pub collider: ColliderDesc,
    pub material: ColliderMaterial,
    /// Sensors report overlaps but never produce contact forces.
    pub sensor: bool,
}

/// Explicit mass properties, about the body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProps {
    pub mass: f32,
    pub inertia: f32,
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub rotation: f32,
    pub shapes: Vec<ShapeDesc>,
    /// When set, colliders are expected to carry zero density and the body
    /// takes exactly this mass and inertia.
    pub mass: Option<MassProps>,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self::with_type(BodyType::Dynamic, collider)
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self::with_type(BodyType::Fixed, collider)
    }

    fn with_type(body_type: BodyType, collider: ColliderDesc) -> Self {
        Self {
            body_type,
            position: Vec2::ZERO,
            rotation: 0.0,
            shapes: vec![ShapeDesc {
                collider,
                material: ColliderMaterial::default(),
                sensor: false,
            }],
            mass: None,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the material of every solid shape added so far.
    pub fn with_material(mut self, material: ColliderMaterial) -> Self {
        for shape in self.shapes.iter_mut().filter(|s| !s.sensor) {
            shape.material = material;
        }
        self
    }

    /// Attach a non-colliding sensor shape with zero density.
    pub fn with_sensor(mut self, collider: ColliderDesc) -> Self {
        self.shapes.push(ShapeDesc {
            collider,
            material: ColliderMaterial {
                restitution: 0.0,
                friction: 0.0,
                density: 0.0,
            },
            sensor: true,
        });
        self
    }

    /// Use explicit mass and rotational inertia instead of collider density.
    pub fn with_mass(mut self, mass: f32, inertia: f32) -> Self {
        self.mass = Some(MassProps { mass, inertia });
        self
    }
}

/// Handles stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    /// Collider handles, in the order the shapes were described.
    pub collider_handles: Vec<ColliderHandle>,
    /// Mass properties the body was registered with, if explicit.
    pub mass: Option<MassProps>,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single struct.
///
/// A world lives for exactly one sandbox session. Bodies are never removed
/// individually; resetting the sandbox drops the whole world.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    /// The sandbox is Y-down, so positive Y pulls bodies toward the floor
    /// (e.g. `Vec2::new(0.0, 900.0)`).
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// The integration timestep used by each `step`.
    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    pub fn gravity(&self) -> Vec2 {
        na_to_vec2(&self.gravity)
    }

    /// Create a rigid body with all of its shapes and return the handles.
    /// The owning EntityId is stored in the body's `user_data`.
    ///
    /// Every shape is validated before anything is inserted, so a failed
    /// call leaves the world untouched.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
    ) -> Result<PhysicsBody, PhysicsError> {
        if desc.shapes.is_empty() {
            return Err(PhysicsError::NoShapes);
        }
        let builders = desc
            .shapes
            .iter()
            .map(|shape| shape.collider.build_collider())
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(MassProps { mass, inertia }) = desc.mass {
            if !(mass > 0.0 && inertia > 0.0) {
                return Err(PhysicsError::NonPositiveMass { mass, inertia });
            }
        }

        let mut rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .rotation(desc.rotation)
            .user_data(entity_id.0 as u128);
        if let (BodyType::Dynamic, Some(props)) = (desc.body_type, desc.mass) {
            rb = rb.additional_mass_properties(MassProperties::new(
                nalgebra::Point2::origin(),
                props.mass,
                props.inertia,
            ));
        }

        let body_handle = self.bodies.insert(rb.build());

        let mut collider_handles = Vec::with_capacity(builders.len());
        for (builder, shape) in builders.into_iter().zip(&desc.shapes) {
            let collider = builder
                .restitution(shape.material.restitution)
                .friction(shape.material.friction)
                .density(shape.material.density)
                .restitution_combine_rule(CoefficientCombineRule::Multiply)
                .friction_combine_rule(CoefficientCombineRule::Multiply)
                .sensor(shape.sensor)
                .build();
            collider_handles.push(self.colliders.insert_with_parent(
                collider,
                body_handle,
                &mut self.bodies,
            ));
        }

        Ok(PhysicsBody {
            body_handle,
            collider_handles,
            mass: desc.mass,
        })
    }

    /// Advance the simulation by one `dt`.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_rot(rb.position()))
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Total mass of a body as seen by the solver.
    pub fn mass(&self, body: &PhysicsBody) -> f32 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.mass())
            .unwrap_or(0.0)
    }

    /// Rotational inertia about the body's center of mass.
    pub fn inertia(&self, body: &PhysicsBody) -> f32 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.mass_properties().local_mprops.principal_inertia())
            .unwrap_or(0.0)
    }

    /// Whether the body is simulated (as opposed to fixed in place).
    pub fn is_dynamic(&self, body: &PhysicsBody) -> bool {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.is_dynamic())
            .unwrap_or(false)
    }

    /// Whether the given collider is a sensor.
    pub fn is_sensor(&self, collider: ColliderHandle) -> bool {
        self.colliders
            .get(collider)
            .map(|c| c.is_sensor())
            .unwrap_or(false)
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of colliders in the simulation, sensors included.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

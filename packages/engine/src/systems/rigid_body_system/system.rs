use std::collections::BTreeMap;

use rapier2d::prelude::*;

use crate::physics_world::PhysicsWorld;
use crate::rigid_body::{BodyDesc, BodyHandle, BodyView, Material, RenderStyle, Shape, Vec2};

/// Gravity multiplier applied to the configured gravity direction
pub const DEFAULT_GRAVITY_SCALE: f32 = 0.001;

/// Scene accelerations are px/ms²; rapier integrates in seconds.
const PER_MS2_TO_PER_S2: f32 = 1.0e6;

/// `friction_air` is a velocity loss per tick at this rate
const AIR_FRICTION_HZ: f32 = 60.0;

/// rapier's tolerances assume metres; one metre here is 100 px.
const PIXELS_PER_METER: f32 = 100.0;

/// Smallest core half-extent left inside a rounded rectangle
const MIN_CORE_HALF_EXTENT: f32 = 0.5;

/// What the scene knows about a body that rapier does not
struct Entry {
    body: RigidBodyHandle,
    shape: Shape,
    material: Material,
    render: RenderStyle,
}

/// Manages all rigid bodies in the scene
pub struct RigidBodySystem {
    gravity: Vec2,
    gravity_scale: f32,

    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,

    // Ordered by handle so `bodies()` is stable across runs
    entries: BTreeMap<BodyHandle, Entry>,
    next_id: u32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: DEFAULT_GRAVITY_SCALE,
            params: IntegrationParameters {
                length_unit: PIXELS_PER_METER,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn set_gravity(&mut self, gravity: Vec2, scale: f32) {
        self.gravity = gravity;
        self.gravity_scale = scale;
    }

    pub fn gravity(&self) -> (Vec2, f32) {
        (self.gravity, self.gravity_scale)
    }

    fn rapier_body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        let entry = self.entries.get(&handle)?;
        self.bodies.get_mut(entry.body)
    }
}

fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn collider_for(shape: Shape) -> ColliderBuilder {
    match shape {
        Shape::Circle { radius } => ColliderBuilder::ball(radius),
        Shape::Rectangle { width, height, chamfer } => {
            let (hx, hy) = (0.5 * width, 0.5 * height);
            // rapier needs a non-empty core under the rounded border
            let border = chamfer.min(hx.min(hy) - MIN_CORE_HALF_EXTENT).max(0.0);
            if border > 0.0 {
                ColliderBuilder::round_cuboid(hx - border, hy - border, border)
            } else {
                ColliderBuilder::cuboid(hx, hy)
            }
        }
    }
}

fn view<'a>(handle: BodyHandle, entry: &'a Entry, body: &RigidBody) -> BodyView<'a> {
    BodyView {
        handle,
        pos: from_vector(body.translation()),
        angle: body.rotation().angle(),
        velocity: from_vector(body.linvel()),
        is_static: body.is_fixed(),
        shape: entry.shape,
        material: entry.material,
        render: &entry.render,
    }
}

impl PhysicsWorld for RigidBodySystem {
    fn add(&mut self, desc: BodyDesc) -> BodyHandle {
        let material = desc.material;
        let builder = if desc.is_static {
            RigidBodyBuilder::fixed()
        } else {
            let damping = material.friction_air.clamp(0.0, 1.0) * AIR_FRICTION_HZ;
            RigidBodyBuilder::dynamic()
                .linear_damping(damping)
                .angular_damping(damping)
                // The cup is teleported under resting particles; they must react
                .can_sleep(false)
                .ccd_enabled(true)
        };
        let body = builder
            .translation(to_vector(desc.position))
            .rotation(desc.angle)
            .build();
        let collider = collider_for(desc.shape)
            .density(material.density.max(1e-6))
            .friction(material.friction.max(0.0))
            .friction_combine_rule(CoefficientCombineRule::Min)
            .restitution(material.restitution.max(0.0))
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .build();

        let body = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        let handle = BodyHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.insert(
            handle,
            Entry {
                body,
                shape: desc.shape,
                material,
                render: desc.render,
            },
        );
        handle
    }

    fn remove(&mut self, handle: BodyHandle) -> bool {
        let Some(entry) = self.entries.remove(&handle) else {
            return false;
        };
        self.bodies.remove(
            entry.body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        true
    }

    fn set_position(&mut self, handle: BodyHandle, pos: Vec2) -> bool {
        match self.rapier_body_mut(handle) {
            Some(body) => {
                body.set_translation(to_vector(pos), true);
                true
            }
            None => false,
        }
    }

    /// `force` is in mass·px/ms² and lasts for the next step only.
    fn apply_force(&mut self, handle: BodyHandle, point: Vec2, force: Vec2) -> bool {
        let Some(body) = self.rapier_body_mut(handle) else {
            return false;
        };
        let arm = point - from_vector(body.translation());
        body.add_force(to_vector(force) * PER_MS2_TO_PER_S2, true);
        body.add_torque(arm.cross(force) * PER_MS2_TO_PER_S2, true);
        true
    }

    fn body(&self, handle: BodyHandle) -> Option<BodyView<'_>> {
        let entry = self.entries.get(&handle)?;
        let body = self.bodies.get(entry.body)?;
        Some(view(handle, entry, body))
    }

    fn bodies(&self) -> Box<dyn Iterator<Item = BodyView<'_>> + '_> {
        Box::new(self.entries.iter().filter_map(move |(&handle, entry)| {
            self.bodies
                .get(entry.body)
                .map(|body| view(handle, entry, body))
        }))
    }

    fn body_count(&self) -> usize {
        self.entries.len()
    }

    fn step(&mut self, delta_ms: f32) {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        self.params.dt = delta_ms / 1000.0;
        let gravity = to_vector(self.gravity) * (self.gravity_scale * PER_MS2_TO_PER_S2);

        self.pipeline.step(
            &gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );

        // rapier keeps user forces until reset; scene forces are one-shot
        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
            body.reset_torques(false);
        }
    }

    fn clear(&mut self) {
        let next_id = self.next_id;
        let (gravity, scale) = self.gravity();
        *self = Self::new();
        self.set_gravity(gravity, scale);
        self.next_id = next_id;
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_MS: f32 = 1000.0 / 60.0;

    fn ball_material() -> Material {
        Material {
            density: 1.0,
            friction: 0.0,
            friction_air: 0.0,
            restitution: 0.7,
        }
    }

    #[test]
    fn handles_are_not_reused_after_remove() {
        let mut world = RigidBodySystem::new();
        let a = world.add(BodyDesc::circle(0.0, 0.0, 5.0));
        let b = world.add(BodyDesc::circle(50.0, 0.0, 5.0));
        assert!(world.remove(a));
        assert!(!world.remove(a));
        let c = world.add(BodyDesc::circle(0.0, 0.0, 5.0));
        assert_ne!(a, c);
        assert_eq!(world.body_count(), 2);
        assert_eq!(world.position(b), Some(Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn remove_leaves_other_bodies_in_place() {
        let mut world = RigidBodySystem::new();
        let handles: Vec<_> = (0..5)
            .map(|i| world.add(BodyDesc::circle(i as f32 * 100.0, 0.0, 5.0)))
            .collect();
        world.remove(handles[1]);
        for (i, h) in handles.iter().enumerate() {
            if i == 1 {
                assert!(world.body(*h).is_none());
            } else {
                assert_eq!(world.position(*h), Some(Vec2::new(i as f32 * 100.0, 0.0)));
            }
        }
        let listed: Vec<_> = world.bodies().map(|b| b.handle).collect();
        assert_eq!(listed, vec![handles[0], handles[2], handles[3], handles[4]]);
    }

    #[test]
    fn static_bodies_never_move() {
        let mut world = RigidBodySystem::new();
        let ground = world.add(BodyDesc::rectangle(400.0, 450.0, 120.0, 15.0).with_static(true));
        world.add(BodyDesc::circle(400.0, 430.0, 6.0).with_material(ball_material()));
        for _ in 0..60 {
            world.step(TICK_MS);
        }
        assert_eq!(world.position(ground), Some(Vec2::new(400.0, 450.0)));
        assert!(world.body(ground).unwrap().is_static);
    }

    #[test]
    fn particle_comes_to_rest_on_ground() {
        let mut world = RigidBodySystem::new();
        world.add(BodyDesc::rectangle(400.0, 450.0, 120.0, 15.0).with_static(true));
        let ball = world.add(BodyDesc::circle(400.0, 400.0, 6.5).with_material(ball_material()));

        for _ in 0..600 {
            world.step(TICK_MS);
        }

        let body = world.body(ball).unwrap();
        let resting_y = 450.0 - 7.5 - 6.5;
        assert!((body.pos.y - resting_y).abs() < 1.5, "y = {}", body.pos.y);
        assert!(body.velocity.y.abs() < 5.0, "vy = {}", body.velocity.y);
    }

    #[test]
    fn particle_lands_on_tilted_rounded_wall() {
        let mut world = RigidBodySystem::new();
        world.add(
            BodyDesc::rectangle(400.0, 450.0, 20.0, 250.0)
                .with_static(true)
                .with_angle(std::f32::consts::FRAC_PI_2)
                .with_chamfer(10.0),
        );
        let ball = world.add(BodyDesc::circle(400.0, 380.0, 6.5).with_material(ball_material()));
        for _ in 0..300 {
            world.step(TICK_MS);
        }
        // Wall lies flat: 10 px half-thickness under a 6.5 px ball
        let y = world.position(ball).unwrap().y;
        assert!((y - (450.0 - 10.0 - 6.5)).abs() < 1.5, "y = {}", y);
    }

    #[test]
    fn force_pushes_for_one_step_only() {
        let mut world = RigidBodySystem::new();
        world.set_gravity(Vec2::zero(), 0.0);
        let ball = world.add(BodyDesc::circle(0.0, 0.0, 6.5).with_material(ball_material()));
        assert!(world.apply_force(ball, Vec2::zero(), Vec2::new(1.0, 0.0)));

        world.step(TICK_MS);
        let body = world.body(ball).unwrap();
        assert!(body.pos.x > 0.0);
        assert!(body.pos.y.abs() < 1e-4);
        let vx = body.velocity.x;
        assert!(vx > 0.0);

        world.step(TICK_MS);
        let vx_next = world.body(ball).unwrap().velocity.x;
        assert!((vx_next - vx).abs() < 1e-3, "{} -> {}", vx, vx_next);
    }

    #[test]
    fn air_friction_slows_particles() {
        let mut world = RigidBodySystem::new();
        world.set_gravity(Vec2::zero(), 0.0);
        let draggy = world.add(BodyDesc::circle(0.0, 0.0, 6.0).with_material(Material {
            friction_air: 0.1,
            ..ball_material()
        }));
        let free = world.add(BodyDesc::circle(0.0, 200.0, 6.0).with_material(ball_material()));
        world.apply_force(draggy, Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        world.apply_force(free, Vec2::new(0.0, 200.0), Vec2::new(1.0, 0.0));
        for _ in 0..30 {
            world.step(TICK_MS);
        }
        assert!(world.position(draggy).unwrap().x < world.position(free).unwrap().x);
    }

    #[test]
    fn overlapping_circles_separate() {
        let mut world = RigidBodySystem::new();
        world.set_gravity(Vec2::zero(), 0.0);
        let a = world.add(BodyDesc::circle(100.0, 100.0, 6.0));
        let b = world.add(BodyDesc::circle(104.0, 100.0, 6.0));
        for _ in 0..30 {
            world.step(TICK_MS);
        }
        let pa = world.position(a).unwrap();
        let pb = world.position(b).unwrap();
        assert!((pb - pa).length() >= 11.5, "distance {}", (pb - pa).length());
    }

    #[test]
    fn teleported_static_body_reports_new_position() {
        let mut world = RigidBodySystem::new();
        let wall = world.add(BodyDesc::rectangle(0.0, 0.0, 20.0, 250.0).with_static(true));
        assert!(world.set_position(wall, Vec2::new(330.0, 480.0)));
        assert_eq!(world.position(wall), Some(Vec2::new(330.0, 480.0)));
    }

    #[test]
    fn unknown_handle_mutators_report_false() {
        let mut world = RigidBodySystem::new();
        let ghost = BodyHandle(999);
        assert!(!world.set_position(ghost, Vec2::zero()));
        assert!(!world.apply_force(ghost, Vec2::zero(), Vec2::new(1.0, 0.0)));
        assert!(world.position(ghost).is_none());
    }

    #[test]
    fn clear_keeps_handles_fresh() {
        let mut world = RigidBodySystem::new();
        let a = world.add(BodyDesc::circle(0.0, 0.0, 5.0));
        world.clear();
        assert_eq!(world.body_count(), 0);
        assert!(world.body(a).is_none());
        let b = world.add(BodyDesc::circle(0.0, 0.0, 5.0));
        assert_ne!(a, b);
    }
}

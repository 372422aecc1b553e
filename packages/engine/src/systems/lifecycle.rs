//! Particle lifecycle - spawn at fixed sources, cull below the viewport
//!
//! The manager owns the set of live particle handles. Every spawn adds to
//! both the physics world and the set; every removal takes from both.

use crate::core::utils::Rng;
use crate::domain::profiles::ParticleProfile;
use crate::physics_world::PhysicsWorld;
use crate::rigid_body::BodyHandle;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveParticle {
    handle: BodyHandle,
    radius: f32,
}

pub struct ParticleLifecycle {
    active: Vec<ActiveParticle>,
    deterministic: ParticleProfile,
    stochastic: ParticleProfile,
    stochastic_probability: f32,
    stochastic_enabled: bool,
}

impl ParticleLifecycle {
    pub fn new(deterministic: ParticleProfile, stochastic: ParticleProfile, stochastic_probability: f32) -> Self {
        Self {
            active: Vec::new(),
            deterministic,
            stochastic,
            stochastic_probability,
            stochastic_enabled: true,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.active.iter().any(|p| p.handle == handle)
    }

    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.active.iter().map(|p| p.handle)
    }

    pub fn set_stochastic_enabled(&mut self, enabled: bool) {
        self.stochastic_enabled = enabled;
    }

    pub fn stochastic_enabled(&self) -> bool {
        self.stochastic_enabled
    }

    /// One particle from the steady source, nudged by its initial force.
    pub fn spawn_deterministic(&mut self, world: &mut dyn PhysicsWorld, rng: &mut Rng) -> BodyHandle {
        spawn(world, rng, &self.deterministic, &mut self.active)
    }

    /// Rolls once; spawns from the second source on success.
    pub fn spawn_stochastic(&mut self, world: &mut dyn PhysicsWorld, rng: &mut Rng) -> Option<BodyHandle> {
        if !self.stochastic_enabled || !rng.chance(self.stochastic_probability) {
            return None;
        }
        Some(spawn(world, rng, &self.stochastic, &mut self.active))
    }

    /// Remove every particle whose top edge is below `viewport_height`.
    /// Returns how many were removed.
    pub fn cull_offscreen(&mut self, world: &mut dyn PhysicsWorld, viewport_height: f32) -> usize {
        let before = self.active.len();
        self.active.retain(|p| match world.position(p.handle) {
            Some(pos) if pos.y - p.radius > viewport_height => {
                world.remove(p.handle);
                false
            }
            Some(_) => true,
            // Body vanished from the world; drop the stale handle
            None => false,
        });
        before - self.active.len()
    }

    /// Remove one particle. Unknown handles are ignored.
    pub fn remove(&mut self, world: &mut dyn PhysicsWorld, handle: BodyHandle) -> bool {
        let Some(idx) = self.active.iter().position(|p| p.handle == handle) else {
            return false;
        };
        self.active.swap_remove(idx);
        world.remove(handle);
        true
    }

    pub fn clear(&mut self, world: &mut dyn PhysicsWorld) {
        for p in self.active.drain(..) {
            world.remove(p.handle);
        }
    }
}

fn spawn(
    world: &mut dyn PhysicsWorld,
    rng: &mut Rng,
    profile: &ParticleProfile,
    active: &mut Vec<ActiveParticle>,
) -> BodyHandle {
    let radius = draw_radius(profile, rng);
    let handle = world.add(profile.body_desc(radius));
    if profile.initial_force.length_squared() > 0.0 {
        world.apply_force(handle, profile.spawn_point, profile.initial_force);
    }
    active.push(ActiveParticle { handle, radius });
    handle
}

fn draw_radius(profile: &ParticleProfile, rng: &mut Rng) -> f32 {
    if profile.has_fixed_radius() {
        profile.radius_min
    } else {
        rng.range(profile.radius_min, profile.radius_max)
    }
}

//! Cup - three static parts that always move together
//!
//! The cup is parametrized by a single center. Every part position is
//! `center + offset` from the fixed offset table, and the DOM overlay
//! follows the same center shifted into canvas-centered coordinates.

use crate::domain::profiles::{CupSpec, CUP_PART_OFFSETS};
use crate::physics_world::PhysicsWorld;
use crate::rigid_body::{BodyHandle, Vec2};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CupPartKind {
    LeftWall,
    RightWall,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CupPart {
    pub kind: CupPartKind,
    pub handle: BodyHandle,
    pub offset: Vec2,
}

/// CSS translation of the overlay element, relative to the canvas center
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayTransform {
    pub x: f32,
    pub y: f32,
}

impl OverlayTransform {
    pub fn for_center(center: Vec2, viewport: &Viewport) -> Self {
        let half = viewport.half_extents();
        Self {
            x: center.x - half.x,
            y: center.y - half.y,
        }
    }

    pub fn css(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct Cup {
    center: Vec2,
    parts: [CupPart; 3],
    overlay: OverlayTransform,
}

impl Cup {
    /// Add the three parts to the world around `center`.
    pub fn create(
        world: &mut dyn PhysicsWorld,
        center: Vec2,
        viewport: &Viewport,
        spec: &CupSpec,
    ) -> Self {
        let [left, right, bottom] = CUP_PART_OFFSETS;
        let handles = world.add_all(
            spec.parts()
                .iter()
                .zip(CUP_PART_OFFSETS)
                .map(|(part, offset)| part.body_desc(center, offset))
                .collect(),
        );

        let parts = [
            CupPart { kind: CupPartKind::LeftWall, handle: handles[0], offset: left },
            CupPart { kind: CupPartKind::RightWall, handle: handles[1], offset: right },
            CupPart { kind: CupPartKind::Bottom, handle: handles[2], offset: bottom },
        ];

        Self {
            center,
            parts,
            overlay: OverlayTransform::for_center(center, viewport),
        }
    }

    /// Move the whole cup; parts follow the offset table, overlay follows
    /// the center.
    pub fn set_position(&mut self, world: &mut dyn PhysicsWorld, center: Vec2, viewport: &Viewport) {
        self.center = center;
        for part in self.parts.iter() {
            world.set_position(part.handle, center + part.offset);
        }
        self.refresh_overlay(viewport);
    }

    /// Recompute the overlay after the viewport changed
    pub fn refresh_overlay(&mut self, viewport: &Viewport) {
        self.overlay = OverlayTransform::for_center(self.center, viewport);
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn parts(&self) -> &[CupPart; 3] {
        &self.parts
    }

    /// Where each part should be, in part order
    pub fn part_positions(&self) -> [Vec2; 3] {
        self.parts.map(|p| self.center + p.offset)
    }

    pub fn overlay_transform(&self) -> OverlayTransform {
        self.overlay
    }

    pub fn owns(&self, handle: BodyHandle) -> bool {
        self.parts.iter().any(|p| p.handle == handle)
    }

    /// Take the parts out of the world
    pub fn remove(self, world: &mut dyn PhysicsWorld) {
        for part in self.parts.iter() {
            world.remove(part.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body_system::RigidBodySystem;

    fn world_positions(cup: &Cup, world: &RigidBodySystem) -> Vec<Vec2> {
        cup.parts()
            .iter()
            .map(|p| world.position(p.handle).unwrap())
            .collect()
    }

    #[test]
    fn parts_follow_offset_table() {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let mut cup = Cup::create(&mut world, Vec2::new(400.0, 480.0), &vp, &CupSpec::default());

        for &(cx, cy) in &[(0.0, 0.0), (123.5, 77.25), (-40.0, 900.0), (800.0, 600.0)] {
            cup.set_position(&mut world, Vec2::new(cx, cy), &vp);
            assert_eq!(
                world_positions(&cup, &world),
                vec![
                    Vec2::new(cx - 70.0, cy),
                    Vec2::new(cx + 70.0, cy),
                    Vec2::new(cx, cy + 125.0),
                ]
            );
            assert_eq!(cup.part_positions().to_vec(), world_positions(&cup, &world));
        }
    }

    #[test]
    fn overlay_is_center_minus_half_canvas() {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let mut cup = Cup::create(&mut world, Vec2::new(400.0, 480.0), &vp, &CupSpec::default());
        assert_eq!(cup.overlay_transform(), OverlayTransform { x: 0.0, y: 180.0 });

        cup.set_position(&mut world, Vec2::new(100.0, 50.0), &vp);
        assert_eq!(cup.overlay_transform(), OverlayTransform { x: -300.0, y: -250.0 });
        assert_eq!(cup.overlay_transform().css(), "translate(-300px, -250px)");
    }

    #[test]
    fn parts_are_static() {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let cup = Cup::create(&mut world, Vec2::new(400.0, 480.0), &vp, &CupSpec::default());
        for part in cup.parts() {
            assert!(world.body(part.handle).unwrap().is_static);
        }
        for _ in 0..10 {
            world.step(1000.0 / 60.0);
        }
        assert_eq!(cup.part_positions().to_vec(), world_positions(&cup, &world));
    }

    #[test]
    fn remove_takes_every_part_out() {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let cup = Cup::create(&mut world, Vec2::new(10.0, 10.0), &vp, &CupSpec::default());
        assert_eq!(world.body_count(), 3);
        cup.remove(&mut world);
        assert_eq!(world.body_count(), 0);
    }
}

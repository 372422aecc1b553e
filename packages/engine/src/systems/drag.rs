//! Drag controller - moves the cup while the primary button is held

use crate::container::Cup;
use crate::physics_world::PhysicsWorld;
use crate::rigid_body::Vec2;
use crate::viewport::Viewport;

/// `MouseEvent.button` value of the primary button
pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Last known pointer position and pressed button (`None` when released)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    pub button: Option<i16>,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
    pointer: Pointer,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Pointer pressed over the scene: Idle -> Dragging
    pub fn pointer_down(&mut self, position: Vec2, button: i16) {
        self.pointer = Pointer { position, button: Some(button) };
        self.state = DragState::Dragging;
    }

    pub fn pointer_move(&mut self, position: Vec2, button: Option<i16>) {
        self.pointer = Pointer { position, button };
    }

    /// Drag finished: Dragging -> Idle
    pub fn end_drag(&mut self) {
        self.pointer.button = None;
        self.state = DragState::Idle;
    }

    /// Pre-step hook. Moves the cup to the pointer while dragging with the
    /// primary button; returns whether the cup moved.
    pub fn before_update(
        &self,
        cup: Option<&mut Cup>,
        world: &mut dyn PhysicsWorld,
        viewport: &Viewport,
    ) -> bool {
        if self.state != DragState::Dragging || self.pointer.button != Some(PRIMARY_BUTTON) {
            return false;
        }
        let Some(cup) = cup else {
            return false;
        };
        cup.set_position(world, self.pointer.position, viewport);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profiles::CupSpec;
    use crate::rigid_body_system::RigidBodySystem;

    fn scene() -> (RigidBodySystem, Viewport, Cup) {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let cup = Cup::create(&mut world, Vec2::new(400.0, 480.0), &vp, &CupSpec::default());
        (world, vp, cup)
    }

    #[test]
    fn pointer_down_starts_and_end_drag_stops() {
        let mut drag = DragController::new();
        assert_eq!(drag.state(), DragState::Idle);
        drag.pointer_down(Vec2::new(1.0, 2.0), PRIMARY_BUTTON);
        assert_eq!(drag.state(), DragState::Dragging);
        drag.end_drag();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.pointer().button, None);
    }

    #[test]
    fn idle_ticks_leave_cup_alone() {
        let (mut world, vp, mut cup) = scene();
        let mut drag = DragController::new();
        drag.pointer_move(Vec2::new(10.0, 10.0), Some(PRIMARY_BUTTON));

        for _ in 0..5 {
            assert!(!drag.before_update(Some(&mut cup), &mut world, &vp));
        }
        assert_eq!(cup.center(), Vec2::new(400.0, 480.0));
    }

    #[test]
    fn dragging_ticks_follow_pointer() {
        let (mut world, vp, mut cup) = scene();
        let mut drag = DragController::new();
        drag.pointer_down(Vec2::new(300.0, 200.0), PRIMARY_BUTTON);
        assert!(drag.before_update(Some(&mut cup), &mut world, &vp));
        assert_eq!(cup.center(), Vec2::new(300.0, 200.0));

        drag.pointer_move(Vec2::new(320.0, 260.0), Some(PRIMARY_BUTTON));
        assert!(drag.before_update(Some(&mut cup), &mut world, &vp));
        assert_eq!(cup.center(), Vec2::new(320.0, 260.0));
        assert_eq!(world.position(cup.parts()[2].handle), Some(Vec2::new(320.0, 385.0)));
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let (mut world, vp, mut cup) = scene();
        let mut drag = DragController::new();
        drag.pointer_down(Vec2::new(300.0, 200.0), 2);
        assert!(drag.is_dragging());
        assert!(!drag.before_update(Some(&mut cup), &mut world, &vp));
        assert_eq!(cup.center(), Vec2::new(400.0, 480.0));
    }

    #[test]
    fn released_button_mid_drag_stops_following() {
        let (mut world, vp, mut cup) = scene();
        let mut drag = DragController::new();
        drag.pointer_down(Vec2::new(300.0, 200.0), PRIMARY_BUTTON);
        drag.pointer_move(Vec2::new(50.0, 50.0), None);
        assert!(!drag.before_update(Some(&mut cup), &mut world, &vp));
    }

    #[test]
    fn dragging_without_cup_is_a_no_op() {
        let mut world = RigidBodySystem::new();
        let vp = Viewport::new(800.0, 600.0);
        let mut drag = DragController::new();
        drag.pointer_down(Vec2::new(300.0, 200.0), PRIMARY_BUTTON);
        assert!(!drag.before_update(None, &mut world, &vp));
        assert_eq!(world.body_count(), 0);
    }
}

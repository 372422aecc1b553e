use crate::physics_world::PhysicsWorld;
use crate::rigid_body::Shape;

/// Floats per body: x, y, angle, shape, size_a, size_b, chamfer
pub const RENDER_STRIDE: usize = 7;

pub const SHAPE_CIRCLE: f32 = 0.0;
pub const SHAPE_RECTANGLE: f32 = 1.0;

/// Rewrite `out` with every visible body.
///
/// Circles store `radius, 0, 0` in the size slots, rectangles
/// `width, height, chamfer`. Returns the number of bodies written.
pub(super) fn refresh<W: PhysicsWorld + ?Sized>(world: &W, out: &mut Vec<f32>) -> usize {
    out.clear();
    let mut count = 0;

    for body in world.bodies() {
        if !body.render.visible {
            continue;
        }
        let (shape, a, b, chamfer) = match body.shape {
            Shape::Circle { radius } => (SHAPE_CIRCLE, radius, 0.0, 0.0),
            Shape::Rectangle { width, height, chamfer } => (SHAPE_RECTANGLE, width, height, chamfer),
        };
        out.extend_from_slice(&[body.pos.x, body.pos.y, body.angle, shape, a, b, chamfer]);
        count += 1;
    }

    count
}

use super::desc::{BodyHandle, Material, RenderStyle, Shape};
use super::vec2::Vec2;

/// Read-only snapshot of one body as reported by a physics world
#[derive(Clone, Debug, PartialEq)]
pub struct BodyView<'a> {
    pub handle: BodyHandle,
    pub pos: Vec2,
    /// Radians
    pub angle: f32,
    /// Pixels per second
    pub velocity: Vec2,
    pub is_static: bool,
    pub shape: Shape,
    pub material: Material,
    pub render: &'a RenderStyle,
}

impl BodyView<'_> {
    /// `Some` for circles only
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rectangle { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_only_for_circles() {
        let render = RenderStyle::default();
        let mut view = BodyView {
            handle: BodyHandle(1),
            pos: Vec2::zero(),
            angle: 0.0,
            velocity: Vec2::zero(),
            is_static: false,
            shape: Shape::Circle { radius: 6.5 },
            material: Material::default(),
            render: &render,
        };
        assert_eq!(view.radius(), Some(6.5));

        view.shape = Shape::Rectangle { width: 4.0, height: 8.0, chamfer: 1.0 };
        assert_eq!(view.radius(), None);
    }
}

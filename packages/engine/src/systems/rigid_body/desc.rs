use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Identity of a body inside a physics world.
///
/// Handles are never reused while the world lives, so a removed handle
/// stays dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned in local space; `chamfer` rounds every corner.
    Rectangle { width: f32, height: f32, chamfer: f32 },
}

/// Physical material of a body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Mass per unit area
    pub density: f32,
    /// Tangential velocity loss on contact (0..1)
    pub friction: f32,
    /// Velocity loss per 60 Hz tick while airborne (0..1)
    pub friction_air: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 0.001,
            friction: 0.1,
            friction_air: 0.01,
            restitution: 0.0,
        }
    }
}

/// How the renderer should paint a body (CSS color strings)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: f32,
    pub visible: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill_style: "#ffffff".to_string(),
            stroke_style: "transparent".to_string(),
            line_width: 0.0,
            visible: true,
        }
    }
}

impl RenderStyle {
    pub fn filled(fill: &str) -> Self {
        Self {
            fill_style: fill.to_string(),
            ..Self::default()
        }
    }
}

/// Options bag handed to `PhysicsWorld::add`.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDesc {
    pub shape: Shape,
    pub position: Vec2,
    pub is_static: bool,
    pub angle: f32,
    pub material: Material,
    pub render: RenderStyle,
}

impl BodyDesc {
    pub fn circle(x: f32, y: f32, radius: f32) -> Self {
        Self {
            shape: Shape::Circle { radius },
            position: Vec2::new(x, y),
            is_static: false,
            angle: 0.0,
            material: Material::default(),
            render: RenderStyle::default(),
        }
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            shape: Shape::Rectangle { width, height, chamfer: 0.0 },
            position: Vec2::new(x, y),
            is_static: false,
            angle: 0.0,
            material: Material::default(),
            render: RenderStyle::default(),
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Round the corners of a rectangle. Ignored for circles.
    pub fn with_chamfer(mut self, radius: f32) -> Self {
        if let Shape::Rectangle { width, height, .. } = self.shape {
            let max = 0.5 * width.min(height);
            self.shape = Shape::Rectangle {
                width,
                height,
                chamfer: radius.clamp(0.0, max),
            };
        }
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_render(mut self, render: RenderStyle) -> Self {
        self.render = render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chamfer_is_clamped_to_half_the_short_side() {
        let desc = BodyDesc::rectangle(0.0, 0.0, 20.0, 250.0).with_chamfer(40.0);
        assert_eq!(
            desc.shape,
            Shape::Rectangle { width: 20.0, height: 250.0, chamfer: 10.0 }
        );
    }

    #[test]
    fn chamfer_on_circle_is_ignored() {
        let desc = BodyDesc::circle(1.0, 2.0, 6.5).with_chamfer(3.0);
        assert_eq!(desc.shape, Shape::Circle { radius: 6.5 });
    }
}

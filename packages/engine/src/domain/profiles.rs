//! Body templates: particle profiles, cup parts, ground

use serde::{Deserialize, Serialize};

use crate::rigid_body::{BodyDesc, Material, RenderStyle, Vec2};

/// Template for one kind of spawned particle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleProfile {
    pub spawn_point: Vec2,
    /// Radius drawn uniformly from `[radius_min, radius_max)`;
    /// equal bounds give a fixed radius.
    pub radius_min: f32,
    pub radius_max: f32,
    pub material: Material,
    pub render: RenderStyle,
    /// Applied once at the particle's center right after spawning
    pub initial_force: Vec2,
}

impl ParticleProfile {
    /// The steady stream: small bouncy pearls.
    pub fn boba() -> Self {
        Self {
            spawn_point: Vec2::new(105.0, 105.0),
            radius_min: 6.0,
            radius_max: 7.0,
            material: Material {
                density: 1.0,
                friction: 0.0,
                friction_air: 0.0,
                restitution: 0.7,
            },
            render: RenderStyle::filled("#3b2418"),
            // Reproduced as-is: pushes every pearl slightly to the right.
            initial_force: Vec2::new(1.0, 0.0),
        }
    }

    /// The occasional larger, heavier-looking drop.
    pub fn jelly() -> Self {
        Self {
            spawn_point: Vec2::new(580.0, 180.0),
            radius_min: 10.0,
            radius_max: 10.0,
            material: Material {
                density: 0.9,
                friction: 0.1,
                friction_air: 0.001,
                restitution: 0.1,
            },
            render: RenderStyle::filled("#f2c14e"),
            initial_force: Vec2::zero(),
        }
    }

    pub fn has_fixed_radius(&self) -> bool {
        self.radius_max <= self.radius_min
    }

    pub fn body_desc(&self, radius: f32) -> BodyDesc {
        BodyDesc::circle(self.spawn_point.x, self.spawn_point.y, radius)
            .with_material(self.material)
            .with_render(self.render.clone())
    }
}

/// Where the left wall, right wall and bottom sit relative to the cup
/// center. The cup geometry depends on these, so they are not configurable.
pub const CUP_PART_OFFSETS: [Vec2; 3] = [
    Vec2::new(-70.0, 0.0),
    Vec2::new(70.0, 0.0),
    Vec2::new(0.0, 125.0),
];

/// Size, tilt and look of one static part of the cup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CupPartSpec {
    pub width: f32,
    pub height: f32,
    pub angle: f32,
    pub chamfer: f32,
    pub render: RenderStyle,
}

impl Default for CupPartSpec {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 250.0,
            angle: 0.0,
            chamfer: 10.0,
            render: cup_render(),
        }
    }
}

impl CupPartSpec {
    pub fn body_desc(&self, center: Vec2, offset: Vec2) -> BodyDesc {
        let pos = center + offset;
        BodyDesc::rectangle(pos.x, pos.y, self.width, self.height)
            .with_static(true)
            .with_angle(self.angle)
            .with_chamfer(self.chamfer)
            .with_render(self.render.clone())
    }
}

/// Left wall, right wall, bottom, plus where the cup snaps on resize
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CupSpec {
    pub left: CupPartSpec,
    pub right: CupPartSpec,
    pub bottom: CupPartSpec,
    /// Fraction of the viewport the cup jumps to on start and resize
    pub snap: Vec2,
}

impl Default for CupSpec {
    fn default() -> Self {
        Self {
            left: CupPartSpec {
                angle: -0.15,
                ..CupPartSpec::default()
            },
            right: CupPartSpec {
                angle: 0.15,
                ..CupPartSpec::default()
            },
            bottom: CupPartSpec {
                width: 160.0,
                height: 20.0,
                ..CupPartSpec::default()
            },
            snap: Vec2::new(0.5, 0.8),
        }
    }
}

impl CupSpec {
    /// Left, right, bottom; same order as `CUP_PART_OFFSETS`
    pub fn parts(&self) -> [&CupPartSpec; 3] {
        [&self.left, &self.right, &self.bottom]
    }
}

/// Static ledge in world coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundSpec {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub render: RenderStyle,
}

impl Default for GroundSpec {
    fn default() -> Self {
        Self {
            position: Vec2::new(400.0, 450.0),
            width: 120.0,
            height: 15.0,
            render: RenderStyle::filled("#c9b8a6"),
        }
    }
}

impl GroundSpec {
    pub fn body_desc(&self) -> BodyDesc {
        BodyDesc::rectangle(self.position.x, self.position.y, self.width, self.height)
            .with_static(true)
            .with_render(self.render.clone())
    }
}

fn cup_render() -> RenderStyle {
    RenderStyle {
        fill_style: "transparent".to_string(),
        stroke_style: "#ffffff".to_string(),
        line_width: 2.0,
        visible: true,
    }
}

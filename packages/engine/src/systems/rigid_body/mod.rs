//! Body descriptions and snapshots shared by every physics backend
//!
//! Bodies are either circles (the boba) or rounded rectangles (cup parts,
//! ground). Scene code builds `BodyDesc`s and reads back `BodyView`s; the
//! solver's own body type never leaves the backend.

mod vec2;
mod desc;
mod view;

pub use vec2::Vec2;
pub use desc::{BodyDesc, BodyHandle, Material, RenderStyle, Shape};
pub use view::BodyView;

pub mod aabb;
pub mod scalar;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use scalar::lerp;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;

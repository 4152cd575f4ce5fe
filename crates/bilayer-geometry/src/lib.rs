//! Membrane centerline geometry: curve variants, arc-length sampling, and
//! shape builders.

pub mod cristae;
pub mod curve;
pub mod sample;
pub mod spline;

pub use curve::Curve;
pub use sample::CurveSample;

pub mod error;
pub mod tolerance;

pub use error::{BilayerError, Result};
pub use tolerance::{Tolerance, GEOM_EPS};

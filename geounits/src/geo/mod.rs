//! Positions on the Earth surface and geographic rectangles.

mod ellipsoid;
mod position;
mod rectangle;
mod size;

pub use ellipsoid::Ellipsoid;
pub use position::{Position, Position3d};
pub use rectangle::GeographicRectangle;
pub use size::GeographicSize;

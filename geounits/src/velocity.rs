use crate::angle::Azimuth;
use crate::geo::Position;
use crate::quantity::{Speed, SpeedUnit};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Speed along a bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    speed: Speed,
    bearing: Azimuth,
}

impl Velocity {
    /// No movement.
    pub const EMPTY: Velocity = Velocity::new(Speed::EMPTY, Azimuth::NORTH);

    /// Creates a new velocity.
    pub const fn new(speed: Speed, bearing: Azimuth) -> Self {
        Self { speed, bearing }
    }

    /// Creates a velocity from east and north components in meters per second.
    pub fn from_vector(vector: Vector2<f64>) -> Self {
        let bearing = if vector.x == 0.0 && vector.y == 0.0 {
            Azimuth::NORTH
        } else {
            Azimuth::new(vector.x.atan2(vector.y).to_degrees()).normalize()
        };

        Self::new(
            Speed::new(vector.norm(), SpeedUnit::MetersPerSecond),
            bearing,
        )
    }

    /// Magnitude.
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Direction of movement.
    pub fn bearing(&self) -> Azimuth {
        self.bearing
    }

    /// East (`x`) and north (`y`) components in meters per second.
    pub fn to_vector(&self) -> Vector2<f64> {
        let speed = self.speed.to_meters_per_second().value();
        let (sin, cos) = self.bearing.to_radians().sin_cos();
        Vector2::new(speed * sin, speed * cos)
    }

    /// Position reached from `start` after moving with this velocity for `duration`.
    pub fn translate(&self, start: &Position, duration: Duration) -> Position {
        start.translate_to(self.bearing, self.speed.over(duration))
    }
}

impl Display for Velocity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.speed, self.bearing)
    }
}

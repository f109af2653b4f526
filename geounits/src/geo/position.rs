use super::Ellipsoid;
use crate::angle::{Azimuth, Latitude, Longitude};
use crate::quantity::{Distance, DistanceUnit};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    latitude: Latitude,
    longitude: Longitude,
}

impl Position {
    /// Creates a position from its coordinates as is.
    pub const fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a position from latitude and longitude in decimal degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(Latitude::new(lat), Longitude::new(lon))
    }

    /// Random position with latitude in `[-90, 90)` and longitude in `[-180, 180)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(Latitude::random(rng), Longitude::random(rng))
    }

    /// Latitude of the position.
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Longitude of the position.
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.latitude.decimal_degrees()
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.longitude.decimal_degrees()
    }

    /// Brings both coordinates into their valid ranges.
    pub fn normalize(&self) -> Self {
        Self::new(self.latitude.normalize(), self.longitude.normalize())
    }

    /// Position reached by travelling `distance` along the great circle starting with
    /// `bearing`, on the default ellipsoid.
    pub fn translate_to(&self, bearing: Azimuth, distance: Distance) -> Self {
        self.translate_to_on(bearing, distance, &Ellipsoid::default())
    }

    /// Same as [`Position::translate_to`], using the mean radius of the given ellipsoid.
    pub fn translate_to_on(
        &self,
        bearing: Azimuth,
        distance: Distance,
        ellipsoid: &Ellipsoid,
    ) -> Self {
        let radius = ellipsoid.mean_radius().value();
        let delta = distance.to_meters().value() / radius;
        let theta = bearing.to_radians();
        let phi1 = self.latitude.to_radians();
        let lambda1 = self.longitude.to_radians();

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        Self::new(
            Latitude::new(phi2.to_degrees()),
            Longitude::new(lambda2.to_degrees()).normalize(),
        )
    }

    /// Great circle distance on the default ellipsoid, in meters.
    pub fn distance_to(&self, other: &Position) -> Distance {
        self.distance_to_on(other, &Ellipsoid::default())
    }

    /// Great circle (haversine) distance using the mean radius of the given ellipsoid.
    pub fn distance_to_on(&self, other: &Position, ellipsoid: &Ellipsoid) -> Distance {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let delta_phi = phi2 - phi1;
        let delta_lambda = other.longitude.to_radians() - self.longitude.to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::new(ellipsoid.mean_radius().value() * c, DistanceUnit::Meters)
    }

    /// Initial bearing of the great circle towards `other`.
    pub fn bearing_to(&self, other: &Position) -> Azimuth {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let delta_lambda = other.longitude.to_radians() - self.longitude.to_radians();

        let y = delta_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

        Azimuth::new(y.atan2(x).to_degrees()).normalize()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Creates a new [`Position`] from latitude and longitude values (in degrees).
///
/// ```
/// use geounits::latlon;
///
/// let position = latlon!(38.0, 52.0);
/// assert_eq!(position.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::Position::latlon($lat, $lon)
    };
}

/// Position with altitude above the sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3d {
    position: Position,
    altitude: Distance,
}

impl Position3d {
    /// Creates a new position with altitude.
    pub const fn new(position: Position, altitude: Distance) -> Self {
        Self { position, altitude }
    }

    /// Position projected onto the surface.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Altitude above the sea level.
    pub fn altitude(&self) -> Distance {
        self.altitude
    }

    /// Moves the surface position, keeping the altitude.
    pub fn translate_to(&self, bearing: Azimuth, distance: Distance) -> Self {
        Self::new(self.position.translate_to(bearing, distance), self.altitude)
    }
}

impl From<Position> for Position3d {
    fn from(position: Position) -> Self {
        Self::new(position, Distance::EMPTY)
    }
}

impl Display for Position3d {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.position, self.altitude)
    }
}

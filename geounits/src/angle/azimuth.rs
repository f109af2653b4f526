use super::sexagesimal::{format_degrees, parse_degrees};
use super::{normalize_360, Angle};
use crate::error::{FormatError, ParseError};
use crate::locale::Locale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Point of the 16-wind compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum CompassDirection {
    North,
    NorthNortheast,
    Northeast,
    EastNortheast,
    East,
    EastSoutheast,
    Southeast,
    SouthSoutheast,
    South,
    SouthSouthwest,
    Southwest,
    WestSouthwest,
    West,
    WestNorthwest,
    Northwest,
    NorthNorthwest,
}

impl CompassDirection {
    /// All points clockwise from north.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::North,
        CompassDirection::NorthNortheast,
        CompassDirection::Northeast,
        CompassDirection::EastNortheast,
        CompassDirection::East,
        CompassDirection::EastSoutheast,
        CompassDirection::Southeast,
        CompassDirection::SouthSoutheast,
        CompassDirection::South,
        CompassDirection::SouthSouthwest,
        CompassDirection::Southwest,
        CompassDirection::WestSouthwest,
        CompassDirection::West,
        CompassDirection::WestNorthwest,
        CompassDirection::Northwest,
        CompassDirection::NorthNorthwest,
    ];

    const SECTOR: f64 = 360.0 / 16.0;

    fn index(&self) -> usize {
        *self as usize
    }

    /// Bearing at the middle of the sector.
    pub fn azimuth(&self) -> Azimuth {
        Azimuth::new(self.index() as f64 * Self::SECTOR)
    }

    /// Upper-case abbreviation such as `NNE`.
    pub fn abbreviation(&self) -> &'static str {
        [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
            "NW", "NNW",
        ][self.index()]
    }

    /// Full name such as `North-northeast`.
    pub fn name(&self) -> &'static str {
        [
            "North",
            "North-northeast",
            "Northeast",
            "East-northeast",
            "East",
            "East-southeast",
            "Southeast",
            "South-southeast",
            "South",
            "South-southwest",
            "Southwest",
            "West-southwest",
            "West",
            "West-northwest",
            "Northwest",
            "North-northwest",
        ][self.index()]
    }

    /// Finds the direction by abbreviation or name, ignoring case, spaces and hyphens.
    pub fn from_text(text: &str) -> Option<Self> {
        let key: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase();

        Self::ALL.into_iter().find(|direction| {
            direction.abbreviation() == key
                || direction.name().replace('-', "").to_uppercase() == key
        })
    }
}

/// Bearing measured clockwise from north, in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Azimuth {
    decimal_degrees: f64,
}

impl Azimuth {
    /// Bearing towards north.
    pub const NORTH: Azimuth = Azimuth::new(0.0);
    /// Bearing towards east.
    pub const EAST: Azimuth = Azimuth::new(90.0);
    /// Bearing towards south.
    pub const SOUTH: Azimuth = Azimuth::new(180.0);
    /// Bearing towards west.
    pub const WEST: Azimuth = Azimuth::new(270.0);

    const DEFAULT_TEMPLATE: &'static str = "H.HHHH°";

    /// Creates a bearing from decimal degrees as is. Use [`Azimuth::normalize`] to bring the
    /// value into `[0, 360)`.
    pub const fn new(decimal_degrees: f64) -> Self {
        Self { decimal_degrees }
    }

    /// Random bearing in `[0, 360)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random_range(0.0..360.0))
    }

    /// Value in decimal degrees.
    pub fn decimal_degrees(&self) -> f64 {
        self.decimal_degrees
    }

    /// The value as a plain angle.
    pub fn to_angle(&self) -> Angle {
        Angle::new(self.decimal_degrees)
    }

    /// Value in radians.
    pub fn to_radians(&self) -> f64 {
        self.decimal_degrees.to_radians()
    }

    /// Equivalent bearing in `[0, 360)`.
    pub fn normalize(&self) -> Self {
        Self::new(normalize_360(self.decimal_degrees))
    }

    /// Opposite bearing.
    pub fn mirror(&self) -> Self {
        Self::new(normalize_360(self.decimal_degrees + 180.0))
    }

    /// Nearest point of the 16-wind compass.
    pub fn direction(&self) -> CompassDirection {
        let sector = (normalize_360(self.decimal_degrees + CompassDirection::SECTOR / 2.0)
            / CompassDirection::SECTOR) as usize;
        CompassDirection::ALL[sector % CompassDirection::ALL.len()]
    }

    /// Parses a bearing in any angle notation or a compass point (`NNE`, `southwest`).
    pub fn parse(value: &str, locale: &Locale) -> Result<Self, ParseError> {
        if let Some(direction) = CompassDirection::from_text(value) {
            return Ok(direction.azimuth());
        }

        parse_degrees(value, locale)
            .map(Self::new)
            .map_err(|failure| {
                log::debug!("cannot parse {value:?} as Azimuth: {failure}");
                ParseError::new("Azimuth", value, failure)
            })
    }

    /// Renders the bearing with an angle template, see [`Angle::format`].
    pub fn format(&self, template: &str, locale: &Locale) -> Result<String, FormatError> {
        format_degrees(
            self.decimal_degrees,
            template,
            Self::DEFAULT_TEMPLATE,
            locale,
            None,
        )
    }
}

impl Add<Angle> for Azimuth {
    type Output = Self;

    fn add(self, rhs: Angle) -> Self {
        Self::new(normalize_360(self.decimal_degrees + rhs.decimal_degrees()))
    }
}

impl Sub<Angle> for Azimuth {
    type Output = Self;

    fn sub(self, rhs: Angle) -> Self {
        Self::new(normalize_360(self.decimal_degrees - rhs.decimal_degrees()))
    }
}

impl From<Angle> for Azimuth {
    fn from(angle: Angle) -> Self {
        Self::new(angle.decimal_degrees())
    }
}

impl From<CompassDirection> for Azimuth {
    fn from(direction: CompassDirection) -> Self {
        direction.azimuth()
    }
}

impl Display for Azimuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .format("", &Locale::INVARIANT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Azimuth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Locale::INVARIANT)
    }
}

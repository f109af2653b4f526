use super::latitude::parse_with_hemisphere;
use super::sexagesimal::format_degrees;
use super::{Angle, Hemisphere};
use crate::error::{FormatError, ParseError};
use crate::locale::Locale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Angular distance east (positive) or west (negative) of the prime meridian, in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Longitude {
    decimal_degrees: f64,
}

impl Longitude {
    /// The prime meridian.
    pub const PRIME_MERIDIAN: Longitude = Longitude::new(0.0);
    /// The antimeridian.
    pub const ANTIMERIDIAN: Longitude = Longitude::new(180.0);

    const DEFAULT_TEMPLATE: &'static str = "HHH°MM'SS.SSSS\"I";

    /// Creates a longitude from decimal degrees without normalizing it.
    pub const fn new(decimal_degrees: f64) -> Self {
        Self { decimal_degrees }
    }

    /// Creates a longitude from degrees, minutes and seconds in the given hemisphere.
    ///
    /// Returns `None` for [`Hemisphere::North`] and [`Hemisphere::South`].
    pub fn from_dms(
        hours: i32,
        minutes: i32,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Option<Self> {
        let magnitude = Angle::from_dms(hours.abs(), minutes, seconds).decimal_degrees();
        match hemisphere {
            Hemisphere::East => Some(Self::new(magnitude)),
            Hemisphere::West => Some(Self::new(-magnitude)),
            Hemisphere::North | Hemisphere::South => None,
        }
    }

    /// Random longitude in `[-180, 180)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random_range(-180.0..180.0))
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

    /// [`Hemisphere::East`] for non-negative values, [`Hemisphere::West`] otherwise.
    pub fn hemisphere(&self) -> Hemisphere {
        if self.decimal_degrees < 0.0 {
            Hemisphere::West
        } else {
            Hemisphere::East
        }
    }

    /// True if the value is within `[-180, 180]`.
    pub fn is_normalized(&self) -> bool {
        (-180.0..=180.0).contains(&self.decimal_degrees)
    }

    /// Equivalent longitude in `[-180, 180]`.
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return *self;
        }

        let value = self.decimal_degrees.rem_euclid(360.0);
        if value > 180.0 {
            Self::new(value - 360.0)
        } else {
            Self::new(value)
        }
    }

    /// Parses longitude notation with an optional leading or trailing `E`/`W` letter.
    pub fn parse(value: &str, locale: &Locale) -> Result<Self, ParseError> {
        parse_with_hemisphere(value, locale, Hemisphere::East, Hemisphere::West)
            .map(Self::new)
            .map_err(|failure| {
                log::debug!("cannot parse {value:?} as Longitude: {failure}");
                ParseError::new("Longitude", value, failure)
            })
    }

    /// Renders the longitude according to a format template, see [`super::Latitude::format`].
    pub fn format(&self, template: &str, locale: &Locale) -> Result<String, FormatError> {
        format_degrees(
            self.decimal_degrees,
            template,
            Self::DEFAULT_TEMPLATE,
            locale,
            Some(self.hemisphere().letter()),
        )
    }
}

impl From<Angle> for Longitude {
    fn from(angle: Angle) -> Self {
        Self::new(angle.decimal_degrees())
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .format("", &Locale::INVARIANT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Longitude {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Locale::INVARIANT)
    }
}

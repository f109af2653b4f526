//! Angular values: [`Angle`], and the specialized [`Latitude`], [`Longitude`] and [`Azimuth`].
//!
//! All of them store decimal degrees and expose the sexagesimal decomposition (degrees, minutes,
//! seconds) computed on access. The decomposition is rounded to [`MAXIMUM_PRECISION_DIGITS`]
//! significant fractional digits so that values like `10°30'` do not come back as
//! `10°29'59.999"`.

mod azimuth;
mod latitude;
mod longitude;
mod sexagesimal;

pub use azimuth::{Azimuth, CompassDirection};
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use sexagesimal::MAXIMUM_PRECISION_DIGITS;

use crate::error::{FormatError, GeoUnitsError, ParseError};
use crate::locale::Locale;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Cardinal side of the equator or of the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// North of the equator.
    North,
    /// South of the equator.
    South,
    /// East of the prime meridian.
    East,
    /// West of the prime meridian.
    West,
}

impl Hemisphere {
    /// Single uppercase letter of the hemisphere.
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// Hemisphere denoted by the letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }
}

/// Angle in decimal degrees.
///
/// ```
/// use geounits::Angle;
///
/// let angle = Angle::from_dms(34, 12, 29.2);
/// assert_eq!(angle.hours(), 34);
/// assert_eq!(angle.minutes(), 12);
/// assert_eq!(angle.to_string(), "34.2081°");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    decimal_degrees: f64,
}

impl Angle {
    /// Zero angle.
    pub const EMPTY: Angle = Angle::new(0.0);
    /// Infinite angle.
    pub const INFINITY: Angle = Angle::new(f64::INFINITY);
    /// Angle that is not a number.
    pub const INVALID: Angle = Angle::new(f64::NAN);
    /// Smallest normalized angle.
    pub const MINIMUM: Angle = Angle::new(0.0);
    /// Largest angle below a full turn.
    pub const MAXIMUM: Angle = Angle::new(359.999_999_999);

    const DEFAULT_TEMPLATE: &'static str = "H.HHHH°";

    /// Creates a new angle from decimal degrees.
    pub const fn new(decimal_degrees: f64) -> Self {
        Self { decimal_degrees }
    }

    /// Creates an angle from degrees and decimal minutes. The sign is taken from `hours`.
    pub fn from_dm(hours: i32, decimal_minutes: f64) -> Self {
        Self::new(sexagesimal::compose(false, hours as f64, decimal_minutes, 0.0))
    }

    /// Creates an angle from degrees, minutes and seconds. The sign is taken from `hours`.
    pub fn from_dms(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self::new(Self::to_decimal_degrees(hours, minutes, seconds))
    }

    /// Creates an angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self::new(radians.to_degrees())
    }

    /// Reads a number in `DD.MMSS` notation, e.g. `10.3000` is 10°30'00".
    pub fn from_sexagesimal(sexagesimal: f64) -> Self {
        let hours = sexagesimal.trunc();
        let minutes_and_seconds = sexagesimal::round_to(
            (sexagesimal - hours).abs() * 100.0,
            MAXIMUM_PRECISION_DIGITS - 2,
        );
        let minutes = minutes_and_seconds.trunc();
        let seconds = sexagesimal::round_to(
            (minutes_and_seconds - minutes) * 100.0,
            MAXIMUM_PRECISION_DIGITS - 4,
        );

        Self::new(sexagesimal::compose(
            sexagesimal < 0.0,
            hours,
            minutes,
            seconds,
        ))
    }

    /// Converts degrees, minutes and seconds into decimal degrees.
    pub fn to_decimal_degrees(hours: i32, minutes: i32, seconds: f64) -> f64 {
        sexagesimal::compose(false, hours as f64, minutes as f64, seconds)
    }

    /// Random angle in `[0, 360)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::random_between(rng, Self::MINIMUM, Self::new(360.0))
    }

    /// Random angle in `[minimum, maximum)`.
    pub fn random_between(rng: &mut impl Rng, minimum: Angle, maximum: Angle) -> Self {
        if minimum.decimal_degrees >= maximum.decimal_degrees {
            return minimum;
        }

        Self::new(rng.random_range(minimum.decimal_degrees..maximum.decimal_degrees))
    }

    /// Value in decimal degrees.
    pub fn decimal_degrees(&self) -> f64 {
        self.decimal_degrees
    }

    /// Integer part of the degrees, with the sign of the angle.
    pub fn hours(&self) -> i32 {
        sexagesimal::hours(self.decimal_degrees) as i32
    }

    /// Whole minutes, always non-negative.
    pub fn minutes(&self) -> i32 {
        sexagesimal::minutes(self.decimal_degrees) as i32
    }

    /// Seconds, always non-negative.
    pub fn seconds(&self) -> f64 {
        sexagesimal::seconds(self.decimal_degrees)
    }

    /// Minutes including the fraction, always non-negative.
    pub fn decimal_minutes(&self) -> f64 {
        sexagesimal::decimal_minutes(self.decimal_degrees)
    }

    /// Value in radians.
    pub fn to_radians(&self) -> f64 {
        self.decimal_degrees.to_radians()
    }

    /// Equivalent angle in `[0, 360)`.
    pub fn normalize(&self) -> Self {
        Self::new(normalize_360(self.decimal_degrees))
    }

    /// Opposite direction, normalized.
    pub fn mirror(&self) -> Self {
        Self::new(normalize_360(self.decimal_degrees + 180.0))
    }

    /// Rounds the decimal degrees to the given number of fractional digits.
    pub fn round(&self, decimals: i32) -> Self {
        Self::new(sexagesimal::round_to(self.decimal_degrees, decimals))
    }

    /// Rounds the seconds to the nearest multiple of `interval`.
    pub fn round_seconds(&self, interval: f64) -> Result<Self, GeoUnitsError> {
        if interval == 0.0 || !interval.is_finite() {
            return Err(GeoUnitsError::ArgumentOutOfRange {
                name: "interval",
                reason: "must be a finite non-zero number of seconds",
            });
        }

        let seconds = (self.seconds() / interval).round() * interval;
        Ok(Self::new(sexagesimal::compose(
            self.decimal_degrees < 0.0,
            sexagesimal::hours(self.decimal_degrees),
            sexagesimal::minutes(self.decimal_degrees),
            seconds,
        )))
    }

    /// Smallest whole degree not less than the angle.
    pub fn ceiling(&self) -> Self {
        Self::new(self.decimal_degrees.ceil())
    }

    /// Largest whole degree not greater than the angle.
    pub fn floor(&self) -> Self {
        Self::new(self.decimal_degrees.floor())
    }

    /// Compares the angles rounded to the given number of fractional digits.
    pub fn equals_within(&self, other: &Angle, decimals: i32) -> bool {
        self.round(decimals) == other.round(decimals)
    }

    /// True if the angle is zero.
    pub fn is_empty(&self) -> bool {
        self.decimal_degrees == 0.0
    }

    /// True if the angle is infinite.
    pub fn is_infinite(&self) -> bool {
        self.decimal_degrees.is_infinite()
    }

    /// True if the angle is NaN.
    pub fn is_invalid(&self) -> bool {
        self.decimal_degrees.is_nan()
    }

    /// Parses decimal or sexagesimal notation, e.g. `34.2081`, `34 12.4867` or `34°12'29.2"`.
    pub fn parse(value: &str, locale: &Locale) -> Result<Self, ParseError> {
        sexagesimal::parse_degrees(value, locale)
            .map(Self::new)
            .map_err(|failure| {
                log::debug!("cannot parse {value:?} as Angle: {failure}");
                ParseError::new("Angle", value, failure)
            })
    }

    /// Renders the angle according to a format template. `H`, `M` and `S` runs are replaced with
    /// degrees, minutes and seconds. A run with a decimal point renders the fractional value,
    /// e.g. `H.HH` is decimal degrees and `MM.MM` is decimal minutes.
    pub fn format(&self, template: &str, locale: &Locale) -> Result<String, FormatError> {
        sexagesimal::format_degrees(
            self.decimal_degrees,
            template,
            Self::DEFAULT_TEMPLATE,
            locale,
            None,
        )
    }
}

/// Maps the value into `[0, 360)`.
pub(crate) fn normalize_360(decimal_degrees: f64) -> f64 {
    let normalized = decimal_degrees.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.decimal_degrees + rhs.decimal_degrees)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.decimal_degrees - rhs.decimal_degrees)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.decimal_degrees * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.decimal_degrees / rhs)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.decimal_degrees)
    }
}

impl Zero for Angle {
    fn zero() -> Self {
        Self::EMPTY
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl From<f64> for Angle {
    fn from(decimal_degrees: f64) -> Self {
        Self::new(decimal_degrees)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .format("", &Locale::INVARIANT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Angle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Locale::INVARIANT)
    }
}

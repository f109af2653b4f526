use super::sexagesimal::{format_degrees, parse_degrees};
use super::{Angle, Hemisphere};
use crate::error::{FormatError, ParseError, ParseFailure};
use crate::locale::Locale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Angular distance north (positive) or south (negative) of the equator, in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Latitude {
    decimal_degrees: f64,
}

impl Latitude {
    /// The equator.
    pub const EQUATOR: Latitude = Latitude::new(0.0);
    /// The north pole.
    pub const NORTH_POLE: Latitude = Latitude::new(90.0);
    /// The south pole.
    pub const SOUTH_POLE: Latitude = Latitude::new(-90.0);

    const DEFAULT_TEMPLATE: &'static str = "HH°MM'SS.SSSS\"I";

    /// Creates a latitude from decimal degrees. The value is stored as is, see
    /// [`Latitude::normalize`].
    pub const fn new(decimal_degrees: f64) -> Self {
        Self { decimal_degrees }
    }

    /// Creates a latitude from degrees, minutes and seconds in the given hemisphere.
    ///
    /// Returns `None` for [`Hemisphere::East`] and [`Hemisphere::West`].
    pub fn from_dms(
        hours: i32,
        minutes: i32,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Option<Self> {
        let magnitude = Angle::from_dms(hours.abs(), minutes, seconds).decimal_degrees();
        match hemisphere {
            Hemisphere::North => Some(Self::new(magnitude)),
            Hemisphere::South => Some(Self::new(-magnitude)),
            Hemisphere::East | Hemisphere::West => None,
        }
    }

    /// Random latitude in `[-90, 90)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random_range(-90.0..90.0))
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

    /// [`Hemisphere::North`] for non-negative values, [`Hemisphere::South`] otherwise.
    pub fn hemisphere(&self) -> Hemisphere {
        if self.decimal_degrees < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    /// True if the value is within `[-90, 90]`.
    pub fn is_normalized(&self) -> bool {
        (-90.0..=90.0).contains(&self.decimal_degrees)
    }

    /// Equivalent latitude in `[-90, 90]`. Values beyond a pole continue on the other side of it.
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return *self;
        }

        let value = self.decimal_degrees.rem_euclid(360.0);
        let value = if value > 270.0 {
            value - 360.0
        } else if value > 90.0 {
            180.0 - value
        } else {
            value
        };

        Self::new(value)
    }

    /// Parses latitude notation with an optional leading or trailing hemisphere letter, e.g.
    /// `39°30'N`, `S 12.5` or `-12.5`.
    pub fn parse(value: &str, locale: &Locale) -> Result<Self, ParseError> {
        parse_with_hemisphere(value, locale, Hemisphere::North, Hemisphere::South)
            .map(Self::new)
            .map_err(|failure| {
                log::debug!("cannot parse {value:?} as Latitude: {failure}");
                ParseError::new("Latitude", value, failure)
            })
    }

    /// Renders the latitude according to a format template. Besides the angle placeholders
    /// (see [`Angle::format`]), `I` is replaced with the hemisphere letter and the value is
    /// rendered without sign.
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

/// Parses degrees with a hemisphere letter at either end. A `negative` letter makes the value
/// negative, a `positive` one makes it positive.
pub(crate) fn parse_with_hemisphere(
    value: &str,
    locale: &Locale,
    positive: Hemisphere,
    negative: Hemisphere,
) -> Result<f64, ParseFailure> {
    let input = value.trim();
    if locale.special_value(input).is_some() {
        return parse_degrees(input, locale);
    }

    let trailing = input.chars().last().filter(char::is_ascii_alphabetic);
    let (letter, rest) = if let Some(last) = trailing {
        (Some(last), &input[..input.len() - last.len_utf8()])
    } else if let Some(first) = input.chars().next().filter(char::is_ascii_alphabetic) {
        (Some(first), &input[first.len_utf8()..])
    } else {
        (None, input)
    };

    let degrees = parse_degrees(rest, locale)?;
    match letter {
        None => Ok(degrees),
        Some(letter) => match Hemisphere::from_letter(letter) {
            Some(hemisphere) if hemisphere == positive => Ok(degrees.abs()),
            Some(hemisphere) if hemisphere == negative => Ok(-degrees.abs()),
            _ => Err(ParseFailure::InvalidHemisphere(letter)),
        },
    }
}

impl From<Angle> for Latitude {
    fn from(angle: Angle) -> Self {
        Self::new(angle.decimal_degrees())
    }
}

impl Display for Latitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .format("", &Locale::INVARIANT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Latitude {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Locale::INVARIANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hemisphere() {
        assert_eq!(Latitude::new(39.5).hemisphere(), Hemisphere::North);
        assert_eq!(Latitude::new(-39.5).hemisphere(), Hemisphere::South);
        assert_eq!(
            Latitude::from_dms(39, 30, 0.0, Hemisphere::South),
            Some(Latitude::new(-39.5))
        );
        assert_eq!(Latitude::from_dms(39, 30, 0.0, Hemisphere::East), None);
    }

    #[test]
    fn normalize() {
        assert_eq!(Latitude::new(45.0).normalize().decimal_degrees(), 45.0);
        assert_eq!(Latitude::new(100.0).normalize().decimal_degrees(), 80.0);
        assert_eq!(Latitude::new(-100.0).normalize().decimal_degrees(), -80.0);
        assert_eq!(Latitude::new(190.0).normalize().decimal_degrees(), -10.0);
        assert_eq!(Latitude::new(450.0).normalize().decimal_degrees(), 90.0);

        for degrees in [-1000.0, -275.0, -91.0, 91.0, 181.0, 359.0, 1e5] {
            let normalized = Latitude::new(degrees).normalize();
            assert!(normalized.is_normalized(), "{degrees}");
        }
    }

    #[test]
    fn parse() {
        let locale = Locale::INVARIANT;
        assert_eq!(Latitude::parse("39°30'N", &locale).unwrap().decimal_degrees(), 39.5);
        assert_eq!(Latitude::parse("39 30 S", &locale).unwrap().decimal_degrees(), -39.5);
        assert_eq!(Latitude::parse("s 39.5", &locale).unwrap().decimal_degrees(), -39.5);
        assert_eq!(Latitude::parse("-39.5", &locale).unwrap().decimal_degrees(), -39.5);
        assert!(Latitude::parse("Infinity", &locale).unwrap().decimal_degrees().is_infinite());

        let err = Latitude::parse("39.5E", &locale).unwrap_err();
        assert_eq!(err.kind(), "Latitude");
        assert_matches!(err.failure(), ParseFailure::InvalidHemisphere('E'));
    }

    #[test]
    fn format() {
        let latitude = Latitude::new(-39.5);
        assert_eq!(latitude.to_string(), "39°30'00.0000\"S");
        assert_eq!(latitude.format("H.HH I", &Locale::INVARIANT).unwrap(), "39.50 S");
        assert_eq!(latitude.format("H.HH", &Locale::INVARIANT).unwrap(), "-39.50");
    }

    #[test]
    fn string_round_trip() {
        for degrees in [-89.123456, -39.5, 0.0, 0.25, 45.987654] {
            let latitude = Latitude::new(degrees);
            let parsed: Latitude = latitude.to_string().parse().unwrap();
            assert_relative_eq!(parsed.decimal_degrees(), degrees, epsilon = 1e-7);
        }
    }

    #[test]
    fn random() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(Latitude::random(&mut rng).is_normalized());
        }
    }
}

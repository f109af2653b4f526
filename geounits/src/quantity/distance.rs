use super::{LabelStyle, Quantity, Unit};
use crate::locale::Locale;
use crate::quantity::{Speed, SpeedUnit};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Length measured in [`DistanceUnit`]s.
///
/// ```
/// use geounits::{Distance, DistanceUnit};
///
/// let distance: Distance = "50 km".parse().unwrap();
/// assert_eq!(distance.unit(), DistanceUnit::Kilometers);
/// assert_eq!(distance.to_meters().value(), 50_000.0);
/// ```
pub type Distance = Quantity<DistanceUnit>;

/// Units of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// 1000 meters.
    Kilometers,
    /// SI unit of length.
    Meters,
    /// 1/100 of a meter.
    Centimeters,
    /// 1852 meters.
    NauticalMiles,
    /// 5280 feet.
    StatuteMiles,
    /// 12 inches.
    Feet,
    /// 2.54 centimeters.
    Inches,
}

impl Unit for DistanceUnit {
    const KIND: &'static str = "Distance";
    const ALL: &'static [Self] = &[
        Self::Kilometers,
        Self::Meters,
        Self::Centimeters,
        Self::NauticalMiles,
        Self::StatuteMiles,
        Self::Feet,
        Self::Inches,
    ];
    const BASE: Self = Self::Meters;
    const IMPERIAL: &'static [Self] = &[
        Self::StatuteMiles,
        Self::Feet,
        Self::Inches,
        Self::Centimeters,
    ];
    const METRIC: &'static [Self] = &[Self::Kilometers, Self::Meters, Self::Centimeters];
    const SYNONYMS: &'static [(&'static str, &'static str)] = &[
        ("KILOMETERS", "KM"),
        ("KILOMETER", "KM"),
        ("KILOMETRES", "KM"),
        ("KILOMETRE", "KM"),
        ("CENTIMETERS", "CM"),
        ("CENTIMETER", "CM"),
        ("CENTIMETRES", "CM"),
        ("CENTIMETRE", "CM"),
        ("NAUTICAL MILES", "NM"),
        ("NAUTICAL MILE", "NM"),
        ("STATUTE MILES", "MI"),
        ("STATUTE MILE", "MI"),
        ("MILES", "MI"),
        ("MILE", "MI"),
        ("METERS", "M"),
        ("METER", "M"),
        ("METRES", "M"),
        ("METRE", "M"),
        ("FEET", "FT"),
        ("FOOT", "FT"),
        ("'", "FT"),
        ("′", "FT"),
        ("INCHES", "IN"),
        ("INCH", "IN"),
        ("\"", "IN"),
        ("″", "IN"),
    ];
    const NAMED_VALUES: &'static [(&'static str, f64)] = &[
        ("INFINITY", f64::INFINITY),
        ("EMPTY", 0.0),
        ("SEA LEVEL", 0.0),
        ("SEALEVEL", 0.0),
    ];
    const DEFAULT_TEMPLATE: &'static str = "##0.## uu";

    fn base_factor(self) -> f64 {
        match self {
            Self::Kilometers => 1000.0,
            Self::Meters => 1.0,
            Self::Centimeters => 0.01,
            Self::NauticalMiles => 1852.0,
            Self::StatuteMiles => 1609.344,
            Self::Feet => 0.3048,
            Self::Inches => 0.0254,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Kilometers => "KM",
            Self::Meters => "M",
            Self::Centimeters => "CM",
            Self::NauticalMiles => "NM",
            Self::StatuteMiles => "MI",
            Self::Feet => "FT",
            Self::Inches => "IN",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Kilometers => "Kilometers",
            Self::Meters => "Meters",
            Self::Centimeters => "Centimeters",
            Self::NauticalMiles => "NauticalMiles",
            Self::StatuteMiles => "StatuteMiles",
            Self::Feet => "Feet",
            Self::Inches => "Inches",
        }
    }

    fn label(self, style: LabelStyle, singular: bool) -> Option<&'static str> {
        let label = match (style, self) {
            (LabelStyle::Symbol, Self::Feet) => "'",
            (LabelStyle::Symbol, Self::Inches) => "\"",
            (LabelStyle::Symbol | LabelStyle::Short, unit) => match unit {
                Self::Kilometers => "km",
                Self::Meters => "m",
                Self::Centimeters => "cm",
                Self::NauticalMiles => "nm",
                Self::StatuteMiles => "mi",
                Self::Feet => "ft",
                Self::Inches => "in",
            },
            (LabelStyle::Long, unit) => match (unit, singular) {
                (Self::Kilometers, true) => "kilometer",
                (Self::Kilometers, false) => "kilometers",
                (Self::Meters, true) => "meter",
                (Self::Meters, false) => "meters",
                (Self::Centimeters, true) => "centimeter",
                (Self::Centimeters, false) => "centimeters",
                (Self::NauticalMiles, true) => "nautical mile",
                (Self::NauticalMiles, false) => "nautical miles",
                (Self::StatuteMiles, true) => "mile",
                (Self::StatuteMiles, false) => "miles",
                (Self::Feet, true) => "foot",
                (Self::Feet, false) => "feet",
                (Self::Inches, true) => "inch",
                (Self::Inches, false) => "inches",
            },
            (LabelStyle::Phrase, _) => return None,
        };

        Some(label)
    }

    fn unitless_zero(locale: &Locale) -> Option<Self> {
        Some(if locale.is_metric() {
            Self::Meters
        } else {
            Self::Feet
        })
    }
}

impl Quantity<DistanceUnit> {
    /// Zero meters.
    pub const EMPTY: Distance = Distance::new(0.0, DistanceUnit::Meters);
    /// Infinite distance.
    pub const INFINITY: Distance = Distance::new(f64::INFINITY, DistanceUnit::Meters);
    /// Mean radius of the Earth.
    pub const EARTHS_AVERAGE_RADIUS: Distance = Distance::new(6_371_008.8, DistanceUnit::Meters);

    /// Converts into kilometers.
    pub fn to_kilometers(&self) -> Self {
        self.to_unit(DistanceUnit::Kilometers)
    }

    /// Converts into meters.
    pub fn to_meters(&self) -> Self {
        self.to_unit(DistanceUnit::Meters)
    }

    /// Converts into centimeters.
    pub fn to_centimeters(&self) -> Self {
        self.to_unit(DistanceUnit::Centimeters)
    }

    /// Converts into nautical miles.
    pub fn to_nautical_miles(&self) -> Self {
        self.to_unit(DistanceUnit::NauticalMiles)
    }

    /// Converts into statute miles.
    pub fn to_statute_miles(&self) -> Self {
        self.to_unit(DistanceUnit::StatuteMiles)
    }

    /// Converts into feet.
    pub fn to_feet(&self) -> Self {
        self.to_unit(DistanceUnit::Feet)
    }

    /// Converts into inches.
    pub fn to_inches(&self) -> Self {
        self.to_unit(DistanceUnit::Inches)
    }

    /// Average speed needed to cover the distance in the given time.
    pub fn per(&self, duration: Duration) -> Speed {
        Speed::new(
            self.to_meters().value() / duration.as_secs_f64(),
            SpeedUnit::MetersPerSecond,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseFailure;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use std::error::Error;

    #[test]
    fn conversions() {
        let distance = Distance::new(14387.0, DistanceUnit::StatuteMiles).to_inches();
        assert_eq!(distance.unit(), DistanceUnit::Inches);
        assert_relative_eq!(distance.value(), 14387.0 * 63360.0, max_relative = 1e-12);

        let nautical_mile = Distance::new(1.0, DistanceUnit::NauticalMiles);
        assert_relative_eq!(nautical_mile.to_meters().value(), 1852.0);
        let statute_mile = Distance::new(1.0, DistanceUnit::StatuteMiles);
        assert_relative_eq!(statute_mile.to_feet().value(), 5280.0);
        assert_relative_eq!(Distance::new(1.0, DistanceUnit::Feet).to_inches().value(), 12.0);
        let meters = Distance::new(2.5, DistanceUnit::Meters);
        assert_relative_eq!(meters.to_centimeters().value(), 250.0);
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let distance = Distance::new(0.1 + 0.2, DistanceUnit::Feet);
        assert_eq!(distance.to_feet().value(), 0.1 + 0.2);
    }

    #[test]
    fn conversion_round_trip() {
        for from in DistanceUnit::ALL {
            for to in DistanceUnit::ALL {
                let distance = Distance::new(123.456, *from);
                let back = distance.to_unit(*to).to_unit(*from);
                assert_eq!(back.unit(), *from);
                assert_relative_eq!(back.value(), distance.value(), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn conversion_composition() {
        for unit in DistanceUnit::ALL {
            let distance = Distance::new(42.0, *unit);
            assert_relative_eq!(
                distance.to_feet().to_meters().value(),
                distance.to_meters().value(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn imperial_and_metric() {
        let distance = Distance::new(2000.0, DistanceUnit::Meters);
        assert_eq!(distance.to_imperial_unit_type().unit(), DistanceUnit::StatuteMiles);
        assert_eq!(distance.to_metric_unit_type().unit(), DistanceUnit::Kilometers);

        let distance = Distance::new(100.0, DistanceUnit::Meters);
        assert_eq!(distance.to_imperial_unit_type().unit(), DistanceUnit::Feet);
        assert_eq!(distance.to_metric_unit_type().unit(), DistanceUnit::Meters);

        let distance = Distance::new(5.0, DistanceUnit::Centimeters);
        assert_eq!(distance.to_imperial_unit_type().unit(), DistanceUnit::Inches);
        assert_eq!(distance.to_metric_unit_type().unit(), DistanceUnit::Centimeters);

        let distance = Distance::new(1.0, DistanceUnit::Centimeters);
        assert_eq!(distance.to_imperial_unit_type().unit(), DistanceUnit::Centimeters);

        assert_eq!(
            distance.to_local_unit_type(&Locale::EN_US).unit(),
            DistanceUnit::Centimeters
        );
        assert_eq!(
            Distance::new(3.0, DistanceUnit::Kilometers)
                .to_local_unit_type(&Locale::EN_US)
                .unit(),
            DistanceUnit::StatuteMiles
        );
    }

    #[test]
    fn parse() {
        let distance = Distance::parse("50 km", &Locale::INVARIANT).unwrap();
        assert_eq!(distance.unit(), DistanceUnit::Kilometers);
        assert_eq!(distance.value(), 50.0);

        let cases = [
            ("14,387 miles", 14387.0, DistanceUnit::StatuteMiles),
            ("3 nautical miles", 3.0, DistanceUnit::NauticalMiles),
            ("12'", 12.0, DistanceUnit::Feet),
            ("6\"", 6.0, DistanceUnit::Inches),
            ("-2.5 Meters", -2.5, DistanceUnit::Meters),
            ("10 cm", 10.0, DistanceUnit::Centimeters),
            ("1 foot", 1.0, DistanceUnit::Feet),
            ("km", 0.0, DistanceUnit::Kilometers),
        ];
        for (input, value, unit) in cases {
            let distance = Distance::parse(input, &Locale::INVARIANT).unwrap();
            assert_eq!(distance.value(), value, "{input}");
            assert_eq!(distance.unit(), unit, "{input}");
        }
    }

    #[test]
    fn parse_with_locale() {
        let distance = Distance::parse("1.250,5 km", &Locale::DE_DE).unwrap();
        assert_eq!(distance.value(), 1250.5);
        assert_eq!(distance.unit(), DistanceUnit::Kilometers);
    }

    #[test]
    fn parse_special_values() {
        assert_eq!(Distance::parse("", &Locale::INVARIANT).unwrap(), Distance::EMPTY);
        assert_eq!(Distance::parse("Sea Level", &Locale::INVARIANT).unwrap(), Distance::EMPTY);
        assert_eq!(Distance::parse("sealevel", &Locale::INVARIANT).unwrap(), Distance::EMPTY);
        assert!(Distance::parse("infinity", &Locale::INVARIANT).unwrap().is_infinite());
        assert!(Distance::parse("-Infinity", &Locale::INVARIANT).unwrap().value() < 0.0);
        assert!(Distance::parse("NaN", &Locale::INVARIANT).unwrap().is_invalid());
    }

    #[test]
    fn unitless_zero_uses_local_unit() {
        let metric = Distance::parse("0", &Locale::INVARIANT).unwrap();
        assert_eq!(metric.unit(), DistanceUnit::Meters);

        let imperial = Distance::parse("0.0", &Locale::EN_US).unwrap();
        assert_eq!(imperial.unit(), DistanceUnit::Feet);
    }

    #[test]
    fn parse_errors() {
        let err = Distance::parse("12 parsecs", &Locale::INVARIANT).unwrap_err();
        assert_eq!(err.kind(), "Distance");
        assert_eq!(err.input(), "12 parsecs");
        assert_matches!(
            err.failure(),
            ParseFailure::InvalidUnitPortion { token } if token == "PARSECS"
        );
        assert!(err.source().is_some());

        let err = Distance::parse("12", &Locale::INVARIANT).unwrap_err();
        assert_matches!(
            err.failure(),
            ParseFailure::InvalidUnitPortion { token } if token.is_empty()
        );

        let err = Distance::parse("1.2.3 m", &Locale::INVARIANT).unwrap_err();
        assert_matches!(err.failure(), ParseFailure::InvalidNumericPortion { .. });
        assert!(err.source().and_then(|source| source.source()).is_some());
    }

    #[test]
    fn format() {
        let distance = Distance::new(14387.456, DistanceUnit::StatuteMiles);
        assert_eq!(distance.to_string(), "14387.46 mi");
        assert_eq!(distance.format("#,##0.0 uuu", &Locale::INVARIANT).unwrap(), "14,387.5 miles");
        assert_eq!(distance.format("0 u", &Locale::DE_DE).unwrap(), "14387 mi");

        let foot = Distance::new(1.0, DistanceUnit::Feet);
        assert_eq!(foot.format("0 UUU", &Locale::INVARIANT).unwrap(), "1 foot");
        assert_eq!(foot.format("0U", &Locale::INVARIANT).unwrap(), "1'");
        let inches = Distance::new(6.0, DistanceUnit::Inches);
        assert_eq!(inches.format("0U", &Locale::INVARIANT).unwrap(), "6\"");
    }

    #[test]
    fn format_rounds_midpoints_up() {
        let format = |value| {
            Distance::new(value, DistanceUnit::Meters)
                .format("0 UU", &Locale::INVARIANT)
                .unwrap()
        };
        assert_eq!(format(2.5), "3 m");
        assert_eq!(format(0.5), "1 m");
        assert_eq!(format(-0.5), "-1 m");
    }

    #[test]
    fn format_special_values() {
        assert_eq!(Distance::INFINITY.to_string(), "Infinity");
        assert_eq!((-Distance::INFINITY).to_string(), "-Infinity");
        assert_eq!(Distance::new(f64::NAN, DistanceUnit::Feet).to_string(), "NaN");
    }

    #[test]
    fn format_errors() {
        let distance = Distance::new(1.0, DistanceUnit::Meters);
        let err = distance.format("0 UUUU", &Locale::INVARIANT).unwrap_err();
        assert_matches!(err.failure(), crate::FormatFailure::UnsupportedUnitLabel(4));

        let err = distance.format("0.0 U.U", &Locale::INVARIANT).unwrap_err();
        assert_matches!(err.failure(), crate::FormatFailure::OnlyRightmostIsDecimal);
        assert_eq!(err.template(), "0.0 U.U");
    }

    #[test]
    fn string_round_trip() {
        for unit in DistanceUnit::ALL {
            let distance = Distance::new(1234.56, *unit);
            let parsed: Distance = distance.to_string().parse().unwrap();
            assert_eq!(parsed.unit(), *unit);
            assert_eq!(parsed.value(), 1234.56);

            for template in ["0.00 U", "0.00 UU", "0.00 UUU"] {
                let text = distance.format(template, &Locale::DE_DE).unwrap();
                let parsed = Distance::parse(&text, &Locale::DE_DE).unwrap();
                assert_eq!(parsed.unit(), *unit, "{text}");
                assert_eq!(parsed.value(), 1234.56, "{text}");
            }
        }
    }

    #[test]
    fn speed_from_distance() {
        let speed = Distance::new(36.0, DistanceUnit::Kilometers).per(Duration::from_secs(3600));
        assert_relative_eq!(speed.to_kilometers_per_hour().value(), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn serde() {
        let distance = Distance::new(5.0, DistanceUnit::NauticalMiles);
        let json = serde_json::to_string(&distance).unwrap();
        assert_eq!(json, r#"{"value":5.0,"unit":"NauticalMiles"}"#);
        let back: Distance = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), DistanceUnit::NauticalMiles);
    }
}

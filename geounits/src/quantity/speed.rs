use super::{LabelStyle, Quantity, Unit};
use crate::quantity::{Distance, DistanceUnit};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate of travel measured in [`SpeedUnit`]s.
pub type Speed = Quantity<SpeedUnit>;

/// Units of speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    /// Feet per second.
    FeetPerSecond,
    /// Meters per second.
    MetersPerSecond,
    /// Kilometers per hour.
    KilometersPerHour,
    /// Kilometers per second.
    KilometersPerSecond,
    /// Statute miles per hour.
    StatuteMilesPerHour,
    /// Nautical miles per hour.
    Knots,
}

impl Unit for SpeedUnit {
    const KIND: &'static str = "Speed";
    const ALL: &'static [Self] = &[
        Self::FeetPerSecond,
        Self::MetersPerSecond,
        Self::KilometersPerHour,
        Self::KilometersPerSecond,
        Self::StatuteMilesPerHour,
        Self::Knots,
    ];
    const BASE: Self = Self::MetersPerSecond;
    const IMPERIAL: &'static [Self] = &[Self::StatuteMilesPerHour, Self::FeetPerSecond];
    const METRIC: &'static [Self] = &[Self::KilometersPerHour, Self::MetersPerSecond];
    const SYNONYMS: &'static [(&'static str, &'static str)] = &[
        (" PER ", "/"),
        ("HOURS", "H"),
        ("HOUR", "H"),
        ("HR", "H"),
        ("SECONDS", "S"),
        ("SECOND", "S"),
        ("SEC", "S"),
        ("KILOMETERS", "KM"),
        ("KILOMETER", "KM"),
        ("KILOMETRES", "KM"),
        ("KILOMETRE", "KM"),
        ("METERS", "M"),
        ("METER", "M"),
        ("METRES", "M"),
        ("METRE", "M"),
        ("FEET", "FT"),
        ("FOOT", "FT"),
        ("STATUTE MILES", "MI"),
        ("STATUTE MILE", "MI"),
        ("MILES", "MI"),
        ("MILE", "MI"),
        ("KNOTS", "K"),
        ("KNOT", "K"),
        ("KTS", "K"),
        ("KT", "K"),
        ("MPH", "MI/H"),
        ("FPS", "FT/S"),
        ("MPS", "M/S"),
        ("KPS", "KM/S"),
        ("KMH", "KPH"),
        ("KM/H", "KPH"),
    ];
    const NAMED_VALUES: &'static [(&'static str, f64)] =
        &[("INFINITY", f64::INFINITY), ("EMPTY", 0.0)];
    const DEFAULT_TEMPLATE: &'static str = "##0.## uu";

    fn base_factor(self) -> f64 {
        match self {
            Self::FeetPerSecond => 0.3048,
            Self::MetersPerSecond => 1.0,
            Self::KilometersPerHour => 1000.0 / 3600.0,
            Self::KilometersPerSecond => 1000.0,
            Self::StatuteMilesPerHour => 1609.344 / 3600.0,
            Self::Knots => 1852.0 / 3600.0,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::FeetPerSecond => "FT/S",
            Self::MetersPerSecond => "M/S",
            Self::KilometersPerHour => "KPH",
            Self::KilometersPerSecond => "KM/S",
            Self::StatuteMilesPerHour => "MI/H",
            Self::Knots => "K",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::FeetPerSecond => "FeetPerSecond",
            Self::MetersPerSecond => "MetersPerSecond",
            Self::KilometersPerHour => "KilometersPerHour",
            Self::KilometersPerSecond => "KilometersPerSecond",
            Self::StatuteMilesPerHour => "StatuteMilesPerHour",
            Self::Knots => "Knots",
        }
    }

    fn label(self, style: LabelStyle, singular: bool) -> Option<&'static str> {
        let label = match (style, self) {
            (LabelStyle::Symbol, Self::FeetPerSecond) => "ft/s",
            (LabelStyle::Symbol, Self::MetersPerSecond) => "m/s",
            (LabelStyle::Symbol, Self::KilometersPerHour) => "km/h",
            (LabelStyle::Symbol, Self::KilometersPerSecond) => "km/s",
            (LabelStyle::Symbol, Self::StatuteMilesPerHour) => "mph",
            (LabelStyle::Symbol, Self::Knots) => "kts",
            (LabelStyle::Short, Self::FeetPerSecond) => "fps",
            (LabelStyle::Short, Self::MetersPerSecond) => "mps",
            (LabelStyle::Short, Self::KilometersPerHour) => "kph",
            (LabelStyle::Short, Self::KilometersPerSecond) => "kps",
            (LabelStyle::Short, Self::StatuteMilesPerHour) => "mph",
            (LabelStyle::Short, Self::Knots) => "knots",
            (LabelStyle::Long, unit) => match (unit, singular) {
                (Self::FeetPerSecond, true) => "foot/second",
                (Self::FeetPerSecond, false) => "feet/second",
                (Self::MetersPerSecond, true) => "meter/second",
                (Self::MetersPerSecond, false) => "meters/second",
                (Self::KilometersPerHour, true) => "kilometer/hour",
                (Self::KilometersPerHour, false) => "kilometers/hour",
                (Self::KilometersPerSecond, true) => "kilometer/second",
                (Self::KilometersPerSecond, false) => "kilometers/second",
                (Self::StatuteMilesPerHour, true) => "mile/hour",
                (Self::StatuteMilesPerHour, false) => "miles/hour",
                (Self::Knots, true) => "knot",
                (Self::Knots, false) => "knots",
            },
            (LabelStyle::Phrase, unit) => match (unit, singular) {
                (Self::FeetPerSecond, true) => "foot per second",
                (Self::FeetPerSecond, false) => "feet per second",
                (Self::MetersPerSecond, true) => "meter per second",
                (Self::MetersPerSecond, false) => "meters per second",
                (Self::KilometersPerHour, true) => "kilometer per hour",
                (Self::KilometersPerHour, false) => "kilometers per hour",
                (Self::KilometersPerSecond, true) => "kilometer per second",
                (Self::KilometersPerSecond, false) => "kilometers per second",
                (Self::StatuteMilesPerHour, true) => "statute mile per hour",
                (Self::StatuteMilesPerHour, false) => "statute miles per hour",
                (Self::Knots, true) => "knot",
                (Self::Knots, false) => "knots",
            },
        };

        Some(label)
    }
}

impl Quantity<SpeedUnit> {
    /// Zero meters per second.
    pub const EMPTY: Speed = Speed::new(0.0, SpeedUnit::MetersPerSecond);
    /// Infinite speed.
    pub const INFINITY: Speed = Speed::new(f64::INFINITY, SpeedUnit::MetersPerSecond);
    /// Speed of light in vacuum.
    pub const SPEED_OF_LIGHT: Speed = Speed::new(299_792_458.0, SpeedUnit::MetersPerSecond);

    /// Converts into feet per second.
    pub fn to_feet_per_second(&self) -> Self {
        self.to_unit(SpeedUnit::FeetPerSecond)
    }

    /// Converts into meters per second.
    pub fn to_meters_per_second(&self) -> Self {
        self.to_unit(SpeedUnit::MetersPerSecond)
    }

    /// Converts into kilometers per hour.
    pub fn to_kilometers_per_hour(&self) -> Self {
        self.to_unit(SpeedUnit::KilometersPerHour)
    }

    /// Converts into kilometers per second.
    pub fn to_kilometers_per_second(&self) -> Self {
        self.to_unit(SpeedUnit::KilometersPerSecond)
    }

    /// Converts into statute miles per hour.
    pub fn to_statute_miles_per_hour(&self) -> Self {
        self.to_unit(SpeedUnit::StatuteMilesPerHour)
    }

    /// Converts into knots.
    pub fn to_knots(&self) -> Self {
        self.to_unit(SpeedUnit::Knots)
    }

    /// Distance covered at this speed in the given time.
    pub fn over(&self, duration: Duration) -> Distance {
        Distance::new(
            self.to_meters_per_second().value() * duration.as_secs_f64(),
            DistanceUnit::Meters,
        )
    }
}

//! Measured values: a magnitude together with a unit of measurement.
//!
//! All quantity kinds share the same shape: [`Quantity<U>`] where `U` is a closed set of units
//! implementing [`Unit`]. The unit enum supplies conversion factors, labels and the synonyms
//! understood by the parser, and the quantity provides conversion, arithmetic, parsing and
//! formatting on top of it.

mod distance;
mod speed;

pub use distance::{Distance, DistanceUnit};
pub use speed::{Speed, SpeedUnit};

use crate::error::{FormatError, ParseError};
use crate::format::format_quantity;
use crate::locale::Locale;
use crate::parse::parse_quantity;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Variant of a unit label, selected by the length of the `U` run in a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// `U`: symbol, e.g. `m`, `'`, `km/h`.
    Symbol,
    /// `UU`: short word, e.g. `km`, `ft`, `kph`.
    Short,
    /// `UUU`: full name, singular or plural, e.g. `kilometers`.
    Long,
    /// `UUUU`: full phrase, e.g. `kilometers per hour`.
    Phrase,
}

impl LabelStyle {
    /// Style for a placeholder run of the given length.
    pub fn from_run_length(length: usize) -> Option<Self> {
        match length {
            1 => Some(Self::Symbol),
            2 => Some(Self::Short),
            3 => Some(Self::Long),
            4 => Some(Self::Phrase),
            _ => None,
        }
    }
}

/// Closed set of units of one quantity kind.
pub trait Unit: Copy + Eq + Debug + 'static {
    /// Name of the quantity kind, e.g. `Distance`.
    const KIND: &'static str;
    /// All units of the kind.
    const ALL: &'static [Self];
    /// Unit in which [`Unit::base_factor`] is expressed. Also used for values parsed without a
    /// unit.
    const BASE: Self;
    /// Imperial units from the largest to the smallest.
    const IMPERIAL: &'static [Self];
    /// Metric units from the largest to the smallest.
    const METRIC: &'static [Self];
    /// Ordered uppercase replacements collapsing unit spellings into [`Unit::code`]s.
    const SYNONYMS: &'static [(&'static str, &'static str)];
    /// Uppercase words standing for a whole value in the base unit.
    const NAMED_VALUES: &'static [(&'static str, f64)];
    /// Template used for an empty or `g` format.
    const DEFAULT_TEMPLATE: &'static str;

    /// Size of one unit expressed in [`Unit::BASE`].
    fn base_factor(self) -> f64;

    /// Canonical short code the parser resolves, e.g. `KM`.
    fn code(self) -> &'static str;

    /// Name of the enum variant, as used in GML.
    fn name(self) -> &'static str;

    /// Label of the unit, or `None` if the kind has no label of this style.
    fn label(self, style: LabelStyle, singular: bool) -> Option<&'static str>;

    /// Unit of a zero value given without any unit, if that is allowed for the kind.
    fn unitless_zero(_locale: &Locale) -> Option<Self> {
        None
    }

    /// Factor to multiply a value in `self` units by to get it in `to` units.
    fn factor(self, to: Self) -> f64 {
        if self == to {
            1.0
        } else {
            self.base_factor() / to.base_factor()
        }
    }

    /// Unit with the given canonical code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.code() == code)
    }

    /// Unit with the given variant name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
    }
}

/// A value with a unit.
///
/// Quantities are immutable: conversions and arithmetic return new values. Two quantities are
/// equal when they are equal after conversion into the same unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity.
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Numeric value in [`Quantity::unit`]s.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of the value.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Returns the same amount expressed in the given unit.
    pub fn to_unit(&self, unit: U) -> Self {
        if unit == self.unit {
            return *self;
        }

        Self::new(self.value * self.unit.factor(unit), unit)
    }

    /// Converts into the largest imperial unit in which the value is at least 1.
    pub fn to_imperial_unit_type(&self) -> Self {
        self.to_first_significant(U::IMPERIAL)
    }

    /// Converts into the largest metric unit in which the value is at least 1.
    pub fn to_metric_unit_type(&self) -> Self {
        self.to_first_significant(U::METRIC)
    }

    /// Converts into the measurement system of the locale.
    pub fn to_local_unit_type(&self, locale: &Locale) -> Self {
        if locale.is_metric() {
            self.to_metric_unit_type()
        } else {
            self.to_imperial_unit_type()
        }
    }

    // Returns the conversion into the last unit if none of them yields |value| >= 1.
    fn to_first_significant(&self, units: &[U]) -> Self {
        let mut converted = *self;
        for unit in units {
            converted = self.to_unit(*unit);
            if converted.value.abs() >= 1.0 {
                break;
            }
        }

        converted
    }

    /// Returns a quantity with the same unit and the given value.
    pub fn with_value(&self, value: f64) -> Self {
        Self { value, ..*self }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        self.with_value(self.value.abs())
    }

    /// Rounds the value to the given number of fractional digits.
    pub fn round(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        self.with_value((self.value * factor).round() / factor)
    }

    /// True if the value is zero.
    pub fn is_empty(&self) -> bool {
        self.value == 0.0
    }

    /// True if the value is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    /// True if the value is NaN.
    pub fn is_invalid(&self) -> bool {
        self.value.is_nan()
    }

    /// Parses a string like `50 km`.
    ///
    /// An empty string is a zero value in the base unit.
    pub fn parse(value: &str, locale: &Locale) -> Result<Self, ParseError> {
        parse_quantity(value, locale)
    }

    /// Renders the quantity according to a format template. See [`crate::format`] for the
    /// template syntax.
    pub fn format(&self, template: &str, locale: &Locale) -> Result<String, FormatError> {
        format_quantity(self, template, locale)
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.to_unit(self.unit).value
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.to_unit(self.unit).value)
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.with_value(self.value + rhs.to_unit(self.unit).value)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.with_value(self.value - rhs.to_unit(self.unit).value)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.with_value(self.value * rhs)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.with_value(self.value / rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        self.with_value(-self.value)
    }
}

impl<U: Unit> Zero for Quantity<U> {
    fn zero() -> Self {
        Self::new(0.0, U::BASE)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .format("", &Locale::INVARIANT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Locale::INVARIANT)
    }
}

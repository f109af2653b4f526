//! Regional conventions used when values are parsed from and rendered to strings.

/// Number formatting and measurement conventions of a region.
///
/// A locale is always passed explicitly to parse and format functions. Trait
/// implementations that cannot take an argument ([`std::str::FromStr`],
/// [`std::fmt::Display`]) use [`Locale::INVARIANT`].
///
/// ```
/// use geounits::{Distance, Locale};
///
/// let distance = Distance::parse("14.387,5 m", &Locale::DE_DE).unwrap();
/// assert_eq!(distance.value(), 14387.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    decimal_separator: char,
    group_separator: char,
    is_metric: bool,
    infinity_symbol: &'static str,
    negative_infinity_symbol: &'static str,
    nan_symbol: &'static str,
}

impl Locale {
    /// Culture independent conventions: `.` decimal separator, `,` group separator, metric units.
    pub const INVARIANT: Locale = Locale {
        decimal_separator: '.',
        group_separator: ',',
        is_metric: true,
        infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
        nan_symbol: "NaN",
    };

    /// United States: same number format as invariant, imperial units.
    pub const EN_US: Locale = Locale::INVARIANT.with_metric(false);

    /// United Kingdom.
    pub const EN_GB: Locale = Locale::INVARIANT;

    /// Germany: `,` decimal separator, `.` group separator.
    pub const DE_DE: Locale = Locale::INVARIANT
        .with_decimal_separator(',')
        .with_group_separator('.');

    /// France: `,` decimal separator, narrow no-break space group separator.
    pub const FR_FR: Locale = Locale::INVARIANT
        .with_decimal_separator(',')
        .with_group_separator('\u{202F}');

    /// Character separating the integer and fractional parts of a number.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Character separating digit groups in the integer part of a number.
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Whether the region measures in metric units (otherwise imperial).
    pub fn is_metric(&self) -> bool {
        self.is_metric
    }

    /// Text used for positive infinity.
    pub fn infinity_symbol(&self) -> &'static str {
        self.infinity_symbol
    }

    /// Text used for negative infinity.
    pub fn negative_infinity_symbol(&self) -> &'static str {
        self.negative_infinity_symbol
    }

    /// Text used for not-a-number.
    pub fn nan_symbol(&self) -> &'static str {
        self.nan_symbol
    }

    /// Returns a copy of the locale with the given decimal separator.
    pub const fn with_decimal_separator(self, decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            ..self
        }
    }

    /// Returns a copy of the locale with the given group separator.
    pub const fn with_group_separator(self, group_separator: char) -> Self {
        Self {
            group_separator,
            ..self
        }
    }

    /// Returns a copy of the locale with the given measurement convention.
    pub const fn with_metric(self, is_metric: bool) -> Self {
        Self { is_metric, ..self }
    }

    /// Returns a copy of the locale with the given infinity and NaN symbols.
    pub const fn with_special_symbols(
        self,
        infinity_symbol: &'static str,
        negative_infinity_symbol: &'static str,
        nan_symbol: &'static str,
    ) -> Self {
        Self {
            infinity_symbol,
            negative_infinity_symbol,
            nan_symbol,
            ..self
        }
    }

    /// Symbol for a non-finite value, or `None` if the value is finite.
    pub(crate) fn special_symbol(&self, value: f64) -> Option<&'static str> {
        if value.is_nan() {
            Some(self.nan_symbol)
        } else if value == f64::INFINITY {
            Some(self.infinity_symbol)
        } else if value == f64::NEG_INFINITY {
            Some(self.negative_infinity_symbol)
        } else {
            None
        }
    }

    /// Value of an infinity or NaN symbol, compared case-insensitively.
    pub(crate) fn special_value(&self, token: &str) -> Option<f64> {
        if token.eq_ignore_ascii_case(self.negative_infinity_symbol) {
            Some(f64::NEG_INFINITY)
        } else if token.eq_ignore_ascii_case(self.infinity_symbol) {
            Some(f64::INFINITY)
        } else if token.eq_ignore_ascii_case(self.nan_symbol) {
            Some(f64::NAN)
        } else {
            None
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert!(Locale::default().is_metric());
        assert!(!Locale::EN_US.is_metric());
        assert_eq!(Locale::DE_DE.decimal_separator(), ',');
        assert_eq!(Locale::DE_DE.group_separator(), '.');
    }

    #[test]
    fn special_values() {
        let locale = Locale::INVARIANT;
        assert_eq!(locale.special_value("infinity"), Some(f64::INFINITY));
        assert_eq!(locale.special_value("-INFINITY"), Some(f64::NEG_INFINITY));
        assert!(locale.special_value("nan").is_some_and(f64::is_nan));
        assert_eq!(locale.special_value("12"), None);

        assert_eq!(locale.special_symbol(f64::NEG_INFINITY), Some("-Infinity"));
        assert_eq!(locale.special_symbol(1.0), None);
    }
}

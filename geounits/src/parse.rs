//! Free-form parsing of `<number> <unit>` strings.

use crate::error::{ParseError, ParseFailure};
use crate::locale::Locale;
use crate::quantity::{Quantity, Unit};

/// Trims and uppercases the input, and drops digit group separators.
pub(crate) fn normalize_input(raw: &str, locale: &Locale) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| *c != locale.group_separator())
        .collect()
}

/// Splits the input into the leading numeric token and the rest.
///
/// The numeric token consists of an optional sign, digits and decimal separators.
pub(crate) fn split_numeric<'a>(input: &'a str, locale: &Locale) -> (&'a str, &'a str) {
    let decimal_separator = locale.decimal_separator();
    let end = input
        .char_indices()
        .find(|(index, c)| {
            let is_sign = *index == 0 && (*c == '-' || *c == '+');
            !(is_sign || c.is_ascii_digit() || *c == decimal_separator)
        })
        .map(|(index, _)| index)
        .unwrap_or(input.len());

    (&input[..end], &input[end..])
}

/// Parses a number written with the locale decimal separator. An empty token is zero.
///
/// A `.` is only accepted if it is the locale decimal separator.
pub(crate) fn parse_number(token: &str, locale: &Locale) -> Result<f64, ParseFailure> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(0.0);
    }

    let decimal_separator = locale.decimal_separator();
    let normalized: String = if decimal_separator == '.' {
        token.to_string()
    } else {
        // Swapping puts the foreign `.` where the float parser rejects it.
        token
            .chars()
            .map(|c| match c {
                '.' => decimal_separator,
                c if c == decimal_separator => '.',
                c => c,
            })
            .collect()
    };

    normalized
        .parse()
        .map_err(|source| ParseFailure::InvalidNumericPortion {
            token: token.to_string(),
            source,
        })
}

/// Applies the replacements one after another. Later pairs see the output of earlier ones.
pub(crate) fn apply_synonyms(token: &str, synonyms: &[(&str, &str)]) -> String {
    synonyms
        .iter()
        .fold(token.to_string(), |token, (from, to)| token.replace(from, to))
}

/// Parses a string like `50 km` or `12.5 knots` into a quantity.
pub(crate) fn parse_quantity<U: Unit>(
    raw: &str,
    locale: &Locale,
) -> Result<Quantity<U>, ParseError> {
    read_quantity(raw, locale).map_err(|failure| {
        log::debug!("cannot parse {raw:?} as {}: {failure}", U::KIND);
        ParseError::new(U::KIND, raw, failure)
    })
}

fn read_quantity<U: Unit>(raw: &str, locale: &Locale) -> Result<Quantity<U>, ParseFailure> {
    let input = normalize_input(raw, locale);
    if input.is_empty() {
        return Ok(Quantity::new(0.0, U::BASE));
    }

    if let Some(value) = locale.special_value(&input) {
        return Ok(Quantity::new(value, U::BASE));
    }

    if let Some((_, value)) = U::NAMED_VALUES.iter().find(|(name, _)| *name == input) {
        return Ok(Quantity::new(*value, U::BASE));
    }

    let (numeric, unit) = split_numeric(&input, locale);
    let value = parse_number(numeric, locale)?;

    let unit = unit.trim();
    if unit.is_empty() && value == 0.0 {
        if let Some(unit) = U::unitless_zero(locale) {
            return Ok(Quantity::new(value, unit));
        }
    }

    let canonical = apply_synonyms(unit, U::SYNONYMS);
    let canonical = canonical.trim();
    U::from_code(canonical)
        .map(|unit| Quantity::new(value, unit))
        .ok_or_else(|| ParseFailure::InvalidUnitPortion {
            token: canonical.to_string(),
        })
}

//! Template based rendering of values.
//!
//! A template is a plain string where runs of placeholder letters are replaced with the parts of
//! the value. Templates are case-insensitive. Which letters are placeholders depends on the value
//! type:
//!
//! * angles and coordinates: `H` (degrees), `M` (minutes), `S` (seconds), `I` (hemisphere letter);
//! * distances and speeds: a run of `0`/`#` digits for the number and `U` for the unit label.
//!
//! A numeric run follows the usual custom number format conventions: `0` is a mandatory digit,
//! `#` is an optional one, `.` starts the fractional part and `,` in the integer part turns on
//! digit grouping. At most one run in a template may contain a decimal point.

use crate::error::{FormatError, FormatFailure};
use crate::locale::Locale;
use crate::quantity::{LabelStyle, Quantity, Unit};
use std::ops::Range;

/// Returns the uppercased template, or the uppercased default if the template is empty or `g`.
pub(crate) fn expand_template(template: &str, default: &str) -> String {
    let template = template.trim();
    if template.is_empty() || template.eq_ignore_ascii_case("g") {
        default.to_uppercase()
    } else {
        template.to_uppercase()
    }
}

/// Byte range from the first to the last occurrence of the letter.
pub(crate) fn find_run(template: &str, letter: char) -> Option<Range<usize>> {
    let start = template.find(letter)?;
    let end = template.rfind(letter)? + letter.len_utf8();
    Some(start..end)
}

/// Byte range of the first contiguous run of number pattern characters starting with a digit
/// placeholder.
pub(crate) fn find_number_run(template: &str) -> Option<Range<usize>> {
    let start = template.find(['0', '#'])?;
    let len = template[start..]
        .find(|c| !matches!(c, '0' | '#' | '.' | ','))
        .unwrap_or(template.len() - start);
    Some(start..start + len)
}

/// Fails if more than one of the given runs contains a decimal point.
pub(crate) fn check_single_decimal<'a>(
    runs: impl IntoIterator<Item = &'a str>,
) -> Result<(), FormatFailure> {
    if runs.into_iter().filter(|run| run.contains('.')).count() > 1 {
        return Err(FormatFailure::OnlyRightmostIsDecimal);
    }

    Ok(())
}

/// Replaces the ranges of the template with the given strings.
///
/// Ranges overlapping an already substituted range are ignored.
pub(crate) fn substitute(mut template: String, mut parts: Vec<(Range<usize>, String)>) -> String {
    parts.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));

    let mut limit = template.len();
    for (range, replacement) in parts {
        if range.end > limit {
            continue;
        }

        limit = range.start;
        template.replace_range(range, &replacement);
    }

    template
}

/// Custom number format, e.g. `#,##0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NumberFormat {
    min_integer_digits: usize,
    grouping: bool,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
}

impl NumberFormat {
    /// Reads a number pattern. The given letter is treated as a mandatory digit (`0`).
    pub(crate) fn from_pattern(pattern: &str, placeholder: Option<char>) -> Self {
        let (integer, fraction) = pattern.split_once('.').unwrap_or((pattern, ""));
        let is_zero = |c: char| c == '0' || Some(c) == placeholder;

        Self {
            min_integer_digits: integer.chars().filter(|c| is_zero(*c)).count(),
            grouping: integer.contains(','),
            min_fraction_digits: fraction.chars().filter(|c| is_zero(*c)).count(),
            max_fraction_digits: fraction
                .chars()
                .filter(|c| is_zero(*c) || *c == '#')
                .count(),
        }
    }

    /// Number of fractional digits the value is rounded to.
    pub(crate) fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub(crate) fn format(&self, value: f64, locale: &Locale) -> String {
        let rounded = format!(
            "{:.*}",
            self.max_fraction_digits,
            round_half_away(value.abs(), self.max_fraction_digits)
        );
        let (integer, fraction) = rounded.split_once('.').unwrap_or((&rounded, ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut integer = integer.trim_start_matches('0').to_string();
        while integer.len() < self.min_integer_digits {
            integer.insert(0, '0');
        }

        if self.grouping {
            integer = group_digits(&integer, locale.group_separator());
        }

        let is_zero = !integer
            .chars()
            .chain(fraction.chars())
            .any(|c| c.is_ascii_digit() && c != '0');

        let mut result = String::with_capacity(integer.len() + fraction.len() + 2);
        if value.is_sign_negative() && !is_zero {
            result.push('-');
        }

        result.push_str(&integer);
        if !fraction.is_empty() {
            result.push(locale.decimal_separator());
            result.push_str(&fraction);
        }

        if result.is_empty() {
            result.push('0');
        }

        result
    }
}

/// Rounds to the given number of fractional digits with midpoints going away from zero.
pub(crate) fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

/// Renders a quantity according to the template.
pub(crate) fn format_quantity<U: Unit>(
    quantity: &Quantity<U>,
    template: &str,
    locale: &Locale,
) -> Result<String, FormatError> {
    if let Some(symbol) = locale.special_symbol(quantity.value()) {
        return Ok(symbol.to_string());
    }

    render_quantity(quantity, template, locale).map_err(|failure| {
        log::debug!("cannot format {} with {template:?}: {failure}", U::KIND);
        FormatError::new(template, failure)
    })
}

fn render_quantity<U: Unit>(
    quantity: &Quantity<U>,
    template: &str,
    locale: &Locale,
) -> Result<String, FormatFailure> {
    let text = expand_template(template, U::DEFAULT_TEMPLATE);
    let unit_run = find_run(&text, 'U');
    let number_run = find_number_run(&text);

    check_single_decimal(
        [&unit_run, &number_run]
            .into_iter()
            .flatten()
            .map(|range| &text[range.clone()]),
    )?;

    let mut parts = vec![];
    if let Some(range) = number_run {
        let number = NumberFormat::from_pattern(&text[range.clone()], None);
        parts.push((range, number.format(quantity.value(), locale)));
    }

    if let Some(range) = unit_run {
        let length = text[range.clone()].chars().count();
        let label = LabelStyle::from_run_length(length)
            .and_then(|style| quantity.unit().label(style, quantity.value() == 1.0))
            .ok_or(FormatFailure::UnsupportedUnitLabel(length))?;
        parts.push((range, label.to_string()));
    }

    Ok(substitute(text, parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(pattern: &str, value: f64) -> String {
        NumberFormat::from_pattern(pattern, None).format(value, &Locale::INVARIANT)
    }

    #[test]
    fn number_patterns() {
        assert_eq!(format("0", 12.6), "13");
        assert_eq!(format("000", 7.0), "007");
        assert_eq!(format("##0.##", 14387.456), "14387.46");
        assert_eq!(format("##0.##", 50.0), "50");
        assert_eq!(format("0.00", 0.5), "0.50");
        assert_eq!(format("#.##", 0.5), ".5");
        assert_eq!(format("#,##0", 1234567.0), "1,234,567");
        assert_eq!(format("0.0", -0.01), "0.0");
        assert_eq!(format("0.0", -2.26), "-2.3");
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        assert_eq!(format("0", 0.5), "1");
        assert_eq!(format("0", 2.5), "3");
        assert_eq!(format("0", -2.5), "-3");
        assert_eq!(format("0.0", 0.25), "0.3");
        assert_eq!(format("#,##0", 1_234_567.5), "1,234,568");
    }

    #[test]
    fn number_with_locale() {
        let number = NumberFormat::from_pattern("#,##0.00", None);
        assert_eq!(number.format(14387.5, &Locale::DE_DE), "14.387,50");
    }

    #[test]
    fn placeholder_as_digit() {
        let number = NumberFormat::from_pattern("HH.HH", Some('H'));
        assert_eq!(number.format(5.126, &Locale::INVARIANT), "05.13");
    }

    #[test]
    fn runs() {
        let text = expand_template("hh°mm'ss.ss\"", "");
        assert_eq!(&text[find_run(&text, 'H').unwrap()], "HH");
        assert_eq!(&text[find_run(&text, 'S').unwrap()], "SS.SS");
        assert_eq!(find_run(&text, 'U'), None);

        let text = expand_template("g", "##0.## uu");
        assert_eq!(&text[find_number_run(&text).unwrap()], "##0.##");
        assert_eq!(&text[find_run(&text, 'U').unwrap()], "UU");
    }

    #[test]
    fn single_decimal() {
        assert!(check_single_decimal(["H.H", "MM", "SS"]).is_ok());
        assert!(matches!(
            check_single_decimal(["H.H", "M.M"]),
            Err(FormatFailure::OnlyRightmostIsDecimal)
        ));
    }

    #[test]
    fn substitution_order() {
        let text = "HH°MM'".to_string();
        let result = substitute(text, vec![(0..2, "34".into()), (4..6, "12".into())]);
        assert_eq!(result, "34°12'");
    }
}

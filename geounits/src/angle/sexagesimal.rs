//! Degrees/minutes/seconds notation shared by all angular types.

use crate::error::{FormatError, FormatFailure, ParseFailure};
use crate::format::{
    check_single_decimal, expand_template, find_run, round_half_away, substitute, NumberFormat,
};
use crate::locale::Locale;
use crate::parse::parse_number;

/// Number of significant fractional digits kept by the sexagesimal parts of an angle.
pub const MAXIMUM_PRECISION_DIGITS: i32 = 12;

const COMPONENT_SEPARATORS: &[char] = &['°', 'º', '\'', '"', '′', '″', ' ', '\u{A0}'];

pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Integer part of the degrees.
pub(crate) fn hours(decimal_degrees: f64) -> f64 {
    decimal_degrees.trunc()
}

pub(crate) fn decimal_minutes(decimal_degrees: f64) -> f64 {
    round_to(
        (decimal_degrees - decimal_degrees.trunc()).abs() * 60.0,
        MAXIMUM_PRECISION_DIGITS - 2,
    )
}

pub(crate) fn minutes(decimal_degrees: f64) -> f64 {
    round_to(
        (decimal_degrees - hours(decimal_degrees)).abs() * 60.0,
        MAXIMUM_PRECISION_DIGITS - 1,
    )
    .trunc()
}

pub(crate) fn seconds(decimal_degrees: f64) -> f64 {
    round_to(
        ((decimal_degrees - hours(decimal_degrees)).abs() * 60.0 - minutes(decimal_degrees)) * 60.0,
        MAXIMUM_PRECISION_DIGITS - 4,
    )
}

/// Combines the parts into decimal degrees. Minutes and seconds are taken by absolute value and
/// get the sign of the angle.
pub(crate) fn compose(negative: bool, hours: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = hours.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if negative || hours < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Parses `34.2081`, `34 12.4867`, `34°12'29.2"`, `0341229` or `-0341229`.
pub(crate) fn parse_degrees(input: &str, locale: &Locale) -> Result<f64, ParseFailure> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    if let Some(value) = locale.special_value(input) {
        return Ok(value);
    }

    let tokens: Vec<&str> = input
        .split(COMPONENT_SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect();

    let decimal_separator = locale.decimal_separator();
    let is_integral = |token: &str| !token.contains(decimal_separator);

    match tokens.as_slice() {
        [] => Ok(0.0),
        [single] => {
            // Digit groups are only meaningful in plain decimal degrees.
            let group_separator = locale.group_separator();
            let ungrouped: String = single.chars().filter(|c| *c != group_separator).collect();
            parse_single(&ungrouped, locale)
        }
        [hours, minutes] => {
            if !is_integral(hours) {
                return Err(ParseFailure::OnlyRightmostIsDecimal);
            }

            Ok(compose(
                hours.starts_with('-'),
                parse_number(hours, locale)?,
                parse_number(minutes, locale)?,
                0.0,
            ))
        }
        [hours, minutes, seconds] => {
            if !is_integral(hours) || !is_integral(minutes) {
                return Err(ParseFailure::OnlyRightmostIsDecimal);
            }

            Ok(compose(
                hours.starts_with('-'),
                parse_number(hours, locale)?,
                parse_number(minutes, locale)?,
                parse_number(seconds, locale)?,
            ))
        }
        _ => Err(ParseFailure::TooManyComponents(tokens.len())),
    }
}

// Seven digits are HHHMMSS; eight characters starting with `-` are -HHHMMSS.
fn parse_single(token: &str, locale: &Locale) -> Result<f64, ParseFailure> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token),
    };

    if digits.len() == 7 && digits.bytes().all(|b| b.is_ascii_digit()) {
        let hours = parse_number(&digits[0..3], locale)?;
        let minutes = parse_number(&digits[3..5], locale)?;
        let seconds = parse_number(&digits[5..7], locale)?;
        return Ok(compose(negative, hours, minutes, seconds));
    }

    parse_number(token, locale)
}

/// Renders decimal degrees with an `H`/`M`/`S`/`I` template.
///
/// If `hemisphere` is given and the template contains `I`, the absolute value is rendered and
/// `I` is replaced with the hemisphere letter.
pub(crate) fn format_degrees(
    decimal_degrees: f64,
    template: &str,
    default_template: &str,
    locale: &Locale,
    hemisphere: Option<char>,
) -> Result<String, FormatError> {
    if let Some(symbol) = locale.special_symbol(decimal_degrees) {
        return Ok(symbol.to_string());
    }

    render(decimal_degrees, template, default_template, locale, hemisphere).map_err(|failure| {
        log::debug!("cannot format angle with {template:?}: {failure}");
        FormatError::new(template, failure)
    })
}

fn render(
    decimal_degrees: f64,
    template: &str,
    default_template: &str,
    locale: &Locale,
    hemisphere: Option<char>,
) -> Result<String, FormatFailure> {
    let text = expand_template(template, default_template);
    let hemisphere_run = hemisphere.and_then(|letter| Some((find_run(&text, 'I')?, letter)));
    let value = if hemisphere_run.is_some() {
        decimal_degrees.abs()
    } else {
        decimal_degrees
    };

    let hours_run = find_run(&text, 'H');
    let minutes_run = find_run(&text, 'M');
    let seconds_run = find_run(&text, 'S');

    check_single_decimal(
        [&hours_run, &minutes_run, &seconds_run]
            .into_iter()
            .flatten()
            .map(|range| &text[range.clone()]),
    )?;

    // Rounding the smallest rendered part up to 60 carries into the larger parts.
    let value = if let Some(range) = &seconds_run {
        let number = NumberFormat::from_pattern(&text[range.clone()], Some('S'));
        round_in_parts(value, 3600.0, number.max_fraction_digits())
    } else if let Some(range) = minutes_run
        .as_ref()
        .filter(|range| text[(*range).clone()].contains('.'))
    {
        let number = NumberFormat::from_pattern(&text[range.clone()], Some('M'));
        round_in_parts(value, 60.0, number.max_fraction_digits())
    } else {
        value
    };

    let mut parts = vec![];
    if let Some(range) = hours_run {
        let pattern = &text[range.clone()];
        let number = NumberFormat::from_pattern(pattern, Some('H'));
        let rendered = if pattern.contains('.') {
            number.format(value, locale)
        } else {
            let hours = hours(value);
            let rendered = number.format(hours, locale);
            if value < 0.0 && hours == 0.0 {
                format!("-{rendered}")
            } else {
                rendered
            }
        };
        parts.push((range, rendered));
    }

    if let Some(range) = minutes_run {
        let pattern = &text[range.clone()];
        let number = NumberFormat::from_pattern(pattern, Some('M'));
        let minutes = if pattern.contains('.') {
            decimal_minutes(value)
        } else {
            minutes(value)
        };
        parts.push((range, number.format(minutes, locale)));
    }

    if let Some(range) = seconds_run {
        let number = NumberFormat::from_pattern(&text[range.clone()], Some('S'));
        parts.push((range, number.format(seconds(value), locale)));
    }

    if let Some((range, letter)) = hemisphere_run {
        parts.push((range, letter.to_string()));
    }

    Ok(substitute(text, parts))
}

fn round_in_parts(decimal_degrees: f64, parts_per_degree: f64, digits: usize) -> f64 {
    let parts = round_half_away(decimal_degrees.abs() * parts_per_degree, digits);
    decimal_degrees.signum() * parts / parts_per_degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    #[test]
    fn parts() {
        let value = compose(false, 34.0, 12.0, 29.2);
        assert_eq!(hours(value), 34.0);
        assert_eq!(minutes(value), 12.0);
        assert_relative_eq!(seconds(value), 29.2);
        assert_relative_eq!(decimal_minutes(value), 12.486_666_666_7, epsilon = 1e-9);
    }

    #[test]
    fn parts_of_negative_angle() {
        let value = compose(true, 0.0, 30.0, 0.0);
        assert_eq!(value, -0.5);
        assert_eq!(hours(value), 0.0);
        assert_eq!(minutes(value), 30.0);
    }

    #[test]
    fn parse_forms() {
        let locale = Locale::INVARIANT;
        assert_eq!(parse_degrees("34.5", &locale).unwrap(), 34.5);
        assert_eq!(parse_degrees("34 30", &locale).unwrap(), 34.5);
        assert_eq!(parse_degrees("34°30'", &locale).unwrap(), 34.5);
        assert_eq!(parse_degrees("-34°30'00\"", &locale).unwrap(), -34.5);
        assert_eq!(parse_degrees("-0 30", &locale).unwrap(), -0.5);
        assert_eq!(parse_degrees("0343000", &locale).unwrap(), 34.5);
        assert_eq!(parse_degrees("-0343000", &locale).unwrap(), -34.5);
        assert_eq!(parse_degrees("", &locale).unwrap(), 0.0);
        assert_eq!(parse_degrees("34,5", &Locale::DE_DE).unwrap(), 34.5);
    }

    #[test]
    fn parse_only_rightmost_decimal() {
        let locale = Locale::INVARIANT;
        assert_matches!(
            parse_degrees("34.5 30", &locale),
            Err(ParseFailure::OnlyRightmostIsDecimal)
        );
        assert_matches!(
            parse_degrees("34 30.5 10", &locale),
            Err(ParseFailure::OnlyRightmostIsDecimal)
        );
        assert_matches!(
            parse_degrees("34 x", &locale),
            Err(ParseFailure::InvalidNumericPortion { .. })
        );
    }

    #[test]
    fn parse_more_than_three_components() {
        let locale = Locale::INVARIANT;
        assert_matches!(
            parse_degrees("34 30 10 garbage", &locale),
            Err(ParseFailure::TooManyComponents(4))
        );
        assert_matches!(
            parse_degrees("34 30 10.5 20", &locale),
            Err(ParseFailure::TooManyComponents(4))
        );
        assert_matches!(
            parse_degrees("34°30'10\"5\"", &locale),
            Err(ParseFailure::TooManyComponents(4))
        );
    }

    #[test]
    fn parse_with_comma_decimal_locale() {
        let locale = Locale::DE_DE;
        assert_eq!(parse_degrees("1.234", &locale).unwrap(), 1234.0);
        assert_eq!(parse_degrees("1.234,5°", &locale).unwrap(), 1234.5);
        assert_eq!(parse_degrees("34 30,5", &locale).unwrap(), 34.0 + 30.5 / 60.0);
        assert_matches!(
            parse_degrees("34,5 30", &locale),
            Err(ParseFailure::OnlyRightmostIsDecimal)
        );
        assert_matches!(
            parse_degrees("34.5 30", &locale),
            Err(ParseFailure::InvalidNumericPortion { .. })
        );
    }

    #[test]
    fn render_templates() {
        let locale = Locale::INVARIANT;
        let value = compose(false, 34.0, 12.0, 29.2);
        let format = |template| format_degrees(value, template, "", &locale, None).unwrap();

        assert_eq!(format("H.HHHH°"), "34.2081°");
        assert_eq!(format("HH°MM'SS.S\""), "34°12'29.2\"");
        assert_eq!(format("HHH°MM.MM'"), "034°12.49'");
        assert_eq!(format("H"), "34");
    }

    #[test]
    fn render_carries_rounded_seconds() {
        let locale = Locale::INVARIANT;
        let format = |value, template| format_degrees(value, template, "", &locale, None).unwrap();

        assert_eq!(format(10.999_999, "HH°MM'SS\""), "11°00'00\"");
        assert_eq!(format(-10.999_999, "HH°MM'SS\""), "-11°00'00\"");
        assert_eq!(format(10.499_999_9, "HH°MM'SS.SS\""), "10°30'00.00\"");
        assert_eq!(format(10.999_999, "HH°MM.MM'"), "11°00.00'");
        assert_eq!(format(10.999_999, "HH°MM'"), "10°59'");

        let rendered =
            format_degrees(-0.999_999, "HH°MM'SS\"I", "", &locale, Some('S')).unwrap();
        assert_eq!(rendered, "01°00'00\"S");
    }

    #[test]
    fn render_negative_below_one_degree() {
        let rendered = format_degrees(-0.5, "H°MM'", "", &Locale::INVARIANT, None).unwrap();
        assert_eq!(rendered, "-0°30'");
    }

    #[test]
    fn render_hemisphere() {
        let rendered =
            format_degrees(-39.5, "HH°MM'I", "", &Locale::INVARIANT, Some('S')).unwrap();
        assert_eq!(rendered, "39°30'S");

        let rendered = format_degrees(-39.5, "HH°MM'", "", &Locale::INVARIANT, Some('S')).unwrap();
        assert_eq!(rendered, "-39°30'");
    }

    #[test]
    fn render_two_decimal_runs() {
        let err = format_degrees(1.0, "H.H M.M", "", &Locale::INVARIANT, None).unwrap_err();
        assert_matches!(err.failure(), FormatFailure::OnlyRightmostIsDecimal);
    }

    #[test]
    fn render_special_values() {
        let locale = Locale::INVARIANT;
        assert_eq!(format_degrees(f64::NAN, "H", "", &locale, None).unwrap(), "NaN");
        assert_eq!(
            format_degrees(f64::INFINITY, "H.H M.M", "", &locale, None).unwrap(),
            "Infinity"
        );
    }
}

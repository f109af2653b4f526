//! Error types used by the crate.

use std::num::ParseFloatError;
use thiserror::Error;

/// Crate-level error enum.
#[derive(Debug, Error)]
pub enum GeoUnitsError {
    /// String could not be parsed into a value.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Value could not be rendered with the given template.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// An argument was outside of its valid range.
    #[error("argument `{name}` is out of range: {reason}")]
    ArgumentOutOfRange {
        /// Name of the argument.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// Malformed XML stream.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to write the XML stream.
    #[error("failed to write xml")]
    Io(#[from] std::io::Error),
    /// XML is well-formed, but is not a GML fragment of the expected type.
    #[error("invalid gml fragment: {0}")]
    Gml(String),
}

impl From<quick_xml::events::attributes::AttrError> for GeoUnitsError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(value.into())
    }
}

/// A string could not be parsed as a value of the given kind.
///
/// The reason is always available through [`ParseError::failure`] (and through
/// [`std::error::Error::source`]).
#[derive(Debug, Error)]
#[error("{input:?} could not be parsed as {kind}")]
pub struct ParseError {
    kind: &'static str,
    input: String,
    #[source]
    failure: ParseFailure,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, input: &str, failure: ParseFailure) -> Self {
        Self {
            kind,
            input: input.to_string(),
            failure,
        }
    }

    /// Name of the value kind the input was parsed as, e.g. `Distance`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The original input string.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The specific reason of the failure.
    pub fn failure(&self) -> &ParseFailure {
        &self.failure
    }
}

/// Specific reason of a [`ParseError`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The numeric prefix is not a number.
    #[error("invalid numeric portion {token:?}")]
    InvalidNumericPortion {
        /// The scanned numeric token.
        token: String,
        /// Error returned by the number parser.
        #[source]
        source: ParseFloatError,
    },
    /// The unit suffix matches no known unit.
    #[error("invalid unit portion {token:?}")]
    InvalidUnitPortion {
        /// The unit token after synonym normalization.
        token: String,
    },
    /// Only the last sexagesimal component may have a fractional part.
    #[error("only the rightmost component may contain a decimal separator")]
    OnlyRightmostIsDecimal,
    /// Hemisphere letter does not belong to the coordinate kind.
    #[error("invalid hemisphere {0:?}")]
    InvalidHemisphere(char),
    /// More sexagesimal components than degrees, minutes and seconds.
    #[error("expected at most 3 components, got {0}")]
    TooManyComponents(usize),
}

/// A value could not be rendered with the given format template.
#[derive(Debug, Error)]
#[error("invalid to-string format {template:?}")]
pub struct FormatError {
    template: String,
    #[source]
    failure: FormatFailure,
}

impl FormatError {
    pub(crate) fn new(template: &str, failure: FormatFailure) -> Self {
        Self {
            template: template.to_string(),
            failure,
        }
    }

    /// The template as given by the caller.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The specific reason of the failure.
    pub fn failure(&self) -> &FormatFailure {
        &self.failure
    }
}

/// Specific reason of a [`FormatError`].
#[derive(Debug, Error)]
pub enum FormatFailure {
    /// More than one placeholder run contains a decimal point.
    #[error("only the rightmost placeholder may contain a decimal point")]
    OnlyRightmostIsDecimal,
    /// The unit kind has no label for a placeholder run of this length.
    #[error("no unit label for a placeholder of length {0}")]
    UnsupportedUnitLabel(usize),
}

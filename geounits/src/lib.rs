//! Geographic value types: angles, coordinates, distances, speeds, velocities and geographic
//! rectangles.
//!
//! Every type is a small immutable value with arithmetic, unit conversion, locale-aware string
//! parsing and template-based formatting, and GML serialization:
//!
//! ```
//! use geounits::{Distance, DistanceUnit, Locale};
//!
//! let distance: Distance = "1,500 feet".parse().unwrap();
//! assert_eq!(distance.unit(), DistanceUnit::Feet);
//! assert_eq!(distance.to_local_unit_type(&Locale::INVARIANT).to_string(), "457.2 m");
//! assert_eq!(distance.format("#,##0.0 uuu", &Locale::DE_DE).unwrap(), "1.500,0 feet");
//! ```
//!
//! Parsing and formatting never read ambient settings: the separators, the special value
//! symbols and the metric/imperial preference come from an explicit [`Locale`]. `FromStr` and
//! `Display` implementations use [`Locale::INVARIANT`].

pub mod angle;
pub mod error;
pub mod format;
pub mod geo;
pub mod gml;
mod locale;
mod parse;
pub mod quantity;
mod velocity;

pub use angle::{Angle, Azimuth, CompassDirection, Hemisphere, Latitude, Longitude};
pub use error::{FormatError, FormatFailure, GeoUnitsError, ParseError, ParseFailure};
pub use geo::{Ellipsoid, GeographicRectangle, GeographicSize, Position, Position3d};
pub use gml::GmlElement;
pub use locale::Locale;
pub use quantity::{Distance, DistanceUnit, LabelStyle, Quantity, Speed, SpeedUnit, Unit};
pub use velocity::Velocity;

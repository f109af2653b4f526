use super::{GeographicSize, Position};
use crate::angle::{Azimuth, Latitude, Longitude};
use crate::quantity::Distance;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Axis-aligned rectangle in latitude/longitude space.
///
/// The constructors order the edges, so `top >= bottom` and `right >= left` always hold. The
/// center is computed once on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicRectangle {
    top: Latitude,
    bottom: Latitude,
    left: Longitude,
    right: Longitude,
    center: Position,
}

impl GeographicRectangle {
    /// Rectangle with all edges at zero.
    pub const EMPTY: GeographicRectangle = GeographicRectangle {
        top: Latitude::EQUATOR,
        bottom: Latitude::EQUATOR,
        left: Longitude::PRIME_MERIDIAN,
        right: Longitude::PRIME_MERIDIAN,
        center: Position::latlon(0.0, 0.0),
    };

    /// Creates a rectangle from its edges. Swapped edges are put in order.
    pub fn new(top: Latitude, bottom: Latitude, left: Longitude, right: Longitude) -> Self {
        let (top, bottom) = if top < bottom {
            (bottom, top)
        } else {
            (top, bottom)
        };
        let (left, right) = if right < left {
            (right, left)
        } else {
            (left, right)
        };

        let center = Position::latlon(
            (top.decimal_degrees() + bottom.decimal_degrees()) / 2.0,
            (left.decimal_degrees() + right.decimal_degrees()) / 2.0,
        );

        Self {
            top,
            bottom,
            left,
            right,
            center,
        }
    }

    /// Creates a rectangle spanning two opposite corners given in any order.
    pub fn from_corners(first: Position, second: Position) -> Self {
        Self::new(
            first.latitude(),
            second.latitude(),
            first.longitude(),
            second.longitude(),
        )
    }

    /// Creates a rectangle of the given size around the center.
    pub fn from_center(center: Position, size: GeographicSize) -> Self {
        Self::new(
            Latitude::new(center.lat() + size.half_height()),
            Latitude::new(center.lat() - size.half_height()),
            Longitude::new(center.lon() - size.half_width()),
            Longitude::new(center.lon() + size.half_width()),
        )
    }

    /// Smallest rectangle containing all the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Position>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut top = first.lat();
        let mut bottom = first.lat();
        let mut left = first.lon();
        let mut right = first.lon();

        for p in points {
            top = top.max(p.lat());
            bottom = bottom.min(p.lat());
            left = left.min(p.lon());
            right = right.max(p.lon());
        }

        Some(Self::new(
            Latitude::new(top),
            Latitude::new(bottom),
            Longitude::new(left),
            Longitude::new(right),
        ))
    }

    /// Northern edge.
    pub fn top(&self) -> Latitude {
        self.top
    }

    /// Southern edge.
    pub fn bottom(&self) -> Latitude {
        self.bottom
    }

    /// Western edge.
    pub fn left(&self) -> Longitude {
        self.left
    }

    /// Eastern edge.
    pub fn right(&self) -> Longitude {
        self.right
    }

    /// Midpoint of the diagonal.
    pub fn center(&self) -> Position {
        self.center
    }

    /// Top-left corner.
    pub fn northwest(&self) -> Position {
        Position::new(self.top, self.left)
    }

    /// Top-right corner.
    pub fn northeast(&self) -> Position {
        Position::new(self.top, self.right)
    }

    /// Bottom-left corner.
    pub fn southwest(&self) -> Position {
        Position::new(self.bottom, self.left)
    }

    /// Bottom-right corner.
    pub fn southeast(&self) -> Position {
        Position::new(self.bottom, self.right)
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.right.decimal_degrees() - self.left.decimal_degrees()
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.top.decimal_degrees() - self.bottom.decimal_degrees()
    }

    /// Width and height.
    pub fn size(&self) -> GeographicSize {
        GeographicSize::new(self.width(), self.height())
    }

    /// True if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.size().is_zero()
    }

    /// True if `other` lies entirely within this rectangle, edges included.
    pub fn is_enclosing(&self, other: &GeographicRectangle) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top <= self.top
            && other.bottom >= self.bottom
    }

    /// True if the position lies within the rectangle, edges included.
    pub fn is_enclosing_point(&self, position: &Position) -> bool {
        position.longitude() >= self.left
            && position.longitude() <= self.right
            && position.latitude() <= self.top
            && position.latitude() >= self.bottom
    }

    /// True if the rectangles share at least one point.
    pub fn is_overlapping(&self, other: &GeographicRectangle) -> bool {
        !(other.top < self.bottom
            || other.bottom > self.top
            || other.left > self.right
            || other.right < self.left)
    }

    /// True if the rectangles share no point.
    pub fn is_disjointed_from(&self, other: &GeographicRectangle) -> bool {
        !self.is_overlapping(other)
    }

    /// Common part of the two rectangles, `None` if they do not overlap.
    pub fn intersection_of(&self, other: &GeographicRectangle) -> Option<Self> {
        if !self.is_overlapping(other) {
            return None;
        }

        Some(Self::new(
            min_by_degrees(self.top, other.top),
            max_by_degrees(self.bottom, other.bottom),
            max_by_degrees(self.left, other.left),
            min_by_degrees(self.right, other.right),
        ))
    }

    /// Smallest rectangle enclosing both rectangles.
    pub fn union_with(&self, other: &GeographicRectangle) -> Self {
        Self::new(
            max_by_degrees(self.top, other.top),
            min_by_degrees(self.bottom, other.bottom),
            min_by_degrees(self.left, other.left),
            max_by_degrees(self.right, other.right),
        )
    }

    /// Rectangle of the same size whose northwest corner is moved by `distance` along
    /// `bearing`.
    pub fn translate_to(&self, bearing: Azimuth, distance: Distance) -> Self {
        let northwest = self.northwest().translate_to(bearing, distance);
        let size = self.size();

        Self::new(
            northwest.latitude(),
            Latitude::new(northwest.lat() - size.height()),
            northwest.longitude(),
            Longitude::new(northwest.lon() + size.width()),
        )
    }
}

fn min_by_degrees<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max_by_degrees<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

impl Default for GeographicRectangle {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Display for GeographicRectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.northwest(), self.southeast())
    }
}

//! # 1D Classification
//!
//! Classifies how two closed ranges `A = [a1, a2]` and `B = [b1, b2]` meet.
//!
//! ## Example
//!
//! ```rust
//! use joinery_interval::{classify, Contact, IntersectionRange, Positioning};
//!
//! let hit = classify((0.0, 10.0), (2.0, 8.0)).unwrap();
//! assert_eq!(hit.range, IntersectionRange::Span(2.0, 8.0));
//! assert_eq!(hit.contact, Contact::Overlapping);
//! assert_eq!(hit.positioning, Positioning::AContainsB);
//! ```

use std::fmt;

use config::constants::round_to_digits;
use serde::{Deserialize, Serialize};

use crate::error::IntervalError;

/// A closed range as `(low, high)`.
pub type Interval = (f64, f64);

// =============================================================================
// INTERSECTION RANGE
// =============================================================================

/// Shared part of two intervals, rounded to the configured precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IntersectionRange {
    /// The intervals do not meet.
    Empty,
    /// The intervals share a single endpoint.
    Point(f64),
    /// The intervals share a range of positive length.
    Span(f64, f64),
}

impl IntersectionRange {
    /// Number of coordinates describing the range (0, 1 or 2).
    pub fn len(&self) -> usize {
        match self {
            IntersectionRange::Empty => 0,
            IntersectionRange::Point(_) => 1,
            IntersectionRange::Span(_, _) => 2,
        }
    }

    /// True for [`IntersectionRange::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, IntersectionRange::Empty)
    }

    /// The `(low, high)` pair of a proper span.
    pub fn as_span(&self) -> Option<Interval> {
        match *self {
            IntersectionRange::Span(low, high) => Some((low, high)),
            _ => None,
        }
    }
}

// =============================================================================
// CONTACT
// =============================================================================

/// Cardinality of the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact {
    /// No shared coordinate.
    Disjoint,
    /// Exactly one shared coordinate.
    Touching,
    /// A shared range of positive length.
    Overlapping,
}

impl Contact {
    /// Signed status code: `-1` disjoint, `0` touching, `1` overlapping.
    pub fn status(self) -> i8 {
        match self {
            Contact::Disjoint => -1,
            Contact::Touching => 0,
            Contact::Overlapping => 1,
        }
    }
}

// =============================================================================
// POSITIONING
// =============================================================================

/// Symbolic relative position of interval A with respect to interval B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Positioning {
    /// A starts first (disjoint, touching or partially overlapping).
    ABeforeB,
    /// B starts first (disjoint, touching or partially overlapping).
    BBeforeA,
    /// Both endpoints coincide.
    AEqualsB,
    /// B lies strictly inside A.
    AContainsB,
    /// A lies strictly inside B.
    BContainsA,
    /// Shared start, A is longer.
    AStartsWithB,
    /// Shared start, B is longer.
    BStartsWithA,
    /// Shared end, A starts first.
    AEndsWithB,
    /// Shared end, B starts first.
    BEndsWithA,
    /// Overlap not covered by any other tag.
    Overlap,
}

impl Positioning {
    /// The tag obtained when A and B swap roles.
    ///
    /// ```rust
    /// use joinery_interval::Positioning;
    ///
    /// assert_eq!(Positioning::AContainsB.mirrored(), Positioning::BContainsA);
    /// assert_eq!(Positioning::AEqualsB.mirrored(), Positioning::AEqualsB);
    /// ```
    pub fn mirrored(self) -> Self {
        match self {
            Positioning::ABeforeB => Positioning::BBeforeA,
            Positioning::BBeforeA => Positioning::ABeforeB,
            Positioning::AEqualsB => Positioning::AEqualsB,
            Positioning::AContainsB => Positioning::BContainsA,
            Positioning::BContainsA => Positioning::AContainsB,
            Positioning::AStartsWithB => Positioning::BStartsWithA,
            Positioning::BStartsWithA => Positioning::AStartsWithB,
            Positioning::AEndsWithB => Positioning::BEndsWithA,
            Positioning::BEndsWithA => Positioning::AEndsWithB,
            Positioning::Overlap => Positioning::Overlap,
        }
    }

    /// One interval strictly contains the other.
    pub fn is_contains(self) -> bool {
        matches!(self, Positioning::AContainsB | Positioning::BContainsA)
    }

    /// The intervals share exactly one of their endpoints.
    pub fn is_edge_flush(self) -> bool {
        matches!(
            self,
            Positioning::AStartsWithB
                | Positioning::BStartsWithA
                | Positioning::AEndsWithB
                | Positioning::BEndsWithA
        )
    }

    /// One interval starts strictly before the other without containing it.
    pub fn is_before(self) -> bool {
        matches!(self, Positioning::ABeforeB | Positioning::BBeforeA)
    }

    /// Upper snake case name, e.g. `A_CONTAINS_B`.
    pub fn as_str(self) -> &'static str {
        match self {
            Positioning::ABeforeB => "A_BEFORE_B",
            Positioning::BBeforeA => "B_BEFORE_A",
            Positioning::AEqualsB => "A_EQUALS_B",
            Positioning::AContainsB => "A_CONTAINS_B",
            Positioning::BContainsA => "B_CONTAINS_A",
            Positioning::AStartsWithB => "A_STARTS_WITH_B",
            Positioning::BStartsWithA => "B_STARTS_WITH_A",
            Positioning::AEndsWithB => "A_ENDS_WITH_B",
            Positioning::BEndsWithA => "B_ENDS_WITH_A",
            Positioning::Overlap => "OVERLAP",
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// INTERSECTION
// =============================================================================

/// Full classification of two intervals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Shared range.
    pub range: IntersectionRange,
    /// Cardinality of the shared range.
    pub contact: Contact,
    /// Relative position of A with respect to B.
    pub positioning: Positioning,
}

impl Intersection {
    /// Signed status code, see [`Contact::status`].
    pub fn status(&self) -> i8 {
        self.contact.status()
    }

    /// The shared range has positive length.
    pub fn is_proper(&self) -> bool {
        self.range.len() == 2
    }
}

// =============================================================================
// CLASSIFY
// =============================================================================

fn validate(interval: Interval) -> Result<(), IntervalError> {
    let (low, high) = interval;
    if low.is_finite() && high.is_finite() && low < high {
        Ok(())
    } else {
        Err(IntervalError::InvalidInterval { low, high })
    }
}

/// Classifies interval `a` against interval `b`.
///
/// Both intervals must be finite with `low < high`.
///
/// ```rust
/// use joinery_interval::{classify, IntersectionRange, Positioning};
///
/// let touch = classify((0.0, 5.0), (5.0, 10.0)).unwrap();
/// assert_eq!(touch.range, IntersectionRange::Point(5.0));
/// assert_eq!(touch.status(), 0);
/// assert_eq!(touch.positioning, Positioning::ABeforeB);
/// ```
pub fn classify(a: Interval, b: Interval) -> Result<Intersection, IntervalError> {
    validate(a)?;
    validate(b)?;

    let (a1, a2) = a;
    let (b1, b2) = b;

    let (range, contact) = if a1 > b2 || a2 < b1 {
        (IntersectionRange::Empty, Contact::Disjoint)
    } else if a2 == b1 || a1 == b2 {
        (
            IntersectionRange::Point(round_to_digits(a1.max(b1))),
            Contact::Touching,
        )
    } else {
        (
            IntersectionRange::Span(round_to_digits(a1.max(b1)), round_to_digits(a2.min(b2))),
            Contact::Overlapping,
        )
    };

    let positioning = match contact {
        Contact::Disjoint | Contact::Touching => {
            if a1 < b1 {
                Positioning::ABeforeB
            } else {
                Positioning::BBeforeA
            }
        }
        Contact::Overlapping => overlap_positioning(a, b),
    };

    Ok(Intersection {
        range,
        contact,
        positioning,
    })
}

/// Positioning of two intervals known to overlap on a positive length.
fn overlap_positioning((a1, a2): Interval, (b1, b2): Interval) -> Positioning {
    if a1 == b1 && a2 == b2 {
        Positioning::AEqualsB
    } else if a1 < b1 && b2 < a2 {
        Positioning::AContainsB
    } else if b1 < a1 && a2 < b2 {
        Positioning::BContainsA
    } else if a1 < b1 && a2 < b2 {
        Positioning::ABeforeB
    } else if b1 < a1 && b2 < a2 {
        Positioning::BBeforeA
    } else if a1 == b1 {
        if a2 < b2 {
            Positioning::BStartsWithA
        } else {
            Positioning::AStartsWithB
        }
    } else if a2 == b2 {
        if a1 < b1 {
            Positioning::AEndsWithB
        } else {
            Positioning::BEndsWithA
        }
    } else {
        Positioning::Overlap
    }
}

#[cfg(test)]
mod tests;

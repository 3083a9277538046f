//! # Segment Types
//!
//! Boundary keywords, rounding policies and the emitted segment record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FingerError;

// =============================================================================
// SEGMENT KIND
// =============================================================================

/// Whether a segment keeps material or cuts it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentKind {
    /// Material present.
    Finger,
    /// Material cut away.
    Space,
}

impl SegmentKind {
    /// The other kind.
    pub fn opposite(self) -> Self {
        match self {
            SegmentKind::Finger => SegmentKind::Space,
            SegmentKind::Space => SegmentKind::Finger,
        }
    }

    /// Upper case name used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Finger => "FINGER",
            SegmentKind::Space => "SPACE",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// BOUNDARY
// =============================================================================

/// Segment placed at either end of the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// A full finger.
    Finger,
    /// A full space.
    Space,
    /// Half a finger.
    HalfFinger,
    /// Half a space.
    HalfSpace,
}

impl Boundary {
    /// Kind of segment this boundary emits.
    pub fn kind(self) -> SegmentKind {
        match self {
            Boundary::Finger | Boundary::HalfFinger => SegmentKind::Finger,
            Boundary::Space | Boundary::HalfSpace => SegmentKind::Space,
        }
    }

    /// Fraction of a full segment this boundary takes (1 or 0.5).
    pub fn units(self) -> f64 {
        match self {
            Boundary::Finger | Boundary::Space => 1.0,
            Boundary::HalfFinger | Boundary::HalfSpace => 0.5,
        }
    }
}

impl FromStr for Boundary {
    type Err = FingerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finger" => Ok(Boundary::Finger),
            "space" => Ok(Boundary::Space),
            "half_finger" => Ok(Boundary::HalfFinger),
            "half_space" => Ok(Boundary::HalfSpace),
            other => Err(FingerError::InvalidBoundary(other.to_string())),
        }
    }
}

// =============================================================================
// ROUNDING
// =============================================================================

/// How the length left over after whole finger/space pairs is absorbed.
///
/// `Grow*` policies floor the pair count and enlarge segments, `Shrink*`
/// policies ceil it and shrink segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Fingers absorb the leftover.
    GrowFinger,
    /// Spaces absorb the leftover.
    GrowSpace,
    /// Both absorb it, weighted by their share of the consumed length.
    #[default]
    GrowBoth,
    /// Fingers give back the excess.
    ShrinkFinger,
    /// Spaces give back the excess.
    ShrinkSpace,
    /// Both give it back, weighted by their share of the consumed length.
    ShrinkBoth,
}

impl Rounding {
    /// True for the `Grow*` policies.
    pub fn grows(self) -> bool {
        matches!(
            self,
            Rounding::GrowFinger | Rounding::GrowSpace | Rounding::GrowBoth
        )
    }
}

impl FromStr for Rounding {
    type Err = FingerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grow_finger" => Ok(Rounding::GrowFinger),
            "grow_space" => Ok(Rounding::GrowSpace),
            "grow_both" => Ok(Rounding::GrowBoth),
            "shrink_finger" => Ok(Rounding::ShrinkFinger),
            "shrink_space" => Ok(Rounding::ShrinkSpace),
            "shrink_both" => Ok(Rounding::ShrinkBoth),
            other => Err(FingerError::InvalidRounding(other.to_string())),
        }
    }
}

// =============================================================================
// SEGMENT
// =============================================================================

/// One finger or space along the edge.
///
/// Positions are measured from the start of the edge; `*_time` fields are the
/// same positions as fractions of the total length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Finger or space.
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// Segment length.
    pub length: f64,
    /// Start position.
    pub start: f64,
    /// End position.
    pub end: f64,
    /// `length / total`.
    pub portion: f64,
    /// `start / total`.
    pub start_time: f64,
    /// `end / total`.
    pub end_time: f64,
}

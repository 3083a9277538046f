//! # Joints
//!
//! Finger-joint roles for two perpendicular panels whose volumes overlap.
//!
//! A pair is ordered front, side, top before classification. Three axes are
//! then compared in a fixed order per face pair:
//!
//! | Pair       | Compared axes | First edge (along, across) | Second edge |
//! |------------|---------------|----------------------------|-------------|
//! | front/side | X, Y, Z       | front (X, Z) vertical      | side (Y, Z) vertical |
//! | front/top  | Z, Y, X       | front (X, Z) horizontal    | top (X, Y) horizontal |
//! | side/top   | Z, X, Y       | side (Y, Z) horizontal     | top (X, Y) vertical |
//!
//! The first panel gets the outer fingers when it sits on the edge of the
//! second along the first compared axis; the inner ones when that holds along
//! the second compared axis instead. Otherwise the panels cross mid-way and
//! are joined with half laps, unless one contains the other along the third
//! axis.

use config::constants::JoineryConfig;
use joinery_fingers::{generate, Boundary, Rounding, Segment};
use joinery_interval::{Intersection, Interval, Positioning};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::panel::PanelId;
use crate::quantity::{Axis, Face};

// =============================================================================
// ROLES
// =============================================================================

/// What a panel edge does at a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FingerRole {
    /// Fingers on the outside of the corner; the edge ends with spaces.
    Outer,
    /// Fingers filling the outer panel's spaces; the edge ends with fingers.
    Inner,
    /// Lower half of a half lap.
    HalfBottom,
    /// Upper half of a half lap.
    HalfUp,
}

impl FingerRole {
    /// Boundary segment for a finger layout, `None` for half laps.
    pub fn boundary(self) -> Option<Boundary> {
        match self {
            FingerRole::Outer => Some(Boundary::Space),
            FingerRole::Inner => Some(Boundary::Finger),
            FingerRole::HalfBottom | FingerRole::HalfUp => None,
        }
    }
}

/// Orientation of the joint line on the panel face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

fn meets_at_edge(positioning: Positioning) -> bool {
    positioning.is_edge_flush() || positioning.is_before()
}

/// Roles of the first and second panel from the three compared axes.
///
/// `None` when one panel is strictly inside the other along the third axis,
/// which leaves no room for any joint.
pub fn infer_roles(
    first: &Intersection,
    second: &Intersection,
    third: &Intersection,
) -> Option<(FingerRole, FingerRole)> {
    if meets_at_edge(first.positioning) {
        return Some((FingerRole::Outer, FingerRole::Inner));
    }
    if meets_at_edge(second.positioning) {
        return Some((FingerRole::Inner, FingerRole::Outer));
    }
    match third.positioning {
        positioning if positioning.is_contains() => None,
        Positioning::ABeforeB | Positioning::BStartsWithA | Positioning::AEndsWithB => {
            Some((FingerRole::HalfBottom, FingerRole::HalfUp))
        }
        _ => Some((FingerRole::HalfUp, FingerRole::HalfBottom)),
    }
}

// =============================================================================
// FACE PAIRS
// =============================================================================

/// Placement of one joint edge on its panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgePlacement {
    pub along: Axis,
    pub across: Axis,
    pub direction: Direction,
}

/// Classification order and edge placements for an ordered face pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pairing {
    pub compared: [Axis; 3],
    pub first: EdgePlacement,
    pub second: EdgePlacement,
}

const fn placement(along: Axis, across: Axis, direction: Direction) -> EdgePlacement {
    EdgePlacement {
        along,
        across,
        direction,
    }
}

impl Pairing {
    /// Table entry for faces already ordered front, side, top.
    pub(crate) fn for_faces(first: Face, second: Face) -> Option<Self> {
        use Axis::{X, Y, Z};
        use Direction::{Horizontal, Vertical};

        match (first, second) {
            (Face::Front, Face::Side) => Some(Pairing {
                compared: [X, Y, Z],
                first: placement(X, Z, Vertical),
                second: placement(Y, Z, Vertical),
            }),
            (Face::Front, Face::Top) => Some(Pairing {
                compared: [Z, Y, X],
                first: placement(X, Z, Horizontal),
                second: placement(X, Y, Horizontal),
            }),
            (Face::Side, Face::Top) => Some(Pairing {
                compared: [Z, X, Y],
                first: placement(Y, Z, Horizontal),
                second: placement(X, Y, Vertical),
            }),
            _ => None,
        }
    }
}

// =============================================================================
// JOINT
// =============================================================================

/// One side of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointEdge {
    pub panel: PanelId,
    /// Shared span along the first face axis.
    pub along: Interval,
    /// Shared span along the second face axis.
    pub across: Interval,
    pub direction: Direction,
    pub role: FingerRole,
}

impl JointEdge {
    /// Length of the joint line.
    pub fn length(&self) -> f64 {
        let (low, high) = match self.direction {
            Direction::Horizontal => self.along,
            Direction::Vertical => self.across,
        };
        high - low
    }

    /// Finger layout along the joint line, `None` for half laps.
    pub fn layout(&self, params: &FingerParams) -> Result<Option<Vec<Segment>>, LayoutError> {
        let Some(boundary) = self.role.boundary() else {
            return Ok(None);
        };
        let segments = generate(
            self.length(),
            params.finger_length,
            params.space_length,
            boundary,
            boundary,
            params.rounding,
        )?;
        Ok(Some(segments))
    }
}

/// Two perpendicular panels joined along their shared volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Panel earlier in front, side, top order.
    pub first: JointEdge,
    pub second: JointEdge,
}

impl Joint {
    pub fn panels(&self) -> (PanelId, PanelId) {
        (self.first.panel, self.second.panel)
    }

    pub fn edge(&self, panel: PanelId) -> Option<&JointEdge> {
        [&self.first, &self.second]
            .into_iter()
            .find(|edge| edge.panel == panel)
    }
}

// =============================================================================
// FINGER PARAMS
// =============================================================================

/// Finger sizes and rounding policy used to lay out joint edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerParams {
    pub finger_length: f64,
    pub space_length: f64,
    pub rounding: Rounding,
}

impl FingerParams {
    pub fn new(config: JoineryConfig, rounding: Rounding) -> Self {
        Self {
            finger_length: config.finger_length,
            space_length: config.space_length,
            rounding,
        }
    }
}

impl From<JoineryConfig> for FingerParams {
    fn from(config: JoineryConfig) -> Self {
        Self::new(config, Rounding::default())
    }
}

impl Default for FingerParams {
    fn default() -> Self {
        JoineryConfig::default().into()
    }
}

#[cfg(test)]
mod tests;

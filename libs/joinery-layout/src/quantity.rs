//! # Quantities
//!
//! Axes, slots and the twelve named per-axis measures of a panel.
//!
//! | Axis | Low      | Center     | High    | Extent   |
//! |------|----------|------------|---------|----------|
//! | X    | `left`   | `center_x` | `right` | `width`  |
//! | Y    | `front`  | `center_y` | `back`  | `depth`  |
//! | Z    | `bottom` | `center_z` | `top`   | `height` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// AXIS
// =============================================================================

/// A world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `[x, y, z]` arrays.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SLOT
// =============================================================================

/// One of the four measures of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Minimum edge.
    Low,
    /// Midpoint.
    Center,
    /// Maximum edge.
    High,
    /// Size along the axis.
    Extent,
}

impl Slot {
    /// All slots in index order.
    pub const ALL: [Slot; 4] = [Slot::Low, Slot::Center, Slot::High, Slot::Extent];

    /// Position of the slot in resolved value arrays.
    pub fn index(self) -> usize {
        match self {
            Slot::Low => 0,
            Slot::Center => 1,
            Slot::High => 2,
            Slot::Extent => 3,
        }
    }

    /// Order in which initial assignments are applied: extents, edges, centers.
    pub(crate) fn application_rank(self) -> u8 {
        match self {
            Slot::Extent => 0,
            Slot::Low | Slot::High => 1,
            Slot::Center => 2,
        }
    }
}

/// The two slots that can be grown or shrunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Low,
    High,
}

impl Edge {
    pub fn slot(self) -> Slot {
        match self {
            Edge::Low => Slot::Low,
            Edge::High => Slot::High,
        }
    }
}

// =============================================================================
// QUANTITY
// =============================================================================

/// A named per-axis measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Left,
    CenterX,
    Right,
    Width,
    Front,
    CenterY,
    Back,
    Depth,
    Bottom,
    CenterZ,
    Top,
    Height,
}

impl Quantity {
    /// All quantities, grouped by axis in slot order.
    pub const ALL: [Quantity; 12] = [
        Quantity::Left,
        Quantity::CenterX,
        Quantity::Right,
        Quantity::Width,
        Quantity::Front,
        Quantity::CenterY,
        Quantity::Back,
        Quantity::Depth,
        Quantity::Bottom,
        Quantity::CenterZ,
        Quantity::Top,
        Quantity::Height,
    ];

    /// The quantity stored in `slot` of `axis`.
    ///
    /// ```rust
    /// use joinery_layout::{Axis, Quantity, Slot};
    ///
    /// assert_eq!(Quantity::new(Axis::Y, Slot::High), Quantity::Back);
    /// ```
    pub fn new(axis: Axis, slot: Slot) -> Self {
        Self::ALL[axis.index() * 4 + slot.index()]
    }

    pub fn axis(self) -> Axis {
        Axis::ALL[self as usize / 4]
    }

    pub fn slot(self) -> Slot {
        Slot::ALL[self as usize % 4]
    }

    /// Snake case name, e.g. `center_x`.
    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Left => "left",
            Quantity::CenterX => "center_x",
            Quantity::Right => "right",
            Quantity::Width => "width",
            Quantity::Front => "front",
            Quantity::CenterY => "center_y",
            Quantity::Back => "back",
            Quantity::Depth => "depth",
            Quantity::Bottom => "bottom",
            Quantity::CenterZ => "center_z",
            Quantity::Top => "top",
            Quantity::Height => "height",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FACE
// =============================================================================

/// Orientation of a panel, named after the side of the box it forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Thin along X.
    Side,
    /// Thin along Y.
    Front,
    /// Thin along Z.
    Top,
}

impl Face {
    /// Axis whose extent is the panel thickness.
    pub fn thin_axis(self) -> Axis {
        match self {
            Face::Side => Axis::X,
            Face::Front => Axis::Y,
            Face::Top => Axis::Z,
        }
    }

    /// The face whose thickness lies along `axis`.
    pub fn with_thin_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Face::Side,
            Axis::Y => Face::Front,
            Axis::Z => Face::Top,
        }
    }

    /// The two axes spanning the face, as used for 2D outlines.
    pub fn plane_axes(self) -> [Axis; 2] {
        match self {
            Face::Side => [Axis::Y, Axis::Z],
            Face::Front => [Axis::X, Axis::Z],
            Face::Top => [Axis::X, Axis::Y],
        }
    }

    /// Ordering used when pairing panels for joints: front, side, top.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Face::Front => 0,
            Face::Side => 1,
            Face::Top => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Face::Side => "side",
            Face::Front => "front",
            Face::Top => "top",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown face name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown face '{0}' (expected side, front or top)")]
pub struct ParseFaceError(pub String);

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "side" => Ok(Face::Side),
            "front" => Ok(Face::Front),
            "top" => Ok(Face::Top),
            other => Err(ParseFaceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;

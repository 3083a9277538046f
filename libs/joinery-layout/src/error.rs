//! # Layout Errors
//!
//! Error types for constraint assignment, resolution and design validation.
//!
//! Under-defined quantities are not errors: they resolve to `None`.

use joinery_fingers::FingerError;
use joinery_interval::IntervalError;
use thiserror::Error;

use crate::panel::PanelId;
use crate::quantity::{Axis, Face, Quantity};

/// Errors that can occur while building or evaluating a panel layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A numeric constraint is negative or not finite.
    #[error("Invalid constraint on {label}.{quantity}: {value} (expected a finite non-negative number)")]
    InvalidConstraint {
        /// Panel label.
        label: String,
        /// Quantity being assigned.
        quantity: Quantity,
        /// Rejected value.
        value: f64,
    },

    /// Panel thickness is zero, negative or not finite.
    #[error("Invalid thickness for {label}: {thickness} (expected a finite positive number)")]
    InvalidThickness {
        /// Panel label.
        label: String,
        /// Rejected thickness.
        thickness: f64,
    },

    /// The quantity is fixed by the panel thickness.
    #[error("Unsupported assignment: {label}.{quantity} is the thickness of a {face} panel")]
    UnsupportedAssignment {
        /// Panel label.
        label: String,
        /// Quantity being assigned.
        quantity: Quantity,
        /// Face of the panel.
        face: Face,
    },

    /// More than two quantities pinned on one axis.
    #[error("Over-defined: {label} has more than 2 constraints on axis {axis}")]
    OverDefined {
        /// Panel label.
        label: String,
        /// Offending axis.
        axis: Axis,
    },

    /// Grow/shrink on an edge that has no stored value.
    #[error("Not set: cannot grow or shrink {label}.{quantity}, it has no stored value")]
    NotSet {
        /// Panel label.
        label: String,
        /// Edge quantity.
        quantity: Quantity,
    },

    /// Bounds requested on an axis that cannot be resolved.
    #[error("Under-defined: {label} has no resolved bounds on axis {axis}")]
    UnderDefined {
        /// Panel label.
        label: String,
        /// Unresolved axis.
        axis: Axis,
    },

    /// A reference chain leads back to a quantity being resolved.
    #[error("Cyclic reference: {label}.{quantity} depends on itself")]
    CyclicReference {
        /// Panel label.
        label: String,
        /// Quantity re-entered during resolution.
        quantity: Quantity,
    },

    /// A reference expression divided by zero.
    #[error("Division by zero in reference expression")]
    DivisionByZero,

    /// The id does not belong to this assembly.
    #[error("Unknown panel: {0}")]
    UnknownPanel(PanelId),

    /// Two coplanar panels share a volume.
    #[error("Collision between {first} and {second}")]
    Collision {
        /// First panel label.
        first: String,
        /// Second panel label.
        second: String,
    },

    /// Panels nest without room for fingers.
    #[error("Invalid join between {}", .panels.join(", "))]
    InvalidJoin {
        /// Labels of the panels involved.
        panels: Vec<String>,
    },

    /// Bounds rejected by the interval classifier.
    #[error("Interval error: {0}")]
    Interval(#[from] IntervalError),

    /// Finger layout failure on a joint edge.
    #[error("Finger layout error: {0}")]
    Finger(#[from] FingerError),
}

// =============================================================================
// TESTS
// =============================================================================

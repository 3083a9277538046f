//! # Panels
//!
//! A panel is a flat board: a face, a thickness and three [`AxisModel`]s.
//! The extent of the thin axis is the thickness and cannot be assigned.
//!
//! Panels live in an [`Assembly`](crate::Assembly) and are addressed by
//! [`PanelId`]. Handles to their quantities are plain [`Expr`] lookups:
//!
//! ```rust
//! use joinery_layout::{Assembly, Face, PanelSpec};
//!
//! let mut assembly = Assembly::new();
//! let back = assembly
//!     .add(PanelSpec::new("back", 4.3, Face::Front).center_x(0.0).width(800.0))
//!     .unwrap();
//! let spec = PanelSpec::new("left", 4.3, Face::Side).left(back.left());
//! assert_eq!(spec.label(), "left");
//! ```

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{AxisContext, AxisModel};
use crate::error::LayoutError;
use crate::quantity::{Axis, Edge, Face, Quantity};
use crate::reference::Expr;

// =============================================================================
// PANEL ID
// =============================================================================

/// Handle to a panel inside its assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub(crate) usize);

impl PanelId {
    /// Position in insertion order.
    pub fn index(self) -> usize {
        self.0
    }

    /// Reference to one of this panel's quantities.
    pub fn get(self, quantity: Quantity) -> Expr {
        Expr::lookup(self, quantity)
    }
}

macro_rules! lookup_handles {
    ($($name:ident => $quantity:ident),* $(,)?) => {
        impl PanelId {
            $(
                pub fn $name(self) -> Expr {
                    self.get(Quantity::$quantity)
                }
            )*
        }
    };
}

lookup_handles! {
    left => Left,
    center_x => CenterX,
    right => Right,
    width => Width,
    front => Front,
    center_y => CenterY,
    back => Back,
    depth => Depth,
    bottom => Bottom,
    center_z => CenterZ,
    top => Top,
    height => Height,
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

// =============================================================================
// PANEL SPEC
// =============================================================================

/// Everything needed to create a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    label: String,
    thickness: f64,
    face: Face,
    assignments: Vec<(Quantity, Expr)>,
}

macro_rules! spec_setters {
    ($($name:ident => $quantity:ident),* $(,)?) => {
        impl PanelSpec {
            $(
                pub fn $name(self, value: impl Into<Expr>) -> Self {
                    self.with(Quantity::$quantity, value)
                }
            )*
        }
    };
}

impl PanelSpec {
    pub fn new(label: impl Into<String>, thickness: f64, face: Face) -> Self {
        Self {
            label: label.into(),
            thickness,
            face,
            assignments: Vec::new(),
        }
    }

    /// Adds an initial assignment.
    pub fn with(mut self, quantity: Quantity, value: impl Into<Expr>) -> Self {
        self.assignments.push((quantity, value.into()));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Builds the panel, applying extents first, then edges, then centers.
    pub(crate) fn build(self) -> Result<Panel, LayoutError> {
        let PanelSpec {
            label,
            thickness,
            face,
            mut assignments,
        } = self;
        let mut panel = Panel::new(label, thickness, face)?;
        assignments.sort_by_key(|(quantity, _)| quantity.slot().application_rank());
        for (quantity, value) in assignments {
            panel.set(quantity, value)?;
        }
        Ok(panel)
    }
}

spec_setters! {
    left => Left,
    center_x => CenterX,
    right => Right,
    width => Width,
    front => Front,
    center_y => CenterY,
    back => Back,
    depth => Depth,
    bottom => Bottom,
    center_z => CenterZ,
    top => Top,
    height => Height,
}

// =============================================================================
// PANEL
// =============================================================================

/// A flat board positioned by per-axis constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    label: String,
    thickness: f64,
    face: Face,
    axes: [AxisModel; 3],
    offset: DVec3,
}

impl Panel {
    fn new(label: String, thickness: f64, face: Face) -> Result<Self, LayoutError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(LayoutError::InvalidThickness { label, thickness });
        }
        Ok(Self {
            label,
            thickness,
            face,
            axes: Axis::ALL.map(AxisModel::new),
            offset: DVec3::ZERO,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn face(&self) -> Face {
        self.face
    }

    /// Accumulated translation from move operations.
    pub fn offset(&self) -> DVec3 {
        self.offset
    }

    pub fn axis(&self, axis: Axis) -> &AxisModel {
        &self.axes[axis.index()]
    }

    /// Stored expression of a quantity.
    pub fn stored(&self, quantity: Quantity) -> Option<&Expr> {
        self.axis(quantity.axis()).stored(quantity.slot())
    }

    /// Context the axis models need: label, thickness override and offset.
    pub fn context(&self, axis: Axis) -> AxisContext<'_> {
        context_for(&self.label, self.face, self.thickness, self.offset, axis)
    }

    // -------------------------------------------------------------------------
    // Assignment
    // -------------------------------------------------------------------------

    /// Stores a constraint.
    pub fn set(&mut self, quantity: Quantity, value: impl Into<Expr>) -> Result<(), LayoutError> {
        self.assign(quantity, Some(value.into()))
    }

    /// Removes a constraint.
    pub fn clear(&mut self, quantity: Quantity) -> Result<(), LayoutError> {
        self.assign(quantity, None)
    }

    /// Stores or clears a constraint.
    pub fn assign(&mut self, quantity: Quantity, value: Option<Expr>) -> Result<(), LayoutError> {
        let axis = quantity.axis();
        let ctx = context_for(&self.label, self.face, self.thickness, self.offset, axis);
        let summary = value.as_ref().map(Expr::to_string);
        self.axes[axis.index()].set(quantity.slot(), value, &ctx)?;
        debug!(panel = %self.label, %quantity, value = ?summary, "constraint set");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Definition state
    // -------------------------------------------------------------------------

    pub fn is_well_defined_on(&self, axis: Axis) -> bool {
        self.axis(axis).is_well_defined(&self.context(axis))
    }

    pub fn is_under_defined_on(&self, axis: Axis) -> bool {
        self.axis(axis).is_under_defined(&self.context(axis))
    }

    pub fn is_over_defined_on(&self, axis: Axis) -> bool {
        self.axis(axis).is_over_defined(&self.context(axis))
    }

    /// Exactly two constraints on every axis.
    pub fn is_well_defined(&self) -> bool {
        Axis::ALL.into_iter().all(|axis| self.is_well_defined_on(axis))
    }

    pub fn is_under_defined(&self) -> bool {
        Axis::ALL.into_iter().any(|axis| self.is_under_defined_on(axis))
    }

    pub fn is_over_defined(&self) -> bool {
        Axis::ALL.into_iter().any(|axis| self.is_over_defined_on(axis))
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Shifts the resolved position along `axis`.
    pub fn translate(&mut self, axis: Axis, delta: f64) {
        self.offset[axis.index()] += delta;
        debug!(panel = %self.label, %axis, delta, "panel moved");
    }

    pub fn move_left(&mut self, distance: f64) {
        self.translate(Axis::X, -distance);
    }

    pub fn move_right(&mut self, distance: f64) {
        self.translate(Axis::X, distance);
    }

    /// Towards the front, i.e. decreasing Y.
    pub fn move_forward(&mut self, distance: f64) {
        self.translate(Axis::Y, -distance);
    }

    pub fn move_backward(&mut self, distance: f64) {
        self.translate(Axis::Y, distance);
    }

    pub fn move_down(&mut self, distance: f64) {
        self.translate(Axis::Z, -distance);
    }

    pub fn move_up(&mut self, distance: f64) {
        self.translate(Axis::Z, distance);
    }

    // -------------------------------------------------------------------------
    // Grow / shrink
    // -------------------------------------------------------------------------

    /// Moves a stored edge outward.
    ///
    /// Fails with [`LayoutError::NotSet`] when the edge has no stored value.
    pub fn grow(&mut self, axis: Axis, edge: Edge, amount: impl Into<Expr>) -> Result<(), LayoutError> {
        let ctx = context_for(&self.label, self.face, self.thickness, self.offset, axis);
        self.axes[axis.index()].grow(edge, amount.into(), &ctx)?;
        debug!(panel = %self.label, quantity = %Quantity::new(axis, edge.slot()), "edge grown");
        Ok(())
    }

    /// Moves a stored edge inward.
    pub fn shrink(&mut self, axis: Axis, edge: Edge, amount: impl Into<Expr>) -> Result<(), LayoutError> {
        let ctx = context_for(&self.label, self.face, self.thickness, self.offset, axis);
        self.axes[axis.index()].shrink(edge, amount.into(), &ctx)?;
        debug!(panel = %self.label, quantity = %Quantity::new(axis, edge.slot()), "edge shrunk");
        Ok(())
    }
}

macro_rules! edge_adjusters {
    ($($grow:ident, $shrink:ident => $axis:ident, $edge:ident);* $(;)?) => {
        impl Panel {
            $(
                pub fn $grow(&mut self, amount: impl Into<Expr>) -> Result<(), LayoutError> {
                    self.grow(Axis::$axis, Edge::$edge, amount)
                }

                pub fn $shrink(&mut self, amount: impl Into<Expr>) -> Result<(), LayoutError> {
                    self.shrink(Axis::$axis, Edge::$edge, amount)
                }
            )*
        }
    };
}

edge_adjusters! {
    grow_left, shrink_left => X, Low;
    grow_right, shrink_right => X, High;
    grow_front, shrink_front => Y, Low;
    grow_back, shrink_back => Y, High;
    grow_bottom, shrink_bottom => Z, Low;
    grow_top, shrink_top => Z, High;
}

fn context_for(label: &str, face: Face, thickness: f64, offset: DVec3, axis: Axis) -> AxisContext<'_> {
    AxisContext {
        label,
        extent_override: (face.thin_axis() == axis).then_some(thickness),
        offset: offset[axis.index()],
    }
}

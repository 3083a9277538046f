//! # Assembly
//!
//! Arena owning every panel of a design.
//!
//! Lookups between panels resolve through the assembly, which tracks the
//! quantities under resolution on a [`Trail`] so that a reference cycle fails
//! with [`LayoutError::CyclicReference`] instead of recursing forever.
//! Resolution is pull-based: nothing is cached and every read re-evaluates.
//!
//! ## Example
//!
//! ```rust
//! use joinery_layout::{Assembly, Face, PanelSpec, Quantity};
//!
//! let mut assembly = Assembly::new();
//! let back = assembly
//!     .add(
//!         PanelSpec::new("back", 4.3, Face::Front)
//!             .center_x(400.0)
//!             .width(800.0)
//!             .center_y(300.0)
//!             .bottom(0.0)
//!             .height(600.0),
//!     )
//!     .unwrap();
//! let side = assembly
//!     .add(
//!         PanelSpec::new("side", 4.3, Face::Side)
//!             .left(back.left())
//!             .back(back.back())
//!             .depth(300.0)
//!             .bottom(back.bottom())
//!             .top(back.top()),
//!     )
//!     .unwrap();
//!
//! assert_eq!(assembly.value(side, Quantity::Right).unwrap(), Some(4.3));
//! assert_eq!(assembly.value(side, Quantity::Top).unwrap(), Some(600.0));
//! ```

use joinery_interval::{Bounds2, Bounds3, Interval};
use tracing::debug;

use crate::axis::AxisValues;
use crate::error::LayoutError;
use crate::panel::{Panel, PanelId, PanelSpec};
use crate::quantity::{Axis, Face, Quantity, Slot};
use crate::reference::{Expr, Producer, Trail};

/// All panels of a design.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    panels: Vec<Panel>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a panel from its spec.
    ///
    /// ## Errors
    ///
    /// Any assignment error from the spec. Nothing is added on failure.
    pub fn add(&mut self, spec: PanelSpec) -> Result<PanelId, LayoutError> {
        let panel = spec.build()?;
        let id = PanelId(self.panels.len());
        debug!(
            panel = panel.label(),
            %id,
            face = %panel.face(),
            thickness = panel.thickness(),
            "panel added"
        );
        self.panels.push(panel);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panel ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = PanelId> + '_ {
        (0..self.panels.len()).map(PanelId)
    }

    pub fn panel(&self, id: PanelId) -> Result<&Panel, LayoutError> {
        self.panels.get(id.0).ok_or(LayoutError::UnknownPanel(id))
    }

    /// Mutable access for assignments, moves and edge adjustments.
    pub fn panel_mut(&mut self, id: PanelId) -> Result<&mut Panel, LayoutError> {
        self.panels.get_mut(id.0).ok_or(LayoutError::UnknownPanel(id))
    }

    pub fn label(&self, id: PanelId) -> Result<&str, LayoutError> {
        Ok(self.panel(id)?.label())
    }

    // -------------------------------------------------------------------------
    // Quantities
    // -------------------------------------------------------------------------

    /// Reference to a quantity, for use in other panels' constraints.
    pub fn get(&self, id: PanelId, quantity: Quantity) -> Result<Expr, LayoutError> {
        self.panel(id)?;
        Ok(id.get(quantity))
    }

    pub fn set(&mut self, id: PanelId, quantity: Quantity, value: impl Into<Expr>) -> Result<(), LayoutError> {
        self.panel_mut(id)?.set(quantity, value)
    }

    pub fn clear(&mut self, id: PanelId, quantity: Quantity) -> Result<(), LayoutError> {
        self.panel_mut(id)?.clear(quantity)
    }

    /// Resolved value of a quantity, `None` when under-defined.
    pub fn value(&self, id: PanelId, quantity: Quantity) -> Result<Option<f64>, LayoutError> {
        self.resolve(id, quantity, &mut Trail::new())
    }

    /// Resolved low, center, high and extent of one axis.
    pub fn resolved_axis(&self, id: PanelId, axis: Axis) -> Result<AxisValues, LayoutError> {
        let panel = self.panel(id)?;
        panel
            .axis(axis)
            .resolve(&panel.context(axis), self, &mut Trail::new())
    }

    /// Resolved values of all three axes.
    pub fn resolved_values(&self, id: PanelId) -> Result<[AxisValues; 3], LayoutError> {
        Ok([
            self.resolved_axis(id, Axis::X)?,
            self.resolved_axis(id, Axis::Y)?,
            self.resolved_axis(id, Axis::Z)?,
        ])
    }

    /// Every axis has two slots that actually evaluate.
    ///
    /// Stricter than [`Panel::is_well_defined`]: a reference to an
    /// under-defined quantity counts as missing.
    pub fn is_resolved_well_defined(&self, id: PanelId) -> Result<bool, LayoutError> {
        let panel = self.panel(id)?;
        for axis in Axis::ALL {
            let count =
                panel
                    .axis(axis)
                    .resolved_count(&panel.context(axis), self, &mut Trail::new())?;
            if count != 2 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Renders an expression with panel labels, e.g. `(Ref<c1.left> + 5)`.
    pub fn describe(&self, expr: &Expr) -> String {
        let mut out = String::new();
        let label = |id: PanelId| match self.panel(id) {
            Ok(panel) => panel.label().to_string(),
            Err(_) => id.to_string(),
        };
        // Writing into a String cannot fail.
        let _ = expr.write_with(&mut out, &label);
        out
    }

    // -------------------------------------------------------------------------
    // Bounds
    // -------------------------------------------------------------------------

    /// `(low, high)` on one axis, `None` when the axis is under-defined.
    pub fn bounds_on_axis(&self, id: PanelId, axis: Axis) -> Result<Option<Interval>, LayoutError> {
        let values = self.resolved_axis(id, axis)?;
        Ok(match (values[Slot::Low.index()], values[Slot::High.index()]) {
            (Some(low), Some(high)) => Some((low, high)),
            _ => None,
        })
    }

    fn required_bounds(&self, id: PanelId, axis: Axis) -> Result<Interval, LayoutError> {
        match self.bounds_on_axis(id, axis)? {
            Some(bounds) => Ok(bounds),
            None => Err(LayoutError::UnderDefined {
                label: self.label(id)?.to_string(),
                axis,
            }),
        }
    }

    /// Bounds on all three axes.
    ///
    /// Fails with [`LayoutError::UnderDefined`] on the first axis that
    /// cannot be resolved.
    pub fn full_bounds(&self, id: PanelId) -> Result<Bounds3, LayoutError> {
        Ok([
            self.required_bounds(id, Axis::X)?,
            self.required_bounds(id, Axis::Y)?,
            self.required_bounds(id, Axis::Z)?,
        ])
    }

    /// Outline on the plane of `face`, defaulting to the panel's own face.
    pub fn face_bounds(&self, id: PanelId, face: Option<Face>) -> Result<Bounds2, LayoutError> {
        let face = match face {
            Some(face) => face,
            None => self.panel(id)?.face(),
        };
        let [first, second] = face.plane_axes();
        Ok([self.required_bounds(id, first)?, self.required_bounds(id, second)?])
    }

    /// OpenSCAD preview of the panel as a centered cube.
    pub fn to_scad(&self, id: PanelId) -> Result<String, LayoutError> {
        let mut centers = [0.0; 3];
        let mut extents = [0.0; 3];
        for axis in Axis::ALL {
            let values = self.resolved_axis(id, axis)?;
            let (Some(center), Some(extent)) = (values[Slot::Center.index()], values[Slot::Extent.index()]) else {
                return Err(LayoutError::UnderDefined {
                    label: self.label(id)?.to_string(),
                    axis,
                });
            };
            centers[axis.index()] = center;
            extents[axis.index()] = extent;
        }

        Ok(format!(
            "translate([{}, {}, {}]) cube([{}, {}, {}], center=true);",
            centers[0], centers[1], centers[2], extents[0], extents[1], extents[2]
        ))
    }
}

impl Producer for Assembly {
    fn resolve(
        &self,
        panel: PanelId,
        quantity: Quantity,
        trail: &mut Trail,
    ) -> Result<Option<f64>, LayoutError> {
        let owner = self.panel(panel)?;
        if !trail.enter(panel, quantity) {
            return Err(LayoutError::CyclicReference {
                label: owner.label().to_string(),
                quantity,
            });
        }
        let axis = quantity.axis();
        let result = owner
            .axis(axis)
            .value(quantity.slot(), &owner.context(axis), self, trail);
        trail.leave();
        result
    }

    fn stored(&self, panel: PanelId, quantity: Quantity) -> Option<&Expr> {
        self.panels.get(panel.0)?.stored(quantity)
    }
}

//! # Axis Model
//!
//! Two-of-four constraint resolution for one axis of a panel.
//!
//! Each axis has four slots: low edge, center, high edge and extent. At most
//! two may be pinned; the other two are derived in closed form. When the
//! panel thickness fixes the extent of its thin axis, that slot counts as
//! pinned and cannot be assigned.
//!
//! ## Resolution
//!
//! | Pinned           | Derived                                      |
//! |------------------|----------------------------------------------|
//! | low, center      | extent = 2(center - low), high = low + extent |
//! | low, high        | center = (low + high) / 2, extent = high - low |
//! | low, extent      | center = low + extent / 2, high = low + extent |
//! | center, high     | extent = 2(high - center), low = high - extent |
//! | center, extent   | low/high = center -/+ extent / 2             |
//! | high, extent     | low = high - extent, center = high - extent / 2 |
//!
//! Inverted results (`low > high`) are swapped and the center and extent
//! recomputed. The panel offset is then added to low, center and high.

use tracing::trace;

use crate::error::LayoutError;
use crate::quantity::{Axis, Edge, Face, Quantity, Slot};
use crate::reference::{Expr, Producer, Trail};

/// Resolved values in slot order; `None` where the axis is under-defined.
pub type AxisValues = [Option<f64>; 4];

/// Panel state injected into an axis for assignment and resolution.
#[derive(Debug, Clone, Copy)]
pub struct AxisContext<'a> {
    /// Owner label, for diagnostics.
    pub label: &'a str,
    /// Thickness pinning the extent slot, on the panel's thin axis.
    pub extent_override: Option<f64>,
    /// Translation added to resolved positions.
    pub offset: f64,
}

/// Stored constraints of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisModel {
    axis: Axis,
    slots: [Option<Expr>; 4],
}

impl AxisModel {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            slots: Default::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Stored expression of a slot.
    pub fn stored(&self, slot: Slot) -> Option<&Expr> {
        self.slots[slot.index()].as_ref()
    }

    fn is_pinned(&self, slot: Slot, ctx: &AxisContext<'_>) -> bool {
        (slot == Slot::Extent && ctx.extent_override.is_some()) || self.slots[slot.index()].is_some()
    }

    /// Number of pinned slots, counting the thickness override.
    pub fn pinned_count(&self, ctx: &AxisContext<'_>) -> usize {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.is_pinned(*slot, ctx))
            .count()
    }

    pub fn is_well_defined(&self, ctx: &AxisContext<'_>) -> bool {
        self.pinned_count(ctx) == 2
    }

    pub fn is_under_defined(&self, ctx: &AxisContext<'_>) -> bool {
        self.pinned_count(ctx) < 2
    }

    pub fn is_over_defined(&self, ctx: &AxisContext<'_>) -> bool {
        self.pinned_count(ctx) > 2
    }

    /// Stores or clears a slot.
    ///
    /// ## Errors
    ///
    /// - [`LayoutError::UnsupportedAssignment`] on the overridden extent
    /// - [`LayoutError::InvalidConstraint`] for a negative or non-finite constant
    /// - [`LayoutError::OverDefined`] when a third slot would be pinned; the
    ///   axis is left unchanged
    pub fn set(
        &mut self,
        slot: Slot,
        value: Option<Expr>,
        ctx: &AxisContext<'_>,
    ) -> Result<(), LayoutError> {
        let quantity = Quantity::new(self.axis, slot);
        if slot == Slot::Extent && ctx.extent_override.is_some() {
            return Err(LayoutError::UnsupportedAssignment {
                label: ctx.label.to_string(),
                quantity,
                face: Face::with_thin_axis(self.axis),
            });
        }

        let Some(expr) = value else {
            self.slots[slot.index()] = None;
            return Ok(());
        };

        if let Some(constant) = expr.as_constant() {
            if !constant.is_finite() || constant < 0.0 {
                return Err(LayoutError::InvalidConstraint {
                    label: ctx.label.to_string(),
                    quantity,
                    value: constant,
                });
            }
        }

        let previous = self.slots[slot.index()].replace(expr);
        if self.is_over_defined(ctx) {
            self.slots[slot.index()] = previous;
            return Err(LayoutError::OverDefined {
                label: ctx.label.to_string(),
                axis: self.axis,
            });
        }
        Ok(())
    }

    /// Evaluates the four slots without deriving anything.
    pub fn raw_values<P: Producer + ?Sized>(
        &self,
        ctx: &AxisContext<'_>,
        producer: &P,
        trail: &mut Trail,
    ) -> Result<AxisValues, LayoutError> {
        let mut raw = [None; 4];
        for slot in Slot::ALL {
            raw[slot.index()] = match (slot, ctx.extent_override) {
                (Slot::Extent, Some(thickness)) => Some(thickness),
                _ => match &self.slots[slot.index()] {
                    Some(expr) => expr.evaluate(producer, trail)?,
                    None => None,
                },
            };
        }
        Ok(raw)
    }

    /// Number of slots that currently evaluate to a value.
    pub fn resolved_count<P: Producer + ?Sized>(
        &self,
        ctx: &AxisContext<'_>,
        producer: &P,
        trail: &mut Trail,
    ) -> Result<usize, LayoutError> {
        Ok(self.raw_values(ctx, producer, trail)?.iter().flatten().count())
    }

    /// Resolves all four slots.
    ///
    /// With fewer than two known values the raw vector is returned as is,
    /// without the offset.
    pub fn resolve<P: Producer + ?Sized>(
        &self,
        ctx: &AxisContext<'_>,
        producer: &P,
        trail: &mut Trail,
    ) -> Result<AxisValues, LayoutError> {
        let raw = self.raw_values(ctx, producer, trail)?;
        let known = raw.iter().flatten().count();
        if known < 2 {
            trace!(panel = ctx.label, axis = %self.axis, known, "axis under-defined");
            return Ok(raw);
        }

        let (mut low, mut center, mut high, mut extent) = match raw {
            [Some(low), Some(center), None, None] => {
                let extent = 2.0 * (center - low);
                (low, center, low + extent, extent)
            }
            [Some(low), None, Some(high), None] => (low, (low + high) / 2.0, high, high - low),
            [Some(low), None, None, Some(extent)] => (low, low + extent / 2.0, low + extent, extent),
            [None, Some(center), Some(high), None] => {
                let extent = 2.0 * (high - center);
                (high - extent, center, high, extent)
            }
            [None, Some(center), None, Some(extent)] => {
                (center - extent / 2.0, center, center + extent / 2.0, extent)
            }
            [None, None, Some(high), Some(extent)] => (high - extent, high - extent / 2.0, high, extent),
            _ => {
                return Err(LayoutError::OverDefined {
                    label: ctx.label.to_string(),
                    axis: self.axis,
                })
            }
        };

        if low > high {
            std::mem::swap(&mut low, &mut high);
            center = (low + high) / 2.0;
            extent = high - low;
        }

        trace!(panel = ctx.label, axis = %self.axis, low, high, "axis resolved");
        Ok([
            Some(low + ctx.offset),
            Some(center + ctx.offset),
            Some(high + ctx.offset),
            Some(extent),
        ])
    }

    /// Resolved value of one slot.
    ///
    /// Unpinned slots of an under-defined axis are `None` without evaluating
    /// anything.
    pub fn value<P: Producer + ?Sized>(
        &self,
        slot: Slot,
        ctx: &AxisContext<'_>,
        producer: &P,
        trail: &mut Trail,
    ) -> Result<Option<f64>, LayoutError> {
        if !self.is_pinned(slot, ctx) && self.is_under_defined(ctx) {
            return Ok(None);
        }
        Ok(self.resolve(ctx, producer, trail)?[slot.index()])
    }

    /// Moves an edge outward by `amount`.
    pub fn grow(&mut self, edge: Edge, amount: Expr, ctx: &AxisContext<'_>) -> Result<(), LayoutError> {
        self.adjust(edge, amount, true, ctx)
    }

    /// Moves an edge inward by `amount`.
    pub fn shrink(&mut self, edge: Edge, amount: Expr, ctx: &AxisContext<'_>) -> Result<(), LayoutError> {
        self.adjust(edge, amount, false, ctx)
    }

    fn adjust(
        &mut self,
        edge: Edge,
        amount: Expr,
        outward: bool,
        ctx: &AxisContext<'_>,
    ) -> Result<(), LayoutError> {
        let slot = edge.slot();
        let Some(current) = self.slots[slot.index()].take() else {
            return Err(LayoutError::NotSet {
                label: ctx.label.to_string(),
                quantity: Quantity::new(self.axis, slot),
            });
        };
        let updated = match (edge, outward) {
            (Edge::Low, true) | (Edge::High, false) => current - amount,
            (Edge::High, true) | (Edge::Low, false) => current + amount,
        };
        self.slots[slot.index()] = Some(updated);
        Ok(())
    }
}

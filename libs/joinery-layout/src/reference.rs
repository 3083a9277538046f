//! # Reference Expressions
//!
//! Lazily evaluated arithmetic over other panels' quantities.
//!
//! An [`Expr`] is an immutable tree. Arithmetic operators build new trees and
//! never touch their operands, so a stored reference keeps its meaning no
//! matter what is later derived from it.
//!
//! ## Example
//!
//! ```rust
//! use joinery_layout::{Assembly, Face, PanelSpec};
//!
//! let mut assembly = Assembly::new();
//! let base = assembly
//!     .add(PanelSpec::new("base", 4.3, Face::Front).left(0.0).width(100.0))
//!     .unwrap();
//! let shelf = assembly
//!     .add(PanelSpec::new("shelf", 4.3, Face::Top).left(base.left() + 10.0).right(base.right() - 10.0))
//!     .unwrap();
//!
//! assert_eq!(assembly.value(shelf, joinery_layout::Quantity::Width).unwrap(), Some(80.0));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::LayoutError;
use crate::panel::PanelId;
use crate::quantity::{Quantity, Slot};

// =============================================================================
// EXPRESSION
// =============================================================================

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn apply(self, left: f64, right: f64) -> Result<f64, LayoutError> {
        match self {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Sub => Ok(left - right),
            BinaryOp::Mul => Ok(left * right),
            BinaryOp::Div if right == 0.0 => Err(LayoutError::DivisionByZero),
            BinaryOp::Div => Ok(left / right),
        }
    }

    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

/// A stored quantity value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A plain number.
    Constant(f64),
    /// The resolved value of another panel's quantity.
    Lookup { panel: PanelId, quantity: Quantity },
    /// Arithmetic between two expressions.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Arithmetic negation.
    Negate(Box<Expr>),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn lookup(panel: PanelId, quantity: Quantity) -> Self {
        Expr::Lookup { panel, quantity }
    }

    /// Combines two expressions, folding constant operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        if let (Expr::Constant(l), Expr::Constant(r)) = (&left, &right) {
            if let Ok(value) = op.apply(*l, *r) {
                return Expr::Constant(value);
            }
        }
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The constant value, if this is a plain number.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Evaluates against the producer's resolved values.
    ///
    /// Returns `Ok(None)` as soon as any lookup is unresolved.
    pub fn evaluate<P: Producer + ?Sized>(
        &self,
        producer: &P,
        trail: &mut Trail,
    ) -> Result<Option<f64>, LayoutError> {
        match self {
            Expr::Constant(value) => Ok(Some(*value)),
            Expr::Lookup { panel, quantity } => producer.resolve(*panel, *quantity, trail),
            Expr::Negate(inner) => Ok(inner.evaluate(producer, trail)?.map(|value| -value)),
            Expr::Binary { op, left, right } => {
                let Some(left) = left.evaluate(producer, trail)? else {
                    return Ok(None);
                };
                let Some(right) = right.evaluate(producer, trail)? else {
                    return Ok(None);
                };
                op.apply(left, right).map(Some)
            }
        }
    }

    /// Panels this expression reads from.
    ///
    /// Follows each lookup into every stored slot of the looked-up axis,
    /// since resolving one quantity reads the whole axis.
    pub fn owners<P: Producer + ?Sized>(&self, producer: &P) -> BTreeSet<PanelId> {
        let mut owners = BTreeSet::new();
        let mut seen = BTreeSet::new();
        self.collect_owners(producer, &mut owners, &mut seen);
        owners
    }

    fn collect_owners<P: Producer + ?Sized>(
        &self,
        producer: &P,
        owners: &mut BTreeSet<PanelId>,
        seen: &mut BTreeSet<(PanelId, Quantity)>,
    ) {
        match self {
            Expr::Constant(_) => {}
            Expr::Negate(inner) => inner.collect_owners(producer, owners, seen),
            Expr::Binary { left, right, .. } => {
                left.collect_owners(producer, owners, seen);
                right.collect_owners(producer, owners, seen);
            }
            Expr::Lookup { panel, quantity } => {
                owners.insert(*panel);
                let axis = quantity.axis();
                for slot in Slot::ALL {
                    let key = (*panel, Quantity::new(axis, slot));
                    if !seen.insert(key) {
                        continue;
                    }
                    if let Some(stored) = producer.stored(key.0, key.1) {
                        stored.collect_owners(producer, owners, seen);
                    }
                }
            }
        }
    }

    /// Writes the expression, naming panels with `label`.
    pub fn write_with<W, L>(&self, out: &mut W, label: &L) -> fmt::Result
    where
        W: fmt::Write,
        L: Fn(PanelId) -> String,
    {
        match self {
            Expr::Constant(value) => write!(out, "{value}"),
            Expr::Lookup { panel, quantity } => write!(out, "Ref<{}.{quantity}>", label(*panel)),
            Expr::Negate(inner) => {
                out.write_char('-')?;
                inner.write_with(out, label)
            }
            Expr::Binary { op, left, right } => {
                out.write_char('(')?;
                left.write_with(out, label)?;
                write!(out, " {} ", op.symbol())?;
                right.write_with(out, label)?;
                out.write_char(')')
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|panel: PanelId| panel.to_string())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                Expr::binary($op, self, Expr::Constant(rhs))
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, Expr::Constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Constant(value) => Expr::Constant(-value),
            other => Expr::Negate(Box::new(other)),
        }
    }
}

// =============================================================================
// PRODUCER
// =============================================================================

/// Source of resolved quantity values for lookups.
pub trait Producer {
    /// Resolved value of `quantity` on `panel`, `None` when under-defined.
    ///
    /// Implementations must register the pair on `trail` while resolving it.
    fn resolve(
        &self,
        panel: PanelId,
        quantity: Quantity,
        trail: &mut Trail,
    ) -> Result<Option<f64>, LayoutError>;

    /// Stored expression of `quantity` on `panel`, if any.
    fn stored(&self, panel: PanelId, quantity: Quantity) -> Option<&Expr>;
}

/// Quantities currently being resolved, innermost last.
#[derive(Debug, Default, Clone)]
pub struct Trail {
    visiting: Vec<(PanelId, Quantity)>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a pair; returns `false` if it is already being resolved.
    pub fn enter(&mut self, panel: PanelId, quantity: Quantity) -> bool {
        if self.visiting.contains(&(panel, quantity)) {
            return false;
        }
        self.visiting.push((panel, quantity));
        true
    }

    /// Pops the innermost pair.
    pub fn leave(&mut self) {
        self.visiting.pop();
    }

    pub fn depth(&self) -> usize {
        self.visiting.len()
    }
}

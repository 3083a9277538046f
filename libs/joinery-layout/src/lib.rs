//! # Joinery Layout
//!
//! Panel placement by two-of-four constraints, with collision detection and
//! finger-joint inference.
//!
//! ## Architecture
//!
//! ```text
//! PanelSpec → Assembly (AxisModel × 3 per panel, Expr lookups)
//!           → resolved bounds → joinery-interval → Joint → joinery-fingers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use joinery_layout::{Assembly, Face, FingerParams, FingerRole, PanelSpec};
//!
//! let mut assembly = Assembly::new();
//! let back = assembly
//!     .add(
//!         PanelSpec::new("back", 4.3, Face::Front)
//!             .left(0.0)
//!             .width(200.0)
//!             .back(300.0)
//!             .bottom(0.0)
//!             .height(100.0),
//!     )
//!     .unwrap();
//! let side = assembly
//!     .add(
//!         PanelSpec::new("side", 4.3, Face::Side)
//!             .left(back.left())
//!             .back(back.back())
//!             .depth(150.0)
//!             .bottom(back.bottom())
//!             .top(back.top()),
//!     )
//!     .unwrap();
//!
//! let joints = assembly.validate().unwrap();
//! assert_eq!(joints.len(), 1);
//! assert_eq!(joints[0].first.role, FingerRole::Outer);
//! let fingers = joints[0].first.layout(&FingerParams::default()).unwrap();
//! assert!(fingers.is_some());
//! # let _ = side;
//! ```

pub mod assembly;
pub mod axis;
pub mod error;
pub mod joint;
pub mod panel;
pub mod quantity;
pub mod reference;
pub mod validation;

// Re-export public API
pub use assembly::Assembly;
pub use axis::{AxisContext, AxisModel, AxisValues};
pub use error::LayoutError;
pub use joint::{infer_roles, Direction, FingerParams, FingerRole, Joint, JointEdge};
pub use panel::{Panel, PanelId, PanelSpec};
pub use quantity::{Axis, Edge, Face, ParseFaceError, Quantity, Slot};
pub use reference::{BinaryOp, Expr, Producer, Trail};

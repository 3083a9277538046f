//! # Design Validation
//!
//! Collision detection and joint inference over the panels of an assembly.
//!
//! - Coplanar panels (same face) may touch but must never share a volume.
//! - Perpendicular panels sharing a volume are joined; the joint roles come
//!   from [`infer_roles`].
//! - Three mutually overlapping panels of distinct faces meet at a corner and
//!   every pair among them must be joinable.

use joinery_interval::{classify_3d, overlaps_3d, summarize_3d, Contact3d};
use tracing::{debug, warn};

use crate::assembly::Assembly;
use crate::error::LayoutError;
use crate::joint::{infer_roles, EdgePlacement, Joint, JointEdge, Pairing};
use crate::panel::PanelId;
use crate::quantity::Axis;

fn pairs(count: usize) -> impl Iterator<Item = (PanelId, PanelId)> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| (PanelId(i), PanelId(j))))
}

fn triples(count: usize) -> impl Iterator<Item = (PanelId, PanelId, PanelId)> {
    (0..count).flat_map(move |i| {
        ((i + 1)..count).flat_map(move |j| ((j + 1)..count).map(move |k| (PanelId(i), PanelId(j), PanelId(k))))
    })
}

impl Assembly {
    /// The two panels share a volume of positive size.
    pub fn collides(&self, a: PanelId, b: PanelId) -> Result<bool, LayoutError> {
        Ok(overlaps_3d(&self.full_bounds(a)?, &self.full_bounds(b)?)?)
    }

    /// Coarse contact class of two panels.
    pub fn contact(&self, a: PanelId, b: PanelId) -> Result<Contact3d, LayoutError> {
        let axes = classify_3d(&self.full_bounds(a)?, &self.full_bounds(b)?)?;
        Ok(summarize_3d(&axes))
    }

    /// Joint between two perpendicular panels.
    ///
    /// `Ok(None)` for parallel panels and for panels that do not share a
    /// volume.
    ///
    /// ## Errors
    ///
    /// [`LayoutError::InvalidJoin`] when one panel is nested inside the
    /// other with no edge to join on.
    pub fn joint(&self, a: PanelId, b: PanelId) -> Result<Option<Joint>, LayoutError> {
        let (face_a, face_b) = (self.panel(a)?.face(), self.panel(b)?.face());
        if face_a == face_b {
            return Ok(None);
        }
        let (first, second, pairing) = if face_a.precedence() <= face_b.precedence() {
            (a, b, Pairing::for_faces(face_a, face_b))
        } else {
            (b, a, Pairing::for_faces(face_b, face_a))
        };
        let Some(pairing) = pairing else {
            return Ok(None);
        };

        let axes = classify_3d(&self.full_bounds(first)?, &self.full_bounds(second)?)?;
        let (Some(x), Some(y), Some(z)) = (
            axes[0].range.as_span(),
            axes[1].range.as_span(),
            axes[2].range.as_span(),
        ) else {
            return Ok(None);
        };
        let spans = [x, y, z];

        let [c0, c1, c2] = pairing.compared.map(Axis::index);
        let Some((first_role, second_role)) = infer_roles(&axes[c0], &axes[c1], &axes[c2]) else {
            return Err(self.invalid_join(&[first, second]));
        };

        let edge = |panel, placement: EdgePlacement, role| JointEdge {
            panel,
            along: spans[placement.along.index()],
            across: spans[placement.across.index()],
            direction: placement.direction,
            role,
        };
        let joint = Joint {
            first: edge(first, pairing.first, first_role),
            second: edge(second, pairing.second, second_role),
        };
        let (first_label, second_label) = (self.label(first)?, self.label(second)?);
        debug!(
            first = first_label,
            second = second_label,
            ?first_role,
            ?second_role,
            "joint detected"
        );
        Ok(Some(joint))
    }

    /// Joints of every perpendicular pair, in insertion order.
    pub fn joints(&self) -> Result<Vec<Joint>, LayoutError> {
        let mut joints = Vec::new();
        for (a, b) in pairs(self.len()) {
            if let Some(joint) = self.joint(a, b)? {
                joints.push(joint);
            }
        }
        Ok(joints)
    }

    /// Fails on the first pair of coplanar panels sharing a volume.
    pub fn check_collisions(&self) -> Result<(), LayoutError> {
        for (a, b) in pairs(self.len()) {
            if self.panel(a)?.face() != self.panel(b)?.face() {
                continue;
            }
            if self.collides(a, b)? {
                let first = self.label(a)?.to_string();
                let second = self.label(b)?.to_string();
                warn!(%first, %second, "collision");
                return Err(LayoutError::Collision { first, second });
            }
        }
        Ok(())
    }

    /// Every corner where three perpendicular panels overlap must be
    /// joinable pairwise.
    pub fn check_junctions(&self) -> Result<(), LayoutError> {
        for (a, b, c) in triples(self.len()) {
            let faces = [self.panel(a)?.face(), self.panel(b)?.face(), self.panel(c)?.face()];
            if faces[0] == faces[1] || faces[1] == faces[2] || faces[2] == faces[0] {
                continue;
            }
            let bounds = [self.full_bounds(a)?, self.full_bounds(b)?, self.full_bounds(c)?];
            let meet = overlaps_3d(&bounds[0], &bounds[1])?
                && overlaps_3d(&bounds[1], &bounds[2])?
                && overlaps_3d(&bounds[2], &bounds[0])?;
            if !meet {
                continue;
            }
            for (p, q) in [(a, b), (b, c), (c, a)] {
                match self.joint(p, q) {
                    Err(LayoutError::InvalidJoin { .. }) => return Err(self.invalid_join(&[a, b, c])),
                    other => {
                        other?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Runs collision and junction checks, then returns all joints.
    pub fn validate(&self) -> Result<Vec<Joint>, LayoutError> {
        self.check_collisions()?;
        self.check_junctions()?;
        let joints = self.joints()?;
        debug!(panels = self.len(), joints = joints.len(), "design validated");
        Ok(joints)
    }

    fn invalid_join(&self, ids: &[PanelId]) -> LayoutError {
        let panels: Vec<String> = ids
            .iter()
            .map(|id| self.label(*id).map_or_else(|_| id.to_string(), str::to_string))
            .collect();
        warn!(?panels, "invalid join");
        LayoutError::InvalidJoin { panels }
    }
}

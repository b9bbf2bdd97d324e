//! Distance constraints between cloth particles.

use crate::float::Float;
use crate::vec::Vec;

/// The class a distance constraint belongs to. Classes share the same
/// projection math and differ only in stiffness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Horizontal and vertical grid edges.
    Structural,
    /// Both diagonals of a grid cell.
    Shear,
    /// Pairs two nodes apart along a row or column.
    Bending,
}

/// A fixed-length link between particles `i0` and `i1`.
///
/// `rest_length` is captured once when the grid is built and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<V: Vec> {
    pub i0: usize,
    pub i1: usize,
    pub rest_length: V::Scalar,
    pub stiffness: V::Scalar,
    pub kind: ConstraintKind,
}

impl<V: Vec> DistanceConstraint<V> {
    pub fn new(
        i0: usize,
        i1: usize,
        rest_length: V::Scalar,
        stiffness: V::Scalar,
        kind: ConstraintKind,
    ) -> Self {
        debug_assert!(i0 != i1, "constraint must join two distinct particles");
        DistanceConstraint { i0, i1, rest_length, stiffness, kind }
    }

    /// Build a constraint whose rest length is the current distance between
    /// the two positions.
    pub fn from_positions(
        i0: usize,
        i1: usize,
        positions: &[V],
        stiffness: V::Scalar,
        kind: ConstraintKind,
    ) -> Self {
        let rest_length = (positions[i1] - positions[i0]).length();
        Self::new(i0, i1, rest_length, stiffness, kind)
    }

    /// Current length of the constraint over `positions`.
    pub fn current_length(&self, positions: &[V]) -> V::Scalar {
        (positions[self.i1] - positions[self.i0]).length()
    }
}

/// Pull the two endpoints of `c` toward its rest length, in place.
///
/// Each endpoint moves by half the stiffness-weighted error regardless of
/// mass; pinned particles are restored at commit. A zero-length link is
/// left untouched.
pub fn project<V: Vec>(c: &DistanceConstraint<V>, positions: &mut [V]) {
    let p0 = positions[c.i0];
    let p1 = positions[c.i1];
    let dir = p1 - p0;
    let len = dir.length();
    if len == V::Scalar::zero() {
        return;
    }
    let diff = (len - c.rest_length) / len;
    let correction = dir.scale(V::Scalar::half() * diff * c.stiffness);
    positions[c.i0] = p0 + correction;
    positions[c.i1] = p1 - correction;
}

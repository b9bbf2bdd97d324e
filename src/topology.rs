//! Grid topology: particle layout and structural, shear and bending constraints.

use crate::constraint::{ConstraintKind, DistanceConstraint};
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Per-class stiffness used when building constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stiffness<F: Float> {
    pub structural: F,
    pub shear: F,
    pub bending: F,
}

impl<F: Float> Default for Stiffness<F> {
    fn default() -> Self {
        Stiffness {
            structural: F::one(),
            shear: F::from_f64(0.5),
            bending: F::from_f64(0.1),
        }
    }
}

impl<F: Float> Stiffness<F> {
    pub fn for_kind(&self, kind: ConstraintKind) -> F {
        match kind {
            ConstraintKind::Structural => self.structural,
            ConstraintKind::Shear => self.shear,
            ConstraintKind::Bending => self.bending,
        }
    }
}

/// A rectangular grid of `nx` by `ny` cells, i.e. `(nx+1) * (ny+1)` nodes.
///
/// Node `(i, j)` has index `j * (nx + 1) + i`; row `j == ny` is the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridTopology {
    pub nx: usize,
    pub ny: usize,
}

impl GridTopology {
    pub fn new(nx: usize, ny: usize) -> Self {
        GridTopology { nx, ny }
    }

    pub fn index(&self, i: usize, j: usize) -> usize {
        j * (self.nx + 1) + i
    }

    pub fn cols(&self) -> usize { self.nx + 1 }
    pub fn rows(&self) -> usize { self.ny + 1 }

    pub fn particle_count(&self) -> usize {
        self.cols() * self.rows()
    }

    /// Number of constraints [`build_constraints`](Self::build_constraints) produces.
    pub fn constraint_count(&self) -> usize {
        let (nx, ny) = (self.nx, self.ny);
        let structural = nx * (ny + 1) + (nx + 1) * ny;
        let shear = 2 * nx * ny;
        let bending = nx.saturating_sub(1) * (ny + 1) + (nx + 1) * ny.saturating_sub(1);
        structural + shear + bending
    }

    /// Flat sheet of side `size` centered at the origin in the XY plane.
    ///
    /// A zero cell count along an axis collapses that axis to 0.
    pub fn layout<F: Float>(&self, size: F) -> AllocVec<Vec3<F>> {
        let half = F::half();
        let coord = |k: usize, n: usize| {
            if n == 0 {
                F::zero()
            } else {
                (F::from_usize(k) / F::from_usize(n) - half) * size
            }
        };
        let mut positions = AllocVec::with_capacity(self.particle_count());
        for j in 0..=self.ny {
            for i in 0..=self.nx {
                positions.push(Vec3::new(coord(i, self.nx), coord(j, self.ny), F::zero()));
            }
        }
        positions
    }

    /// Build the constraint list, measuring each rest length from `positions`.
    ///
    /// Order is part of the solver's behavior: nodes are visited row by row
    /// and each node emits, when in range, structural-h, structural-v, both
    /// shear diagonals, bend-h, bend-v.
    pub fn build_constraints<F: Float>(
        &self,
        positions: &[Vec3<F>],
        stiffness: &Stiffness<F>,
    ) -> AllocVec<DistanceConstraint<Vec3<F>>> {
        debug_assert_eq!(positions.len(), self.particle_count());
        let (nx, ny) = (self.nx, self.ny);
        let mut constraints = AllocVec::with_capacity(self.constraint_count());
        let mut add = |a: usize, b: usize, kind: ConstraintKind| {
            constraints.push(DistanceConstraint::from_positions(
                a, b, positions, stiffness.for_kind(kind), kind,
            ));
        };

        for j in 0..=ny {
            for i in 0..=nx {
                if i < nx {
                    add(self.index(i, j), self.index(i + 1, j), ConstraintKind::Structural);
                }
                if j < ny {
                    add(self.index(i, j), self.index(i, j + 1), ConstraintKind::Structural);
                }
                if i < nx && j < ny {
                    add(self.index(i, j), self.index(i + 1, j + 1), ConstraintKind::Shear);
                    add(self.index(i + 1, j), self.index(i, j + 1), ConstraintKind::Shear);
                }
                if i + 2 <= nx {
                    add(self.index(i, j), self.index(i + 2, j), ConstraintKind::Bending);
                }
                if j + 2 <= ny {
                    add(self.index(i, j), self.index(i, j + 2), ConstraintKind::Bending);
                }
            }
        }

        constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_particle_count() {
        let grid = GridTopology::new(3, 2);
        assert_eq!(grid.particle_count(), 12);
        assert_eq!(grid.layout(1.0f32).len(), 12);
    }

    #[test]
    fn constraint_count_matches_builder() {
        // 3x2 cells -> 4x3 nodes
        // Structural: 3*3 + 4*2 = 17
        // Shear: 2*3*2 = 12
        // Bending: 2*3 + 4*1 = 10
        let grid = GridTopology::new(3, 2);
        let pos = grid.layout(1.0f64);
        let constraints = grid.build_constraints(&pos, &Stiffness::default());
        assert_eq!(grid.constraint_count(), 39);
        assert_eq!(constraints.len(), 39);
    }

    #[test]
    fn first_node_emits_in_order() {
        let grid = GridTopology::new(2, 2);
        let pos = grid.layout(1.0f64);
        let c = grid.build_constraints(&pos, &Stiffness::default());
        let kinds: AllocVec<_> = c.iter().take(6).map(|c| (c.i0, c.i1, c.kind)).collect();
        assert_eq!(kinds, [
            (0, 1, ConstraintKind::Structural),
            (0, 3, ConstraintKind::Structural),
            (0, 4, ConstraintKind::Shear),
            (1, 3, ConstraintKind::Shear),
            (0, 2, ConstraintKind::Bending),
            (0, 6, ConstraintKind::Bending),
        ]);
    }

    #[test]
    fn stiffness_follows_kind() {
        let grid = GridTopology::new(2, 2);
        let pos = grid.layout(1.0f64);
        let s = Stiffness { structural: 0.9, shear: 0.4, bending: 0.2 };
        for c in grid.build_constraints(&pos, &s) {
            assert_eq!(c.stiffness, s.for_kind(c.kind));
        }
    }

    #[test]
    fn degenerate_grid_is_a_line() {
        let grid = GridTopology::new(0, 3);
        let pos = grid.layout(2.0f64);
        assert_eq!(pos.len(), 4);
        assert!(pos.iter().all(|p| p.x == 0.0));
        let c = grid.build_constraints(&pos, &Stiffness::default());
        // 3 vertical structural + 2 vertical bending
        assert_eq!(c.len(), 5);
        assert_eq!(grid.constraint_count(), 5);
    }

    #[test]
    fn single_node_has_no_constraints() {
        let grid = GridTopology::new(0, 0);
        let pos = grid.layout(1.0f32);
        assert_eq!(pos, [Vec3::new(0.0, 0.0, 0.0)]);
        assert!(grid.build_constraints(&pos, &Stiffness::default()).is_empty());
    }
}

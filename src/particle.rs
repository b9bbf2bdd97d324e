//! Cloth particles: position, velocity and inverse mass.

use crate::float::Float;
use crate::vec::Vec;

/// A cloth node. Velocity is stored explicitly and rewritten from the
/// position delta on every commit.
///
/// `inv_mass == 0` marks a pinned particle. Inverse mass is fixed at
/// construction; only `position` and `velocity` change while stepping.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub position: V,
    pub velocity: V,
    inv_mass: V::Scalar,
}

impl<V: Vec> Particle<V> {
    /// A free particle at rest. Non-positive inverse masses are clamped to
    /// zero, which pins the particle.
    pub fn new(position: V, inv_mass: V::Scalar) -> Self {
        Particle {
            position,
            velocity: V::zero(),
            inv_mass: inv_mass.max(V::Scalar::zero()),
        }
    }

    pub fn pinned(position: V) -> Self {
        Particle {
            position,
            velocity: V::zero(),
            inv_mass: V::Scalar::zero(),
        }
    }

    pub fn inv_mass(&self) -> V::Scalar {
        self.inv_mass
    }

    pub fn is_pinned(&self) -> bool {
        self.inv_mass == V::Scalar::zero()
    }

    /// Accept `predicted` as the new position, deriving velocity from the
    /// displacement. Pinned particles keep their state unchanged.
    pub fn commit(&mut self, predicted: V, dt: V::Scalar) {
        if self.is_pinned() {
            return;
        }
        self.velocity = (predicted - self.position).scale(V::Scalar::one() / dt);
        self.position = predicted;
    }
}

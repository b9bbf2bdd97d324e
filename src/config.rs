//! Configuration types for the cloth solver.

use crate::contact::ContactLaw;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::topology::Stiffness;
use crate::vec::{Vec, Vec3};

/// Constants governing a cloth simulation.
///
/// # Builder Pattern
/// ```
/// use drapery::config::ClothConfig;
/// use drapery::vec::Vec3;
///
/// let config: ClothConfig<Vec3<f32>> = ClothConfig::new()
///     .with_iterations(16)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_friction(0.1)
///     .with_stiffness(1.0, 0.6, 0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize, V::Scalar: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de>, V::Scalar: serde::Deserialize<'de>"
    ))
)]
pub struct ClothConfig<V: Vec> {
    /// Fixed time increment per step. Default: 1/120 s.
    pub dt: V::Scalar,
    /// Relaxation passes per step. Default: 10.
    pub iterations: usize,
    /// Gravity acceleration vector. Default: (0, -9.8, 0).
    pub gravity: V,
    /// Spring damping coefficient along each constraint. Default: 0.9.
    pub damping: V::Scalar,
    /// Coulomb friction coefficient for sphere contact. Default: 0.05.
    pub friction: V::Scalar,
    /// Distance beyond the sphere surface at which contact starts. Default: 0.02.
    pub contact_margin: V::Scalar,
    /// Per-class constraint stiffness. Default: 1.0 / 0.5 / 0.1.
    pub stiffness: Stiffness<V::Scalar>,
}

impl<V: Vec> ClothConfig<V> {
    /// Create a new config with default values and no gravity.
    ///
    /// Gravity is generic over the vector type; use
    /// [`ClothConfig::default`] on `Vec3` for the standard downward pull.
    pub fn new() -> Self {
        ClothConfig {
            dt: V::Scalar::one() / V::Scalar::from_usize(120),
            iterations: 10,
            gravity: V::zero(),
            damping: V::Scalar::from_f64(0.9),
            friction: V::Scalar::from_f64(0.05),
            contact_margin: V::Scalar::from_f64(0.02),
            stiffness: Stiffness::default(),
        }
    }

    /// Set the fixed time step.
    pub fn with_dt(mut self, dt: V::Scalar) -> Self {
        self.dt = dt;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the spring damping coefficient.
    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    /// Set the Coulomb friction coefficient.
    pub fn with_friction(mut self, friction: V::Scalar) -> Self {
        self.friction = friction;
        self
    }

    /// Set the contact margin.
    pub fn with_contact_margin(mut self, margin: V::Scalar) -> Self {
        self.contact_margin = margin;
        self
    }

    /// Set structural, shear and bending stiffness.
    pub fn with_stiffness(mut self, structural: V::Scalar, shear: V::Scalar, bending: V::Scalar) -> Self {
        self.stiffness = Stiffness { structural, shear, bending };
        self
    }

    pub(crate) fn contact_law(&self) -> ContactLaw<V::Scalar> {
        ContactLaw { friction: self.friction, margin: self.contact_margin }
    }

    /// Check every value is usable by the solver.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();
        if !self.dt.is_finite() || self.dt <= zero {
            return Err(PhysicsError::InvalidTimeStep);
        }
        let s = &self.stiffness;
        for k in [s.structural, s.shear, s.bending] {
            if !(k >= zero && k <= one) {
                return Err(PhysicsError::InvalidStiffness);
            }
        }
        let non_negative = |v: V::Scalar| v.is_finite() && v >= zero;
        if !non_negative(self.friction) {
            return Err(PhysicsError::InvalidFriction);
        }
        if !non_negative(self.damping) {
            return Err(PhysicsError::InvalidDamping);
        }
        if !non_negative(self.contact_margin) {
            return Err(PhysicsError::InvalidContactMargin);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<Vec3<F>> {
    fn default() -> Self {
        Self::new().with_gravity(Vec3::new(F::zero(), F::from_f64(-9.8), F::zero()))
    }
}

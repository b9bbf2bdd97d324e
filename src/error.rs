//! Error types for cloth simulation operations.

use core::fmt;

/// Errors that can occur when configuring or reading back a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// Stiffness must be in [0, 1].
    InvalidStiffness,
    /// Friction coefficient must be non-negative and finite.
    InvalidFriction,
    /// Damping coefficient must be non-negative and finite.
    InvalidDamping,
    /// Contact margin must be non-negative and finite.
    InvalidContactMargin,
    /// Sheet size must be finite.
    InvalidSize,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A caller-supplied readback buffer has the wrong length.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            PhysicsError::InvalidFriction => write!(f, "friction must be non-negative and finite"),
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative and finite"),
            PhysicsError::InvalidContactMargin => {
                write!(f, "contact margin must be non-negative and finite")
            }
            PhysicsError::InvalidSize => write!(f, "sheet size must be finite"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::BufferSizeMismatch { expected, actual } => {
                write!(f, "position buffer holds {} values, expected {}", actual, expected)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}

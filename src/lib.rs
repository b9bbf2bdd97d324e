//! Mass-spring cloth with projective constraint relaxation and sphere contact.
//!
//! `drapery` steps a rectangular sheet of particles hanging from its top
//! row. Each step combines explicit spring-damper forces, Gauss-Seidel
//! projection of distance constraints and a Signorini-Coulomb contact law
//! against a moving sphere.
//!
//! # Features
//!
//! - **Grid cloth**: structural, shear and bending constraints over a `(nx+1) x (ny+1)` grid
//! - **Fixed step**: one call advances exactly `dt` (1/120 s by default)
//! - **Frictional contact**: separating, sticking and slipping regimes
//! - **Flat readback**: positions as a row-major `[x, y, z, ...]` buffer
//! - **Observable**: Monitor solver stages via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drapery::{ClothSimulation, SphereCollider, Vec3};
//!
//! let mut cloth = ClothSimulation::new(20, 20, 1.0f32);
//! let sphere = SphereCollider::new(Vec3::new(0.0, 0.0, 0.0), 0.1);
//! for _ in 0..10 {
//!     cloth.step(Some(sphere));
//! }
//! assert_eq!(cloth.positions_flat().len(), 3 * 21 * 21);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod topology;
pub mod forces;
pub mod integrator;
pub mod contact;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use particle::Particle;
pub use constraint::{ConstraintKind, DistanceConstraint};
pub use topology::{GridTopology, Stiffness};
pub use contact::{ContactLaw, ContactRegime, SphereCollider};
pub use cloth::ClothSimulation;
pub use config::ClothConfig;
pub use observer::{NoOpStepObserver, StepObserver, StepStats};
#[cfg(feature = "log")]
pub use observer::LogObserver;
pub use error::PhysicsError;

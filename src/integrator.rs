//! Prediction and Gauss-Seidel constraint relaxation.

use crate::constraint::{project, DistanceConstraint};
use crate::particle::Particle;
use crate::observer::StepObserver;
use crate::vec::Vec;

/// Predict unconstrained positions into `predicted`.
///
/// Gravity is scaled by inverse mass, so pinned particles feel only
/// internal forces here; their prediction is discarded at commit anyway.
pub fn predict<V: Vec>(
    particles: &[Particle<V>],
    internal: &[V],
    gravity: V,
    dt: V::Scalar,
    predicted: &mut [V],
) {
    debug_assert_eq!(particles.len(), predicted.len());
    let dt2 = dt * dt;
    for ((p, f), out) in particles.iter().zip(internal).zip(predicted.iter_mut()) {
        let external = gravity.scale(p.inv_mass());
        let total = external + *f;
        *out = p.position + (p.velocity.scale(dt) + total.scale(dt2));
    }
}

/// Run `iterations` relaxation passes over `constraints` in list order.
///
/// Later constraints in a pass see the corrections made by earlier ones.
/// The result therefore depends on constraint order.
pub fn relax<V: Vec, O: StepObserver>(
    constraints: &[DistanceConstraint<V>],
    predicted: &mut [V],
    iterations: usize,
    observer: &mut O,
) {
    for i in 0..iterations {
        for c in constraints {
            project(c, predicted);
        }
        observer.on_constraint_iteration(i);
    }
}

//! Sphere contact with a Signorini-Coulomb friction law.
//!
//! After projection, every particle whose predicted position lies within
//! `radius + margin` of the sphere center is pushed out along the surface
//! normal by the penetration depth `r_n = radius - distance + margin`.
//! Its velocity is split into normal (`u_n`) and tangential (`u_t`) parts
//! and one of three regimes decides how friction acts:
//!
//! - **Separating**: `u_n > 0` with no penetration; nothing happens.
//! - **Sticking**: `u_n == 0` and `|u_t| < mu * r_n`; tangential velocity is cancelled.
//! - **Slipping**: `u_n == 0` and `|u_t| > 1e-6`; a friction impulse of
//!   `mu * r_n * dt * inv_mass` opposes the tangential direction.
//!
//! Anything else (a particle moving into or out of the surface while
//! penetrating) only receives the normal correction.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec;

/// Tangential speeds at or below this are treated as no sliding.
const SLIP_THRESHOLD: f64 = 1e-6;

/// An analytic sphere supplied by the caller for a single step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereCollider<V: Vec> {
    pub center: V,
    pub radius: V::Scalar,
}

impl<V: Vec> SphereCollider<V> {
    pub fn new(center: V, radius: V::Scalar) -> Self {
        SphereCollider { center, radius }
    }
}

/// Friction regime chosen for a particle in contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactRegime {
    /// Moving away with no penetration, or no usable normal.
    Separating,
    /// Static friction holds: tangential velocity cancelled.
    Sticking,
    /// Dynamic friction opposes the tangential velocity.
    Slipping,
    /// Penetrating with a nonzero normal velocity: normal correction only.
    Pressing,
}

/// Coulomb friction and contact-margin parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactLaw<F: Float> {
    pub friction: F,
    pub margin: F,
}

/// Pick the regime for normal speed `u_n`, tangential speed `u_t` and
/// penetration depth `r_n`. Conditions are checked in priority order.
pub fn classify<F: Float>(u_n: F, u_t: F, r_n: F, friction: F) -> ContactRegime {
    let zero = F::zero();
    if u_n > zero && r_n == zero {
        ContactRegime::Separating
    } else if u_t < friction * r_n && u_n == zero {
        ContactRegime::Sticking
    } else if u_n == zero && u_t.abs() > F::from_f64(SLIP_THRESHOLD) {
        ContactRegime::Slipping
    } else {
        ContactRegime::Pressing
    }
}

/// Resolve contact between `sphere` and every predicted position.
///
/// Particles outside the margin are not touched. A particle sitting
/// exactly at the center has no defined normal and is skipped as
/// [`ContactRegime::Separating`]. In every other contact the final
/// predicted position is `predicted + n * r_n`.
pub fn resolve_contacts<V: Vec, O: StepObserver>(
    sphere: &SphereCollider<V>,
    law: &ContactLaw<V::Scalar>,
    dt: V::Scalar,
    particles: &mut [Particle<V>],
    predicted: &mut [V],
    observer: &mut O,
) {
    debug_assert_eq!(particles.len(), predicted.len());
    let zero = V::Scalar::zero();
    let reach = sphere.radius + law.margin;

    for (index, (particle, p)) in particles.iter_mut().zip(predicted.iter_mut()).enumerate() {
        let delta = *p - sphere.center;
        let distance = delta.length();
        if !(distance < reach) {
            continue;
        }

        let n = delta.normalize();
        if n.is_zero() {
            observer.on_contact(index, ContactRegime::Separating);
            continue;
        }

        let v = particle.velocity;
        let u_n = v.dot(n);
        let tangential = v - n.scale(u_n);
        let u_t = tangential.length();
        let r_n = (sphere.radius - distance + law.margin).max(zero);

        let regime = classify(u_n, u_t, r_n, law.friction);
        match regime {
            ContactRegime::Separating => {
                observer.on_contact(index, regime);
                continue;
            }
            ContactRegime::Sticking => {
                particle.velocity = v - tangential;
            }
            ContactRegime::Slipping => {
                let impulse = tangential
                    .normalize()
                    .scale(-law.friction * r_n * dt * particle.inv_mass());
                particle.velocity = v + impulse;
            }
            ContactRegime::Pressing => {}
        }

        *p = *p + n.scale(r_n);
        observer.on_contact(index, regime);
    }
}

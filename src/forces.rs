//! Internal spring and damping forces derived from the constraint set.

use crate::constraint::DistanceConstraint;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// Sum spring-damper forces from every constraint into `forces`.
///
/// `forces` is cleared first and must hold one entry per particle. Each
/// constraint adds its force to `i0` and the opposite to `i1`, so a particle
/// touched by several constraints receives the sum of all of them.
/// Zero-length links contribute nothing.
pub fn accumulate_internal_forces<V: Vec>(
    constraints: &[DistanceConstraint<V>],
    particles: &[Particle<V>],
    damping: V::Scalar,
    forces: &mut [V],
) {
    debug_assert_eq!(particles.len(), forces.len());
    for f in forces.iter_mut() {
        *f = V::zero();
    }

    for c in constraints {
        let a = &particles[c.i0];
        let b = &particles[c.i1];
        let dir = b.position - a.position;
        let len = dir.length();
        if len == V::Scalar::zero() {
            continue;
        }
        let unit = dir.scale(V::Scalar::one() / len);

        let spring = unit.scale(c.stiffness * (len - c.rest_length));
        let closing = (b.velocity - a.velocity).dot(unit);
        let damper = unit.scale(damping * closing);
        let total = spring + damper;

        forces[c.i0] = forces[c.i0] + total;
        forces[c.i1] = forces[c.i1] - total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintKind;
    use crate::vec::Vec3;

    fn link(i0: usize, i1: usize, rest: f64) -> DistanceConstraint<Vec3<f64>> {
        DistanceConstraint::new(i0, i1, rest, 1.0, ConstraintKind::Structural)
    }

    #[test]
    fn stretched_link_pulls_ends_together() {
        let particles = [
            Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(2.0, 0.0, 0.0), 1.0),
        ];
        let mut forces = [Vec3::zero(); 2];
        accumulate_internal_forces(&[link(0, 1, 1.0)], &particles, 0.9, &mut forces);
        assert_eq!(forces[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(forces[1], Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn forces_sum_across_constraints() {
        // Middle particle is pulled by both neighbours; the contributions
        // cancel only if both are kept.
        let particles = [
            Particle::new(Vec3::new(-2.0, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(3.0, 0.0, 0.0), 1.0),
        ];
        let constraints = [link(0, 1, 1.0), link(1, 2, 1.0)];
        let mut forces = [Vec3::zero(); 3];
        accumulate_internal_forces(&constraints, &particles, 0.0, &mut forces);
        // From (0,1): -1 on particle 1. From (1,2): +2 on particle 1.
        assert_eq!(forces[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(forces[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(forces[2], Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn damping_opposes_separation() {
        let mut a = Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
        let mut b = Particle::new(Vec3::new(1.0, 0.0, 0.0), 1.0);
        a.velocity = Vec3::new(-1.0, 0.0, 0.0);
        b.velocity = Vec3::new(1.0, 0.0, 0.0);
        let mut forces = [Vec3::zero(); 2];
        accumulate_internal_forces(&[link(0, 1, 1.0)], &[a, b], 0.5, &mut forces);
        assert_eq!(forces[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(forces[1], Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn coincident_particles_contribute_nothing() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let particles = [Particle::new(p, 1.0), Particle::new(p, 1.0)];
        let mut forces = [Vec3::new(5.0, 5.0, 5.0); 2];
        accumulate_internal_forces(&[link(0, 1, 1.0)], &particles, 0.9, &mut forces);
        assert_eq!(forces, [Vec3::zero(); 2]);
    }
}

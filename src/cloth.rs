//! Cloth sheet: a pinned grid of particles stepped with projective dynamics.

use crate::config::ClothConfig;
use crate::constraint::DistanceConstraint;
use crate::contact::{resolve_contacts, SphereCollider};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::forces::accumulate_internal_forces;
use crate::integrator::{predict, relax};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::topology::GridTopology;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// A rectangular cloth hanging from its top row.
///
/// Each [`step`](Self::step) runs force accumulation, prediction,
/// a fixed number of relaxation passes, optional sphere contact and a
/// commit that derives velocities from the position change. Pinned
/// particles are held only by the commit; earlier stages move their
/// predicted positions freely.
pub struct ClothSimulation<F: Float> {
    topology: GridTopology,
    particles: AllocVec<Particle<Vec3<F>>>,
    constraints: AllocVec<DistanceConstraint<Vec3<F>>>,
    config: ClothConfig<Vec3<F>>,
    forces: AllocVec<Vec3<F>>,
    predicted: AllocVec<Vec3<F>>,
    steps: u64,
}

impl<F: Float> ClothSimulation<F> {
    /// Build an `nx` by `ny` cell sheet of side `size` with default settings.
    ///
    /// Particles lie in the XY plane centered on the origin; the row at
    /// `j == ny` is pinned.
    pub fn new(nx: usize, ny: usize, size: F) -> Self {
        Self::build(nx, ny, size, ClothConfig::default())
    }

    /// Like [`new`](Self::new) with an explicit, validated configuration.
    pub fn with_config(
        nx: usize,
        ny: usize,
        size: F,
        config: ClothConfig<Vec3<F>>,
    ) -> Result<Self, PhysicsError> {
        if !size.is_finite() {
            return Err(PhysicsError::InvalidSize);
        }
        config.validate()?;
        Ok(Self::build(nx, ny, size, config))
    }

    fn build(nx: usize, ny: usize, size: F, config: ClothConfig<Vec3<F>>) -> Self {
        let topology = GridTopology::new(nx, ny);
        let positions = topology.layout(size);
        let constraints = topology.build_constraints(&positions, &config.stiffness);
        let cols = topology.cols();
        let particles: AllocVec<_> = positions
            .into_iter()
            .enumerate()
            .map(|(index, pos)| {
                if index / cols == ny {
                    Particle::pinned(pos)
                } else {
                    Particle::new(pos, F::one())
                }
            })
            .collect();
        let count = particles.len();

        ClothSimulation {
            topology,
            particles,
            constraints,
            config,
            forces: alloc::vec![Vec3::zero(); count],
            predicted: alloc::vec![Vec3::zero(); count],
            steps: 0,
        }
    }

    /// Advance by one fixed time step, colliding with `collider` if given.
    pub fn step(&mut self, collider: Option<SphereCollider<Vec3<F>>>) {
        self.step_observed(collider, &mut NoOpStepObserver);
    }

    /// [`step`](Self::step) with solver events reported to `observer`.
    pub fn step_observed<O: StepObserver>(
        &mut self,
        collider: Option<SphereCollider<Vec3<F>>>,
        observer: &mut O,
    ) {
        let dt = self.config.dt;

        accumulate_internal_forces(
            &self.constraints,
            &self.particles,
            self.config.damping,
            &mut self.forces,
        );
        observer.on_forces();

        predict(&self.particles, &self.forces, self.config.gravity, dt, &mut self.predicted);
        observer.on_predict();

        relax(&self.constraints, &mut self.predicted, self.config.iterations, observer);

        if let Some(sphere) = collider {
            let law = self.config.contact_law();
            resolve_contacts(&sphere, &law, dt, &mut self.particles, &mut self.predicted, observer);
        }

        for (particle, &target) in self.particles.iter_mut().zip(self.predicted.iter()) {
            particle.commit(target, dt);
        }
        self.steps += 1;
        observer.on_step_complete();
    }

    /// Current positions, one vector per particle in grid order.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Current velocities, one vector per particle in grid order.
    pub fn velocities(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.velocity).collect()
    }

    /// Positions as `[x0, y0, z0, x1, ...]`, ready for a vertex buffer.
    pub fn positions_flat(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.flat_len());
        for p in &self.particles {
            out.extend_from_slice(&p.position.to_array());
        }
        out
    }

    /// Copy positions into `out`, which must hold exactly
    /// `3 * particle_count()` values.
    pub fn write_positions(&self, out: &mut [F]) -> Result<(), PhysicsError> {
        let expected = self.flat_len();
        if out.len() != expected {
            return Err(PhysicsError::BufferSizeMismatch { expected, actual: out.len() });
        }
        for (chunk, p) in out.chunks_exact_mut(3).zip(&self.particles) {
            chunk.copy_from_slice(&p.position.to_array());
        }
        Ok(())
    }

    pub fn particle(&self, index: usize) -> Result<&Particle<Vec3<F>>, PhysicsError> {
        self.particles.get(index).ok_or(PhysicsError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })
    }

    /// Position of grid node `(i, j)`.
    pub fn position_at(&self, i: usize, j: usize) -> Result<Vec3<F>, PhysicsError> {
        if i > self.topology.nx || j > self.topology.ny {
            return Err(PhysicsError::ParticleOutOfBounds {
                index: j.saturating_mul(self.topology.cols()).saturating_add(i),
                count: self.particles.len(),
            });
        }
        Ok(self.particles[self.topology.index(i, j)].position)
    }

    /// Simulated time so far.
    pub fn elapsed(&self) -> F {
        F::from_f64(self.steps as f64) * self.config.dt
    }

    fn flat_len(&self) -> usize { 3 * self.particles.len() }

    pub fn topology(&self) -> GridTopology { self.topology }
    pub fn particles(&self) -> &[Particle<Vec3<F>>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<Vec3<F>>] { &self.constraints }
    pub fn config(&self) -> &ClothConfig<Vec3<F>> { &self.config }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn step_count(&self) -> u64 { self.steps }
}

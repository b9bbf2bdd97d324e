use drapery::{ClothSimulation, SphereCollider, StepStats, Vec3};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

/// Cloth hanging from its top edge with a sphere circling through it.
#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothSimulation<f32>,
    sphere_radius: f32,
    orbit_radius: f32,
    sphere: Option<Vec3<f32>>,
    stats: StepStats,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(nx: usize, ny: usize, size: f32) -> Self {
        ClothDemo {
            cloth: ClothSimulation::new(nx, ny, size),
            sphere_radius: 0.1,
            orbit_radius: 0.2,
            sphere: Some(Vec3::new(0.0, 0.0, 0.0)),
            stats: StepStats::default(),
        }
    }

    /// Advance one fixed step against the sphere's current position, then
    /// move the sphere along its orbit for time `t` in seconds.
    pub fn update(&mut self, t: f32) {
        let collider = self.sphere.map(|c| SphereCollider::new(c, self.sphere_radius));
        self.cloth.step_observed(collider, &mut self.stats);
        if self.sphere.is_some() {
            self.sphere = Some(Vec3::new(
                self.orbit_radius * t.sin(),
                0.0,
                self.orbit_radius * t.cos(),
            ));
        }
    }

    pub fn set_sphere_enabled(&mut self, enabled: bool) {
        self.sphere = if enabled { Some(Vec3::new(0.0, 0.0, 0.0)) } else { None };
    }

    pub fn set_sphere_radius(&mut self, radius: f32) {
        self.sphere_radius = radius;
    }

    /// Returns flat [x0, y0, z0, x1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.positions_flat()
    }

    /// Fills a vertex buffer in place; throws if its length is wrong.
    pub fn write_positions(&self, out: &mut [f32]) -> Result<(), JsError> {
        self.cloth.write_positions(out).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns [x, y, z, radius] of the sphere, or an empty array when disabled.
    pub fn sphere(&self) -> Vec<f32> {
        match self.sphere {
            Some(c) => vec![c.x, c.y, c.z, self.sphere_radius],
            None => Vec::new(),
        }
    }

    pub fn contacts(&self) -> usize {
        self.stats.contacts()
    }

    pub fn particle_count(&self) -> usize {
        self.cloth.particle_count()
    }
}

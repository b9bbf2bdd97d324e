use drapery::{ClothSimulation, SphereCollider, Vec3};

fn orbit(step: usize) -> SphereCollider<Vec3<f32>> {
    let t = step as f32 / 60.0;
    SphereCollider::new(Vec3::new(0.2 * t.sin(), 0.0, 0.2 * t.cos()), 0.1)
}

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..4).map(|_| {
        let mut cloth = ClothSimulation::new(12, 12, 1.0f32);
        for step in 0..90 {
            cloth.step(Some(orbit(step)));
        }
        cloth.positions_flat()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn intermittent_collider_deterministic() {
    let run = || {
        let mut cloth = ClothSimulation::new(8, 8, 1.0f64);
        let mut history = Vec::new();
        for step in 0..40 {
            let collider = if step % 3 == 0 {
                None
            } else {
                Some(SphereCollider::new(Vec3::new(0.0, -0.2, 0.03), 0.12))
            };
            cloth.step(collider);
            history.push(cloth.positions_flat());
        }
        history
    };
    assert_eq!(run(), run());
}

use drapery::{ClothSimulation, ConstraintKind, GridTopology, Stiffness};

#[test]
fn constraint_classes_for_square_grid() {
    let n = 20;
    let cloth = ClothSimulation::new(n, n, 1.0f64);
    let count = |kind| cloth.constraints().iter().filter(|c| c.kind == kind).count();
    assert_eq!(count(ConstraintKind::Structural), 2 * n * (n + 1));
    assert_eq!(count(ConstraintKind::Shear), 2 * n * n);
    assert_eq!(count(ConstraintKind::Bending), 2 * (n - 1) * (n + 1));
    assert_eq!(cloth.constraint_count(), cloth.topology().constraint_count());
}

#[test]
fn rest_lengths_follow_class() {
    let n = 10;
    let spacing = 1.0 / n as f64;
    let cloth = ClothSimulation::new(n, n, 1.0f64);
    for c in cloth.constraints() {
        let expected = match c.kind {
            ConstraintKind::Structural => spacing,
            ConstraintKind::Shear => spacing * 2.0f64.sqrt(),
            ConstraintKind::Bending => 2.0 * spacing,
        };
        assert!((c.rest_length - expected).abs() < 1e-12, "{:?}", c);
    }
}

#[test]
fn stiffness_decreases_by_class() {
    let s = Stiffness::<f32>::default();
    assert!(s.structural > s.shear && s.shear > s.bending);
}

#[test]
fn builder_order_is_stable() {
    let grid = GridTopology::new(5, 4);
    let pos = grid.layout(1.0f64);
    let a = grid.build_constraints(&pos, &Stiffness::default());
    let b = grid.build_constraints(&pos, &Stiffness::default());
    assert_eq!(a, b);
}

#[test]
fn index_is_row_major() {
    let grid = GridTopology::new(4, 3);
    assert_eq!(grid.index(0, 0), 0);
    assert_eq!(grid.index(4, 0), 4);
    assert_eq!(grid.index(0, 1), 5);
    assert_eq!(grid.index(4, 3), grid.particle_count() - 1);
}

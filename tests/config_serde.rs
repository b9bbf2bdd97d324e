#![cfg(feature = "serde")]

use drapery::{ClothConfig, ClothSimulation, Stiffness, Vec3};

#[test]
fn config_round_trips_through_json() {
    let config: ClothConfig<Vec3<f64>> = ClothConfig::default()
        .with_iterations(16)
        .with_friction(0.2)
        .with_stiffness(0.9, 0.4, 0.05);
    let json = serde_json::to_string(&config).unwrap();
    let back: ClothConfig<Vec3<f64>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_loads_from_handwritten_json() {
    let json = r#"{
        "dt": 0.01,
        "iterations": 4,
        "gravity": { "x": 0.0, "y": -1.0, "z": 0.0 },
        "damping": 0.5,
        "friction": 0.1,
        "contact_margin": 0.01,
        "stiffness": { "structural": 1.0, "shear": 0.5, "bending": 0.25 }
    }"#;
    let config: ClothConfig<Vec3<f64>> = serde_json::from_str(json).unwrap();
    assert_eq!(config.iterations, 4);
    assert_eq!(config.gravity, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(config.stiffness, Stiffness { structural: 1.0, shear: 0.5, bending: 0.25 });

    let mut cloth = ClothSimulation::with_config(4, 4, 1.0, config).unwrap();
    cloth.step(None);
    assert_eq!(cloth.step_count(), 1);
}

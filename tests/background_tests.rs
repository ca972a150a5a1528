// Host-side tests for the frame clear colour.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

mod background {
    include!("../src/background.rs");
}

use background::clear_color;
use skyfall_core::environment::fog_color;
use skyfall_core::EnvironmentSnapshot;

#[test]
fn clear_color_follows_the_fog_palette() {
    for p in [0.0_f32, 0.25, 0.5, 0.778, 1.0] {
        let env = EnvironmentSnapshot::at(p);
        let c = clear_color(&env);
        let f = fog_color(p);
        for i in 0..3 {
            assert!((c[i] - f[i] as f64).abs() < 1e-6, "p={p} channel {i}");
        }
        assert_eq!(c[3], 1.0);
    }
}

#[test]
fn mid_journey_background_is_not_black() {
    let c = clear_color(&EnvironmentSnapshot::at(0.5));
    assert!(c[..3].iter().any(|&v| v > 0.1));
}

#[test]
fn space_background_is_black() {
    assert_eq!(clear_color(&EnvironmentSnapshot::at(0.0)), [0.0, 0.0, 0.0, 1.0]);
}

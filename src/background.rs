use skyfall_core::EnvironmentSnapshot;

/// Frame clear colour: the fog palette colour, fully opaque.
pub fn clear_color(env: &EnvironmentSnapshot) -> [f64; 4] {
    let [r, g, b] = env.fog_color;
    [r as f64, g as f64, b as f64, 1.0]
}

// Integration tests for the atmosphere layer table.

use skyfall_core::layers::matching_layers;
use skyfall_core::*;

#[test]
fn bands_cover_the_unit_interval_without_gaps() {
    assert_eq!(LAYERS[0].start, 0.0);
    assert_eq!(LAYERS[LAYERS.len() - 1].end, 1.0);
    for pair in LAYERS.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "{} -> {}", pair[0].name, pair[1].name);
    }
}

#[test]
fn every_progress_value_has_exactly_one_layer() {
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        assert_eq!(matching_layers(p), 1, "progress {p}");
    }
}

#[test]
fn boundaries_belong_to_the_upper_band() {
    assert_eq!(layer_at(0.0).name, "Outer Space");
    assert_eq!(layer_at(0.1499).name, "Outer Space");
    assert_eq!(layer_at(0.15).name, "Thermosphere");
    assert_eq!(layer_at(0.30).name, "Mesosphere");
    assert_eq!(layer_at(0.45).name, "Stratosphere");
    assert_eq!(layer_at(0.60).name, "Troposphere");
    assert_eq!(layer_at(0.90).name, "Green Meadow");
}

#[test]
fn last_band_includes_one() {
    assert_eq!(layer_at(1.0).name, "Green Meadow");
    assert_eq!(layer_at(1.0).description, "A soft landing on Earth");
}

#[test]
fn out_of_range_values_are_clamped() {
    assert_eq!(layer_at(-0.3).name, "Outer Space");
    assert_eq!(layer_at(1.7).name, "Green Meadow");
    assert_eq!(layer_at(f32::NAN).name, "Outer Space");
}

#[test]
fn midpoint_is_stratosphere() {
    let l = layer_at(0.5);
    assert_eq!(l.name, "Stratosphere");
    assert_eq!(l.description, "Weather balloons and jets pass by");
}

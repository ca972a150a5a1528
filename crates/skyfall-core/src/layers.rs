//! Named atmosphere layers partitioning the journey.

/// One contiguous band of progress values with descriptive text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub start: f32,
    pub end: f32,
}

impl LayerDescriptor {
    /// Bands are half-open `[start, end)`; the last band also owns `end`.
    #[inline]
    pub fn contains(&self, progress: f32, is_last: bool) -> bool {
        progress >= self.start && (progress < self.end || (is_last && progress <= self.end))
    }
}

pub static LAYERS: [LayerDescriptor; 6] = [
    LayerDescriptor {
        name: "Outer Space",
        description: "The vast blackness filled with distant stars",
        start: 0.0,
        end: 0.15,
    },
    LayerDescriptor {
        name: "Thermosphere",
        description: "Shimmering auroras dance in the sky",
        start: 0.15,
        end: 0.30,
    },
    LayerDescriptor {
        name: "Mesosphere",
        description: "Shooting stars streak by in the darkness",
        start: 0.30,
        end: 0.45,
    },
    LayerDescriptor {
        name: "Stratosphere",
        description: "Weather balloons and jets pass by",
        start: 0.45,
        end: 0.60,
    },
    LayerDescriptor {
        name: "Troposphere",
        description: "Clouds, birds, and mountains below",
        start: 0.60,
        end: 0.90,
    },
    LayerDescriptor {
        name: "Green Meadow",
        description: "A soft landing on Earth",
        start: 0.90,
        end: 1.0,
    },
];

/// Return the layer containing `progress`. Values outside `[0, 1]` are
/// clamped first so a layer is always returned.
pub fn layer_at(progress: f32) -> &'static LayerDescriptor {
    let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let last = LAYERS.len() - 1;
    LAYERS
        .iter()
        .enumerate()
        .find(|(i, l)| l.contains(p, *i == last))
        .map(|(_, l)| l)
        .unwrap_or(&LAYERS[last])
}

/// Count the layers that claim `progress`; used to check the partition.
pub fn matching_layers(progress: f32) -> usize {
    let last = LAYERS.len() - 1;
    LAYERS
        .iter()
        .enumerate()
        .filter(|(i, l)| l.contains(progress, *i == last))
        .count()
}

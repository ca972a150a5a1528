/// Page wiring and rendering constants for the web frontend.
///
/// Journey tuning lives in `skyfall_core::constants`; this file only holds
/// what the browser side needs (element ids, asset paths, GPU sizing).
// DOM element ids (all optional except the canvas)
pub const CANVAS_ID: &str = "app-canvas";
pub const LAYER_INFO_ID: &str = "info";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const LOADING_ID: &str = "loading";

// Custom event fired by the page when the visitor starts the descent
pub const JOURNEY_START_EVENT: &str = "journeyStart";

// Optional star catalogue served next to the wasm bundle
pub const STAR_CATALOG_URL: &str = "stars.bin";

// Instance buffer starts with room for the procedural stars plus props
pub const INITIAL_INSTANCE_CAPACITY: usize = 10_000;

// Sizing of the balloon rig and tether beads when drawn
pub const BALLOON_RADIUS: f32 = 0.55;
pub const KNOT_RADIUS: f32 = 0.08;
pub const TETHER_BEAD_RADIUS: f32 = 0.05;
pub const ACTOR_BODY_RADIUS: f32 = 2.0;

// Base opacity of the star field when fully visible
pub const STAR_BASE_OPACITY: f32 = 0.9;
// World units per catalogue size unit
pub const STAR_SIZE_SCALE: f32 = 0.5;

// Bird wing offset from the body, in body radii
pub const BIRD_WING_OFFSET: f32 = 1.7;

// Picking
pub const HOTSPOT_PICK_SLACK: f32 = 1.25; // enlarge hotspot spheres a little for clicks

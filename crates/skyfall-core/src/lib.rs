pub mod actor;
pub mod balloons;
pub mod camera;
pub mod constants;
pub mod curve;
pub mod environment;
pub mod error;
pub mod journey;
pub mod layers;
pub mod params;
pub mod particles;
pub mod scene;
pub mod scroll;
pub mod stars;
pub mod world;

pub use actor::{descent_height, Actor, ActorEvent, ActorEvents, Lifecycle};
pub use balloons::{Balloon, BalloonRig};
pub use camera::{Camera, CameraMode, CameraRig, CameraTarget};
pub use constants::*;
pub use environment::{EnvironmentSnapshot, SkyParams};
pub use error::AssetError;
pub use journey::{FrameReport, Journey, ProgressReport};
pub use layers::{layer_at, LayerDescriptor, LAYERS};
pub use params::JourneyParams;
pub use particles::{Particle, ParticleKind, ParticleSystem};
pub use scene::{HotspotAction, ObjectId, Scene, SceneObject, SceneTag};
pub use scroll::{slowdown_factor, ScrollHint, ScrollState};
pub use stars::{decode_catalog, procedural_stars, StarField, StarRecord};

//! Flat scene of tagged props.
//!
//! Every object carries a [`SceneTag`] fixed at construction; animation and
//! picking dispatch on the tag only.

use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Page callback a clickable object dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotspotAction {
    ShowResumes,
    ShowProjects,
}

impl HotspotAction {
    /// Name of the global function on `window` that handles the action.
    pub fn callback_name(self) -> &'static str {
        match self {
            HotspotAction::ShowResumes => "showResumes",
            HotspotAction::ShowProjects => "showProjects",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneTag {
    Globe,
    CloudShell,
    Sun,
    Moon,
    Rocket,
    RocketFlame,
    Cloud { index: usize },
    GroundCloud { index: usize },
    Bird { index: usize, wing_phase: f32 },
    Airliner,
    BannerPlane { message: &'static str },
    Hotspot(HotspotAction),
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub tag: SceneTag,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Bounding radius before `scale`.
    pub radius: f32,
    pub color: [f32; 3],
    pub opacity: f32,
    pub visible: bool,
    /// Unlit and unaffected by fog.
    pub emissive: bool,
    /// Wing angle for birds; zero for everything else.
    pub flap: f32,
}

impl SceneObject {
    pub fn new(tag: SceneTag, position: Vec3, radius: f32, color: [f32; 3]) -> Self {
        Self {
            tag,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            radius,
            color,
            opacity: 1.0,
            visible: true,
            emissive: false,
            flap: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn emissive(mut self) -> Self {
        self.emissive = true;
        self
    }

    /// Radius used for picking and drawing.
    #[inline]
    pub fn world_radius(&self) -> f32 {
        self.radius * self.scale.max_element()
    }
}

const CLOUD_WRAP_X: f32 = 300.0;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: FnvHashMap<ObjectId, SceneObject>,
    next_id: u32,
}

impl Scene {
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, o)| (*id, o))
    }

    pub fn count_where(&self, pred: impl Fn(&SceneTag) -> bool) -> usize {
        self.objects.values().filter(|o| pred(&o.tag)).count()
    }

    /// Visible clickable objects.
    pub fn hotspots(&self) -> impl Iterator<Item = (ObjectId, &SceneObject, HotspotAction)> {
        self.objects.iter().filter_map(|(id, o)| match o.tag {
            SceneTag::Hotspot(action) if o.visible => Some((*id, o, action)),
            _ => None,
        })
    }

    /// Per-frame prop motion.
    pub fn animate(&mut self, time: f32) {
        for o in self.objects.values_mut() {
            match o.tag {
                SceneTag::RocketFlame => {
                    let pulse = (time * 10.0).sin();
                    o.scale.y = 1.0 + pulse * 0.3;
                    o.opacity = 0.6 + pulse * 0.2;
                }
                SceneTag::Cloud { index } => {
                    o.position.x += (time + index as f32).sin() * 0.2;
                    o.rotation.y += 0.001;
                    if o.position.x > CLOUD_WRAP_X {
                        o.position.x = -CLOUD_WRAP_X;
                    }
                }
                SceneTag::GroundCloud { index } => {
                    o.position.x += (time * 0.5 + index as f32).sin() * 0.1;
                    o.rotation.y += 0.0005;
                }
                SceneTag::Bird { index, wing_phase } => {
                    let i = index as f32;
                    o.flap = (time * 5.0 + wing_phase).sin() * 0.5;
                    o.position.x += (time * 0.3 + i).sin() * 0.2;
                    o.position.z += (time * 0.3 + i).cos() * 0.2;
                }
                _ => {}
            }
        }
    }
}

//! Scene object: named datablock plus local transform, constraint stack,
//! and per-channel transform locks.

use crate::foundation::math::{Transform, Vec3};
use crate::scene::constraint::Constraint;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an object owned by a [`Scene`](crate::scene::Scene)
    pub struct ObjectKey;
}

/// Viewport display shape of an empty object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyDisplay {
    /// Three axis lines
    #[default]
    PlainAxes,
    /// Wireframe sphere
    Sphere,
    /// Wireframe cube
    Cube,
}

/// Object payload determining what the object contributes to the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectData {
    /// Non-rendering null object, used as a controller or pivot
    Empty {
        /// Viewport display shape
        display: EmptyDisplay,
    },
    /// Perspective camera
    Camera,
    /// Rectangular area light
    AreaLight,
    /// Renderable geometry with known bounding-box dimensions
    Mesh {
        /// Axis-aligned bounding-box dimensions
        dimensions: Vec3,
    },
}

impl ObjectData {
    /// Bounding-box dimensions, when the payload has any.
    ///
    /// Empties, cameras, and lights occupy no volume and return `None`.
    #[must_use]
    pub fn dimensions(&self) -> Option<Vec3> {
        match self {
            Self::Mesh { dimensions } => Some(*dimensions),
            Self::Empty { .. } | Self::Camera | Self::AreaLight => None,
        }
    }
}

bitflags::bitflags! {
    /// Transform channels that can be locked against direct user edits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LockChannels: u8 {
        /// X/Y/Z translation
        const LOCATION = 0b001;
        /// X/Y/Z rotation
        const ROTATION = 0b010;
        /// X/Y/Z scale
        const SCALE = 0b100;
        /// All nine channels
        const ALL = Self::LOCATION.bits() | Self::ROTATION.bits() | Self::SCALE.bits();
    }
}

impl Serialize for LockChannels {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LockChannels {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_truncate(u8::deserialize(deserializer)?))
    }
}

/// A single object in the scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Display name (not required to be unique)
    pub name: String,

    /// What the object is
    pub data: ObjectData,

    /// Local transform, before constraint evaluation
    pub transform: Transform,

    /// Constraint stack, evaluated in order
    pub constraints: Vec<Constraint>,

    /// Channels locked against direct user edits
    pub locks: LockChannels,
}

impl SceneObject {
    /// Create a new object with an identity transform and no constraints
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            data,
            transform: Transform::identity(),
            constraints: Vec::new(),
            locks: LockChannels::empty(),
        }
    }

    /// Builder pattern: Set the local transform
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Append a constraint to the end of the stack
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Lock the given transform channels (additive)
    pub fn lock(&mut self, channels: LockChannels) {
        self.locks |= channels;
    }

    /// Whether all of the given channels are locked
    #[must_use]
    pub fn is_locked(&self, channels: LockChannels) -> bool {
        self.locks.contains(channels)
    }
}

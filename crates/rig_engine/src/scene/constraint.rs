//! Typed constraint configurations
//!
//! Constraints couple one object's evaluated transform to another object's
//! channels. Only the two relations the rig system needs are modeled: a
//! scale-to-distance transform mapping and a child-of parent link.

use crate::scene::object::ObjectKey;
use serde::{Deserialize, Serialize};

/// Inclusive input/output range for a transform mapping channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl ClampRange {
    /// Create a new range
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into the range
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Normalized position of a value within the range, in `[0, 1]`.
    ///
    /// A degenerate range maps everything to 0.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        let width = self.max - self.min;
        if width == 0.0 {
            0.0
        } else {
            (self.clamp(value) - self.min) / width
        }
    }

    /// Value at a normalized position within the range
    #[must_use]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * (self.max - self.min)
    }
}

/// Scale-to-distance mapping: reads the driver's local Y scale and
/// replaces the owner's local translation with `(0, 0, z)`, `z` remapped
/// from the scale.
///
/// Both ends operate in local space. The driver value is clamped into
/// `from_scale_y` before being remapped into `to_location_z`; the unmapped
/// X and Y channels land on their range minimum of zero. This is the
/// sole coupling between a controller's "radius" (expressed as scale) and a
/// driven object's "distance" (expressed as position).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformMapping {
    /// Object whose local Y scale drives the mapping
    pub driver: ObjectKey,

    /// Input clamp range applied to the driver's Y scale
    pub from_scale_y: ClampRange,

    /// Output range for the owner's Z translation
    pub to_location_z: ClampRange,
}

impl TransformMapping {
    /// Evaluate the owner's local Z translation for a driver Y scale
    #[must_use]
    pub fn apply(&self, driver_scale_y: f32) -> f32 {
        self.to_location_z.lerp(self.from_scale_y.normalize(driver_scale_y))
    }
}

/// Child-of relation binding the owner's translation and rotation to a
/// parent object. Scale channels are excluded when `inherit_scale` is
/// false, leaving the owner's scale as an independent control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParentLink {
    /// Parent object
    pub parent: ObjectKey,

    /// Whether the parent's scale propagates to the owner
    pub inherit_scale: bool,
}

/// A constraint on a scene object, evaluated in stack order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Scale-to-distance transform mapping
    ScaleToDistance(TransformMapping),

    /// Child-of parent link
    ChildOf(ParentLink),
}

impl Constraint {
    /// The object this constraint reads from
    #[must_use]
    pub const fn target(&self) -> ObjectKey {
        match self {
            Self::ScaleToDistance(mapping) => mapping.driver,
            Self::ChildOf(link) => link.parent,
        }
    }
}

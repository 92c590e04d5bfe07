//! Math utilities and types
//!
//! Provides fundamental math types for scene construction and rig geometry.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Common math constants
pub mod constants {
    /// Archimedes' constant
    pub const PI: f32 = std::f32::consts::PI;
}

/// Convert degrees to radians
#[must_use]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Local transform of a scene object: position, rotation, and scale.
///
/// Rotation is stored as XYZ Euler angles in radians, matching the
/// convention of the scene hosts this crate models. Rotation composition
/// goes through [`Rotation3`] so intermediate math stays exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// XYZ Euler rotation in radians
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create from position only
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set position
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set rotation from Euler angles (radians, XYZ order)
    #[must_use]
    pub fn with_rotation_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    /// Builder pattern: Set scale (uniform)
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation as a [`Rotation3`] matrix (XYZ Euler order)
    #[must_use]
    pub fn rotation_matrix(&self) -> Rotation3<f32> {
        Rotation3::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Compose a child transform under this one (parent * child).
    ///
    /// Scale channels of the child pass through untouched when
    /// `inherit_scale` is false, which is how a child-of relation with
    /// disabled scale channels behaves.
    #[must_use]
    pub fn compose_child(&self, child: &Self, inherit_scale: bool) -> Self {
        let parent_rot = self.rotation_matrix();
        let offset = if inherit_scale {
            child.position.component_mul(&self.scale)
        } else {
            child.position
        };
        let position = self.position + parent_rot * offset;

        let combined = parent_rot * child.rotation_matrix();
        let (rx, ry, rz) = combined.euler_angles();

        let scale = if inherit_scale {
            self.scale.component_mul(&child.scale)
        } else {
            child.scale
        };

        Self {
            position,
            rotation: Vec3::new(rx, ry, rz),
            scale,
        }
    }
}

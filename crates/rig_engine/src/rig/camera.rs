//! Camera rig construction
//!
//! Builds the pivot + camera pair: an empty whose scale is the one
//! sanctioned control for camera distance, and a camera slaved to it.

use crate::config::RigConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::scene::{
    CollectionKey, Constraint, EmptyDisplay, LockChannels, ObjectData, ObjectKey, ParentLink,
    Scene, SceneObject, TransformMapping,
};

/// Handles to the objects making up one camera rig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraRig {
    /// Per-rig collection holding camera and pivot (not yet linked into
    /// the scene; the caller decides where it goes)
    pub collection: CollectionKey,

    /// The camera object
    pub camera: ObjectKey,

    /// The pivot empty driving the camera
    pub pivot: ObjectKey,
}

/// Builds camera rigs into a scene
pub struct CameraRigBuilder<'a> {
    config: &'a RigConfig,
}

impl<'a> CameraRigBuilder<'a> {
    /// Create a builder using the given rig parameters
    #[must_use]
    pub const fn new(config: &'a RigConfig) -> Self {
        Self { config }
    }

    /// Build a camera rig at `location` with starting orbit `radius`.
    ///
    /// The pivot spawns at `location` uniformly scaled to the radius; the
    /// camera spawns at `location` tilted to look along scene up, with its
    /// local Z translation driven by the pivot's Y scale and a child-of
    /// link to the pivot (scale excluded). All nine camera channels are
    /// locked. Both objects go into a fresh uniquely named collection that
    /// is NOT linked into the scene here.
    ///
    /// A radius of 0 is legal and collapses the camera onto the pivot.
    pub fn build(&self, scene: &mut Scene, location: Vec3, radius: f32) -> CameraRig {
        log::debug!(
            "building camera rig at ({:.3}, {:.3}, {:.3}), radius {:.3}",
            location.x,
            location.y,
            location.z,
            radius
        );

        let pivot_object = SceneObject::new(
            &self.config.pivot_name,
            ObjectData::Empty {
                display: EmptyDisplay::Sphere,
            },
        )
        .with_transform(Transform::from_position(location).with_uniform_scale(radius));
        let pivot = scene.new_object(pivot_object);

        let mut camera_object = SceneObject::new(&self.config.camera_name, ObjectData::Camera)
            .with_transform(
                Transform::from_position(location).with_rotation_euler(
                    self.config.camera_tilt(),
                    0.0,
                    0.0,
                ),
            );
        camera_object.add_constraint(Constraint::ScaleToDistance(TransformMapping {
            driver: pivot,
            from_scale_y: self.config.mapping_range(),
            to_location_z: self.config.mapping_range(),
        }));
        camera_object.add_constraint(Constraint::ChildOf(ParentLink {
            parent: pivot,
            inherit_scale: false,
        }));
        camera_object.lock(LockChannels::ALL);
        let camera = scene.new_object(camera_object);

        let collection = scene.new_collection(&self.config.camera_collection_name);
        scene.link_object(collection, camera);
        scene.link_object(collection, pivot);

        CameraRig {
            collection,
            camera,
            pivot,
        }
    }
}

//! Light rig construction
//!
//! Builds the controller + area light pair under an existing parent
//! object, typically a camera rig pivot. The controller rides the parent
//! through a child-of link while its scale stays free as the distance
//! knob, mirroring the camera rig's coupling.

use crate::config::RigConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::scene::{
    Constraint, EmptyDisplay, LockChannels, ObjectData, ObjectKey, ParentLink, Scene, SceneObject,
    TransformMapping,
};

/// Handles to the objects making up one light rig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightRig {
    /// The controller empty driving the light
    pub controller: ObjectKey,

    /// The area light object
    pub light: ObjectKey,
}

/// Builds light rigs into a scene
pub struct LightRigBuilder<'a> {
    config: &'a RigConfig,
}

impl<'a> LightRigBuilder<'a> {
    /// Create a builder using the given rig parameters
    #[must_use]
    pub const fn new(config: &'a RigConfig) -> Self {
        Self { config }
    }

    /// Build a light rig parented to `parent`.
    ///
    /// The controller spawns at the parent's location and rotation at 0.8x
    /// the parent's scale, child-of linked to it with scale excluded. The
    /// area light spawns at the parent's location, tilted a further 90
    /// degrees around X past the parent's rotation, at 4x the controller's
    /// scale; its distance from the controller is driven by the
    /// controller's Y scale, and only its scale stays editable. Both
    /// objects link into the scene's active collection.
    ///
    /// Returns `None` when `parent` is not a live object; callers are
    /// expected to have checked this already.
    #[must_use]
    pub fn build(&self, scene: &mut Scene, parent: ObjectKey) -> Option<LightRig> {
        let parent_transform = scene.object(parent)?.transform.clone();
        log::debug!(
            "building light rig under parent at ({:.3}, {:.3}, {:.3})",
            parent_transform.position.x,
            parent_transform.position.y,
            parent_transform.position.z
        );

        let controller_scale = parent_transform.scale * self.config.controller_scale;
        let mut controller_object = SceneObject::new(
            &self.config.controller_name,
            ObjectData::Empty {
                display: EmptyDisplay::Sphere,
            },
        )
        .with_transform(Transform {
            position: parent_transform.position,
            rotation: parent_transform.rotation,
            scale: controller_scale,
        });
        controller_object.add_constraint(Constraint::ChildOf(ParentLink {
            parent,
            inherit_scale: false,
        }));
        let controller = scene.add_object(controller_object);

        let mut light_object = SceneObject::new(&self.config.light_name, ObjectData::AreaLight)
            .with_transform(Transform {
                position: parent_transform.position,
                rotation: parent_transform.rotation
                    + Vec3::new(self.config.camera_tilt(), 0.0, 0.0),
                scale: controller_scale * self.config.light_scale,
            });
        light_object.add_constraint(Constraint::ScaleToDistance(TransformMapping {
            driver: controller,
            from_scale_y: self.config.mapping_range(),
            to_location_z: self.config.mapping_range(),
        }));
        light_object.add_constraint(Constraint::ChildOf(ParentLink {
            parent: controller,
            inherit_scale: false,
        }));
        light_object.lock(LockChannels::LOCATION | LockChannels::ROTATION);
        let light = scene.add_object(light_object);

        Some(LightRig { controller, light })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parent_in_scene(scene: &mut Scene) -> ObjectKey {
        scene.add_object(
            SceneObject::new(
                "Camera Pivot",
                ObjectData::Empty {
                    display: EmptyDisplay::Sphere,
                },
            )
            .with_transform(
                Transform::from_position(Vec3::new(1.0, 2.0, 3.0))
                    .with_rotation_euler(0.2, 0.0, 0.4)
                    .with_scale(Vec3::new(2.0, 3.0, 4.0)),
            ),
        )
    }

    fn build(scene: &mut Scene, parent: ObjectKey) -> LightRig {
        let config = RigConfig::default();
        LightRigBuilder::new(&config).build(scene, parent).unwrap()
    }

    #[test]
    fn test_controller_mirrors_parent_at_reduced_scale() {
        let mut scene = Scene::new();
        let parent = parent_in_scene(&mut scene);
        let rig = build(&mut scene, parent);

        let controller = scene.object(rig.controller).unwrap();
        let parent_object = scene.object(parent).unwrap();
        assert_eq!(controller.transform.position, parent_object.transform.position);
        assert_eq!(controller.transform.rotation, parent_object.transform.rotation);
        assert_relative_eq!(
            controller.transform.scale,
            parent_object.transform.scale * 0.8,
            epsilon = 1e-6
        );
        assert!(controller.locks.is_empty());
        assert!(matches!(
            controller.constraints[..],
            [Constraint::ChildOf(ParentLink { parent: p, inherit_scale: false })] if p == parent
        ));
    }

    #[test]
    fn test_light_tilt_scale_and_locks() {
        let mut scene = Scene::new();
        let parent = parent_in_scene(&mut scene);
        let rig = build(&mut scene, parent);

        let light = scene.object(rig.light).unwrap();
        let parent_object = scene.object(parent).unwrap();

        assert_eq!(light.transform.position, parent_object.transform.position);
        assert_relative_eq!(
            light.transform.rotation,
            parent_object.transform.rotation
                + Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            epsilon = 1e-6
        );
        // 0.8 * parent scale, then 4x on top of that.
        assert_relative_eq!(
            light.transform.scale,
            parent_object.transform.scale * 3.2,
            epsilon = 1e-5
        );

        assert!(light.is_locked(LockChannels::LOCATION | LockChannels::ROTATION));
        assert!(!light.is_locked(LockChannels::SCALE));

        assert_eq!(light.constraints.len(), 2);
        assert!(matches!(
            light.constraints[0],
            Constraint::ScaleToDistance(TransformMapping { driver, .. }) if driver == rig.controller
        ));
        assert!(matches!(
            light.constraints[1],
            Constraint::ChildOf(ParentLink { parent: p, inherit_scale: false }) if p == rig.controller
        ));
    }

    #[test]
    fn test_objects_link_into_active_collection() {
        let mut scene = Scene::new();
        let parent = parent_in_scene(&mut scene);
        let rig = build(&mut scene, parent);

        let active = scene.collection(scene.active_collection()).unwrap();
        assert!(active.contains(rig.controller));
        assert!(active.contains(rig.light));
        assert!(scene.is_in_view_layer(rig.controller));
        assert!(scene.is_in_view_layer(rig.light));
    }

    #[test]
    fn test_stale_parent_builds_nothing() {
        let mut scene = Scene::new();
        let config = RigConfig::default();
        let before = scene.object_count();

        let stale = ObjectKey::default();
        assert!(LightRigBuilder::new(&config).build(&mut scene, stale).is_none());
        assert_eq!(scene.object_count(), before);
    }

    #[test]
    fn test_sequential_builds_are_independent() {
        let mut scene = Scene::new();
        let parent = parent_in_scene(&mut scene);
        let first = build(&mut scene, parent);
        let second = build(&mut scene, parent);

        assert_ne!(first.controller, second.controller);
        assert_ne!(first.light, second.light);
        assert_eq!(
            scene.object(first.controller),
            scene.object(second.controller)
        );
    }
}

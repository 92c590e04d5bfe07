//! User-facing commands
//!
//! The two operations a host UI exposes: create a camera controller from
//! the current selection, and hang a light controller off the last created
//! camera controller. Commands own selection bookkeeping and tool-state
//! updates; the builders stay purely constructive.

use crate::config::RigConfig;
use crate::rig::{CameraRigBuilder, LightRigBuilder, SelectionGeometryResolver};
use crate::scene::{ObjectKey, Scene};
use thiserror::Error;

/// Rig command errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RigError {
    /// A required object reference is stale or not in the view layer
    #[error("{0} is not in the current view layer")]
    NotInViewLayer(String),
}

/// Create a camera controller rig from the current selection.
///
/// Resolves a spawn location and radius from the selected objects (or the
/// 3D cursor), builds the camera rig, links its collection under the scene
/// root, makes the pivot the sole selected and active object, and prefills
/// the tool state's controller/from/key references with the pivot.
///
/// Returns the pivot key. Never fails for well-formed scenes; the
/// `Result` is for parity with the command layer.
pub fn create_camera_controller(
    scene: &mut Scene,
    config: &RigConfig,
) -> Result<ObjectKey, RigError> {
    let geometry = {
        let selected = scene.selected_objects();
        SelectionGeometryResolver::resolve(&selected, scene.cursor())
    };
    log::info!(
        "creating camera controller at ({:.3}, {:.3}, {:.3}), radius {:.3}",
        geometry.location.x,
        geometry.location.y,
        geometry.location.z,
        geometry.radius
    );

    let rig = CameraRigBuilder::new(config).build(scene, geometry.location, geometry.radius);
    scene.link_collection_to_root(rig.collection);

    scene.select_only(rig.pivot);
    scene.tool_state.controller = Some(rig.pivot);
    scene.tool_state.from_object = Some(rig.pivot);
    scene.tool_state.key_object = Some(rig.pivot);

    Ok(rig.pivot)
}

/// Whether [`create_light_controller`] currently has a controller to hang
/// a light rig off. The poll a UI would run to enable the command.
#[must_use]
pub fn can_create_light_controller(scene: &Scene) -> bool {
    scene.tool_state.controller.is_some()
}

/// Create a light controller rig under the tool state's controller.
///
/// Precondition: the tool state must reference a controller that is
/// currently in the view layer; otherwise this fails with
/// [`RigError::NotInViewLayer`] and mutates nothing. On success the new
/// light controller becomes the sole selected and active object.
pub fn create_light_controller(
    scene: &mut Scene,
    config: &RigConfig,
) -> Result<ObjectKey, RigError> {
    let parent = scene
        .tool_state
        .controller
        .filter(|key| scene.is_in_view_layer(*key))
        .ok_or_else(|| RigError::NotInViewLayer("Controller".to_owned()))?;

    log::info!("creating light controller under camera controller");
    let rig = LightRigBuilder::new(config)
        .build(scene, parent)
        .ok_or_else(|| RigError::NotInViewLayer("Controller".to_owned()))?;

    scene.select_only(rig.controller);
    Ok(rig.controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::{LockChannels, ObjectData, SceneObject};

    fn mesh_at(scene: &mut Scene, position: Vec3) -> ObjectKey {
        let mut object = SceneObject::new(
            "Mesh",
            ObjectData::Mesh {
                dimensions: Vec3::new(1.0, 1.0, 1.0),
            },
        );
        object.transform.position = position;
        scene.add_object(object)
    }

    #[test]
    fn test_camera_controller_from_empty_selection() {
        let mut scene = Scene::new();
        let config = RigConfig::default();
        scene.set_cursor(Vec3::new(1.0, 2.0, 3.0));

        let pivot = create_camera_controller(&mut scene, &config).unwrap();

        let pivot_object = scene.object(pivot).unwrap();
        assert_eq!(pivot_object.transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pivot_object.transform.scale, Vec3::new(1.0, 1.0, 1.0));

        assert!(scene.is_in_view_layer(pivot));
        assert_eq!(scene.selected(), &[pivot]);
        assert_eq!(scene.active_object(), Some(pivot));
        assert_eq!(scene.tool_state.controller, Some(pivot));
        assert_eq!(scene.tool_state.from_object, Some(pivot));
        assert_eq!(scene.tool_state.key_object, Some(pivot));
    }

    #[test]
    fn test_camera_controller_replaces_selection() {
        let mut scene = Scene::new();
        let config = RigConfig::default();
        let a = mesh_at(&mut scene, Vec3::zeros());
        let b = mesh_at(&mut scene, Vec3::new(4.0, 0.0, 0.0));
        scene.select(a);
        scene.select(b);

        let pivot = create_camera_controller(&mut scene, &config).unwrap();

        let pivot_object = scene.object(pivot).unwrap();
        assert_eq!(pivot_object.transform.position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(pivot_object.transform.scale, Vec3::new(4.0, 4.0, 4.0));
        assert_eq!(scene.selected(), &[pivot]);
    }

    #[test]
    fn test_light_controller_requires_camera_controller() {
        let mut scene = Scene::new();
        let config = RigConfig::default();
        let before = scene.object_count();

        assert!(!can_create_light_controller(&scene));
        let result = create_light_controller(&mut scene, &config);
        assert_eq!(
            result,
            Err(RigError::NotInViewLayer("Controller".to_owned()))
        );
        assert_eq!(scene.object_count(), before);
    }

    #[test]
    fn test_light_controller_rejects_unlinked_controller() {
        let mut scene = Scene::new();
        let config = RigConfig::default();

        // A live object that never got linked anywhere is not in the
        // view layer and must be refused.
        let detached = scene.new_object(SceneObject::new(
            "Detached",
            ObjectData::Empty {
                display: Default::default(),
            },
        ));
        scene.tool_state.controller = Some(detached);

        assert!(can_create_light_controller(&scene));
        let before = scene.object_count();
        let result = create_light_controller(&mut scene, &config);
        assert_eq!(
            result,
            Err(RigError::NotInViewLayer("Controller".to_owned()))
        );
        assert_eq!(scene.object_count(), before);
    }

    #[test]
    fn test_full_command_sequence() {
        let mut scene = Scene::new();
        let config = RigConfig::default();

        let pivot = create_camera_controller(&mut scene, &config).unwrap();
        let controller = create_light_controller(&mut scene, &config).unwrap();

        assert_eq!(scene.selected(), &[controller]);
        assert_eq!(scene.active_object(), Some(controller));
        // Tool state still points at the camera pivot for the next light.
        assert_eq!(scene.tool_state.controller, Some(pivot));

        let controller_object = scene.object(controller).unwrap();
        assert_eq!(controller_object.transform.scale, Vec3::new(0.8, 0.8, 0.8));
        assert!(!controller_object.is_locked(LockChannels::SCALE));
    }

    #[test]
    fn test_error_message_wording() {
        let error = RigError::NotInViewLayer("Controller".to_owned());
        assert_eq!(
            error.to_string(),
            "Controller is not in the current view layer"
        );
    }
}

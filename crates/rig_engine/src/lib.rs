//! # Rig Engine
//!
//! Procedural camera and light rig construction over an in-memory scene
//! graph.
//!
//! ## Features
//!
//! - **Scene Host**: typed objects, collections, constraints, channel
//!   locks, selection, and scene-scoped tool state
//! - **Camera Rigs**: pivot-driven camera with a scale-to-distance
//!   coupling and a fully locked transform
//! - **Light Rigs**: controller-driven area light sharing the same
//!   coupling, parented under an existing controller
//! - **Selection Geometry**: spawn location and radius derived from the
//!   current selection
//!
//! ## Quick Start
//!
//! ```rust
//! use rig_engine::prelude::*;
//!
//! fn main() -> Result<(), RigError> {
//!     let mut scene = Scene::new();
//!     let config = RigConfig::default();
//!
//!     let pivot = create_camera_controller(&mut scene, &config)?;
//!     let light_controller = create_light_controller(&mut scene, &config)?;
//!
//!     assert_eq!(scene.tool_state.controller, Some(pivot));
//!     assert_eq!(scene.active_object(), Some(light_controller));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod rig;
pub mod scene;

mod commands;

pub use commands::{
    can_create_light_controller, create_camera_controller, create_light_controller, RigError,
};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        can_create_light_controller, create_camera_controller, create_light_controller,
        config::{Config, ConfigError, RigConfig},
        foundation::math::{Transform, Vec3},
        rig::{CameraRig, CameraRigBuilder, LightRig, LightRigBuilder, SelectionGeometryResolver, SpawnGeometry},
        scene::{
            Collection, CollectionKey, Constraint, LockChannels, ObjectData, ObjectKey,
            ParentLink, Scene, SceneObject, ToolState, TransformMapping,
        },
        RigError,
    };
}

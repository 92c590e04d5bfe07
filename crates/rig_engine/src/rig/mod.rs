//! Rig construction
//!
//! The reusable heart of the crate: spawn-geometry resolution from the
//! current selection, and the two one-shot rig builders. Each builder call
//! produces a fresh, independent rig; there is no shared construction
//! state between calls.

mod camera;
mod light;
mod resolver;

pub use camera::{CameraRig, CameraRigBuilder};
pub use light::{LightRig, LightRigBuilder};
pub use resolver::{SelectionGeometryResolver, SpawnGeometry};

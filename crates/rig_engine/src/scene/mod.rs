//! Scene host: objects, collections, constraints, and editor state
//!
//! This module is the typed stand-in for the scene-graph API a host
//! application would provide. Rig builders create objects here, attach
//! constraints by typed configuration struct, lock transform channels, and
//! manage selection and tool state.
//!
//! The scene owns everything it stores; rig construction code creates
//! objects once and never deletes or mutates them afterwards.

mod collection;
mod constraint;
mod host;
mod object;

pub use collection::{Collection, CollectionKey};
pub use constraint::{ClampRange, Constraint, ParentLink, TransformMapping};
pub use host::{Scene, ToolState};
pub use object::{EmptyDisplay, LockChannels, ObjectData, ObjectKey, SceneObject};

//! Spawn geometry resolution from the current selection
//!
//! Derives where a new camera rig should appear and how large its orbit
//! radius should start out, from whatever the user has selected.

use crate::foundation::math::Vec3;
use crate::scene::SceneObject;

/// Radius used when the selection gives no better answer
const DEFAULT_RADIUS: f32 = 1.0;

/// Where to spawn a rig and with what starting radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnGeometry {
    /// Spawn location
    pub location: Vec3,

    /// Starting orbit radius
    pub radius: f32,
}

/// Derives spawn geometry from selection state.
///
/// Pure: reads object locations and dimensions, touches nothing.
pub struct SelectionGeometryResolver;

impl SelectionGeometryResolver {
    /// Resolve a spawn location and radius.
    ///
    /// Location is the componentwise mean of the selected objects'
    /// locations, or the cursor when nothing is selected. Radius:
    ///
    /// - empty selection: 1
    /// - one object: `max(1, largest bounding-box dimension)` when the
    ///   object has dimensions, else 1
    /// - two or more: twice the largest distance from any selected
    ///   object's location to the centroid
    ///
    /// Total over all inputs; never fails.
    #[must_use]
    pub fn resolve(selected: &[&SceneObject], cursor: Vec3) -> SpawnGeometry {
        if selected.is_empty() {
            return SpawnGeometry {
                location: cursor,
                radius: DEFAULT_RADIUS,
            };
        }

        let sum: Vec3 = selected
            .iter()
            .fold(Vec3::zeros(), |acc, object| acc + object.transform.position);
        #[allow(clippy::cast_precision_loss)]
        let location = sum / selected.len() as f32;

        let radius = if let [only] = selected {
            only.data
                .dimensions()
                .map_or(DEFAULT_RADIUS, |dims| dims.max().max(DEFAULT_RADIUS))
        } else {
            let spread = selected
                .iter()
                .map(|object| (object.transform.position - location).magnitude())
                .fold(0.0_f32, f32::max);
            2.0 * spread
        };

        SpawnGeometry { location, radius }
    }
}

//! In-memory scene host
//!
//! Owns every object and collection, the 3D cursor, the selection and
//! active-object state, and the scene-scoped tool state. Construction code
//! talks to this type exclusively; nothing here renders or persists on its
//! own.

use crate::foundation::math::{Transform, Vec3};
use crate::scene::collection::{Collection, CollectionKey};
use crate::scene::constraint::Constraint;
use crate::scene::object::{ObjectKey, SceneObject};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

/// Maximum child-of nesting considered during constraint evaluation
const MAX_PARENT_DEPTH: usize = 32;

/// Scene-scoped tool state: handles to the most recently created rig
/// controller and the from/key objects the next command reuses.
///
/// Lives with the scene; there is no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolState {
    /// Last created rig controller
    pub controller: Option<ObjectKey>,

    /// Start object for follow-up operations
    pub from_object: Option<ObjectKey>,

    /// Key object for follow-up operations
    pub key_object: Option<ObjectKey>,
}

/// The scene graph: object and collection arenas plus ambient editor state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
    collections: SlotMap<CollectionKey, Collection>,
    root: CollectionKey,
    active_collection: CollectionKey,
    cursor: Vec3,
    selection: Vec<ObjectKey>,
    active_object: Option<ObjectKey>,

    /// Scene-scoped tool state, mutated by commands
    pub tool_state: ToolState,
}

impl Scene {
    /// Create an empty scene with a root collection, which is also the
    /// initially active collection
    #[must_use]
    pub fn new() -> Self {
        let mut collections = SlotMap::with_key();
        let root = collections.insert(Collection::new("Scene Collection"));
        Self {
            objects: SlotMap::with_key(),
            collections,
            root,
            active_collection: root,
            cursor: Vec3::zeros(),
            selection: Vec::new(),
            active_object: None,
            tool_state: ToolState::default(),
        }
    }

    // --- objects ---

    /// Insert an object without linking it into any collection
    pub fn new_object(&mut self, object: SceneObject) -> ObjectKey {
        self.objects.insert(object)
    }

    /// Insert an object and link it into the active collection
    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        let key = self.objects.insert(object);
        if let Some(collection) = self.collections.get_mut(self.active_collection) {
            collection.link_object(key);
        }
        key
    }

    /// Look up an object
    #[must_use]
    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Look up an object mutably
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Find the first object with the given name
    #[must_use]
    pub fn find_object(&self, name: &str) -> Option<ObjectKey> {
        self.objects.iter().find(|(_, o)| o.name == name).map(|(k, _)| k)
    }

    /// Number of live objects
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // --- collections ---

    /// Create a collection with a scene-unique name derived from `name`
    /// (`name`, then `name.001`, `name.002`, ...). The collection is not
    /// linked anywhere.
    pub fn new_collection(&mut self, name: &str) -> CollectionKey {
        let unique = self.unique_collection_name(name);
        self.collections.insert(Collection::new(unique))
    }

    /// Look up a collection
    #[must_use]
    pub fn collection(&self, key: CollectionKey) -> Option<&Collection> {
        self.collections.get(key)
    }

    /// The scene's root collection
    #[must_use]
    pub const fn root_collection(&self) -> CollectionKey {
        self.root
    }

    /// The collection newly added objects link into
    #[must_use]
    pub const fn active_collection(&self) -> CollectionKey {
        self.active_collection
    }

    /// Make a collection the active one (ignored if the key is stale)
    pub fn set_active_collection(&mut self, key: CollectionKey) {
        if self.collections.contains_key(key) {
            self.active_collection = key;
        }
    }

    /// Link an object into a collection
    pub fn link_object(&mut self, collection: CollectionKey, object: ObjectKey) {
        if let Some(collection) = self.collections.get_mut(collection) {
            collection.link_object(object);
        }
    }

    /// Link a collection as a child of the root collection
    pub fn link_collection_to_root(&mut self, child: CollectionKey) {
        let root = self.root;
        self.link_child_collection(root, child);
    }

    /// Link a collection as a child of another collection
    pub fn link_child_collection(&mut self, parent: CollectionKey, child: CollectionKey) {
        if !self.collections.contains_key(child) {
            return;
        }
        if let Some(parent) = self.collections.get_mut(parent) {
            parent.link_child(child);
        }
    }

    fn unique_collection_name(&self, base: &str) -> String {
        let taken = |candidate: &str| self.collections.values().any(|c| c.name == candidate);
        if !taken(base) {
            return base.to_owned();
        }
        let mut suffix = 1_u32;
        loop {
            let candidate = format!("{base}.{suffix:03}");
            if !taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    // --- view layer ---

    /// Whether an object is live and linked into a collection reachable
    /// from the root collection. Stale keys are simply not in the layer.
    #[must_use]
    pub fn is_in_view_layer(&self, object: ObjectKey) -> bool {
        if !self.objects.contains_key(object) {
            return false;
        }
        let mut stack = vec![self.root];
        let mut visited = Vec::new();
        while let Some(key) = stack.pop() {
            if visited.contains(&key) {
                continue;
            }
            visited.push(key);
            if let Some(collection) = self.collections.get(key) {
                if collection.contains(object) {
                    return true;
                }
                stack.extend(collection.children.iter().copied());
            }
        }
        false
    }

    // --- cursor ---

    /// Location of the 3D cursor
    #[must_use]
    pub const fn cursor(&self) -> Vec3 {
        self.cursor
    }

    /// Move the 3D cursor
    pub fn set_cursor(&mut self, location: Vec3) {
        self.cursor = location;
    }

    // --- selection ---

    /// Add an object to the selection (ignored if stale or already selected)
    pub fn select(&mut self, object: ObjectKey) {
        if self.objects.contains_key(object) && !self.selection.contains(&object) {
            self.selection.push(object);
        }
    }

    /// Clear the selection and the active object
    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.active_object = None;
    }

    /// Make an object the sole selected and active object
    pub fn select_only(&mut self, object: ObjectKey) {
        self.deselect_all();
        if self.objects.contains_key(object) {
            self.selection.push(object);
            self.active_object = Some(object);
        }
    }

    /// Selected object keys, in selection order
    #[must_use]
    pub fn selected(&self) -> &[ObjectKey] {
        &self.selection
    }

    /// Selected objects, skipping any stale keys
    #[must_use]
    pub fn selected_objects(&self) -> Vec<&SceneObject> {
        self.selection
            .iter()
            .filter_map(|key| self.objects.get(*key))
            .collect()
    }

    /// The active object, if any
    #[must_use]
    pub const fn active_object(&self) -> Option<ObjectKey> {
        self.active_object
    }

    // --- evaluation ---

    /// Evaluate an object's effective transform by folding its constraint
    /// stack in order.
    ///
    /// A scale-to-distance mapping replaces the local translation with
    /// `(0, 0, z)` where `z` comes from its driver's Y scale; a child-of
    /// link composes the result under the parent's own evaluated
    /// transform. Constraints whose target is stale are inert. Returns
    /// `None` for a stale key.
    #[must_use]
    pub fn evaluated_transform(&self, object: ObjectKey) -> Option<Transform> {
        self.evaluate_at_depth(object, 0)
    }

    fn evaluate_at_depth(&self, object: ObjectKey, depth: usize) -> Option<Transform> {
        if depth > MAX_PARENT_DEPTH {
            return None;
        }
        let object = self.objects.get(object)?;
        let mut result = object.transform.clone();
        for constraint in &object.constraints {
            match constraint {
                Constraint::ScaleToDistance(mapping) => {
                    if let Some(driver) = self.objects.get(mapping.driver) {
                        // Unmapped channels land on their range minimum.
                        result.position =
                            Vec3::new(0.0, 0.0, mapping.apply(driver.transform.scale.y));
                    }
                }
                Constraint::ChildOf(link) => {
                    if let Some(parent) = self.evaluate_at_depth(link.parent, depth + 1) {
                        result = parent.compose_child(&result, link.inherit_scale);
                    }
                }
            }
        }
        Some(result)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::constraint::{ClampRange, ParentLink, TransformMapping};
    use crate::scene::object::{EmptyDisplay, ObjectData};
    use approx::assert_relative_eq;

    fn empty(name: &str) -> SceneObject {
        SceneObject::new(
            name,
            ObjectData::Empty {
                display: EmptyDisplay::Sphere,
            },
        )
    }

    #[test]
    fn test_add_object_links_into_active_collection() {
        let mut scene = Scene::new();
        let key = scene.add_object(empty("Controller"));

        let root = scene.collection(scene.root_collection()).unwrap();
        assert!(root.contains(key));
        assert!(scene.is_in_view_layer(key));
    }

    #[test]
    fn test_new_object_is_not_in_view_layer() {
        let mut scene = Scene::new();
        let key = scene.new_object(empty("Detached"));

        assert!(scene.object(key).is_some());
        assert!(!scene.is_in_view_layer(key));
    }

    #[test]
    fn test_view_layer_reaches_nested_collections() {
        let mut scene = Scene::new();
        let key = scene.new_object(empty("Pivot"));
        let collection = scene.new_collection("Camera Controller");
        scene.link_object(collection, key);

        assert!(!scene.is_in_view_layer(key));
        scene.link_collection_to_root(collection);
        assert!(scene.is_in_view_layer(key));
    }

    #[test]
    fn test_unique_collection_names() {
        let mut scene = Scene::new();
        let a = scene.new_collection("Camera Controller");
        let b = scene.new_collection("Camera Controller");
        let c = scene.new_collection("Camera Controller");

        assert_eq!(scene.collection(a).unwrap().name, "Camera Controller");
        assert_eq!(scene.collection(b).unwrap().name, "Camera Controller.001");
        assert_eq!(scene.collection(c).unwrap().name, "Camera Controller.002");
    }

    #[test]
    fn test_select_only_sets_active() {
        let mut scene = Scene::new();
        let a = scene.add_object(empty("A"));
        let b = scene.add_object(empty("B"));

        scene.select(a);
        scene.select(b);
        assert_eq!(scene.selected().len(), 2);

        scene.select_only(b);
        assert_eq!(scene.selected(), &[b]);
        assert_eq!(scene.active_object(), Some(b));

        scene.deselect_all();
        assert!(scene.selected().is_empty());
        assert_eq!(scene.active_object(), None);
    }

    #[test]
    fn test_scale_to_distance_then_child_of_evaluation() {
        let mut scene = Scene::new();

        let pivot = scene.add_object(
            empty("Pivot").with_transform(
                Transform::from_position(Vec3::new(2.0, 0.0, 0.0)).with_uniform_scale(3.0),
            ),
        );

        let mut driven = empty("Driven");
        driven.add_constraint(Constraint::ScaleToDistance(TransformMapping {
            driver: pivot,
            from_scale_y: ClampRange::new(0.0, 100_000.0),
            to_location_z: ClampRange::new(0.0, 100_000.0),
        }));
        driven.add_constraint(Constraint::ChildOf(ParentLink {
            parent: pivot,
            inherit_scale: false,
        }));
        let driven = scene.add_object(driven);

        // Local Z becomes the pivot's Y scale, then the child-of link
        // carries it into the pivot's frame.
        let evaluated = scene.evaluated_transform(driven).unwrap();
        assert_relative_eq!(evaluated.position, Vec3::new(2.0, 0.0, 3.0), epsilon = 1e-5);
    }

    #[test]
    fn test_evaluation_with_stale_target_is_inert() {
        let mut scene = Scene::new();
        let ghost = scene.add_object(empty("Ghost"));

        let mut driven = empty("Driven");
        driven.add_constraint(Constraint::ChildOf(ParentLink {
            parent: ghost,
            inherit_scale: false,
        }));
        let driven = scene.add_object(driven);

        // Drop the parent out of the arena entirely.
        scene.objects.remove(ghost);

        let evaluated = scene.evaluated_transform(driven).unwrap();
        assert_relative_eq!(evaluated.position, Vec3::zeros());
    }
}

//! Object collections: named groups of objects with nested child collections

use crate::scene::object::ObjectKey;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a collection owned by a [`Scene`](crate::scene::Scene)
    pub struct CollectionKey;
}

/// A named group of objects and child collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique name within the scene
    pub name: String,

    /// Objects linked into this collection, in link order
    pub objects: Vec<ObjectKey>,

    /// Child collections, in link order
    pub children: Vec<CollectionKey>,
}

impl Collection {
    /// Create a new empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Link an object into this collection (no-op if already linked)
    pub fn link_object(&mut self, object: ObjectKey) {
        if !self.objects.contains(&object) {
            self.objects.push(object);
        }
    }

    /// Link a child collection (no-op if already linked)
    pub fn link_child(&mut self, child: CollectionKey) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Whether an object is linked directly into this collection
    #[must_use]
    pub fn contains(&self, object: ObjectKey) -> bool {
        self.objects.contains(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_link_object_is_idempotent() {
        let mut keys: SlotMap<ObjectKey, ()> = SlotMap::with_key();
        let key = keys.insert(());

        let mut collection = Collection::new("Camera Controller");
        collection.link_object(key);
        collection.link_object(key);

        assert_eq!(collection.objects.len(), 1);
        assert!(collection.contains(key));
    }
}

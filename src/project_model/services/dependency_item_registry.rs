use crate::project_model::domain::{DependencyItem, LibraryNode};
use crate::shared::error::ProjectionError;
use std::collections::HashMap;
use std::sync::Arc;

/// Name → shared dependency item table
///
/// Built once per resolution snapshot, before any description is projected,
/// and treated as read-only while projections run. Items are handed out as
/// `Arc` clones so every description points at the same instance.
#[derive(Debug, Clone, Default)]
pub struct DependencyItemRegistry {
    items: HashMap<String, Arc<DependencyItem>>,
}

impl DependencyItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from every library of a graph.
    ///
    /// Names are expected to be unique; if a name repeats, the first node wins.
    pub fn from_libraries(libraries: &[LibraryNode]) -> Self {
        let mut registry = Self::new();
        for library in libraries {
            registry
                .items
                .entry(library.name().to_string())
                .or_insert_with(|| Arc::new(DependencyItem::from_identity(library.identity())));
        }
        registry
    }

    /// Registers an item, replacing any previous item with the same name
    pub fn insert(&mut self, item: DependencyItem) -> Arc<DependencyItem> {
        let item = Arc::new(item);
        self.items.insert(item.name().to_string(), Arc::clone(&item));
        item
    }

    /// Looks up the shared item for `dependency`, on behalf of `library`.
    ///
    /// # Errors
    /// Returns [`ProjectionError::MissingDependencyReference`] if the name is unknown.
    pub fn get(
        &self,
        library: &str,
        dependency: &str,
    ) -> std::result::Result<Arc<DependencyItem>, ProjectionError> {
        self.items.get(dependency).cloned().ok_or_else(|| {
            ProjectionError::MissingDependencyReference {
                library: library.to_string(),
                dependency: dependency.to_string(),
            }
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

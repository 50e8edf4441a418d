/// Domain services
pub mod dependency_item_registry;

pub use dependency_item_registry::DependencyItemRegistry;

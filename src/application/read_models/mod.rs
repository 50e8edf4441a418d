//! Read models for CQRS-lite pattern
//!
//! This module contains the client-facing projections of resolved
//! dependency graphs and the change set between two projections.

pub mod dependency_changes;
pub mod dependency_description;
pub mod dependency_descriptions_builder;
pub mod diagnostic_message_view;

pub use dependency_changes::{ChangeDetector, DependencyChanges};
pub use dependency_description::{library_display_name, DependencyDescription};
pub use dependency_descriptions_builder::DependencyDescriptionsBuilder;
pub use diagnostic_message_view::DiagnosticMessageView;

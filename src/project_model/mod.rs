/// Project model domain - resolved dependency graphs and shared dependency items
///
/// Pure types and services with no I/O; everything here can be used
/// concurrently as long as inputs are not mutated.
pub mod domain;
pub mod services;

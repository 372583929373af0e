//! Application services for workflow editing.

mod editor;
mod seed;

pub use editor::WorkflowEditor;
pub use seed::{SeedError, SeedStatus, SeedTransition, WorkflowSeed};

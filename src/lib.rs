//! Leadflow: lead workflow definition model.
//!
//! This crate models the definition of a lead workflow (statuses, the tasks
//! attached to each status, and task-gated transitions between statuses) and
//! provides the editing operations a form-driven editor calls, plus the graph
//! data a visualisation draws.
//!
//! # Architecture
//!
//! Leadflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure workflow types with no infrastructure dependencies
//! - **Ports**: Trait seams for identifier generation and graph rendering
//! - **Adapters**: Concrete port implementations (UUIDs, JSON output)
//!
//! # Modules
//!
//! - [`workflow`]: Workflow model, editing service, and graph derivation
//! - [`config`]: Editor settings loaded from TOML
//! - [`telemetry`]: Tracing subscriber setup for binaries

pub mod config;
pub mod telemetry;
pub mod workflow;

//! Raidflow Shared - project-file contracts for the raidflow core.
//!
//! This crate owns everything that crosses the file boundary: the wire DTOs
//! matching the community project-file shape, whole-file schema validation
//! with aggregated violations, and the load/save entry points that convert
//! between the file format and [`raidflow_domain`] values.
//!
//! # Design Principles
//!
//! 1. **No business logic** - capacity rules, parsing and layout live in the
//!    domain crate; this crate only moves data across the boundary.
//! 2. **Complete errors** - validation reports every violated field, not
//!    just the first one.
//! 3. **Exact labels** - battle mode labels round-trip byte for byte.

pub mod dto;
pub mod error;
pub mod project;

pub use dto::{ProjectFile, TeamEntry};
pub use error::{FieldViolation, ProjectFileError};
pub use project::{from_file, load_project, save_project, Project};

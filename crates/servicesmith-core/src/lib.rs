//! Core library for servicesmith: trait decorator generation and project
//! scaffolding.
//!
//! Two entry points matter to callers:
//! - [`generate::run`] renders decorator implementations (metrics, tracing,
//!   or user-supplied templates) for a named trait in a Rust source file.
//! - [`scaffold::generate`] creates a brand new gRPC-with-gateway service
//!   project from the bundled template set.

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod model;
pub mod reflect;
pub mod scaffold;
pub mod templates;

pub use config::{GenerationRequest, OutputTarget};
pub use error::{Error, Result};
pub use generate::run;
pub use model::{Arg, Method};
pub use templates::{RenderContext, TemplateCatalog};

//! Project scaffolding: renders the bundled gRPC-with-gateway template set
//! into a brand new service project.

pub mod builder;
pub mod options;
pub mod provider;

pub use builder::*;
pub use options::*;
pub use provider::*;

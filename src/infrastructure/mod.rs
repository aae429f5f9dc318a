//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits, resolves the installer
//! module and wires up services.

pub mod di;
pub mod error;
pub mod installer;
pub mod resolver;
pub mod traits;

pub use error::{InfraError, InfraResult};

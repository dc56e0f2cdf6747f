//! Client-side state layer: maps raw API payloads into the typed records
//! from `ripcord-models`, resolving nested objects through a
//! [`ModelResolver`] capability.

pub mod error;
pub mod invite;
pub mod payload;
pub mod registry;
pub mod resolver;

pub use error::{ResolveError, StateError};
pub use invite::{build_invite, build_invite_metadata};
pub use registry::ModelRegistry;
pub use resolver::ModelResolver;

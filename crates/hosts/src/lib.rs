pub mod error;
mod platform;
mod registry;

pub use crate::platform::Platform;
pub use crate::registry::{HostDefinition, HostMetadata, HostProvider, HostRegistry};

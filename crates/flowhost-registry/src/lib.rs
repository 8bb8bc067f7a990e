//! Host-side service-provider plumbing: the per-connector operation
//! registry, the provider trait the host programs against, the process-wide
//! provider directory, and connection-parameter resolution.
//!
//! Everything here is built once during single-threaded startup and treated
//! as read-only afterwards, which is what makes lock-free concurrent lookup
//! from request-handling tasks safe.

pub mod directory;
pub mod provider;
pub mod registry;
pub mod resolve;

pub use directory::ProviderDirectory;
pub use provider::{
    ConnectionParameters, OperationRequest, OperationResponse, ServiceOperationProvider,
};
pub use registry::{OperationRef, OperationRegistry, OperationRegistryBuilder};

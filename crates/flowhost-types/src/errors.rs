//! Typed service-provider error model shared across registry and connectors.

use thiserror::Error;

use crate::schema::SchemaError;

/// Failures raised by provider registration, lookup, and dispatch.
///
/// All variants are local, synchronous failures raised at the call site.
/// None are retried here; retry policy, if any, belongs to the external
/// trigger-polling collaborator. The host surfaces registration-time
/// variants as configuration errors and the rest as runtime validation
/// errors, never as process faults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Operation lookup missed within one connector's registry.
    #[error("service provider `{service_id}` has no operation named `{name}`")]
    OperationNotFound { service_id: String, name: String },

    /// Directory lookup missed for a service id or name.
    #[error("no service provider registered under `{service}`")]
    ServiceNotFound { service: String },

    /// A required connection parameter was absent from the supplied set, or
    /// its value was not representable as a string.
    #[error("operation `{operation_id}` requires connection parameter `{parameter}`")]
    MissingParameter {
        operation_id: String,
        parameter: String,
    },

    /// A second connector claimed an already-registered service id or name.
    #[error("service provider `{service_id}` is already registered")]
    DuplicateRegistration { service_id: String },

    /// Two operations with the same (case-insensitive) name were fed into
    /// one registry.
    #[error("operation `{name}` is declared more than once")]
    DuplicateOperation { name: String },

    /// Action invocation attempted against an operation the connector does
    /// not expose as an action.
    #[error(
        "service provider `{service_id}` does not support invoking `{operation_id}` as an action"
    )]
    UnsupportedOperation {
        service_id: String,
        operation_id: String,
    },

    /// An operation manifest carried a malformed inputs or outputs schema.
    #[error("invalid operation schema: {0}")]
    InvalidSchema(#[from] SchemaError),
}

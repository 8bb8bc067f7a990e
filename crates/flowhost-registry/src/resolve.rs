//! Connection-parameter resolution shared by provider implementations.

use serde_json::Value;
use tracing::debug;

use flowhost_types::errors::ProviderError;

use crate::provider::ConnectionParameters;

/// Look up a required connection parameter and return it as a string.
///
/// Absent keys and values that are not JSON strings both resolve to
/// [`ProviderError::MissingParameter`]; at this layer a wrong-typed value is
/// indistinguishable from a missing one.
pub fn required_parameter_value(
    service_id: &str,
    operation_id: &str,
    parameter_name: &str,
    parameters: &ConnectionParameters,
) -> Result<String, ProviderError> {
    match parameters.get(parameter_name) {
        Some(Value::String(value)) => Ok(value.clone()),
        other => {
            debug!(
                service_id,
                operation_id,
                parameter_name,
                supplied = other.is_some(),
                "connection parameter missing or not a string"
            );
            Err(ProviderError::MissingParameter {
                operation_id: operation_id.to_string(),
                parameter: parameter_name.to_string(),
            })
        }
    }
}

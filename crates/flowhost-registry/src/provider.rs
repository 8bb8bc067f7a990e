//! The provider trait the host programs against, plus the thin invocation
//! payload types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use flowhost_types::errors::ProviderError;

use crate::registry::OperationRegistry;
use crate::resolve;

/// Case-insensitive connection parameter map supplied by the host at
/// binding-resolution and invocation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionParameters {
    /// Lowercased name -> supplied value, in insertion order.
    values: IndexMap<String, Value>,
}

impl ConnectionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter value. Names compare ASCII case-insensitively, so
    /// a later insert under a differently-cased name overwrites.
    pub fn insert(&mut self, name: impl AsRef<str>, value: Value) {
        self.values
            .insert(name.as_ref().to_ascii_lowercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(&name.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for ConnectionParameters {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut parameters = Self::new();
        for (name, value) in iter {
            parameters.insert(name, value);
        }
        parameters
    }
}

/// Property-bag request payload for action dispatch. The dispatch runtime
/// that fills this in is an external collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationRequest {
    pub body: Value,
}

/// Property-bag response payload from action dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationResponse {
    pub body: Value,
}

/// Host-facing surface of one registered connector.
///
/// Implementations are constructed once at startup and shared immutably, so
/// every method takes `&self` and performs no I/O.
pub trait ServiceOperationProvider: Send + Sync {
    /// The connector's immutable operation registry.
    fn registry(&self) -> &OperationRegistry;

    /// Fixed label naming the host trigger binding that backs this
    /// connector's trigger operations. Consumed by the host's
    /// binding-resolution step.
    fn trigger_binding_kind(&self) -> &'static str;

    /// Resolve the connection value the trigger binding needs. Pure lookup
    /// over the caller-supplied map; no network or I/O side effects.
    fn binding_connection_value(
        &self,
        operation_id: &str,
        parameter_name: &str,
        parameters: &ConnectionParameters,
    ) -> Result<String, ProviderError> {
        resolve::required_parameter_value(
            &self.registry().api().id,
            operation_id,
            parameter_name,
            parameters,
        )
    }

    /// Synchronously invoke an action operation. Connectors check the
    /// operation's kind first; triggers resolve to
    /// [`ProviderError::UnsupportedOperation`].
    fn invoke_action(
        &self,
        operation_id: &str,
        parameters: &ConnectionParameters,
        request: OperationRequest,
    ) -> Result<OperationResponse, ProviderError>;
}

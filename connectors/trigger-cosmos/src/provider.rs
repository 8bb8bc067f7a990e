//! The trigger-only Cosmos DB service operation provider and its startup
//! registration entrypoint.

use std::sync::Arc;

use flowhost_registry::{
    ConnectionParameters, OperationRegistry, OperationRequest, OperationResponse,
    ProviderDirectory, ServiceOperationProvider,
};
use flowhost_types::api::ConnectorIdentity;
use flowhost_types::errors::ProviderError;
use flowhost_types::operation::OperationKind;

use crate::operations;

/// Stable service name.
pub const SERVICE_NAME: &str = "cosmosdb";

/// Stable service id.
pub const SERVICE_ID: &str = "/serviceProviders/cosmosdb";

/// Host trigger binding backing the batch trigger operation.
pub const TRIGGER_BINDING_KIND: &str = "cosmosDBTrigger";

/// Trigger-only Cosmos DB connector.
///
/// Exposes `receiveDocument` and nothing else; action invocation is a
/// deliberate capability boundary, reported as
/// [`ProviderError::UnsupportedOperation`].
pub struct CosmosTriggerProvider {
    registry: OperationRegistry,
}

impl CosmosTriggerProvider {
    /// Build the provider with its full operation set. Fails only on
    /// configuration errors (malformed schema, duplicate operation names).
    pub fn new() -> Result<Self, ProviderError> {
        let api = operations::service_api();
        let receive_document = operations::receive_document(&api)?;
        let registry = OperationRegistry::builder(api)
            .operation(receive_document)?
            .build();
        Ok(Self { registry })
    }
}

impl ServiceOperationProvider for CosmosTriggerProvider {
    fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    fn trigger_binding_kind(&self) -> &'static str {
        TRIGGER_BINDING_KIND
    }

    fn invoke_action(
        &self,
        operation_id: &str,
        _parameters: &ConnectionParameters,
        _request: OperationRequest,
    ) -> Result<OperationResponse, ProviderError> {
        let operation = self.registry.operation_by_name(operation_id)?;
        match operation.kind {
            // Triggers are polled by the host binding, never invoked.
            OperationKind::Trigger { .. } => Err(ProviderError::UnsupportedOperation {
                service_id: SERVICE_ID.to_string(),
                operation_id: operation_id.to_string(),
            }),
            // No actions are registered; an action added later must route
            // to a real dispatch here.
            OperationKind::Action => Err(ProviderError::UnsupportedOperation {
                service_id: SERVICE_ID.to_string(),
                operation_id: operation_id.to_string(),
            }),
        }
    }
}

/// Register this connector into the host's provider directory. Called once
/// by the host's extension loader during startup; this is the only mutation
/// point of the directory for this connector.
pub fn register(directory: &mut ProviderDirectory) -> Result<(), ProviderError> {
    let provider = Arc::new(CosmosTriggerProvider::new()?);
    directory.register(
        ConnectorIdentity {
            service_name: SERVICE_NAME.to_string(),
            service_id: SERVICE_ID.to_string(),
        },
        provider,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_exposes_single_trigger_operation() {
        let provider = CosmosTriggerProvider::new().expect("well-formed connector");
        let registry = provider.registry();
        assert_eq!(registry.len(), 1);
        let operation = registry.operation_by_name("receiveDocument").unwrap();
        assert!(operation.kind.is_trigger());
        assert_eq!(provider.trigger_binding_kind(), "cosmosDBTrigger");
    }

    #[test]
    fn invoke_action_on_trigger_is_unsupported() {
        let provider = CosmosTriggerProvider::new().expect("well-formed connector");
        let err = provider
            .invoke_action(
                "receiveDocument",
                &ConnectionParameters::new(),
                OperationRequest::default(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::UnsupportedOperation {
                service_id: SERVICE_ID.to_string(),
                operation_id: "receiveDocument".to_string(),
            }
        );
    }

    #[test]
    fn invoke_action_on_unknown_operation_is_not_found() {
        let provider = CosmosTriggerProvider::new().expect("well-formed connector");
        let err = provider
            .invoke_action(
                "sendDocument",
                &ConnectionParameters::new(),
                OperationRequest::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ProviderError::OperationNotFound { .. }));
    }

    #[test]
    fn binding_connection_value_resolves_connection_string() {
        let provider = CosmosTriggerProvider::new().expect("well-formed connector");

        let err = provider
            .binding_connection_value(
                "receiveDocument",
                "connectionString",
                &ConnectionParameters::new(),
            )
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingParameter { .. }));

        let parameters: ConnectionParameters =
            [("connectionString", json!("AccountEndpoint=..."))]
                .into_iter()
                .collect();
        let value = provider
            .binding_connection_value("receiveDocument", "connectionString", &parameters)
            .unwrap();
        assert_eq!(value, "AccountEndpoint=...");
    }
}

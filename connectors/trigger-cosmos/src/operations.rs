//! Declarative build of the connector's API descriptor and its
//! `receiveDocument` operation manifest.

use indexmap::IndexMap;
use serde_json::json;

use flowhost_types::api::{
    ApiCapability, ApiKind, ConnectionParameterSpec, ParameterKind, ParameterSource, ServiceApi,
    ServiceApiProperties, UiDefinition,
};
use flowhost_types::errors::ProviderError;
use flowhost_types::manifest::{
    ConnectionReferenceFormat, InputsLocation, ManifestExtension, ManifestSettings,
    OperationManifest, OperationScope, RecurrenceKind, RecurrenceSetting,
};
use flowhost_types::operation::{Operation, OperationKind, TriggerMode, Visibility};
use flowhost_types::schema::SchemaNode;

pub(crate) const RECEIVE_DOCUMENT: &str = "receiveDocument";

const ICON_URI: &str =
    "https://raw.githubusercontent.com/flowhost/connector-assets/main/cosmosdb/icon.png";

/// The Cosmos DB service API descriptor: identity, branding, and the single
/// `connectionString` connection parameter.
pub(crate) fn service_api() -> ServiceApi {
    let mut connection_parameters = IndexMap::new();
    connection_parameters.insert(
        "connectionString".to_string(),
        ConnectionParameterSpec {
            kind: ParameterKind::SecureString,
            source: ParameterSource::AppConfiguration,
            ui: UiDefinition {
                display_name: "Connection String".to_string(),
                description: "Azure Cosmos DB connection string".to_string(),
                tooltip: Some("Provide the Azure Cosmos DB connection string".to_string()),
                required: true,
            },
        },
    );

    ServiceApi {
        name: crate::provider::SERVICE_NAME.to_string(),
        id: crate::provider::SERVICE_ID.to_string(),
        kind: ApiKind::ServiceProvider,
        properties: ServiceApiProperties {
            display_name: "Cosmos DB".to_string(),
            description: "Connect to Azure Cosmos DB to receive documents.".to_string(),
            brand_color: 0xC4D5FF,
            icon_uri: ICON_URI.to_string(),
            capabilities: vec![ApiCapability::Triggers],
            connection_parameters,
        },
    }
}

/// Build the `receiveDocument` batch trigger manifest against the given
/// connector API. The descriptor embeds the flattened API; the manifest
/// attaches schema, inputs locations, settings, and recurrence.
pub(crate) fn receive_document(api: &ServiceApi) -> Result<OperationManifest, ProviderError> {
    let operation = Operation {
        name: RECEIVE_DOCUMENT.to_string(),
        id: RECEIVE_DOCUMENT.to_string(),
        operation_type: RECEIVE_DOCUMENT.to_string(),
        kind: OperationKind::Trigger {
            mode: TriggerMode::Batch,
        },
        summary: "receive document".to_string(),
        description: "receive document".to_string(),
        brand_color: 0x1C3A56,
        icon_uri: ICON_URI.to_string(),
        visibility: Visibility::Important,
        api: api.flattened(),
    };

    let inputs = SchemaNode::object()
        .property(
            "databaseName",
            SchemaNode::string()
                .title("database name")
                .description("database name")
                .finish()?,
        )
        .property(
            "collectionName",
            SchemaNode::string()
                .title("collection name")
                .description("collection name")
                .finish()?,
        )
        .require("databaseName")
        .finish()?;

    let outputs = SchemaNode::object()
        .property(
            "body",
            SchemaNode::array(
                SchemaNode::object()
                    .property(
                        "contentData",
                        SchemaNode::string()
                            .title("Content")
                            .description("content")
                            .format("byte")
                            .finish()?,
                    )
                    .property(
                        "Properties",
                        SchemaNode::object()
                            .title("documentProperties")
                            .description("document data properties")
                            .additional_properties(json!({
                                "type": "object",
                                "properties": {},
                                "required": {},
                            }))
                            .finish()?,
                    )
                    .finish()?,
            )
            .title("Receive document")
            .description("Receive document description")
            .finish()?,
        )
        .finish()?;

    Ok(operation.with_manifest(ManifestExtension {
        connection_reference: ConnectionReferenceFormat::ServiceProvider,
        inputs,
        outputs,
        inputs_location: vec![InputsLocation::Inputs, InputsLocation::Parameters],
        settings: ManifestSettings {
            secure_data: true,
            tracked_property_scopes: vec![OperationScope::Trigger],
        },
        recurrence: RecurrenceSetting {
            kind: RecurrenceKind::None,
        },
    }))
}

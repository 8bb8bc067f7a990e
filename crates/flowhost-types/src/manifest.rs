//! Operation manifests: the expanded, schema-rich view consumed by the
//! host's designer and code-generation layers.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;
use crate::schema::SchemaNode;

/// How a connection reference is keyed in workflow definitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionReferenceFormat {
    ServiceProvider,
}

/// Where operation inputs appear in the workflow definition payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum InputsLocation {
    Inputs,
    Parameters,
}

/// Scopes at which tracked properties may be declared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OperationScope {
    Trigger,
    Action,
}

/// Recurrence policy for trigger operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RecurrenceKind {
    /// The backing trigger binding drives its own cadence.
    None,
    Interval,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSetting {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
}

/// Designer-facing behavior toggles attached to a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSettings {
    /// Whether the operation participates in secure-data handling.
    #[serde(default)]
    pub secure_data: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked_property_scopes: Vec<OperationScope>,
}

/// Extension fields attached to an operation descriptor when building its
/// manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestExtension {
    pub connection_reference: ConnectionReferenceFormat,
    pub inputs: SchemaNode,
    pub outputs: SchemaNode,
    pub inputs_location: Vec<InputsLocation>,
    #[serde(default)]
    pub settings: ManifestSettings,
    pub recurrence: RecurrenceSetting,
}

/// An operation descriptor plus its manifest extension.
///
/// Built by [`Operation::with_manifest`]; the base descriptor is embedded
/// whole, so the summary and expanded views of one operation can never
/// disagree on identity or display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationManifest {
    #[serde(flatten)]
    pub operation: Operation,
    pub connection_reference: ConnectionReferenceFormat,
    pub inputs: SchemaNode,
    pub outputs: SchemaNode,
    pub inputs_location: Vec<InputsLocation>,
    #[serde(default)]
    pub settings: ManifestSettings,
    pub recurrence: RecurrenceSetting,
}

impl OperationManifest {
    /// Base operation name (unique within the connector).
    pub fn name(&self) -> &str {
        &self.operation.name
    }
}

impl Operation {
    /// Clone-and-extend: attach manifest fields to a copy of this
    /// descriptor. The base is never mutated, so the same descriptor can
    /// back both the lightweight and the expanded view without aliasing
    /// hazards.
    pub fn with_manifest(&self, extension: ManifestExtension) -> OperationManifest {
        OperationManifest {
            operation: self.clone(),
            connection_reference: extension.connection_reference,
            inputs: extension.inputs,
            outputs: extension.outputs,
            inputs_location: extension.inputs_location,
            settings: extension.settings,
            recurrence: extension.recurrence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiKind, ServiceApi, ServiceApiProperties};
    use crate::operation::{OperationKind, TriggerMode, Visibility};
    use indexmap::IndexMap;

    fn base_operation() -> Operation {
        Operation {
            name: "receiveDocument".to_string(),
            id: "receiveDocument".to_string(),
            operation_type: "receiveDocument".to_string(),
            kind: OperationKind::Trigger {
                mode: TriggerMode::Batch,
            },
            summary: "receive document".to_string(),
            description: "receive document".to_string(),
            brand_color: 0x1C3A56,
            icon_uri: "https://example.invalid/icon.png".to_string(),
            visibility: Visibility::Important,
            api: ServiceApi {
                name: "cosmosdb".to_string(),
                id: "/serviceProviders/cosmosdb".to_string(),
                kind: ApiKind::ServiceProvider,
                properties: ServiceApiProperties {
                    display_name: "Cosmos DB".to_string(),
                    description: "Connect to Cosmos DB.".to_string(),
                    brand_color: 0xC4D5FF,
                    icon_uri: "https://example.invalid/icon.png".to_string(),
                    capabilities: vec![],
                    connection_parameters: IndexMap::new(),
                },
            },
        }
    }

    fn extension(inputs_location: Vec<InputsLocation>) -> ManifestExtension {
        ManifestExtension {
            connection_reference: ConnectionReferenceFormat::ServiceProvider,
            inputs: SchemaNode::object().finish().unwrap(),
            outputs: SchemaNode::object().finish().unwrap(),
            inputs_location,
            settings: ManifestSettings {
                secure_data: true,
                tracked_property_scopes: vec![OperationScope::Trigger],
            },
            recurrence: RecurrenceSetting {
                kind: RecurrenceKind::None,
            },
        }
    }

    #[test]
    fn with_manifest_keeps_base_fields() {
        let base = base_operation();
        let manifest = base.with_manifest(extension(vec![InputsLocation::Inputs]));
        assert_eq!(manifest.operation, base);
        assert_eq!(manifest.name(), "receiveDocument");
    }

    #[test]
    fn with_manifest_does_not_mutate_base() {
        let base = base_operation();
        let snapshot = base.clone();
        let first = base.with_manifest(extension(vec![InputsLocation::Inputs]));
        let second = base.with_manifest(extension(vec![
            InputsLocation::Inputs,
            InputsLocation::Parameters,
        ]));
        assert_eq!(base, snapshot);
        assert_eq!(first.operation, second.operation);
        assert_ne!(first.inputs_location, second.inputs_location);
    }

    #[test]
    fn manifest_json_flattens_base_descriptor() {
        let manifest = base_operation().with_manifest(extension(vec![InputsLocation::Inputs]));
        let json = serde_json::to_value(&manifest).expect("serialize");
        // base fields and extension fields sit side by side
        assert_eq!(json["name"], "receiveDocument");
        assert_eq!(json["connectionReference"], "serviceProvider");
        assert_eq!(json["recurrence"]["type"], "none");
        assert_eq!(json["settings"]["trackedPropertyScopes"][0], "trigger");
    }

    #[test]
    fn roundtrip() {
        let manifest = base_operation().with_manifest(extension(vec![
            InputsLocation::Inputs,
            InputsLocation::Parameters,
        ]));
        let json = serde_json::to_string(&manifest).expect("serialize");
        let back: OperationManifest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(manifest, back);
    }
}

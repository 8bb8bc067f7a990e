//! Operation descriptors: the lightweight, discovery-facing view of one
//! connector capability.

use serde::{Deserialize, Serialize};

use crate::api::ServiceApi;

/// Polling cadence of a trigger operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TriggerMode {
    /// The host delivers batches of records per polling cycle.
    Batch,
    /// The host delivers one record per polling cycle.
    Single,
}

/// How the host drives an operation. Checked before dispatch, so the
/// unsupported path is an ordinary branch rather than a fallback panic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OperationKind {
    /// Polled/monitored by the host rather than called synchronously.
    Trigger { mode: TriggerMode },
    /// Invoked synchronously through the action dispatch surface.
    Action,
}

impl OperationKind {
    pub fn is_trigger(&self) -> bool {
        matches!(self, OperationKind::Trigger { .. })
    }
}

/// Designer listing prominence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Important,
    Advanced,
    Internal,
}

/// Immutable descriptor for one named operation.
///
/// Created once at connector construction and shared by reference across
/// registry structures; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, unique within the connector (ASCII case-insensitive).
    pub name: String,
    pub id: String,
    /// Operation type tag as the designer surface expects it.
    pub operation_type: String,
    #[serde(flatten)]
    pub kind: OperationKind,
    pub summary: String,
    pub description: String,
    /// 24-bit RGB, rendered as the operation tile color.
    pub brand_color: u32,
    pub icon_uri: String,
    pub visibility: Visibility,
    /// Flattened connector API this operation belongs to.
    pub api: ServiceApi,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiKind, ServiceApiProperties};
    use indexmap::IndexMap;

    fn sample_operation() -> Operation {
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

    #[test]
    fn trigger_kind_is_tagged_inline() {
        let json = serde_json::to_value(sample_operation()).expect("serialize");
        assert_eq!(json["kind"], "trigger");
        assert_eq!(json["mode"], "batch");
        assert_eq!(json["operationType"], "receiveDocument");
        assert_eq!(json["visibility"], "important");
    }

    #[test]
    fn action_kind_has_no_mode() {
        let mut op = sample_operation();
        op.kind = OperationKind::Action;
        assert!(!op.kind.is_trigger());
        let json = serde_json::to_value(&op).expect("serialize");
        assert_eq!(json["kind"], "action");
        assert!(json.get("mode").is_none());
    }

    #[test]
    fn roundtrip() {
        let op = sample_operation();
        let json = serde_json::to_string(&op).expect("serialize");
        let back: Operation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(op, back);
    }
}

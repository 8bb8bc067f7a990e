//! Connector-level API descriptor and connection-parameter schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable identity under which a connector registers with the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorIdentity {
    /// Unique service name, lowercase by convention (e.g. "cosmosdb").
    pub service_name: String,
    /// Unique service id (e.g. "/serviceProviders/cosmosdb").
    pub service_id: String,
}

/// Designer-facing API classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ApiKind {
    ServiceProvider,
}

/// Capabilities a connector advertises to the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ApiCapability {
    Triggers,
    Actions,
}

/// Value kinds a connection parameter can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    /// Secret material, masked in designer surfaces.
    SecureString,
    String,
    Int,
    Bool,
}

/// Where the host sources a connection parameter value from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ParameterSource {
    AppConfiguration,
    Manual,
}

/// Designer rendering hints for one connection parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiDefinition {
    pub display_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub required: bool,
}

/// How a caller supplies one connection secret.
///
/// Owned by the service API descriptor; immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParameterSpec {
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    pub source: ParameterSource,
    pub ui: UiDefinition,
}

/// Branding and connection-schema properties shared by a connector's
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceApiProperties {
    pub display_name: String,
    pub description: String,
    /// 24-bit RGB, rendered as the connector tile color.
    pub brand_color: u32,
    pub icon_uri: String,
    pub capabilities: Vec<ApiCapability>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub connection_parameters: IndexMap<String, ConnectionParameterSpec>,
}

/// Identity, branding, and connection-parameter schema for the connector as
/// a whole. One per connector, shared by all its operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceApi {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ApiKind,
    pub properties: ServiceApiProperties,
}

impl ServiceApi {
    /// Copy of this descriptor with the connection-parameter schema
    /// stripped, suitable for embedding into each operation descriptor.
    /// Listing operations then never drags the full connection schema along.
    pub fn flattened(&self) -> ServiceApi {
        let mut api = self.clone();
        api.properties.connection_parameters = IndexMap::new();
        api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_api() -> ServiceApi {
        let mut connection_parameters = IndexMap::new();
        connection_parameters.insert(
            "connectionString".to_string(),
            ConnectionParameterSpec {
                kind: ParameterKind::SecureString,
                source: ParameterSource::AppConfiguration,
                ui: UiDefinition {
                    display_name: "Connection String".to_string(),
                    description: "Storage account connection string".to_string(),
                    tooltip: Some("Provide the connection string".to_string()),
                    required: true,
                },
            },
        );
        ServiceApi {
            name: "cosmosdb".to_string(),
            id: "/serviceProviders/cosmosdb".to_string(),
            kind: ApiKind::ServiceProvider,
            properties: ServiceApiProperties {
                display_name: "Cosmos DB".to_string(),
                description: "Connect to Cosmos DB to receive documents.".to_string(),
                brand_color: 0xC4D5FF,
                icon_uri: "https://example.invalid/icon.png".to_string(),
                capabilities: vec![ApiCapability::Triggers],
                connection_parameters,
            },
        }
    }

    #[test]
    fn flattened_strips_connection_parameters_only() {
        let api = sample_api();
        let flat = api.flattened();
        assert!(flat.properties.connection_parameters.is_empty());
        assert_eq!(flat.id, api.id);
        assert_eq!(flat.name, api.name);
        assert_eq!(flat.properties.display_name, api.properties.display_name);
        assert_eq!(flat.properties.brand_color, api.properties.brand_color);
        // the original is untouched
        assert_eq!(api.properties.connection_parameters.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_api()).expect("serialize");
        assert_eq!(json["type"], "serviceProvider");
        assert_eq!(json["properties"]["displayName"], "Cosmos DB");
        assert_eq!(
            json["properties"]["connectionParameters"]["connectionString"]["type"],
            "secureString"
        );
        assert_eq!(
            json["properties"]["connectionParameters"]["connectionString"]["ui"]["required"],
            true
        );
    }

    #[test]
    fn roundtrip() {
        let api = sample_api();
        let json = serde_json::to_string(&api).expect("serialize");
        let back: ServiceApi = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(api, back);
    }
}

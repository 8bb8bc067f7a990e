//! Declarative schema nodes for operation inputs and outputs.
//!
//! Schema here is descriptive metadata consumed by the host's designer and
//! validation layers; nothing in this crate validates documents against it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value shape tags for one schema node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
}

/// A recursive JSON-like schema describing one value shape.
///
/// Immutable once attached to an operation manifest. Construct through the
/// typed builders ([`SchemaNode::object`], [`SchemaNode::array`], ...), which
/// enforce the structural invariants at `finish()` time:
///
/// - every `required` name is a declared property (object nodes only)
/// - `items` is present exactly when the node type is `Array`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub node_type: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Serialization hint (e.g. "byte" for base64-encoded content).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Ordered property map; the order is what the designer renders.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Free-form designer payload for open object shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<serde_json::Value>,
}

/// Structural schema violations caught at build time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required property `{name}` is not declared in `properties`")]
    UnknownRequired { name: String },

    #[error("`required` is only meaningful on object nodes")]
    RequiredOnNonObject,

    #[error("`properties` is only meaningful on object nodes")]
    PropertiesOnNonObject,
}

impl SchemaNode {
    /// Start an object node.
    pub fn object() -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::Object, None)
    }

    /// Start an array node over the given item shape.
    pub fn array(items: SchemaNode) -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::Array, Some(Box::new(items)))
    }

    /// Start a string node.
    pub fn string() -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::String, None)
    }

    /// Start an integer node.
    pub fn integer() -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::Integer, None)
    }

    /// Start a number node.
    pub fn number() -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::Number, None)
    }

    /// Start a boolean node.
    pub fn boolean() -> SchemaBuilder {
        SchemaBuilder::new(SchemaType::Boolean, None)
    }
}

/// Builder for [`SchemaNode`]; `finish()` checks the structural invariants.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    node: SchemaNode,
}

impl SchemaBuilder {
    fn new(node_type: SchemaType, items: Option<Box<SchemaNode>>) -> Self {
        Self {
            node: SchemaNode {
                node_type,
                title: None,
                description: None,
                format: None,
                properties: IndexMap::new(),
                items,
                required: Vec::new(),
                additional_properties: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.node.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.node.description = Some(description.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.node.format = Some(format.into());
        self
    }

    /// Declare a named property. Later declarations with the same name
    /// overwrite earlier ones, keeping the original position.
    pub fn property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.node.properties.insert(name.into(), node);
        self
    }

    /// Mark a declared property as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.node.required.push(name.into());
        self
    }

    /// Attach a free-form `additionalProperties` payload.
    pub fn additional_properties(mut self, value: serde_json::Value) -> Self {
        self.node.additional_properties = Some(value);
        self
    }

    /// Validate and return the finished node.
    pub fn finish(self) -> Result<SchemaNode, SchemaError> {
        let node = self.node;
        if node.node_type != SchemaType::Object {
            if !node.required.is_empty() {
                return Err(SchemaError::RequiredOnNonObject);
            }
            if !node.properties.is_empty() {
                return Err(SchemaError::PropertiesOnNonObject);
            }
        }
        for name in &node.required {
            if !node.properties.contains_key(name) {
                return Err(SchemaError::UnknownRequired { name: name.clone() });
            }
        }
        Ok(node)
    }
}

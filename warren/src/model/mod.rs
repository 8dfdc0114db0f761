use crate::model::version::JsonApiVersion;
use serde_json::Value;
use std::collections::HashMap;

pub mod document;
pub mod error;
pub mod link;
pub mod resource;
pub mod version;

pub type Meta = HashMap<String, Value>;
pub type Id = String;

/// Top-level `jsonapi` member
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JsonApiInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<JsonApiVersion>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub meta: Meta,
}

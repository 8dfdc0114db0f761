use crate::error::WarrenError;
use crate::model::link::Links;
use crate::model::{Id, Meta};
use crate::WarrenResult;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

pub type Resources = Vec<Resource>;

/// Resource Identifier
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
}

/// JSON:API resource as received from the upstream service.
///
/// Relationship payloads are kept as raw JSON; only `attributes` are decoded
/// into typed models through [`Resource::attributes_as`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Resource {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[serde(default)]
    pub relationships: Map<String, Value>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub links: Links,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub meta: Meta,
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool { self.ty == other.ty && self.id == other.id }
}

impl Eq for Resource {}

impl Hash for Resource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
        self.id.hash(state);
    }
}

impl Resource {
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier { ty: self.ty.clone(), id: self.id.clone() }
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> { self.attributes.get(key) }

    /// Decodes `attributes` into a typed model
    pub fn attributes_as<T: DeserializeOwned>(&self) -> WarrenResult<T> {
        serde_json::from_value(Value::Object(self.attributes.clone())).map_err(WarrenError::from)
    }

    /// Decodes `attributes` plus the resource `id` into a typed model, the `id` being
    /// inserted under the `"id"` key
    pub fn to_model<T: DeserializeOwned>(&self) -> WarrenResult<T> {
        let mut map = self.attributes.clone();
        map.insert("id".into(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

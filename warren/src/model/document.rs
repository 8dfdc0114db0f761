use crate::error::WarrenError;
use crate::model::error::Errors;
use crate::model::link::{Link, Links};
use crate::model::resource::{Resource, ResourceIdentifier, Resources};
use crate::model::{JsonApiInfo, Meta};
use crate::pager::{PageLinkSet, PagerRelation};
use crate::WarrenResult;
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::TryFrom;

pub type Included = HashMap<ResourceIdentifier, Resource>;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryDataItem {
    Single(Box<Resource>),
    Multiple(Resources),
}

impl PrimaryDataItem {
    pub fn into_resources(self) -> Resources {
        match self {
            PrimaryDataItem::Single(res) => vec![*res],
            PrimaryDataItem::Multiple(vec) => vec,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentItem {
    PrimaryData(Option<(PrimaryDataItem, Included)>),
    Errors(Errors),
}

impl Default for DocumentItem {
    fn default() -> Self { DocumentItem::PrimaryData(None) }
}

/// Top-level document of an upstream response
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    pub item: DocumentItem,
    pub links: Links,
    pub meta: Meta,
    pub jsonapi: Option<JsonApiInfo>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    data: Option<PrimaryDataItem>,
    included: Option<Resources>,
    errors: Option<Errors>,
    #[serde(default)]
    links: HashMap<String, Value>,
    #[serde(default)]
    meta: Meta,
    jsonapi: Option<JsonApiInfo>,
}

/// Keeps every link that parses. An unparseable pagination link fails the document, any
/// other unparseable link (`self`, `describedby`, ...) is dropped.
fn lenient_links(raw: HashMap<String, Value>) -> Result<Links, String> {
    let mut links = Links::with_capacity(raw.len());
    for (key, value) in raw {
        match serde_json::from_value::<Link>(value) {
            Ok(link) => {
                links.insert(key, link);
            },
            Err(err) if key.parse::<PagerRelation>().is_ok() => {
                return Err(format!("pagination link `{}` is not a valid URI: {}", key, err));
            },
            Err(err) => warn!("dropping link `{}`: {}", key, err),
        }
    }
    Ok(links)
}

impl TryFrom<RawDocument> for Document {
    type Error = String;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let RawDocument { data, included, errors, links, meta, jsonapi } = raw;
        let links = lenient_links(links)?;
        let item = match (data, included, errors) {
            (Some(_), _, Some(_)) => {
                return Err("field `data` and `errors` cannot exist in the same document".into())
            },
            (None, Some(_), _) => {
                return Err("field `included` cannot exist without `data`".into());
            },
            (Some(data), included, None) => {
                let included: Included = included
                    .unwrap_or_default()
                    .into_iter()
                    .map(|r| (r.identifier(), r))
                    .collect();
                DocumentItem::PrimaryData(Some((data, included)))
            },
            (None, None, Some(errors)) => DocumentItem::Errors(errors),
            (None, None, None) => DocumentItem::PrimaryData(None),
        };
        Ok(Document { item, links, meta, jsonapi })
    }
}

impl Document {
    pub fn errors(&self) -> Option<&Errors> {
        match &self.item {
            DocumentItem::Errors(errors) => Some(errors),
            _ => None,
        }
    }

    /// Primary resources of the document, a single resource becoming a one-item list
    pub fn into_resources(self) -> WarrenResult<(Resources, Included)> {
        match self.item {
            DocumentItem::PrimaryData(Some((data, included))) => {
                Ok((data.into_resources(), included))
            },
            DocumentItem::PrimaryData(None) => Err(WarrenError::MissingPrimaryData),
            DocumentItem::Errors(errors) => Err(WarrenError::UpstreamErrors(errors)),
        }
    }

    /// Pagination links of the document; every other top-level link is ignored
    pub fn page_links(&self) -> PageLinkSet { PageLinkSet::from_links(&self.links) }
}

use crate::model::Meta;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type Links = HashMap<String, Link>;

/// A JSON:API link: either a bare URI string or a link object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Link {
    Raw(#[serde(with = "http_serde::uri")] http::Uri),
    Object {
        #[serde(with = "http_serde::uri")]
        href: http::Uri,
        #[serde(default)]
        #[serde(skip_serializing_if = "HashMap::is_empty")]
        meta: Meta,
    },
}

impl Link {
    pub fn uri(&self) -> &http::Uri {
        match self {
            Link::Raw(raw) => raw,
            Link::Object { href, .. } => href,
        }
    }

    /// Raw query string of the link, without the leading `?`
    pub fn query(&self) -> Option<&str> { self.uri().query() }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.uri()) }
}

impl FromStr for Link {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Link::Raw(s.parse()?)) }
}

impl From<http::Uri> for Link {
    fn from(r: http::Uri) -> Self { Link::Raw(r) }
}

impl From<Link> for http::Uri {
    fn from(link: Link) -> Self {
        match link {
            Link::Raw(raw) => raw,
            Link::Object { href, .. } => href,
        }
    }
}

impl From<&Link> for http::Uri {
    fn from(link: &Link) -> Self { link.uri().to_owned() }
}

use crate::model::error::Errors;
use std::fmt;
use thiserror::Error;

/// Why a page number could not be read out of a pagination link
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PageLinkFault {
    MissingParameter(String),
    NotANumber(String),
    NotPositive,
}

impl fmt::Display for PageLinkFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLinkFault::MissingParameter(key) => write!(f, "query parameter `{}` is missing", key),
            PageLinkFault::NotANumber(value) => write!(f, "`{}` is not a page number", value),
            PageLinkFault::NotPositive => write!(f, "page number must be positive"),
        }
    }
}

#[derive(Error, Debug)]
pub enum WarrenError {
    #[error("Invalid URI: {0}")]
    InvalidUri(String, #[source] http::uri::InvalidUri),
    #[error("Malformed page link `{link}`: {reason}")]
    MalformedPageLink { link: String, reason: PageLinkFault },
    #[error("Unknown pager relation: {0}, the valid relations: `first`, `prev`, `next`, `last`")]
    UnknownRelation(String),
    #[error("Invalid JSON:API version: {0}")]
    InvalidJsonApiVersion(String),
    #[error("Upstream responded with {} error(s)", .0.len())]
    UpstreamErrors(Errors),
    #[error("Document has no primary data")]
    MissingPrimaryData,
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WarrenError {
    pub fn malformed(link: impl ToString, reason: PageLinkFault) -> Self {
        WarrenError::MalformedPageLink { link: link.to_string(), reason }
    }

    pub fn is_malformed_page_link(&self) -> bool {
        matches!(self, WarrenError::MalformedPageLink { .. })
    }
}

from_external_error!(serde_json::Error);

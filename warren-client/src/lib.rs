#[macro_use]
extern crate serde_derive;

use thiserror::Error;

pub mod credentials;
pub mod endpoint;
pub mod middleware;
pub mod settings;

pub use crate::credentials::Credentials;
pub use crate::endpoint::ApiEndpoint;
pub use crate::middleware::{Interceptor, JsonApiHeaders, Pipeline, TokenAuth};
pub use crate::settings::Settings;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Credential field `{0}` cannot carry quotes, backslashes or line breaks")]
    InvalidCredential(&'static str),
    #[error("Invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String, #[source] url::ParseError),
    #[error("Invalid resource path: {0}")]
    InvalidPath(String, #[source] url::ParseError),
    #[error("URL `{0}` is outside of the configured API base")]
    ForeignUrl(String),
    #[error("Invalid request")]
    InvalidRequest(#[from] http::Error),
    #[error("Settings error")]
    Settings(#[from] config::ConfigError),
    #[error(transparent)]
    Warren(#[from] warren::error::WarrenError),
}

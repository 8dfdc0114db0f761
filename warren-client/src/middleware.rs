use crate::credentials::Credentials;
use crate::ClientResult;
use http::header::{self, HeaderMap, HeaderValue};
use http::Request;
use log::trace;

/// One request-transformation step of a [`Pipeline`]
pub trait Interceptor {
    fn name(&self) -> &'static str;

    fn intercept(&self, headers: &mut HeaderMap) -> ClientResult<()>;

    /// Runs this step alone on a whole request
    fn decorate<B>(&self, request: Request<B>) -> ClientResult<Request<B>>
    where
        Self: Sized,
    {
        let (mut parts, body) = request.into_parts();
        self.intercept(&mut parts.headers)?;
        Ok(Request::from_parts(parts, body))
    }
}

/// Sets `Content-Type` and `Accept` to the JSON:API media type
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonApiHeaders;

impl Interceptor for JsonApiHeaders {
    fn name(&self) -> &'static str { "jsonapi-headers" }

    fn intercept(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        let media_type = HeaderValue::from_static(warren::JSON_API_HEADER);
        headers.insert(header::CONTENT_TYPE, media_type.clone());
        headers.insert(header::ACCEPT, media_type);
        Ok(())
    }
}

/// Sends the token-auth `Authorization` header of one [`Credentials`] value
#[derive(Debug, Clone)]
pub struct TokenAuth {
    credentials: Credentials,
}

impl TokenAuth {
    pub fn new(credentials: Credentials) -> Self { Self { credentials } }

    pub fn credentials(&self) -> &Credentials { &self.credentials }
}

impl Interceptor for TokenAuth {
    fn name(&self) -> &'static str { "token-auth" }

    fn intercept(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        headers.insert(header::AUTHORIZATION, self.credentials.authorization()?);
        Ok(())
    }
}

/// Ordered chain of interceptors applied to every outbound request
#[derive(Default)]
pub struct Pipeline {
    interceptors: Vec<Box<dyn Interceptor + Send + Sync>>,
}

impl Pipeline {
    pub fn new() -> Self { Self::default() }

    /// JSON:API media type headers followed by token auth
    pub fn for_credentials(credentials: Credentials) -> Self {
        Self::new().with(JsonApiHeaders).with(TokenAuth::new(credentials))
    }

    pub fn with<I>(mut self, interceptor: I) -> Self
    where
        I: Interceptor + Send + Sync + 'static,
    {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    pub fn len(&self) -> usize { self.interceptors.len() }

    pub fn is_empty(&self) -> bool { self.interceptors.is_empty() }

    pub fn apply<B>(&self, request: Request<B>) -> ClientResult<Request<B>> {
        let (mut parts, body) = request.into_parts();
        for interceptor in &self.interceptors {
            trace!("{} {}: applying `{}`", parts.method, parts.uri, interceptor.name());
            interceptor.intercept(&mut parts.headers)?;
        }
        Ok(Request::from_parts(parts, body))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.interceptors.iter().map(|i| i.name())).finish()
    }
}

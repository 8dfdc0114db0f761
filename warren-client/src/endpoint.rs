use crate::credentials::Credentials;
use crate::middleware::{Interceptor, JsonApiHeaders, Pipeline, TokenAuth};
use crate::{ClientError, ClientResult};
use http::{Method, Request};
use log::{debug, warn};
use url::Url;
use warren::{PageNumber, PagerSettings};

/// Builds authenticated requests against the upstream JSON:API service.
///
/// Nothing is sent from here: the returned `http::Request` goes to whatever HTTP client the
/// application uses. Credentials travel with each call rather than with the endpoint.
#[derive(Debug)]
pub struct ApiEndpoint {
    base: Url,
    pager: PagerSettings,
    pipeline: Pipeline,
}

impl ApiEndpoint {
    pub fn new(base: &str, pager: PagerSettings) -> ClientResult<Self> {
        let mut base = Url::parse(base).map_err(|err| ClientError::InvalidBaseUrl(base.into(), err))?;
        // `join` would drop the last segment of a base without a trailing slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, pager, pipeline: Pipeline::new().with(JsonApiHeaders) })
    }

    /// Replaces the shared interceptors run before token auth
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn base(&self) -> &Url { &self.base }

    /// Absolute upstream URL of `path`, asking for `page` when given.
    ///
    /// The result must stay under the base URL: absolute URLs on another origin and `..`
    /// segments climbing out of the base path are rejected with `ClientError::ForeignUrl`.
    pub fn url_for(&self, path: &str, page: Option<PageNumber>) -> ClientResult<Url> {
        let relative = path.trim_start_matches('/');
        let mut url =
            self.base.join(relative).map_err(|err| ClientError::InvalidPath(path.into(), err))?;
        if url.origin() != self.base.origin() || !url.path().starts_with(self.base.path()) {
            warn!("refusing to send credentials to `{}` outside of {}", url, self.base);
            return Err(ClientError::ForeignUrl(url.as_str().to_owned()));
        }
        if let Some(page) = page {
            url.query_pairs_mut().append_pair(&self.pager.page_param, &page.to_string());
        }
        Ok(url)
    }

    pub fn request(
        &self, credentials: &Credentials, method: Method, path: &str, page: Option<PageNumber>,
    ) -> ClientResult<Request<()>> {
        let url = self.url_for(path, page)?;
        debug!("{} {} as {}", method, url, credentials.email());
        let request = Request::builder().method(method).uri(url.as_str()).body(())?;
        let request = self.pipeline.apply(request)?;
        TokenAuth::new(credentials.clone()).decorate(request)
    }

    /// `GET` of one page of a collection
    pub fn listing(
        &self, credentials: &Credentials, path: &str, page: PageNumber,
    ) -> ClientResult<Request<()>> {
        self.request(credentials, Method::GET, path, Some(page))
    }
}

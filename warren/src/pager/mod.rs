//! Rewrites upstream pagination links into links served by the consuming application.
//!
//! Upstream `first`/`prev`/`next`/`last` links point at an API that requires a credential
//! header, so they cannot be handed to a browser as-is. Only the page number survives the
//! rewrite; the local URL shape is left to a caller supplied builder.

pub mod number;
pub mod relative;

pub use self::number::PageNumber;
pub use self::relative::{PageLinkSet, PagerRelation, RelativePages};

use crate::error::{PageLinkFault, WarrenError};
use crate::model::link::Link;
use crate::WarrenResult;
use log::{debug, trace};
use url::form_urlencoded;

pub const DEFAULT_PAGE_PARAM: &str = "page[number]";
pub const DEFAULT_LOCAL_PARAM: &str = "page";

/// Local pager produced by a [`Translator`]
pub type LocalPager = RelativePages<String>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LocalPagerEntry {
    pub relation: PagerRelation,
    pub url: String,
}

impl RelativePages<String> {
    pub fn entries(&self) -> Vec<LocalPagerEntry> {
        self.iter().map(|(relation, url)| LocalPagerEntry { relation, url: url.clone() }).collect()
    }
}

#[derive(Debug, Deserialize, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct PagerSettings {
    /// Query key carrying the page number in upstream links
    pub page_param: String,
}

impl Default for PagerSettings {
    fn default() -> Self { Self { page_param: DEFAULT_PAGE_PARAM.into() } }
}

/// Builds `<path>?<param>=<page>` URLs, keeping any query the path already has
#[derive(Debug, Deserialize, Clone, Eq, PartialEq)]
pub struct LocalRoute {
    pub path: String,
    #[serde(default = "LocalRoute::default_param")]
    pub param: String,
}

impl LocalRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), param: Self::default_param() }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    fn default_param() -> String { DEFAULT_LOCAL_PARAM.into() }

    pub fn build(&self, page: PageNumber) -> String {
        let (path, query) = match self.path.find('?') {
            Some(idx) => (&self.path[.. idx], &self.path[idx + 1 ..]),
            None => (self.path.as_str(), ""),
        };
        let query = form_urlencoded::Serializer::new(query.to_string())
            .append_pair(&self.param, &page.to_string())
            .finish();
        format!("{}?{}", path, query)
    }

    /// Page asked for by an inbound local URL, page 1 when the parameter is absent
    pub fn requested_page(&self, uri: &http::Uri) -> WarrenResult<PageNumber> {
        match PageNumber::from_link(&Link::from(uri.clone()), &self.param) {
            Err(WarrenError::MalformedPageLink {
                reason: PageLinkFault::MissingParameter(_), ..
            }) => Ok(PageNumber::FIRST),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    settings: PagerSettings,
}

impl Translator {
    pub fn new(settings: PagerSettings) -> Self { Self { settings } }

    pub fn settings(&self) -> &PagerSettings { &self.settings }

    pub fn extract(&self, link: &Link) -> WarrenResult<PageNumber> {
        PageNumber::from_link(link, &self.settings.page_param)
    }

    /// Maps every present relation to `url_builder(page number of its link)`.
    ///
    /// Relations absent from `links` stay absent; the first malformed link aborts the
    /// translation with `WarrenError::MalformedPageLink`.
    pub fn translate<F>(&self, links: &PageLinkSet, url_builder: F) -> WarrenResult<LocalPager>
    where
        F: Fn(PageNumber) -> String,
    {
        let pager = links.try_map(|rel, link| -> WarrenResult<String> {
            let page = self.extract(link)?;
            trace!("{} link `{}` resolves to page {}", rel, link, page);
            Ok(url_builder(page))
        })?;
        debug!("translated pager: {}", pager);
        Ok(pager)
    }

    pub fn translate_to_route(
        &self, links: &PageLinkSet, route: &LocalRoute,
    ) -> WarrenResult<LocalPager> {
        self.translate(links, |page| route.build(page))
    }
}

/// [`Translator::translate`] with the default `page[number]` key
pub fn translate<F>(links: &PageLinkSet, url_builder: F) -> WarrenResult<LocalPager>
where
    F: Fn(PageNumber) -> String,
{
    Translator::default().translate(links, url_builder)
}

#[cfg(test)]
mod tests {
    use super::{translate, LocalRoute, PageLinkSet, PageNumber, PagerSettings, Translator};
    use crate::pager::PagerRelation;

    fn page(n: u32) -> PageNumber { PageNumber::new(n).unwrap() }

    #[test]
    fn local_route_test() {
        assert_eq!(LocalRoute::new("/posts").build(page(2)), "/posts?page=2");
        assert_eq!(
            LocalRoute::new("/posts?filter=mine").build(page(3)),
            "/posts?filter=mine&page=3"
        );
        assert_eq!(
            LocalRoute::new("/posts").with_param("p[n]").build(page(4)),
            "/posts?p%5Bn%5D=4"
        );
    }

    #[test]
    fn requested_page_test() {
        let route = LocalRoute::new("/posts");
        let page_of = |uri: &str| route.requested_page(&uri.parse().unwrap());
        assert_eq!(page_of("/posts?page=7").unwrap(), page(7));
        assert_eq!(page_of("/posts").unwrap(), PageNumber::FIRST);
        assert!(page_of("/posts?page=zero").unwrap_err().is_malformed_page_link());
    }

    #[test]
    fn custom_page_param_test() {
        let links = PageLinkSet::from_pairs(vec![("next", "http://api.example/posts?pg=5")]).unwrap();
        let translator = Translator::new(PagerSettings { page_param: "pg".into() });
        let pager = translator.translate_to_route(&links, &LocalRoute::new("/posts")).unwrap();
        assert_eq!(pager.get(PagerRelation::Next).map(String::as_str), Some("/posts?page=5"));

        assert!(translate(&links, |n| n.to_string()).unwrap_err().is_malformed_page_link());
    }

    #[test]
    fn settings_default_test() {
        let settings: PagerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.page_param, "page[number]");
    }
}

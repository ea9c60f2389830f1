use serde::Serialize;
use url::{form_urlencoded, ParseError, Url};
use crate::config::SiteConfig;
use crate::{Error, Result};

const LOCAL_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    List,
    Detail,
}

/// Which view to render, decided once from the page location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    pub mode: ViewMode,
    pub article_id: Option<String>,
}

impl NavigationContext {
    pub fn list() -> Self {
        Self {
            mode: ViewMode::List,
            article_id: None,
        }
    }

    pub fn detail(article_id: impl Into<String>) -> Self {
        Self {
            mode: ViewMode::Detail,
            article_id: Some(article_id.into()),
        }
    }

    /// Derives the context from a page location such as `berita.html?id=a1`
    /// or a full URL. Any path naming the detail page selects the detail
    /// view; everything else is the list view.
    pub fn from_location(location: &str, config: &SiteConfig) -> Result<Self> {
        let url = parse_location(location)?;

        if !url.path().contains(config.detail_page.as_str()) {
            return Ok(Self::list());
        }

        let article_id = url
            .query_pairs()
            .find(|(key, _)| key == config.id_param.as_str())
            .map(|(_, value)| value.into_owned());

        Ok(Self {
            mode: ViewMode::Detail,
            article_id,
        })
    }
}

/// Link to the detail page for `id`, with the id form-encoded.
pub fn detail_href(id: &str, config: &SiteConfig) -> String {
    let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{}?{}={}", config.detail_page, config.id_param, encoded)
}

fn parse_location(location: &str) -> Result<Url> {
    match Url::parse(location) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(LOCAL_BASE)
            .and_then(|base| base.join(location))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", location, e))),
        Err(e) => Err(Error::InvalidUrl(format!("{}: {}", location, e))),
    }
}

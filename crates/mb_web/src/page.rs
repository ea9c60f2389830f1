use serde::Serialize;

pub const NEWS_CONTAINER: &str = "newsContainer";
pub const ARTICLE_CONTAINER: &str = "articleContainer";
pub const RELATED_CONTAINER: &str = "relatedContainer";

/// Markup destined for one element of the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mount {
    pub id: &'static str,
    pub html: String,
}

/// Every fragment produced by a single page load, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub mounts: Vec<Mount>,
}

impl RenderedPage {
    pub fn mount(&mut self, id: &'static str, html: String) {
        self.mounts.push(Mount { id, html });
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.mounts.iter().find(|m| m.id == id).map(|m| m.html.as_str())
    }
}

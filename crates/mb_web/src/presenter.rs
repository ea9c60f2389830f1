use mb_core::{Article, ArticleSource, NavigationContext, SiteConfig, ViewMode};
use std::sync::Arc;
use tracing::{debug, info};
use crate::page::{RenderedPage, ARTICLE_CONTAINER, NEWS_CONTAINER, RELATED_CONTAINER};
use crate::views::{ArticleCard, ArticleDetail, DetailView, ListView, RelatedLink};

/// Turns the article collection into the list or detail view.
///
/// Holds no state between renders: every call loads the collection afresh.
pub struct Presenter {
    source: Arc<dyn ArticleSource>,
    config: SiteConfig,
}

impl Presenter {
    pub fn new(source: Arc<dyn ArticleSource>, config: SiteConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub async fn render_list_view(&self) -> ListView {
        let articles = self.source.load_collection().await;
        build_list_view(&articles, &self.config)
    }

    pub async fn render_detail_view(&self, article_id: Option<&str>) -> DetailView {
        let articles = self.source.load_collection().await;
        build_detail_view(&articles, article_id, &self.config)
    }

    /// Runs exactly one of the two views, as selected by `ctx`.
    pub async fn render(&self, ctx: &NavigationContext) -> RenderedPage {
        let mut page = RenderedPage::default();
        match ctx.mode {
            ViewMode::List => {
                let view = self.render_list_view().await;
                info!("📰 Rendering {} article cards", view.cards().len());
                page.mount(NEWS_CONTAINER, view.to_html());
            }
            ViewMode::Detail => {
                let view = self.render_detail_view(ctx.article_id.as_deref()).await;
                page.mount(ARTICLE_CONTAINER, view.article_html());
                if let Some(related) = view.related_html() {
                    page.mount(RELATED_CONTAINER, related);
                }
            }
        }
        page
    }
}

pub fn build_list_view(articles: &[Article], config: &SiteConfig) -> ListView {
    if articles.is_empty() {
        return ListView::Empty;
    }
    ListView::Cards(articles.iter().map(|a| ArticleCard::from_article(a, config)).collect())
}

/// Looks `article_id` up by exact match; a missing or stale id is not an error.
pub fn build_detail_view(
    articles: &[Article],
    article_id: Option<&str>,
    config: &SiteConfig,
) -> DetailView {
    let Some(id) = article_id else {
        debug!("No article id in navigation context");
        return DetailView::NotFound;
    };
    let Some(article) = articles.iter().find(|a| a.id == id) else {
        debug!(id, "Article not in collection");
        return DetailView::NotFound;
    };

    let related = select_related(articles, id, config.related_limit)
        .into_iter()
        .map(|a| RelatedLink::from_article(a, config))
        .collect();

    DetailView::Found {
        article: ArticleDetail::from_article(article, config),
        related,
    }
}

/// The first `limit` articles other than `exclude_id`, in collection order.
pub fn select_related<'a>(
    articles: &'a [Article],
    exclude_id: &str,
    limit: usize,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.id != exclude_id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> Vec<Article> {
        (1..=n)
            .map(|i| {
                Article::new(format!("a{}", i), format!("T{}", i)).with_date("2024-01-01T09:00:00Z")
            })
            .collect()
    }

    fn ids<'a>(articles: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        articles.into_iter().collect()
    }

    #[test]
    fn test_list_view_card_per_article() {
        let config = SiteConfig::default();
        for n in 0..5 {
            let view = build_list_view(&collection(n), &config);
            assert_eq!(view.cards().len(), n);
            if n == 0 {
                assert_eq!(view, ListView::Empty);
            }
        }
    }

    #[test]
    fn test_list_view_keeps_order_and_duplicates() {
        let mut articles = collection(3);
        articles.reverse();
        articles.push(Article::new("a3", "Again"));

        let view = build_list_view(&articles, &SiteConfig::default());
        assert_eq!(ids(view.cards().iter().map(|c| c.id.as_str())), vec!["a3", "a2", "a1", "a3"]);
    }

    #[test]
    fn test_select_related() {
        let articles = collection(6);
        let related = select_related(&articles, "a2", 3);
        assert_eq!(ids(related.iter().map(|a| a.id.as_str())), vec!["a1", "a3", "a4"]);

        for n in 1..6 {
            let articles = collection(n);
            assert_eq!(select_related(&articles, "a1", 3).len(), std::cmp::min(3, n - 1));
        }
    }

    #[test]
    fn test_detail_view_lookup() {
        let config = SiteConfig::default();
        let articles = collection(2);

        let view = build_detail_view(&articles, Some("a2"), &config);
        assert_eq!(view.article().map(|a| a.title.as_str()), Some("T2"));
        assert_eq!(ids(view.related().iter().map(|r| r.id.as_str())), vec!["a1"]);

        assert_eq!(build_detail_view(&articles, Some("A2"), &config), DetailView::NotFound);
        assert_eq!(build_detail_view(&articles, Some(""), &config), DetailView::NotFound);
        assert_eq!(build_detail_view(&articles, None, &config), DetailView::NotFound);
    }

    #[test]
    fn test_detail_view_single_article_has_no_related_panel() {
        let view = build_detail_view(&collection(1), Some("a1"), &SiteConfig::default());
        assert!(view.article().is_some());
        assert!(view.related().is_empty());
        assert_eq!(view.related_html(), None);
    }

    #[test]
    fn test_related_limit_is_configurable() {
        let config = SiteConfig::default().with_related_limit(1);
        let view = build_detail_view(&collection(5), Some("a1"), &config);
        assert_eq!(ids(view.related().iter().map(|r| r.id.as_str())), vec!["a2"]);
    }
}

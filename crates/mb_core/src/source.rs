use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

/// Where the article collection comes from.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Human readable location, used in diagnostics
    fn name(&self) -> &str;

    /// Fetch the full collection, in payload order
    async fn fetch(&self) -> Result<Vec<Article>>;

    /// Load the collection for rendering.
    ///
    /// Never fails: transport, status and decoding errors are logged and
    /// collapse into an empty collection, so callers cannot tell "no
    /// articles" from "load failed". Use [`ArticleSource::fetch`] when that
    /// distinction matters.
    async fn load_collection(&self) -> Vec<Article> {
        match self.fetch().await {
            Ok(articles) => {
                tracing::debug!(source = self.name(), count = articles.len(), "Loaded news");
                articles
            }
            Err(e) => {
                tracing::error!(source = self.name(), error = %e, "Error loading news");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Failing;

    #[async_trait]
    impl ArticleSource for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self) -> Result<Vec<Article>> {
            Err(Error::HttpStatus(404))
        }
    }

    struct Fixed(Vec<Article>);

    #[async_trait]
    impl ArticleSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_failure_collapses_to_empty() {
        assert!(Failing.fetch().await.is_err());
        assert!(Failing.load_collection().await.is_empty());
    }

    #[tokio::test]
    async fn test_success_keeps_order() {
        let source = Fixed(vec![Article::new("b", "B"), Article::new("a", "A")]);
        let ids: Vec<_> = source.load_collection().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

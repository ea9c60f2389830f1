use async_trait::async_trait;
use mb_core::{Article, ArticleSource, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Collection held in process memory; swapped wholesale, never patched.
#[derive(Clone, Default)]
pub struct MemorySource {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl MemorySource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
        }
    }

    pub async fn replace(&self, articles: Vec<Article>) {
        *self.articles.write().await = articles;
    }
}

#[async_trait]
impl ArticleSource for MemorySource {
    fn name(&self) -> &str {
        "memory://"
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }
}

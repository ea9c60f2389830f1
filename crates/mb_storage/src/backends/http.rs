use async_trait::async_trait;
use mb_core::{Article, ArticleSource, Error, Result};
use reqwest::Client;
use url::Url;

/// JSON collection served over HTTP(S).
///
/// No request timeout is set; the client's transport defaults apply.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

#[async_trait]
impl ArticleSource for HttpSource {
    fn name(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        tracing::debug!(url = %self.url, %status, "Fetched news");
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        Ok(response.json::<Vec<Article>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(status: u16, body: &str) -> (MockServer, HttpSource) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/news.json"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
            .mount(&server)
            .await;
        let source = HttpSource::new(&format!("{}/data/news.json", server.uri())).unwrap();
        (server, source)
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let body = r#"[{"id": "a1", "title": "T1"}, {"id": "a2", "title": "T2"}]"#;
        let (_server, source) = serve(200, body).await;
        let articles = source.fetch().await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, "a1");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (_server, source) = serve(404, "not found").await;
        assert!(matches!(source.fetch().await, Err(Error::HttpStatus(404))));
        assert!(source.load_collection().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (_server, source) = serve(200, "<html>oops</html>").await;
        assert!(matches!(source.fetch().await, Err(Error::Http(_))));
        assert!(source.load_collection().await.is_empty());
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(HttpSource::new("not a url"), Err(Error::InvalidUrl(_))));
    }
}

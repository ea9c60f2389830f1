use async_trait::async_trait;
use mb_core::{Article, ArticleSource, Result};
use std::path::PathBuf;

/// Static JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl ArticleSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        tracing::debug!(path = %self.name, "Reading news file");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_core::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_in_payload_order() {
        let file = write_json(r#"[{"id": "z", "title": "Last"}, {"id": "a", "title": "First"}]"#);
        let source = FileSource::new(file.path());

        let ids: Vec<_> = source.fetch().await.unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let file = write_json(r#"{"id": "not-an-array"}"#);
        let source = FileSource::new(file.path());

        assert!(matches!(source.fetch().await, Err(Error::Serialization(_))));
        assert!(source.load_collection().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("news.json"));

        assert!(matches!(source.fetch().await, Err(Error::Io(_))));
        assert!(source.load_collection().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_array() {
        let file = write_json("[]");
        let source = FileSource::new(file.path());
        assert!(source.fetch().await.unwrap().is_empty());
    }
}

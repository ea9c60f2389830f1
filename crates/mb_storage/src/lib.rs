use mb_core::{ArticleSource, Error, Result};
use std::sync::Arc;
use url::Url;

pub mod backends;

pub use backends::*;

/// Picks a backend from the shape of `location`: `http(s)://` URLs are
/// fetched over the network, `memory://` is an empty in-process collection,
/// and `file://` URLs or bare paths are read from disk.
pub fn create_source(location: &str) -> Result<Arc<dyn ArticleSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(Error::InvalidUrl("empty data location".to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Arc::new(HttpSource::new(location)?));
    }

    if location == "memory://" {
        return Ok(Arc::new(MemorySource::default()));
    }

    if location.starts_with("file://") {
        let path = Url::parse(location)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| Error::InvalidUrl(format!("Not a file URL: {}", location)))?;
        return Ok(Arc::new(FileSource::new(path)));
    }

    Ok(Arc::new(FileSource::new(location)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_source_by_location() {
        assert_eq!(create_source("data/news.json").unwrap().name(), "data/news.json");
        assert_eq!(create_source("memory://").unwrap().name(), "memory://");
        assert_eq!(
            create_source("https://majalah.example/data/news.json").unwrap().name(),
            "https://majalah.example/data/news.json"
        );
        assert!(create_source("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_create_source_file_url() {
        let source = create_source("file:///srv/site/data/news.json").unwrap();
        assert_eq!(source.name(), "/srv/site/data/news.json");
    }
}

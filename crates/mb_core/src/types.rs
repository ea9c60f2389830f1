use serde::{Deserialize, Deserializer, Serialize};

/// One news record as published in the static data file.
///
/// Text fields fall back to empty strings when the producer leaves them out
/// or writes `null`; `date` stays as the raw source string and is only
/// parsed when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            content: String::new(),
            author: String::new(),
            date: String::new(),
            image: None,
            source_url: String::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "https://bitcoinmagazine.com/markets/halving",
            "title": "Halving",
            "summary": "Ringkasan",
            "content": "<p>Isi</p>",
            "date": "Fri, 15 Mar 2024 10:30:00 +0000",
            "author": "Satoshi",
            "image": "https://example.com/a.jpg",
            "source_url": "https://bitcoinmagazine.com/markets/halving"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "https://bitcoinmagazine.com/markets/halving");
        assert_eq!(article.author, "Satoshi");
        assert_eq!(article.image.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let article: Article = serde_json::from_str(r#"{"id": "a1", "image": null}"#).unwrap();
        assert_eq!(article, Article::new("a1", ""));
    }

    #[test]
    fn test_null_text_fields_do_not_reject_the_collection() {
        let json = r#"[
            {"id": "a1", "title": "T1", "author": "Ali"},
            {"id": "a2", "title": null, "summary": null, "content": null,
             "author": null, "date": null, "source_url": null}
        ]"#;

        let articles: Vec<Article> = serde_json::from_str(json).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1], Article::new("a2", ""));
    }

    #[test]
    fn test_id_is_required() {
        assert!(serde_json::from_str::<Article>(r#"{"title": "no id"}"#).is_err());
    }
}

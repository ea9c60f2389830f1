use mb_core::{detail_href, Article, SiteConfig};
use serde::Serialize;
use crate::date::format_date;
use crate::image::{FallbackImage, Placeholder};
use crate::markup::{escape_html, is_safe_url, sanitize_fragment};

pub const NO_ARTICLES: &str = "Tiada berita tersedia pada masa ini.";
pub const NOT_FOUND: &str = "Artikel tidak ditemukan.";
const READ_MORE: &str = "Baca →";
const SOURCE_LABEL: &str = "Sumber Asal:";

fn loading_placeholder(message: &str) -> String {
    format!(r#"<p class="loading">{}</p>"#, message)
}

/// Cuts `summary` to at most `limit` characters, marking the cut with `…`.
pub fn truncate_summary(summary: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) if summary.chars().count() > limit => {
            let cut: String = summary.chars().take(limit).collect();
            format!("{}…", cut.trim_end())
        }
        _ => summary.to_string(),
    }
}

/// One entry of the landing page grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub href: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub date: String,
    pub image: FallbackImage,
}

impl ArticleCard {
    pub fn from_article(article: &Article, config: &SiteConfig) -> Self {
        Self {
            id: article.id.clone(),
            href: detail_href(&article.id, config),
            title: article.title.clone(),
            summary: truncate_summary(&article.summary, config.summary_limit),
            author: article.author.clone(),
            date: format_date(&article.date, config.utc_offset()),
            image: FallbackImage::new(
                article.image.as_deref(),
                Placeholder::card(&config.placeholder_caption),
            ),
        }
    }

    /// The whole card navigates like its "read more" link.
    pub fn to_html(&self) -> String {
        let href = escape_html(&self.href);
        format!(
            r#"<div class="news-card" data-href="{href}"
    onclick="window.location.href=this.dataset.href">
    {image}
    <div class="news-card-content">
        <div class="news-card-date">{date}</div>
        <h3 class="news-card-title">{title}</h3>
        <p class="news-card-summary">{summary}</p>
        <div class="news-card-footer">
            <span class="news-card-author">{author}</span>
            <a href="{href}" class="read-more">{read_more}</a>
        </div>
    </div>
</div>"#,
            href = href,
            image = self.image.to_html("news-card-image", &self.title),
            date = escape_html(&self.date),
            title = escape_html(&self.title),
            summary = escape_html(&self.summary),
            author = escape_html(&self.author),
            read_more = READ_MORE,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "lowercase")]
pub enum ListView {
    Empty,
    Cards(Vec<ArticleCard>),
}

impl ListView {
    pub fn cards(&self) -> &[ArticleCard] {
        match self {
            ListView::Empty => &[],
            ListView::Cards(cards) => cards,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            ListView::Empty => loading_placeholder(NO_ARTICLES),
            ListView::Cards(cards) => cards
                .iter()
                .map(ArticleCard::to_html)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// The full article on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub image: FallbackImage,
    /// Sanitised markup, safe to embed as-is.
    pub content: String,
    pub source_url: String,
}

impl ArticleDetail {
    pub fn from_article(article: &Article, config: &SiteConfig) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            author: article.author.clone(),
            date: format_date(&article.date, config.utc_offset()),
            image: FallbackImage::new(
                article.image.as_deref(),
                Placeholder::detail(&config.placeholder_caption),
            ),
            content: sanitize_fragment(&article.content),
            source_url: article.source_url.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<article>
    <div class="article-header">
        <div class="article-meta">
            <div class="article-meta-item">
                <span>📅 {date}</span>
            </div>
            <div class="article-meta-item">
                <span>✍️ {author}</span>
            </div>
        </div>
        <h1 class="article-title">{title}</h1>
    </div>
    {image}
    <div class="article-content">
        {content}
    </div>
    <div class="article-source">
        <strong>{label}</strong> {source_link}
    </div>
</article>"#,
            date = escape_html(&self.date),
            author = escape_html(&self.author),
            title = escape_html(&self.title),
            image = self.image.to_html("article-image", &self.title),
            content = self.content,
            label = SOURCE_LABEL,
            source_link = self.source_link(),
        )
    }

    /// Attribution link; unsafe or empty URLs keep their text but lose the `href`.
    fn source_link(&self) -> String {
        let text = escape_html(&self.source_url);
        if self.source_url.trim().is_empty() || !is_safe_url(&self.source_url) {
            return format!("<a>{}</a>", text);
        }
        format!(
            r#"<a href="{0}" target="_blank" rel="noopener noreferrer">{0}</a>"#,
            text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub id: String,
    pub href: String,
    pub title: String,
    pub date: String,
}

impl RelatedLink {
    pub fn from_article(article: &Article, config: &SiteConfig) -> Self {
        Self {
            id: article.id.clone(),
            href: detail_href(&article.id, config),
            title: article.title.clone(),
            date: format_date(&article.date, config.utc_offset()),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" class="related-card">
    <div class="related-card-title">{}</div>
    <div class="related-card-date">{}</div>
</a>"#,
            escape_html(&self.href),
            escape_html(&self.title),
            escape_html(&self.date),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DetailView {
    NotFound,
    Found {
        article: ArticleDetail,
        related: Vec<RelatedLink>,
    },
}

impl DetailView {
    pub fn article(&self) -> Option<&ArticleDetail> {
        match self {
            DetailView::NotFound => None,
            DetailView::Found { article, .. } => Some(article),
        }
    }

    pub fn related(&self) -> &[RelatedLink] {
        match self {
            DetailView::NotFound => &[],
            DetailView::Found { related, .. } => related,
        }
    }

    pub fn article_html(&self) -> String {
        match self {
            DetailView::NotFound => loading_placeholder(NOT_FOUND),
            DetailView::Found { article, .. } => article.to_html(),
        }
    }

    /// `None` when there is nothing to show; the panel is then left untouched.
    pub fn related_html(&self) -> Option<String> {
        let related = self.related();
        if related.is_empty() {
            return None;
        }
        Some(related.iter().map(RelatedLink::to_html).collect::<Vec<_>>().join("\n"))
    }
}

use serde::Serialize;
use crate::markup::{escape_html, is_safe_url};

/// Inline SVG shown when an article image is missing or fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub caption: String,
}

impl Placeholder {
    pub fn card(caption: &str) -> Self {
        Self {
            width: 400,
            height: 200,
            font_size: 24,
            caption: caption.to_string(),
        }
    }

    pub fn detail(caption: &str) -> Self {
        Self {
            width: 800,
            height: 400,
            font_size: 32,
            caption: caption.to_string(),
        }
    }

    /// `data:` URI for the placeholder, percent-encoded for use inside an
    /// attribute value.
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 \
             viewBox=%220 0 {w} {h}%22%3E\
             %3Crect fill=%22%23f5f5f5%22 width=%22{w}%22 height=%22{h}%22/%3E\
             %3Ctext x=%2250%25%22 y=%2250%25%22 font-size=%22{f}%22 fill=%22%23999%22 \
             text-anchor=%22middle%22 dominant-baseline=%22middle%22%3E\
             {caption}%3C/text%3E%3C/svg%3E",
            w = self.width,
            h = self.height,
            f = self.font_size,
            caption = encode_caption(&self.caption),
        )
    }
}

/// Declarative binding: show `src`, and on load failure substitute the
/// placeholder exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackImage {
    pub src: Option<String>,
    pub placeholder: Placeholder,
}

impl FallbackImage {
    /// Blank or script-bearing sources start out on the placeholder.
    pub fn new(src: Option<&str>, placeholder: Placeholder) -> Self {
        let src = src
            .map(str::trim)
            .filter(|s| !s.is_empty() && is_safe_url(s))
            .map(str::to_string);
        Self { src, placeholder }
    }

    /// What the element starts out showing.
    pub fn initial_src(&self) -> String {
        self.src.clone().unwrap_or_else(|| self.placeholder.data_uri())
    }

    /// What replaces the image once the resource fails to load.
    pub fn on_load_failure(&self) -> String {
        self.placeholder.data_uri()
    }

    pub fn to_html(&self, class: &str, alt: &str) -> String {
        format!(
            r#"<img src="{}" alt="{}" class="{}" onerror="this.onerror=null;this.src='{}'">"#,
            escape_html(&self.initial_src()),
            escape_html(alt),
            class,
            escape_html(&self.on_load_failure()),
        )
    }
}

fn encode_caption(caption: &str) -> String {
    let mut out = String::with_capacity(caption.len());
    for c in caption.chars() {
        match c {
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '&' => out.push_str("%26"),
            '\\' => out.push_str("%5C"),
            c => out.push(c),
        }
    }
    out
}

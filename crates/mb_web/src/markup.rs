use scraper::{ElementRef, Html, Node};

/// Formatting elements kept from article bodies.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "b", "em", "i", "u", "a", "ul", "ol", "li", "blockquote", "h2", "h3",
    "h4", "figure", "figcaption", "img", "code", "pre", "span",
];

/// Elements whose whole subtree is discarded.
const DROPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "form", "textarea",
    "select",
];

const VOID_TAGS: &[&str] = &["br", "img"];

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Re-emits an HTML fragment keeping only allow-listed formatting markup.
///
/// Text is escaped, unknown elements are unwrapped, and only `a[href]` and
/// `img[src, alt]` attributes survive.
pub fn sanitize_fragment(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    let mut out = String::with_capacity(fragment.len());
    write_children(document.root_element(), &mut out);
    out
}

fn write_children(parent: ElementRef<'_>, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_TAGS.contains(&name) {
        return;
    }
    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    match name {
        "a" => {
            if let Some(href) = element.value().attr("href").filter(|href| is_safe_url(href)) {
                out.push_str(&format!(r#" href="{}""#, escape_html(href)));
            }
        }
        "img" => {
            if let Some(src) = element.value().attr("src").filter(|src| is_safe_url(src)) {
                out.push_str(&format!(r#" src="{}""#, escape_html(src)));
            }
            if let Some(alt) = element.value().attr("alt") {
                out.push_str(&format!(r#" alt="{}""#, escape_html(alt)));
            }
        }
        _ => {}
    }
    out.push('>');

    if VOID_TAGS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

pub(crate) fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme))
}

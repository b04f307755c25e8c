//! Markdown rendering with an allowlist HTML sanitizer.
//!
//! # Design
//! - Markdown is rendered with `pulldown-cmark`, which passes raw HTML
//!   through, so every rendered document goes through [`sanitize`].
//! - Only allowlisted tags and attributes survive; everything else is dropped
//!   and stray angle brackets in text are escaped.
//! - `href`/`src` values must use `http`, `https` or `mailto` (or be
//!   relative). Entity-encoded schemes are decoded before the check.
//! - Relative image sources are resolved against a base URL when one is
//!   supplied. Failed resolutions leave the value untouched and are reported
//!   back so the caller can log them.

use html2text::render::text_renderer::TrivialDecorator;
use pulldown_cmark::{Options, Parser, html};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

const TEXT_WIDTH: usize = 1 << 16;

/// Output of [`render_article`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Sanitized HTML.
    pub html: String,
    /// Image sources that could not be resolved against the base URL.
    pub unresolved_images: Vec<String>,
}

/// Render markdown to sanitized HTML.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    render_article(source, None).html
}

/// Render markdown to sanitized HTML, resolving relative images against `base`.
#[must_use]
pub fn render_article(source: &str, base: Option<&str>) -> Rendered {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);
    let mut raw = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut raw, parser);
    sanitize(&raw, base)
}

/// Text content of an HTML fragment, entity-decoded and trimmed.
///
/// Rendered without wrapping or decoration so the character count matches
/// what the reader sees.
#[must_use]
pub fn plain_text(html: &str) -> String {
    html2text::from_read_with_decorator(html.as_bytes(), TEXT_WIDTH, TrivialDecorator::new())
        .trim()
        .to_string()
}

/// Escape plain text for insertion as HTML.
#[must_use]
pub fn text_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Filter an HTML fragment down to the allowlist.
#[must_use]
pub fn sanitize(html: &str, base: Option<&str>) -> Rendered {
    let base = base.and_then(|raw| Url::parse(raw).ok());
    let stripped = strip_blocks(html);
    let mut out = String::with_capacity(stripped.len());
    let mut unresolved_images = Vec::new();
    let mut cursor = 0;

    for caps in TAG_RE.captures_iter(&stripped) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        escape_text(&stripped[cursor..whole.start()], &mut out);
        cursor = whole.end();

        let name = caps[2].to_ascii_lowercase();
        if !ALLOWED_TAGS.contains(&name.as_str()) {
            continue;
        }
        if &caps[1] == "/" {
            if !VOID_TAGS.contains(&name.as_str()) {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            continue;
        }

        out.push('<');
        out.push_str(&name);
        let attrs = caps.get(3).map_or("", |m| m.as_str());
        for (attr, value) in allowed_attributes(&name, attrs) {
            let value = match attr.as_str() {
                "href" | "src" if !is_safe_url(&value) => continue,
                "src" => resolve_image(&value, base.as_ref(), &mut unresolved_images),
                _ => value,
            };
            out.push(' ');
            out.push_str(&attr);
            out.push_str("=\"");
            out.push_str(&escape_attr(&value));
            out.push('"');
        }
        if name == "a" {
            out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }
        out.push('>');
    }
    escape_text(&stripped[cursor..], &mut out);

    Rendered {
        html: out,
        unresolved_images,
    }
}

const ALLOWED_TAGS: &[&str] = &[
    "a",
    "b",
    "blockquote",
    "br",
    "code",
    "dd",
    "del",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "s",
    "span",
    "strong",
    "sub",
    "sup",
    "table",
    "tbody",
    "td",
    "th",
    "thead",
    "tr",
    "u",
    "ul",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b([^>]*)>").expect("valid tag regex")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|$)").expect("valid comment regex"));

// One pattern per element: the regex crate has no backreferences.
static BLOCK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
        "textarea", "title",
    ]
    .iter()
    .map(|tag| {
        Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?(?:</{tag}\s*>|$)"))
            .expect("valid block regex")
    })
    .collect()
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z]+);?").expect("valid entity regex")
});

fn strip_blocks(html: &str) -> String {
    let mut current = COMMENT_RE.replace_all(html, "").into_owned();
    for re in BLOCK_RES.iter() {
        current = re.replace_all(&current, "").into_owned();
    }
    current
}

fn allowed_attributes(tag: &str, raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            if !attribute_allowed(tag, &name) {
                return None;
            }
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or_else(String::new, |m| m.as_str().to_string());
            if name == "class" && !value.starts_with("language-") {
                return None;
            }
            Some((name, value))
        })
        .collect()
}

fn attribute_allowed(tag: &str, attr: &str) -> bool {
    match tag {
        "a" => matches!(attr, "href" | "title"),
        "img" => matches!(attr, "src" | "alt" | "title" | "width" | "height"),
        "td" | "th" => matches!(attr, "colspan" | "rowspan" | "align"),
        "ol" => attr == "start",
        "code" => attr == "class",
        _ => false,
    }
}

fn is_safe_url(raw: &str) -> bool {
    let decoded: String = decode_entities(raw)
        .chars()
        .filter(|ch| !ch.is_whitespace() && !ch.is_control())
        .collect();
    let scheme_end = decoded.find(':');
    let path_start = decoded.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => {
            let scheme = decoded[..colon].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        (None, _) => true,
    }
}

fn resolve_image(src: &str, base: Option<&Url>, unresolved: &mut Vec<String>) -> String {
    if Url::parse(src).is_ok() {
        return src.to_string();
    }
    let Some(base) = base else {
        return src.to_string();
    };
    base.join(src).map_or_else(
        |_| {
            unresolved.push(src.to_string());
            src.to_string()
        },
        String::from,
    )
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "colon" => ':',
        "Tab" => '\t',
        "NewLine" => '\n',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_basic_formatting() {
        let html = render_markdown("**bold** and _em_\n\n- one\n- two");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>em</em>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn scripts_and_handlers_are_removed() {
        let html = render_markdown("hi <script>alert(1)</script><img src=\"a.png\" onerror=\"x()\">");
        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
        assert!(!html.contains("onerror"));
        assert!(html.contains("<img src=\"a.png\">"));
    }

    #[test]
    fn unsafe_link_schemes_are_dropped() {
        let html = render_markdown("[x](javascript:alert(1)) <a href=\"jav&#x61;script:y\">y</a>");
        assert!(!html.contains("javascript"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn links_open_in_a_new_tab() {
        let html = render_markdown("[site](https://example.com/a?b=1)");
        assert!(html.contains(
            "<a href=\"https://example.com/a?b=1\" target=\"_blank\" rel=\"noopener noreferrer\">site</a>"
        ));
    }

    #[test]
    fn relative_images_resolve_against_base() {
        let rendered = render_article(
            "![pic](images/a.png) ![abs](https://cdn.example.com/b.png)",
            Some("https://blog.example.com/posts/1"),
        );
        assert!(rendered.html.contains("src=\"https://blog.example.com/posts/images/a.png\""));
        assert!(rendered.html.contains("src=\"https://cdn.example.com/b.png\""));
        assert!(rendered.unresolved_images.is_empty());
    }

    #[test]
    fn images_stay_untouched_without_usable_base() {
        let rendered = render_article("![pic](images/a.png)", Some("not a url"));
        assert!(rendered.html.contains("src=\"images/a.png\""));
    }

    #[test]
    fn data_images_are_stripped() {
        let html = render_markdown("<img src=\"data:image/png;base64,AAAA\" alt=\"x\">");
        assert_eq!(html.trim(), "<img alt=\"x\">");
    }

    #[test]
    fn stray_angle_brackets_are_escaped() {
        let sanitized = sanitize("<p>a <b>b</b> <unknown>c</unknown> 1 > 0</p>", None);
        assert_eq!(sanitized.html, "<p>a <b>b</b> c 1 &gt; 0</p>");
    }

    #[test]
    fn text_is_escaped_for_html() {
        assert_eq!(
            text_html("https://a.example/?x=1&y=<2>"),
            "https://a.example/?x=1&amp;y=&lt;2&gt;"
        );
    }

    #[test]
    fn plain_text_strips_markup_and_decodes_entities() {
        let text = plain_text(&render_markdown("# Title\n\nFish &amp; chips <!-- hidden -->"));
        assert!(text.contains("Title"));
        assert!(text.ends_with("Fish & chips"));
        assert!(!text.contains("hidden"));
        assert_eq!(plain_text("  <p>&#20320;&#x597D;</p>  "), "你好");
    }

    #[test]
    fn plain_text_decodes_any_named_entity() {
        let html = render_markdown(&format!("<p>{}</p>", "&eacute;".repeat(100)));
        assert_eq!(plain_text(&html), "é".repeat(100));
        assert_eq!(plain_text("<p>&copy; 2024 &hellip; caf&eacute;</p>"), "© 2024 … café");
    }

    #[test]
    fn plain_text_does_not_wrap_long_lines() {
        let line = "word ".repeat(400);
        assert!(!plain_text(&format!("<p>{line}</p>")).contains('\n'));
    }
}

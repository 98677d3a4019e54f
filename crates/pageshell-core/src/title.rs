//! Page title extraction from fragment metadata.
//!
//! A fragment names its title with `<meta name="title" content="...">`.
//! Attribute order and quoting style are free; names match case-insensitively.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::TITLE_META_NAME;

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<meta[ \t\r\n/][^>]*>").expect("valid meta pattern"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)([a-z][a-z0-9-]*)[ \t\r\n]*=[ \t\r\n]*(?:"([^"]*)"|'([^']*)'|([^ \t\r\n"'>/]+))"#,
    )
    .expect("valid attribute pattern")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]{1,6}|#[0-9]{1,7}|[a-z]+);").expect("valid entity pattern")
});

/// Title declared by the first matching `<meta>` element, if any.
///
/// Blank titles are treated as absent so the caller falls back to the
/// site default.
pub fn extract_title(markup: &str) -> Option<String> {
    META_TAG
        .find_iter(markup)
        .filter_map(|tag| meta_content(tag.as_str()))
        .map(|title| unescape(title).trim().to_string())
        .find(|title| !title.is_empty())
}

fn meta_content(tag: &str) -> Option<&str> {
    let mut is_title = false;
    let mut content = None;

    for caps in ATTRIBUTE.captures_iter(tag) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());
        match caps[1].to_ascii_lowercase().as_str() {
            "name" => is_title = value.eq_ignore_ascii_case(TITLE_META_NAME),
            "content" => content = Some(value),
            _ => {}
        }
    }

    if is_title { content } else { None }
}

/// Decode character references in one pass, so `&amp;lt;` yields `&lt;`.
///
/// References that name no character are left as written.
fn unescape(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let reference = &caps[1];
            let decoded = match reference {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => reference
                    .strip_prefix("#x")
                    .or_else(|| reference.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| reference.strip_prefix('#').map(str::parse))
                    .and_then(Result::ok)
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let markup = r#"<meta name="title" content="About us"><h1>About</h1>"#;
        assert_eq!(extract_title(markup), Some("About us".to_string()));
    }

    #[test]
    fn test_attribute_order_and_quotes() {
        let markup = "<section>\n<META content='News &amp; Events' NAME=Title />\n</section>";
        assert_eq!(extract_title(markup), Some("News & Events".to_string()));
    }

    #[test]
    fn test_ignores_other_meta() {
        let markup = concat!(
            r#"<meta name="description" content="Not a title">"#,
            r#"<meta name="title" content="Team">"#,
        );
        assert_eq!(extract_title(markup), Some("Team".to_string()));
    }

    #[test]
    fn test_missing_or_blank_title() {
        assert_eq!(extract_title("<h1>No metadata</h1>"), None);
        assert_eq!(extract_title(r#"<meta name="title" content="  ">"#), None);
        assert_eq!(extract_title(r#"<meta name="title">"#), None);
    }

    #[test]
    fn test_character_references() {
        let title = |content: &str| {
            extract_title(&format!(r#"<meta name="title" content="{}">"#, content))
        };

        assert_eq!(title("2019&#8211;2024"), Some("2019\u{2013}2024".to_string()));
        assert_eq!(title("Rock &#x27;n&#X27; roll"), Some("Rock 'n' roll".to_string()));
        assert_eq!(title("&lt;b&gt; &quot;tags&quot;"), Some("<b> \"tags\"".to_string()));
        assert_eq!(
            title("Writing &amp;lt;meta&amp;gt;"),
            Some("Writing &lt;meta&gt;".to_string())
        );
        assert_eq!(
            title("&#xD800; &bogus; 5 &amp 6"),
            Some("&#xD800; &bogus; 5 &amp 6".to_string())
        );
    }
}

//! Markup fallback
//!
//! Legacy bodies are stored as HTML fragments or plain text. They are read
//! with patterns over tag-like substrings instead of a parser, which is
//! enough to approximate the same facts the tree walker produces.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::SiteContext;
use crate::url_utils::classify_href;

use super::{ExtractedFacts, HeadingFact, ImageFact, LinkFact};

static RE_TAG_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)<script[^>]*?>[\s\S]*?</script>",
        r"(?is)<style[^>]*?>[\s\S]*?</style>",
        r"(?is)<noscript[^>]*?>[\s\S]*?</noscript>",
        r"(?is)<template[^>]*?>[\s\S]*?</template>",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("invalid block regex"))
    .collect()
});
static RE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<!--.*?-->").expect("invalid comment regex"));
static RE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").expect("invalid heading regex")
});
static RE_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("invalid paragraph regex")
});
static RE_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\shref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("invalid anchor regex")
});
static RE_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("invalid image regex"));
static RE_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).expect("invalid src regex")
});
static RE_ALT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\salt\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).expect("invalid alt regex")
});
static RE_ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("invalid tag regex"));
static RE_BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("invalid blank line regex"));

/// Remove script, style and other non-content blocks plus comments.
pub fn sanitize_markup(markup: &str) -> String {
    let mut clean = markup.to_string();
    for re in RE_TAG_BLOCKS.iter() {
        clean = re.replace_all(&clean, "").into_owned();
    }

    RE_COMMENT.replace_all(&clean, "").into_owned()
}

/// Replace tags with spaces, decode common entities and collapse whitespace.
pub fn strip_tags(markup: &str) -> String {
    let without_tags = RE_ANY_TAG.replace_all(markup, " ");
    collapse_whitespace(&decode_entities(&without_tags))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn attr_value(caps: &Captures<'_>) -> String {
    let raw = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
        .unwrap_or_default();
    decode_entities(raw)
}

/// Extract facts from an HTML fragment or plain text.
pub fn extract_markup(raw: &str, site: &SiteContext) -> ExtractedFacts {
    let markup = sanitize_markup(raw);

    let headings = RE_HEADING
        .captures_iter(&markup)
        .enumerate()
        .map(|(position, caps)| HeadingFact {
            level: caps[1].parse().unwrap_or(1),
            text: strip_tags(&caps[2]),
            position,
        })
        .collect();

    let mut paragraphs: Vec<String> = RE_PARAGRAPH
        .captures_iter(&markup)
        .map(|caps| strip_tags(&caps[1]))
        .collect();

    // Plain text without any tags: blank-line separated blocks are paragraphs
    if paragraphs.is_empty() && !RE_ANY_TAG.is_match(&markup) {
        paragraphs = RE_BLANK_LINE
            .split(&markup)
            .map(|block| collapse_whitespace(&decode_entities(block)))
            .filter(|block| !block.is_empty())
            .collect();
    }

    let links = RE_ANCHOR
        .captures_iter(&markup)
        .map(|caps| {
            let href = attr_value(&caps);
            let kind = classify_href(&href, site.site_host());
            LinkFact { href, kind }
        })
        .collect();

    let images = RE_IMAGE
        .find_iter(&markup)
        .map(|tag| {
            let tag = tag.as_str();
            ImageFact {
                src: RE_SRC.captures(tag).map(|c| attr_value(&c)).unwrap_or_default(),
                alt: RE_ALT.captures(tag).map(|c| attr_value(&c)).unwrap_or_default(),
            }
        })
        .collect();

    ExtractedFacts {
        headings,
        paragraph_count: paragraphs.len(),
        text: strip_tags(&markup),
        first_paragraph: paragraphs.into_iter().next(),
        links,
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_utils::LinkKind;

    #[test]
    fn test_headings_and_paragraphs() {
        let facts = extract_markup("<h1>X</h1><p>short</p>", &SiteContext::unknown());

        assert_eq!(facts.headings.len(), 1);
        assert_eq!(facts.headings[0].level, 1);
        assert_eq!(facts.headings[0].text, "X");
        assert_eq!(facts.paragraph_count, 1);
        assert_eq!(facts.first_paragraph.as_deref(), Some("short"));
        assert_eq!(facts.text, "X short");
    }

    #[test]
    fn test_heading_attributes_and_nested_tags() {
        let facts = extract_markup(
            r#"<H2 class="title">Kremalı <em>pasta</em></H2><h3 id="a">Tarif</h3>"#,
            &SiteContext::unknown(),
        );

        let levels: Vec<u8> = facts.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![2, 3]);
        assert_eq!(facts.headings[0].text, "Kremalı pasta");
        assert_eq!(facts.headings[1].position, 1);
    }

    #[test]
    fn test_paragraph_regex_ignores_pre_and_param() {
        let facts = extract_markup(
            "<pre>code</pre><p>one</p><param name=x><p class='lead'>two</p>",
            &SiteContext::unknown(),
        );
        assert_eq!(facts.paragraph_count, 2);
    }

    #[test]
    fn test_links_with_quote_styles() {
        let facts = extract_markup(
            r#"<a href="/menu">menü</a> <a class='x' href='https://other.com'>o</a> <a href=https://example.com/b>b</a> <a name="top">t</a>"#,
            &SiteContext::new("example.com"),
        );

        let kinds: Vec<LinkKind> = facts.links.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LinkKind::Internal, LinkKind::External, LinkKind::Internal]
        );
        assert_eq!(facts.links[1].href, "https://other.com");
    }

    #[test]
    fn test_images_and_alt_attributes() {
        let facts = extract_markup(
            r#"<img src="/a.jpg" alt="Altın rengi pasta tepsisi"><img src='/b.png'><img data-alt="x" src="/c.png" alt=''/>"#,
            &SiteContext::unknown(),
        );

        assert_eq!(facts.images.len(), 3);
        assert_eq!(facts.images[0].alt, "Altın rengi pasta tepsisi");
        assert_eq!(facts.images[1].src, "/b.png");
        assert_eq!(facts.images[1].alt, "");
        assert_eq!(facts.images[2].alt, "");
    }

    #[test]
    fn test_scripts_and_comments_are_ignored() {
        let facts = extract_markup(
            "<p>görünür</p><script>var h = '<h1>no</h1>';</script><!-- <p>gizli</p> -->",
            &SiteContext::unknown(),
        );

        assert!(facts.headings.is_empty());
        assert_eq!(facts.paragraph_count, 1);
        assert_eq!(facts.text, "görünür");
    }

    #[test]
    fn test_plain_text_blocks_become_paragraphs() {
        let facts = extract_markup(
            "İlk paragraf burada.\n\n  İkinci &amp; son paragraf.\n",
            &SiteContext::unknown(),
        );

        assert_eq!(facts.paragraph_count, 2);
        assert_eq!(facts.first_paragraph.as_deref(), Some("İlk paragraf burada."));
        assert_eq!(facts.text, "İlk paragraf burada. İkinci & son paragraf.");
    }

    #[test]
    fn test_sanitize_markup() {
        let clean = sanitize_markup("<style>p{}</style><p>a</p><noscript>x</noscript>");
        assert_eq!(clean, "<p>a</p>");
    }
}

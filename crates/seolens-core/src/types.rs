//! Input types: the content snapshot and the editor document tree

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Interface language of the admin panel. Only affects how callers render
/// issue codes; scoring never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

/// Everything the engine needs to know about one content item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub focus_keyword: Option<String>,
    #[serde(default)]
    pub body: Body,
}

impl ContentSnapshot {
    /// Parse a snapshot from the JSON the admin form posts.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse content snapshot")
    }

    /// The title search engines will show: `seoTitle` unless it is blank.
    pub fn effective_title(&self) -> &str {
        non_blank(self.seo_title.as_deref()).unwrap_or(&self.title)
    }

    /// Meta description, `None` when missing or blank.
    pub fn meta_description(&self) -> Option<&str> {
        non_blank(self.seo_description.as_deref())
    }

    /// Trimmed focus keyword, `None` when missing or blank.
    pub fn focus_keyword(&self) -> Option<&str> {
        non_blank(self.focus_keyword.as_deref()).map(str::trim)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Content body: the editor's document tree, or legacy markup/plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Structured(DocumentNode),
    Raw(String),
}

impl Default for Body {
    fn default() -> Self {
        Body::Raw(String::new())
    }
}

impl Body {
    /// Interpret a stored body string.
    ///
    /// Older rows keep the document tree serialized as a JSON string; those
    /// come back as [`Body::Structured`]. Anything else is raw markup.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start();
        if trimmed.starts_with('{')
            && let Ok(node) = serde_json::from_str::<DocumentNode>(trimmed)
            && node.kind == NodeKind::Document
        {
            return Body::Structured(node);
        }
        Body::Raw(input.to_string())
    }

    /// Interpret an arbitrary JSON value.
    ///
    /// Any object carrying a node `type` is kept as a tree, even without a
    /// document root. Values that cannot be read as a tree keep only their
    /// text as raw input for the markup fallback.
    pub fn from_value(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Body::default(),
            JsonValue::String(s) => Body::parse(&s),
            JsonValue::Object(ref map) if map.contains_key("type") => {
                match serde_json::from_value::<DocumentNode>(value.clone()) {
                    Ok(node) => Body::Structured(node),
                    Err(_) => Body::Raw(collect_text(&value)),
                }
            }
            other => Body::Raw(collect_text(&other)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Body::Structured(node) => node.children.is_empty() && node.text.is_none(),
            Body::Raw(raw) => raw.trim().is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Body::from_value)
    }
}

/// Readable text of a value that is not a well-formed tree.
///
/// Inside editor nodes (objects with a `type`) only `text` and `content` are
/// read, so node types, marks and attributes never count as words. Other
/// objects contribute all their string leaves.
fn collect_text(value: &JsonValue) -> String {
    fn walk(value: &JsonValue, out: &mut Vec<String>) {
        match value {
            JsonValue::String(s) => out.push(s.clone()),
            JsonValue::Array(items) => items.iter().for_each(|item| walk(item, out)),
            JsonValue::Object(map) if map.contains_key("type") => {
                if let Some(text) = map.get("text").and_then(scalar_text) {
                    out.push(text);
                }
                if let Some(content) = map.get("content") {
                    walk(content, out);
                }
            }
            JsonValue::Object(map) => map.values().for_each(|item| walk(item, out)),
            _ => {}
        }
    }

    let mut parts = Vec::new();
    walk(value, &mut parts);
    parts.join(" ")
}

fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(scalar_text))
}

/// Kind of a document node, with the attributes the analyzers read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading { level: u8 },
    Paragraph,
    Link { href: String },
    Image { src: String, alt: String },
    Text,
    Other(String),
}

/// A node of the editor document tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub struct DocumentNode {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DocumentNode>) -> Self {
        self.children = children;
        self
    }

    /// Own text if present, otherwise the children's text concatenated in
    /// order with no separator.
    pub fn text_content(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => {
                let mut out = String::new();
                self.push_text(&mut out);
                out
            }
        }
    }

    fn push_text(&self, out: &mut String) {
        match &self.text {
            Some(text) => out.push_str(text),
            None => self.children.iter().for_each(|child| child.push_text(out)),
        }
    }
}

/// Wire shape of an editor node: `{"type", "attrs", "content", "text", "marks"}`.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default)]
    attrs: Option<Map<String, JsonValue>>,
    #[serde(default)]
    content: Option<Vec<RawNode>>,
    #[serde(default, deserialize_with = "deserialize_text")]
    text: Option<String>,
    #[serde(default)]
    marks: Option<Vec<RawMark>>,
}

#[derive(Deserialize)]
struct RawMark {
    #[serde(rename = "type", default)]
    mark_type: String,
    #[serde(default)]
    attrs: Option<Map<String, JsonValue>>,
}

impl From<RawNode> for DocumentNode {
    fn from(raw: RawNode) -> Self {
        let attrs = raw.attrs.unwrap_or_default();
        let kind = match raw.node_type.as_str() {
            "doc" | "document" => NodeKind::Document,
            "heading" => NodeKind::Heading {
                level: heading_level(attrs.get("level")),
            },
            "paragraph" => NodeKind::Paragraph,
            "link" => NodeKind::Link {
                href: attr_string(&attrs, "href"),
            },
            "image" | "img" => NodeKind::Image {
                src: attr_string(&attrs, "src"),
                alt: attr_string(&attrs, "alt"),
            },
            "text" => NodeKind::Text,
            other => NodeKind::Other(other.to_string()),
        };

        let node = DocumentNode {
            kind,
            text: raw.text,
            children: raw
                .content
                .unwrap_or_default()
                .into_iter()
                .map(DocumentNode::from)
                .collect(),
        };

        // Inline links arrive as a mark on a text node; lift them to a link
        // node wrapping the text so the walker sees one shape.
        let link_mark = raw
            .marks
            .unwrap_or_default()
            .into_iter()
            .find(|mark| mark.mark_type == "link");

        match link_mark {
            Some(mark) => DocumentNode::new(NodeKind::Link {
                href: attr_string(&mark.attrs.unwrap_or_default(), "href"),
            })
            .with_children(vec![node]),
            None => node,
        }
    }
}

fn attr_string(attrs: &Map<String, JsonValue>, key: &str) -> String {
    match attrs.get(key) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn heading_level(value: Option<&JsonValue>) -> u8 {
    let level = match value {
        Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(1.0) as i64,
        Some(JsonValue::String(s)) => s.trim().parse().unwrap_or(1),
        _ => 1,
    };
    level.clamp(1, 6) as u8
}

//! Document walker
//!
//! Turns a [`Body`] into [`ExtractedFacts`]: headings, paragraph text, links
//! and images. Editor trees are walked node by node; anything else goes
//! through the markup fallback, which fills the same shape using patterns
//! over tag-like substrings.

pub mod markup;
pub mod tree;

use serde::Serialize;
use tracing::debug;

use crate::config::SiteContext;
use crate::types::{Body, NodeKind};
use crate::url_utils::LinkKind;

/// A heading in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingFact {
    /// 1..=6
    pub level: u8,
    pub text: String,
    /// Zero-based position among the document's headings
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFact {
    pub href: String,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFact {
    pub src: String,
    pub alt: String,
}

/// Everything the analyzers read from a body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFacts {
    pub headings: Vec<HeadingFact>,
    pub paragraph_count: usize,
    /// Plain text used for word and keyword counting
    pub text: String,
    pub first_paragraph: Option<String>,
    pub links: Vec<LinkFact>,
    pub images: Vec<ImageFact>,
}

impl ExtractedFacts {
    pub fn internal_links(&self) -> usize {
        self.links
            .iter()
            .filter(|link| link.kind == LinkKind::Internal)
            .count()
    }

    pub fn external_links(&self) -> usize {
        self.links
            .iter()
            .filter(|link| link.kind == LinkKind::External)
            .count()
    }
}

/// Extract facts from a body. Never fails: an empty body gives empty facts
/// and a tree without a document root is read as markup.
pub fn extract(body: &Body, site: &SiteContext) -> ExtractedFacts {
    if body.is_empty() {
        return ExtractedFacts::default();
    }

    match body {
        Body::Structured(root) if root.kind == NodeKind::Document => {
            debug!(nodes = root.children.len(), "walking document tree");
            tree::walk(root, site)
        }
        Body::Structured(root) => {
            debug!(kind = ?root.kind, "tree has no document root, using markup fallback");
            markup::extract_markup(&root.text_content(), site)
        }
        Body::Raw(raw) => {
            debug!(bytes = raw.len(), "extracting facts from markup");
            markup::extract_markup(raw, site)
        }
    }
}

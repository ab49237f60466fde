//! Recursive walk over an editor document tree

use crate::config::SiteContext;
use crate::types::{DocumentNode, NodeKind};
use crate::url_utils::classify_href;

use super::{ExtractedFacts, HeadingFact, ImageFact, LinkFact};

/// Walk `root` depth-first in document order.
pub fn walk(root: &DocumentNode, site: &SiteContext) -> ExtractedFacts {
    let mut walker = TreeWalker {
        site,
        facts: ExtractedFacts::default(),
        paragraphs: Vec::new(),
    };
    walker.visit(root);
    walker.finish()
}

struct TreeWalker<'a> {
    site: &'a SiteContext,
    facts: ExtractedFacts,
    paragraphs: Vec<String>,
}

impl TreeWalker<'_> {
    fn visit(&mut self, node: &DocumentNode) {
        match &node.kind {
            NodeKind::Heading { level } => {
                let position = self.facts.headings.len();
                self.facts.headings.push(HeadingFact {
                    level: (*level).clamp(1, 6),
                    text: node.text_content(),
                    position,
                });
            }
            NodeKind::Paragraph => {
                let text = node.text_content();
                if self.facts.first_paragraph.is_none() {
                    self.facts.first_paragraph = Some(text.clone());
                }
                self.paragraphs.push(text);
            }
            NodeKind::Link { href } => {
                self.facts.links.push(LinkFact {
                    href: href.clone(),
                    kind: classify_href(href, self.site.site_host()),
                });
            }
            NodeKind::Image { src, alt } => {
                self.facts.images.push(ImageFact {
                    src: src.clone(),
                    alt: alt.clone(),
                });
            }
            NodeKind::Document | NodeKind::Text | NodeKind::Other(_) => {}
        }

        // Links and images live inside paragraphs, list items, blockquotes...
        for child in &node.children {
            self.visit(child);
        }
    }

    fn finish(mut self) -> ExtractedFacts {
        self.facts.paragraph_count = self.paragraphs.len();
        self.facts.text = self.paragraphs.join(" ");
        self.facts
    }
}

//! # seolens-core
//!
//! Deterministic SEO analysis for content written in a block editor.
//!
//! This library provides:
//! - Extraction of headings, paragraphs, links and images from an editor
//!   document tree, with a markup fallback for legacy bodies
//! - Heading hierarchy, focus keyword, content length, image alt text and
//!   title/meta/slug checks
//! - A 0-100 score with stable issue and suggestion codes for the caller to
//!   localize
//!
//! The engine does no I/O and keeps no state: the same snapshot always
//! produces the same report.
//!
//! ## Example
//!
//! ```
//! use seolens_core::{ContentSnapshot, SeoAnalyzer, SiteContext};
//!
//! # fn example() -> anyhow::Result<()> {
//! let snapshot = ContentSnapshot::from_json(r#"{
//!     "locale": "tr",
//!     "title": "Kremalı pasta tarifi",
//!     "slug": "kremali-pasta",
//!     "focusKeyword": "kremalı pasta",
//!     "body": {"type": "doc", "content": [
//!         {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Kremalı pasta"}]},
//!         {"type": "paragraph", "content": [{"type": "text", "text": "Kremalı pasta için malzemeler."}]}
//!     ]}
//! }"#)?;
//!
//! let analyzer = SeoAnalyzer::new(SiteContext::new("example.com"));
//! let report = analyzer.analyze(&snapshot);
//! assert_eq!(report.heading_stats.h1, 1);
//! assert!(report.score <= 100);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod analysis;
pub mod config;
pub mod extract;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use analysis::findings::{
    Issue, IssueCode, IssueDetail, Priority, Severity, Suggestion, SuggestionCode, SuggestionKind,
};
pub use analysis::score::{ScoreStatus, score_from_findings};
pub use analysis::{AnalysisReport, SeoAnalyzer, analyze};
pub use config::SiteContext;
pub use extract::{ExtractedFacts, extract};
pub use types::{Body, ContentSnapshot, DocumentNode, Locale, NodeKind};
pub use url_utils::LinkKind;

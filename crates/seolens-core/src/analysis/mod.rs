//! Content SEO analysis
//!
//! Each sub-analyzer reads the extracted facts (or the snapshot metadata) and
//! returns its own report plus findings. The aggregator merges findings in a
//! fixed check order: heading, keyword, content, image, technical.

pub mod content;
pub mod findings;
pub mod headings;
pub mod images;
pub mod keyword;
pub mod score;
pub mod technical;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SiteContext;
use crate::extract::extract;
use crate::types::ContentSnapshot;

use content::{ContentAnalysis, analyze_content};
use findings::{Issue, Suggestion};
use headings::{HeadingStats, analyze_headings};
use images::{ImageAnalysis, analyze_images};
use keyword::{KeywordAnalysis, analyze_keyword};
use score::{ScoreStatus, aggregate};
use technical::{TechnicalSeo, analyze_technical};

/// Result of analysing one content snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall score (0-100)
    pub score: u8,

    pub status: ScoreStatus,

    /// Highest priority first
    pub issues: Vec<Issue>,

    pub suggestions: Vec<Suggestion>,

    pub heading_stats: HeadingStats,

    /// `None` when the snapshot has no focus keyword
    pub keyword_analysis: Option<KeywordAnalysis>,

    pub content_analysis: ContentAnalysis,

    pub image_analysis: ImageAnalysis,

    pub technical_seo: TechnicalSeo,
}

/// Analyzer bound to one site.
///
/// Holds no state between calls; the same snapshot always yields the same
/// report, so it can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    site: SiteContext,
}

impl SeoAnalyzer {
    pub fn new(site: SiteContext) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteContext {
        &self.site
    }

    /// Run every check against `snapshot`.
    pub fn analyze(&self, snapshot: &ContentSnapshot) -> AnalysisReport {
        let facts = extract(&snapshot.body, &self.site);

        let headings = analyze_headings(&facts);
        let content = analyze_content(&facts);
        let keyword = analyze_keyword(snapshot, &facts, content.report.word_count);
        let images = analyze_images(&facts);
        let technical = analyze_technical(snapshot);

        let (keyword_analysis, keyword_findings) = match keyword {
            Some(outcome) => (Some(outcome.report), outcome.findings),
            None => (None, Vec::new()),
        };

        let result = aggregate(
            headings
                .findings
                .into_iter()
                .chain(keyword_findings)
                .chain(content.findings)
                .chain(images.findings)
                .chain(technical.findings),
        );

        debug!(
            score = result.score,
            status = ?result.status,
            issues = result.issues.len(),
            suggestions = result.suggestions.len(),
            has_keyword = keyword_analysis.is_some(),
            "content analysis complete"
        );

        AnalysisReport {
            score: result.score,
            status: result.status,
            issues: result.issues,
            suggestions: result.suggestions,
            heading_stats: headings.report,
            keyword_analysis,
            content_analysis: content.report,
            image_analysis: images.report,
            technical_seo: technical.report,
        }
    }
}

/// Analyze a snapshot with no site host: every absolute link counts as
/// external.
pub fn analyze(snapshot: &ContentSnapshot) -> AnalysisReport {
    SeoAnalyzer::default().analyze(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::findings::{Check, IssueCode, Severity};
    use crate::types::{Body, DocumentNode, NodeKind};

    #[test]
    fn test_empty_snapshot_is_well_formed() {
        let report = analyze(&ContentSnapshot::default());

        assert_eq!(report.score, 100 - 15 - 5 - 10 - 10 - 15);
        assert_eq!(report.status, ScoreStatus::Poor);
        assert!(report.keyword_analysis.is_none());
        assert_eq!(report.content_analysis.word_count, 0);
        assert_eq!(report.heading_stats.total(), 0);
        assert!(
            report
                .issues
                .iter()
                .any(|issue| issue.code == IssueCode::MissingH1 && issue.severity == Severity::Error)
        );
    }

    #[test]
    fn test_keyword_checks_run_between_headings_and_content() {
        let snapshot = ContentSnapshot {
            title: "x".repeat(55),
            seo_description: Some("y".repeat(140)),
            slug: "sayfa".to_string(),
            focus_keyword: Some("pasta".to_string()),
            body: Body::Raw("<h1>Pasta</h1><h2>Alt</h2><p>pasta</p>".to_string()),
            ..Default::default()
        };
        let report = analyze(&snapshot);

        let checks: Vec<Check> = report.issues.iter().map(|i| i.code.check()).collect();
        let first_keyword = checks.iter().position(|c| *c == Check::Keyword).unwrap();
        let first_content = checks.iter().position(|c| *c == Check::Content).unwrap();
        // Both medium: keyword-not-in-meta before content-too-short
        assert!(first_keyword < first_content);
    }

    #[test]
    fn test_site_host_changes_link_split() {
        let snapshot = ContentSnapshot {
            body: Body::Raw(r#"<p><a href="https://example.com/menu">menü</a></p>"#.to_string()),
            ..Default::default()
        };

        let anonymous = analyze(&snapshot);
        assert_eq!(anonymous.content_analysis.external_links, 1);

        let analyzer = SeoAnalyzer::new(SiteContext::new("example.com"));
        assert_eq!(analyzer.site().site_host(), Some("example.com"));
        let report = analyzer.analyze(&snapshot);
        assert_eq!(report.content_analysis.internal_links, 1);
        assert_eq!(report.content_analysis.external_links, 0);
    }

    #[test]
    fn test_default_analyzer_has_no_site_host() {
        assert_eq!(SeoAnalyzer::default().site().site_host(), None);
    }

    #[test]
    fn test_tree_without_document_root_counts_only_text() {
        let snapshot = ContentSnapshot {
            body: Body::from_value(serde_json::json!({
                "type": "paragraph",
                "content": [{"type": "text", "text": "merhaba"}]
            })),
            ..Default::default()
        };

        let report = analyze(&snapshot);
        assert_eq!(report.content_analysis.word_count, 1);
    }

    #[test]
    fn test_out_of_range_heading_levels_do_not_panic() {
        let root = DocumentNode::new(NodeKind::Document).with_children(vec![
            DocumentNode::new(NodeKind::Heading { level: 0 }),
            DocumentNode::new(NodeKind::Heading { level: 255 }),
            DocumentNode::new(NodeKind::Heading { level: 255 }),
        ]);
        let snapshot = ContentSnapshot {
            body: Body::Structured(root),
            ..Default::default()
        };

        let report = analyze(&snapshot);
        assert_eq!(report.heading_stats.h1, 1);
        assert_eq!(report.heading_stats.h6, 2);
        assert_eq!(report.heading_stats.hierarchy_violations.len(), 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = analyze(&ContentSnapshot::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "poor");
        assert!(json["keywordAnalysis"].is_null());
        assert!(json["headingStats"]["hierarchyViolations"].is_array());
        assert_eq!(json["technicalSeo"]["urlStructure"], "good");
        assert_eq!(json["contentAnalysis"]["readingTime"], 0);
    }
}

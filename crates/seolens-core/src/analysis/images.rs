//! Image alt text coverage

use serde::{Deserialize, Serialize};

use super::findings::{Finding, Issue, IssueCode, IssueDetail, Outcome, SuggestionCode};
use crate::extract::ExtractedFacts;

/// Alt text with at least this many words counts as descriptive.
pub const DESCRIPTIVE_ALT_WORDS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
    /// Images whose alt text looks descriptive
    pub optimized: usize,
}

pub fn analyze_images(facts: &ExtractedFacts) -> Outcome<ImageAnalysis> {
    let mut report = ImageAnalysis {
        total: facts.images.len(),
        ..Default::default()
    };
    let mut quality_issues = Vec::new();

    for image in &facts.images {
        let alt = image.alt.trim();
        if alt.is_empty() {
            continue;
        }

        report.with_alt += 1;
        if alt.split_whitespace().count() >= DESCRIPTIVE_ALT_WORDS {
            report.optimized += 1;
        } else {
            quality_issues.push(Finding::from(
                Issue::new(IssueCode::AltTextNotDescriptive).with_detail(IssueDetail::ImageAlt {
                    src: image.src.clone(),
                    alt: alt.to_string(),
                }),
            ));
        }
    }
    report.without_alt = report.total - report.with_alt;

    let mut findings: Vec<Finding> = Vec::new();

    if report.total > 0 {
        if report.without_alt == report.total {
            findings.push(IssueCode::AllImagesMissingAlt.into());
        } else if report.without_alt > 0 {
            findings.push(IssueCode::SomeImagesMissingAlt.into());
        } else {
            findings.push(SuggestionCode::ImagesAltComplete.into());
        }
    }
    findings.extend(quality_issues);

    Outcome { report, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ImageFact;

    fn facts(alts: &[&str]) -> ExtractedFacts {
        ExtractedFacts {
            images: alts
                .iter()
                .enumerate()
                .map(|(i, alt)| ImageFact {
                    src: format!("/uploads/{i}.jpg"),
                    alt: alt.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn codes(outcome: &Outcome<ImageAnalysis>) -> Vec<IssueCode> {
        outcome
            .findings
            .iter()
            .filter_map(|f| match f {
                Finding::Issue(issue) => Some(issue.code),
                Finding::Suggestion(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_no_images_no_findings() {
        let outcome = analyze_images(&ExtractedFacts::default());
        assert_eq!(outcome.report, ImageAnalysis::default());
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn test_all_described() {
        let outcome = analyze_images(&facts(&["A nice golden pastry tray", "Çilekli pasta dilimi"]));

        assert_eq!(
            outcome.report,
            ImageAnalysis {
                total: 2,
                with_alt: 2,
                without_alt: 0,
                optimized: 2
            }
        );
        assert_eq!(
            outcome.findings,
            vec![Finding::from(SuggestionCode::ImagesAltComplete)]
        );
    }

    #[test]
    fn test_all_missing() {
        let outcome = analyze_images(&facts(&["", "   "]));
        assert_eq!(outcome.report.without_alt, 2);
        assert_eq!(codes(&outcome), vec![IssueCode::AllImagesMissingAlt]);
    }

    #[test]
    fn test_some_missing_and_short_alt() {
        let outcome = analyze_images(&facts(&["", "pasta", "tepsi dolusu", "üç kelimelik alt metni"]));

        assert_eq!(outcome.report.total, 4);
        assert_eq!(outcome.report.with_alt, 3);
        assert_eq!(outcome.report.without_alt, 1);
        assert_eq!(outcome.report.optimized, 1);
        assert_eq!(
            codes(&outcome),
            vec![
                IssueCode::SomeImagesMissingAlt,
                IssueCode::AltTextNotDescriptive,
                IssueCode::AltTextNotDescriptive,
            ]
        );

        let Finding::Issue(issue) = &outcome.findings[1] else {
            panic!("expected an issue");
        };
        assert_eq!(
            issue.detail,
            Some(IssueDetail::ImageAlt {
                src: "/uploads/1.jpg".to_string(),
                alt: "pasta".to_string()
            })
        );
    }
}

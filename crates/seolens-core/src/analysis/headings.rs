//! Heading hierarchy analysis

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::findings::{Finding, Issue, IssueCode, IssueDetail, Outcome, SuggestionCode};
use crate::extract::ExtractedFacts;

/// Per-level heading counts and hierarchy violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStats {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
    pub hierarchy_violations: Vec<HierarchyViolation>,
}

impl HeadingStats {
    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3 + self.h4 + self.h5 + self.h6
    }

    pub fn has_valid_hierarchy(&self) -> bool {
        self.hierarchy_violations.is_empty()
    }

    fn count(&mut self, level: u8) {
        match level.clamp(1, 6) {
            1 => self.h1 += 1,
            2 => self.h2 += 1,
            3 => self.h3 += 1,
            4 => self.h4 += 1,
            5 => self.h5 += 1,
            _ => self.h6 += 1,
        }
    }
}

/// A heading that skips a level, e.g. an H3 right after an H1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyViolation {
    pub position: usize,
    pub found: u8,
    pub expected: u8,
}

pub fn analyze_headings(facts: &ExtractedFacts) -> Outcome<HeadingStats> {
    let mut stats = HeadingStats::default();
    let mut previous: Option<u8> = None;

    for heading in &facts.headings {
        let level = heading.level.clamp(1, 6);
        stats.count(level);

        if let Some(prev) = previous
            && level > prev + 1
        {
            trace!(
                position = heading.position,
                from = prev,
                to = level,
                "heading level skipped"
            );
            stats.hierarchy_violations.push(HierarchyViolation {
                position: heading.position,
                found: level,
                expected: prev + 1,
            });
        }
        previous = Some(level);
    }

    let mut findings: Vec<Finding> = Vec::new();

    match stats.h1 {
        0 => findings.push(IssueCode::MissingH1.into()),
        1 => findings.push(SuggestionCode::SingleH1.into()),
        _ => findings.push(IssueCode::MultipleH1.into()),
    }

    if stats.h2 == 0 && stats.h3 == 0 {
        findings.push(IssueCode::MissingSubheadings.into());
    }

    findings.extend(stats.hierarchy_violations.iter().map(|violation| {
        Finding::from(
            Issue::new(IssueCode::HeadingHierarchySkip).with_detail(IssueDetail::HeadingSkip {
                found: violation.found,
                expected: violation.expected,
                position: violation.position,
            }),
        )
    }));

    Outcome {
        report: stats,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::HeadingFact;

    fn facts(levels: &[u8]) -> ExtractedFacts {
        ExtractedFacts {
            headings: levels
                .iter()
                .enumerate()
                .map(|(position, &level)| HeadingFact {
                    level,
                    text: format!("Başlık {position}"),
                    position,
                })
                .collect(),
            ..Default::default()
        }
    }

    fn issue_codes(outcome: &Outcome<HeadingStats>) -> Vec<IssueCode> {
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
    fn test_clean_hierarchy() {
        let outcome = analyze_headings(&facts(&[1, 2, 3, 2, 3, 4]));

        assert_eq!(outcome.report.h1, 1);
        assert_eq!(outcome.report.h2, 2);
        assert_eq!(outcome.report.total(), 6);
        assert!(outcome.report.has_valid_hierarchy());
        assert!(issue_codes(&outcome).is_empty());
        assert_eq!(outcome.findings, vec![Finding::from(SuggestionCode::SingleH1)]);
    }

    #[test]
    fn test_going_back_up_is_allowed() {
        let outcome = analyze_headings(&facts(&[1, 2, 3, 4, 2]));
        assert!(outcome.report.has_valid_hierarchy());
    }

    #[test]
    fn test_skip_is_reported_per_occurrence() {
        let outcome = analyze_headings(&facts(&[1, 3, 2, 4, 6]));

        assert_eq!(
            outcome.report.hierarchy_violations,
            vec![
                HierarchyViolation { position: 1, found: 3, expected: 2 },
                HierarchyViolation { position: 4, found: 6, expected: 5 },
            ]
        );
        let skips = issue_codes(&outcome)
            .into_iter()
            .filter(|c| *c == IssueCode::HeadingHierarchySkip)
            .count();
        assert_eq!(skips, 2);
    }

    #[test]
    fn test_first_heading_is_never_a_violation() {
        let outcome = analyze_headings(&facts(&[3, 4]));
        assert!(outcome.report.has_valid_hierarchy());
        assert_eq!(
            issue_codes(&outcome),
            vec![IssueCode::MissingH1]
        );
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let outcome = analyze_headings(&facts(&[0, 255, 255]));

        assert_eq!(outcome.report.h1, 1);
        assert_eq!(outcome.report.h6, 2);
        assert_eq!(outcome.report.total(), 3);
        assert_eq!(
            outcome.report.hierarchy_violations,
            vec![HierarchyViolation { position: 1, found: 6, expected: 2 }]
        );
    }

    #[test]
    fn test_no_headings() {
        let outcome = analyze_headings(&ExtractedFacts::default());
        assert_eq!(
            issue_codes(&outcome),
            vec![IssueCode::MissingH1, IssueCode::MissingSubheadings]
        );
    }

    #[test]
    fn test_multiple_h1_with_skip() {
        let outcome = analyze_headings(&facts(&[1, 3, 1]));
        let codes = issue_codes(&outcome);

        assert_eq!(
            codes.iter().filter(|c| **c == IssueCode::MultipleH1).count(),
            1
        );
        assert!(codes.contains(&IssueCode::HeadingHierarchySkip));
        assert!(!codes.contains(&IssueCode::MissingSubheadings));
    }
}

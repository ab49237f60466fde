//! Score aggregation
//!
//! Findings from every analyzer are merged here. The score starts at 100 and
//! loses each finding's fixed deduction; codes marked as deduct-once cost
//! their points a single time no matter how often they are raised.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::findings::{Finding, Issue, Suggestion};

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreStatus::Excellent,
            75..=89 => ScoreStatus::Good,
            60..=74 => ScoreStatus::NeedsImprovement,
            _ => ScoreStatus::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub score: u8,
    pub status: ScoreStatus,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

/// Recompute a score from issues and suggestions using the deduction table.
pub fn score_from_findings(issues: &[Issue], suggestions: &[Suggestion]) -> u8 {
    let mut charged_once = HashSet::new();
    let mut deducted: u32 = 0;

    for issue in issues {
        if issue.code.deducts_once() && !charged_once.insert(issue.code) {
            continue;
        }
        deducted += issue.code.deduction();
    }
    deducted += suggestions
        .iter()
        .map(|suggestion| suggestion.code.deduction())
        .sum::<u32>();

    u32::from(MAX_SCORE).saturating_sub(deducted) as u8
}

/// Merge findings in the order the checks ran.
///
/// Issues are stably sorted by priority, highest first, so equal priorities
/// keep their check order. Suggestions keep check order.
pub fn aggregate(findings: impl IntoIterator<Item = Finding>) -> Aggregate {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    for finding in findings {
        match finding {
            Finding::Issue(issue) => issues.push(issue),
            Finding::Suggestion(suggestion) => suggestions.push(suggestion),
        }
    }

    let score = score_from_findings(&issues, &suggestions);
    issues.sort_by(|a, b| b.priority.cmp(&a.priority));

    Aggregate {
        score,
        status: ScoreStatus::from_score(score),
        issues,
        suggestions,
    }
}

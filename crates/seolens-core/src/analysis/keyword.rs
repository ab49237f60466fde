//! Focus keyword usage

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use super::findings::{Finding, IssueCode, Outcome, SuggestionCode};
use crate::extract::ExtractedFacts;
use crate::types::ContentSnapshot;

/// Density above this percentage reads as keyword stuffing.
pub const MAX_DENSITY: f64 = 3.0;
/// Density below this percentage is too thin to register.
pub const MIN_DENSITY: f64 = 0.5;
/// Fewer occurrences than this raise a warning.
pub const MIN_OCCURRENCES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub occurrences: usize,
    /// Occurrences per hundred words
    pub density: f64,
    pub in_title: bool,
    pub in_meta_desc: bool,
    pub in_slug: bool,
    pub in_content: bool,
    pub in_first_paragraph: bool,
}

/// Analyze focus keyword usage. Returns `None` when the snapshot has no
/// keyword, in which case no keyword check runs.
pub fn analyze_keyword(
    snapshot: &ContentSnapshot,
    facts: &ExtractedFacts,
    word_count: usize,
) -> Option<Outcome<KeywordAnalysis>> {
    let keyword = snapshot.focus_keyword()?;
    let needle = keyword.to_lowercase();

    let occurrences = count_occurrences(&facts.text, keyword);
    let density = if word_count == 0 {
        0.0
    } else {
        occurrences as f64 / word_count as f64 * 100.0
    };

    let report = KeywordAnalysis {
        keyword: keyword.to_string(),
        occurrences,
        density,
        in_title: contains(snapshot.effective_title(), &needle),
        in_meta_desc: snapshot
            .meta_description()
            .is_some_and(|meta| contains(meta, &needle)),
        in_slug: contains(&snapshot.slug, &slug_form(&needle)),
        in_content: occurrences > 0,
        in_first_paragraph: facts
            .first_paragraph
            .as_deref()
            .is_some_and(|paragraph| contains(paragraph, &needle)),
    };

    let mut findings: Vec<Finding> = Vec::new();

    if !report.in_title {
        findings.push(IssueCode::KeywordNotInTitle.into());
    }
    if !report.in_meta_desc {
        findings.push(IssueCode::KeywordNotInMetaDescription.into());
    }
    if !report.in_slug {
        findings.push(SuggestionCode::KeywordNotInSlug.into());
    }

    if occurrences == 0 {
        findings.push(IssueCode::KeywordNotInContent.into());
    } else if occurrences < MIN_OCCURRENCES {
        findings.push(IssueCode::KeywordLowOccurrence.into());
    }

    if density > MAX_DENSITY {
        findings.push(IssueCode::KeywordStuffing.into());
    } else if occurrences > 0 && density < MIN_DENSITY {
        findings.push(SuggestionCode::KeywordLowDensity.into());
    }

    if !report.in_first_paragraph {
        findings.push(SuggestionCode::KeywordNotInFirstParagraph.into());
    }

    Some(Outcome { report, findings })
}

/// Non-overlapping, case-insensitive matches of the literal phrase.
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }

    match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        // Only reachable for phrases over the compiled size limit
        Err(_) => text
            .to_lowercase()
            .matches(keyword.to_lowercase().as_str())
            .count(),
    }
}

/// Keyword as it would appear in a slug: whitespace runs become one hyphen.
pub fn slug_form(keyword: &str) -> String {
    keyword.split_whitespace().collect::<Vec<_>>().join("-")
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

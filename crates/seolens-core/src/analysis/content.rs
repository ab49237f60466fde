//! Content length, readability and link statistics

use serde::{Deserialize, Serialize};

use super::findings::{Finding, IssueCode, Outcome, SuggestionCode};
use crate::extract::ExtractedFacts;

pub const WORDS_PER_MINUTE: usize = 200;
pub const MIN_WORDS: usize = 300;
pub const GOOD_WORDS: usize = 1000;
/// Above this length an article should link to other pages on the site.
pub const INTERNAL_LINK_THRESHOLD: usize = 500;
/// Paragraph length (in words) that scores 100 on the readability proxy.
const IDEAL_PARAGRAPH_WORDS: f64 = 15.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub word_count: usize,
    /// Minutes, rounded up
    pub reading_time: usize,
    pub paragraph_count: usize,
    /// 0..=100, higher is easier to read
    pub readability_score: f64,
    pub link_count: usize,
    pub internal_links: usize,
    pub external_links: usize,
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Crude paragraph-length proxy: 100 at 15 words per paragraph, two points
/// off for every word beyond that.
pub fn readability_score(word_count: usize, paragraph_count: usize) -> f64 {
    let avg_words = word_count as f64 / paragraph_count.max(1) as f64;
    (100.0 - (avg_words - IDEAL_PARAGRAPH_WORDS) * 2.0).clamp(0.0, 100.0)
}

pub fn analyze_content(facts: &ExtractedFacts) -> Outcome<ContentAnalysis> {
    let word_count = count_words(&facts.text);
    let internal_links = facts.internal_links();

    let report = ContentAnalysis {
        word_count,
        reading_time: word_count.div_ceil(WORDS_PER_MINUTE),
        paragraph_count: facts.paragraph_count,
        readability_score: readability_score(word_count, facts.paragraph_count),
        link_count: facts.links.len(),
        internal_links,
        external_links: facts.external_links(),
    };

    let mut findings: Vec<Finding> = Vec::new();

    if word_count < MIN_WORDS {
        findings.push(IssueCode::ContentTooShort.into());
    } else if word_count < GOOD_WORDS {
        findings.push(SuggestionCode::ContentLengthFair.into());
    } else {
        findings.push(SuggestionCode::ContentLengthExcellent.into());
    }

    if internal_links == 0 && word_count > INTERNAL_LINK_THRESHOLD {
        findings.push(SuggestionCode::AddInternalLinks.into());
    }

    Outcome { report, findings }
}

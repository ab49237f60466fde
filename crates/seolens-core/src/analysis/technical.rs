//! Title, meta description and slug sizing

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::findings::{Finding, IssueCode, Outcome, SuggestionCode};
use crate::types::ContentSnapshot;

pub const TITLE_MIN: usize = 30;
pub const TITLE_OPTIMAL_MIN: usize = 50;
pub const TITLE_OPTIMAL_MAX: usize = 60;
pub const TITLE_MAX: usize = 70;
pub const META_OPTIMAL_MIN: usize = 120;
pub const META_OPTIMAL_MAX: usize = 160;
pub const SLUG_MAX: usize = 50;

static RE_PERCENT_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("invalid percent escape regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlStructure {
    #[default]
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    pub title_length: usize,
    pub meta_desc_length: usize,
    pub slug_length: usize,
    pub url_structure: UrlStructure,
}

/// Lengths are counted in characters, not bytes.
pub fn analyze_technical(snapshot: &ContentSnapshot) -> Outcome<TechnicalSeo> {
    let title_length = snapshot.effective_title().chars().count();
    let meta_desc_length = snapshot
        .meta_description()
        .map_or(0, |meta| meta.chars().count());
    let slug_length = snapshot.slug.chars().count();

    let url_structure =
        if snapshot.slug.contains('_') || RE_PERCENT_ESCAPE.is_match(&snapshot.slug) {
            UrlStructure::NeedsImprovement
        } else {
            UrlStructure::Good
        };

    let mut findings: Vec<Finding> = Vec::new();

    findings.push(match title_length {
        n if n < TITLE_MIN => IssueCode::TitleTooShort.into(),
        n if n < TITLE_OPTIMAL_MIN => IssueCode::TitleShort.into(),
        n if n <= TITLE_OPTIMAL_MAX => SuggestionCode::TitleLengthOptimal.into(),
        n if n <= TITLE_MAX => IssueCode::TitleLong.into(),
        _ => IssueCode::TitleTooLong.into(),
    });

    findings.push(match meta_desc_length {
        0 => IssueCode::MetaDescriptionMissing.into(),
        n if n < META_OPTIMAL_MIN => IssueCode::MetaDescriptionShort.into(),
        n if n <= META_OPTIMAL_MAX => SuggestionCode::MetaDescriptionOptimal.into(),
        _ => IssueCode::MetaDescriptionLong.into(),
    });

    if slug_length > SLUG_MAX {
        findings.push(IssueCode::SlugTooLong.into());
    }

    if url_structure == UrlStructure::NeedsImprovement {
        findings.push(SuggestionCode::ImproveUrlStructure.into());
    }

    Outcome {
        report: TechnicalSeo {
            title_length,
            meta_desc_length,
            slug_length,
            url_structure,
        },
        findings,
    }
}

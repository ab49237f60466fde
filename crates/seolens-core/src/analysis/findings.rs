//! Issue and suggestion vocabulary
//!
//! Every check emits a stable code. Severity, priority and the score
//! deduction are properties of the code, so a report's score can always be
//! recomputed from its issue and suggestion lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Issue priority. Declared low to high so `Ord` ranks `High` greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Tip,
    BestPractice,
}

/// Which analyzer a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Heading,
    Keyword,
    Content,
    Image,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    MissingH1,
    MultipleH1,
    MissingSubheadings,
    HeadingHierarchySkip,
    KeywordNotInTitle,
    KeywordNotInMetaDescription,
    KeywordNotInContent,
    KeywordLowOccurrence,
    KeywordStuffing,
    ContentTooShort,
    AllImagesMissingAlt,
    SomeImagesMissingAlt,
    AltTextNotDescriptive,
    TitleTooShort,
    TitleShort,
    TitleLong,
    TitleTooLong,
    MetaDescriptionMissing,
    MetaDescriptionShort,
    MetaDescriptionLong,
    SlugTooLong,
}

impl IssueCode {
    pub fn severity(self) -> Severity {
        use IssueCode::*;
        match self {
            MissingH1 | MultipleH1 | KeywordNotInTitle | KeywordNotInContent
            | AllImagesMissingAlt | TitleTooShort | TitleTooLong | MetaDescriptionMissing => {
                Severity::Error
            }
            AltTextNotDescriptive => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn priority(self) -> Priority {
        use IssueCode::*;
        match self {
            MissingH1 | MultipleH1 | KeywordNotInTitle | KeywordNotInContent
            | AllImagesMissingAlt | TitleTooShort | TitleTooLong | MetaDescriptionMissing => {
                Priority::High
            }
            AltTextNotDescriptive | SlugTooLong => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// Points taken off the score each time the issue is raised.
    pub fn deduction(self) -> u32 {
        use IssueCode::*;
        match self {
            MissingH1 | MultipleH1 => 15,
            MissingSubheadings | HeadingHierarchySkip => 5,
            KeywordNotInTitle => 15,
            KeywordNotInMetaDescription => 10,
            KeywordNotInContent => 20,
            KeywordLowOccurrence => 5,
            KeywordStuffing => 10,
            ContentTooShort => 10,
            AllImagesMissingAlt => 15,
            SomeImagesMissingAlt => 10,
            AltTextNotDescriptive => 5,
            TitleTooShort | TitleTooLong => 10,
            TitleShort | TitleLong => 5,
            MetaDescriptionMissing => 15,
            MetaDescriptionShort | MetaDescriptionLong => 5,
            SlugTooLong => 3,
        }
    }

    /// Raised once per offending item but deducted only once per report.
    pub fn deducts_once(self) -> bool {
        matches!(self, IssueCode::AltTextNotDescriptive)
    }

    pub fn check(self) -> Check {
        use IssueCode::*;
        match self {
            MissingH1 | MultipleH1 | MissingSubheadings | HeadingHierarchySkip => Check::Heading,
            KeywordNotInTitle | KeywordNotInMetaDescription | KeywordNotInContent
            | KeywordLowOccurrence | KeywordStuffing => Check::Keyword,
            ContentTooShort => Check::Content,
            AllImagesMissingAlt | SomeImagesMissingAlt | AltTextNotDescriptive => Check::Image,
            TitleTooShort | TitleShort | TitleLong | TitleTooLong | MetaDescriptionMissing
            | MetaDescriptionShort | MetaDescriptionLong | SlugTooLong => Check::Technical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionCode {
    SingleH1,
    KeywordNotInSlug,
    KeywordLowDensity,
    KeywordNotInFirstParagraph,
    ContentLengthFair,
    ContentLengthExcellent,
    AddInternalLinks,
    ImagesAltComplete,
    TitleLengthOptimal,
    MetaDescriptionOptimal,
    ImproveUrlStructure,
}

impl SuggestionCode {
    pub fn kind(self) -> SuggestionKind {
        use SuggestionCode::*;
        match self {
            SingleH1 | ContentLengthExcellent | ImagesAltComplete | TitleLengthOptimal
            | MetaDescriptionOptimal => SuggestionKind::BestPractice,
            _ => SuggestionKind::Tip,
        }
    }

    /// Only a keyword missing from the slug costs points.
    pub fn deduction(self) -> u32 {
        match self {
            SuggestionCode::KeywordNotInSlug => 5,
            _ => 0,
        }
    }

    pub fn check(self) -> Check {
        use SuggestionCode::*;
        match self {
            SingleH1 => Check::Heading,
            KeywordNotInSlug | KeywordLowDensity | KeywordNotInFirstParagraph => Check::Keyword,
            ContentLengthFair | ContentLengthExcellent | AddInternalLinks => Check::Content,
            ImagesAltComplete => Check::Image,
            TitleLengthOptimal | MetaDescriptionOptimal | ImproveUrlStructure => Check::Technical,
        }
    }
}

/// Extra context for issues that point at a specific element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum IssueDetail {
    #[serde(rename_all = "camelCase")]
    HeadingSkip {
        found: u8,
        expected: u8,
        position: usize,
    },
    #[serde(rename_all = "camelCase")]
    ImageAlt { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub priority: Priority,
    pub code: IssueCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<IssueDetail>,
}

impl Issue {
    pub fn new(code: IssueCode) -> Self {
        Self {
            severity: code.severity(),
            priority: code.priority(),
            code,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: IssueDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub code: SuggestionCode,
}

impl Suggestion {
    pub fn new(code: SuggestionCode) -> Self {
        Self {
            kind: code.kind(),
            code,
        }
    }
}

/// Output of a single check, in the order checks ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Issue(Issue),
    Suggestion(Suggestion),
}

impl From<IssueCode> for Finding {
    fn from(code: IssueCode) -> Self {
        Finding::Issue(Issue::new(code))
    }
}

impl From<Issue> for Finding {
    fn from(issue: Issue) -> Self {
        Finding::Issue(issue)
    }
}

impl From<SuggestionCode> for Finding {
    fn from(code: SuggestionCode) -> Self {
        Finding::Suggestion(Suggestion::new(code))
    }
}

/// A sub-report together with the findings its checks raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub report: T,
    pub findings: Vec<Finding>,
}

use regex::Regex;
use std::sync::LazyLock;

/// Heading styles recognised by title-based parsing, in match priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingKind {
    /// 第一章 / 第二节 / 第三篇
    ChapterMarker,
    /// 1. Title
    NumberedDot,
    /// A. Title
    LetteredDot,
    /// 1) Title
    NumberedParen,
    /// A) Title
    LetteredParen,
    /// （1）Title
    FullWidthParenNumber,
    /// （一）Title
    FullWidthParenNumeral,
    /// 一、Title
    EnumerationComma,
    /// (一)Title, with full- or half-width parentheses
    MixedParenNumeral,
    /// (A)Title, with full- or half-width parentheses
    MixedParenLetter,
}

const HEADING_PATTERNS: [(HeadingKind, &str); 10] = [
    (HeadingKind::ChapterMarker, r"^第[一二三四五六七八九十百千万]+[章节篇]"),
    (HeadingKind::NumberedDot, r"^\d+\.\s+[^\n]+"),
    (HeadingKind::LetteredDot, r"^[A-Z]\.\s+[^\n]+"),
    (HeadingKind::NumberedParen, r"^\d+\)\s+[^\n]+"),
    (HeadingKind::LetteredParen, r"^[A-Z]\)\s+[^\n]+"),
    (HeadingKind::FullWidthParenNumber, r"^（\d+）\s*[^\n]+"),
    (HeadingKind::FullWidthParenNumeral, r"^（[一二三四五六七八九十]+）\s*[^\n]+"),
    (HeadingKind::EnumerationComma, r"^[一二三四五六七八九十]+、\s*[^\n]+"),
    (HeadingKind::MixedParenNumeral, r"^[（(][一二三四五六七八九十]+[）)]\s*[^\n]+"),
    (HeadingKind::MixedParenLetter, r"^[（(][A-Z][）)]\s*[^\n]+"),
];

static HEADINGS: LazyLock<Vec<(HeadingKind, Regex)>> = LazyLock::new(|| {
    HEADING_PATTERNS
        .iter()
        .map(|(kind, pattern)| {
            let regex = Regex::new(pattern).expect("heading pattern must compile");
            (*kind, regex)
        })
        .collect()
});

/// Classify a trimmed line, returning the first heading style it matches
pub fn classify_heading(line: &str) -> Option<HeadingKind> {
    HEADINGS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|(kind, _)| *kind)
}

pub fn is_heading(line: &str) -> bool {
    classify_heading(line).is_some()
}

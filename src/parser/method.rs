use crate::error::SegmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parsing strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMethod {
    AllText,
    ByPages,
    ByTitles,
    TextAndTables,
}

impl ParseMethod {
    pub const ALL: [ParseMethod; 4] = [
        ParseMethod::AllText,
        ParseMethod::ByPages,
        ParseMethod::ByTitles,
        ParseMethod::TextAndTables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMethod::AllText => "all_text",
            ParseMethod::ByPages => "by_pages",
            ParseMethod::ByTitles => "by_titles",
            ParseMethod::TextAndTables => "text_and_tables",
        }
    }
}

impl FromStr for ParseMethod {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SegmentError::InvalidArgument(format!("Unsupported parsing method: {}", s)))
    }
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

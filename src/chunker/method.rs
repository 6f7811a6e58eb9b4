use crate::error::SegmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chunking strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkMethod {
    /// One chunk per page
    ByPages,
    /// Greedy whitespace-token packing up to a character budget
    FixedSize,
    /// Split on newline followed by a space
    ByParagraphs,
    /// Recursive sentence-boundary splitting with overlap
    BySentences,
}

impl ChunkMethod {
    pub const ALL: [ChunkMethod; 4] = [
        ChunkMethod::ByPages,
        ChunkMethod::FixedSize,
        ChunkMethod::ByParagraphs,
        ChunkMethod::BySentences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkMethod::ByPages => "by_pages",
            ChunkMethod::FixedSize => "fixed_size",
            ChunkMethod::ByParagraphs => "by_paragraphs",
            ChunkMethod::BySentences => "by_sentences",
        }
    }
}

impl FromStr for ChunkMethod {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SegmentError::InvalidArgument(format!("Unsupported chunking method: {}", s)))
    }
}

impl fmt::Display for ChunkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

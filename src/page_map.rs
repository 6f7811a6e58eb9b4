use crate::assembler::ChunkDocument;
use crate::error::SegmentError;
use serde::{Deserialize, Serialize};

/// Text extracted from a single page of the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMapEntry {
    /// 1-based page number in source order
    pub page: u32,
    /// Extracted text, not further cleaned (may be empty)
    pub text: String,
}

impl PageMapEntry {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// Validated, ordered page -> text mapping handed over by a loader
///
/// Page numbers are >= 1 and strictly increasing. The map is immutable once
/// built and is always passed explicitly to the chunker and parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageMap {
    entries: Vec<PageMapEntry>,
}

impl PageMap {
    /// Build a page map, rejecting page 0 and non-increasing page numbers
    pub fn new(entries: Vec<PageMapEntry>) -> Result<Self, SegmentError> {
        let mut previous: Option<u32> = None;

        for entry in &entries {
            if entry.page == 0 {
                return Err(SegmentError::MalformedInput(
                    "page numbers are 1-based, found page 0".to_string(),
                ));
            }

            if let Some(prev) = previous {
                if entry.page <= prev {
                    return Err(SegmentError::MalformedInput(format!(
                        "pages out of order: page {} follows page {}",
                        entry.page, prev
                    )));
                }
            }

            previous = Some(entry.page);
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of `{ "page": .., "text": .. }` objects
    pub fn from_json(json: &str) -> Result<Self, SegmentError> {
        let entries: Vec<PageMapEntry> = serde_json::from_str(json)
            .map_err(|e| SegmentError::MalformedInput(e.to_string()))?;
        Self::new(entries)
    }

    /// Rebuild the page map from a previously loaded document envelope
    ///
    /// Each chunk contributes its `page_number` and `content`; a loaded
    /// document carries exactly one chunk per page.
    pub fn from_chunk_document(document: &ChunkDocument) -> Result<Self, SegmentError> {
        let entries = document
            .chunks
            .iter()
            .map(|chunk| PageMapEntry::new(chunk.metadata.page_number, chunk.content.clone()))
            .collect();

        Self::new(entries).map_err(|e| match e {
            SegmentError::MalformedInput(msg) => SegmentError::MalformedInput(format!(
                "{} cannot be rebuilt into a page map: {}",
                document.filename, msg
            )),
            other => other,
        })
    }

    pub fn entries(&self) -> &[PageMapEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageMapEntry> {
        self.entries.iter()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Page number of the final entry, if any
    pub fn last_page(&self) -> Option<u32> {
        self.entries.last().map(|e| e.page)
    }
}

impl<'de> Deserialize<'de> for PageMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<PageMapEntry>::deserialize(deserializer)?;
        PageMap::new(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a PageMap {
    type Item = &'a PageMapEntry;
    type IntoIter = std::slice::Iter<'a, PageMapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count non-whitespace characters
///
/// Stands in for a word count so that scripts without space-delimited words
/// (Chinese, Japanese) still get a meaningful size.
pub fn count_words(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

use serde::{Deserialize, Serialize};

/// One structural element produced by a parsing pass
///
/// Serialized with a `type` tag; the tag spellings are part of the output
/// contract (`"Text"` is capitalised, the rest are lower case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedElement {
    /// Whole-document text
    #[serde(rename = "Text")]
    Text { content: String, page: u32 },

    /// A single page
    #[serde(rename = "page")]
    Page {
        page_number: u32,
        content: String,
        word_count: usize,
    },

    /// A title-delimited span
    #[serde(rename = "section")]
    Section {
        title: String,
        content: String,
        page: u32,
    },

    /// Consecutive non-table lines
    #[serde(rename = "paragraph")]
    Paragraph { content: String, page: u32 },

    /// Consecutive table lines split into cells
    #[serde(rename = "table")]
    Table { rows: Vec<Vec<String>>, page: u32 },
}

impl ParsedElement {
    /// Page this element is attributed to
    pub fn page(&self) -> u32 {
        match self {
            ParsedElement::Text { page, .. }
            | ParsedElement::Section { page, .. }
            | ParsedElement::Paragraph { page, .. }
            | ParsedElement::Table { page, .. } => *page,
            ParsedElement::Page { page_number, .. } => *page_number,
        }
    }

    /// Wire tag of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedElement::Text { .. } => "Text",
            ParsedElement::Page { .. } => "page",
            ParsedElement::Section { .. } => "section",
            ParsedElement::Paragraph { .. } => "paragraph",
            ParsedElement::Table { .. } => "table",
        }
    }
}

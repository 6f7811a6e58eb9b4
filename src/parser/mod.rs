mod element;
mod headings;
mod method;
mod sections;
mod tables;

#[cfg(test)]
mod tests;

pub use element::ParsedElement;
pub use headings::{HeadingKind, classify_heading, is_heading};
pub use method::ParseMethod;
pub use sections::{PREFACE_TITLE, parse_by_titles};
pub use tables::{is_table_line, parse_text_and_tables, split_cells};

use crate::error::SegmentError;
use crate::page_map::{PageMap, count_words};
use tracing::debug;

/// Parse a page map with a method given by name
///
/// Fails with `InvalidArgument` when the method is not one of
/// `all_text`, `by_pages`, `by_titles` or `text_and_tables`.
pub fn parse(page_map: &PageMap, method: &str) -> Result<Vec<ParsedElement>, SegmentError> {
    let method: ParseMethod = method.parse()?;
    Ok(parse_pages(page_map, method))
}

/// Run one parsing strategy over the whole page map
pub fn parse_pages(page_map: &PageMap, method: ParseMethod) -> Vec<ParsedElement> {
    debug!(%method, pages = page_map.len(), "parsing document");

    let elements = match method {
        ParseMethod::AllText => parse_all_text(page_map),
        ParseMethod::ByPages => parse_by_pages(page_map),
        ParseMethod::ByTitles => parse_by_titles(page_map),
        ParseMethod::TextAndTables => parse_text_and_tables(page_map),
    };

    debug!(%method, elements = elements.len(), "parsing complete");
    elements
}

/// Join every page into one text element attributed to page 1
pub fn parse_all_text(page_map: &PageMap) -> Vec<ParsedElement> {
    let content = page_map
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    vec![ParsedElement::Text { content, page: 1 }]
}

/// One element per page, with a non-whitespace character count
pub fn parse_by_pages(page_map: &PageMap) -> Vec<ParsedElement> {
    page_map
        .iter()
        .map(|entry| ParsedElement::Page {
            page_number: entry.page,
            content: entry.text.clone(),
            word_count: count_words(&entry.text),
        })
        .collect()
}

use super::ParsedElement;
use super::headings::is_heading;
use crate::page_map::PageMap;

/// Title given to content that precedes the first heading
pub const PREFACE_TITLE: &str = "前言";

/// Split the whole document into title-delimited sections
///
/// A single pass over every trimmed, non-empty line in document order. A
/// section closed by a heading is tagged with the page of that heading line,
/// not the page its content came from; the final section gets the last page.
pub fn parse_by_titles(page_map: &PageMap) -> Vec<ParsedElement> {
    let mut sections = Vec::new();
    let mut current_title: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for entry in page_map {
        for line in entry.text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if !is_heading(line) {
                buffer.push(line);
                continue;
            }

            match current_title.take() {
                Some(title) => sections.push(section(title, &buffer, entry.page)),
                None if !buffer.is_empty() => {
                    sections.push(section(PREFACE_TITLE.to_string(), &buffer, entry.page))
                }
                None => {}
            }

            buffer.clear();
            current_title = Some(line.to_string());
        }
    }

    let Some(last_page) = page_map.last_page() else {
        return sections;
    };

    match current_title {
        Some(title) => sections.push(section(title, &buffer, last_page)),
        None if !buffer.is_empty() => {
            sections.push(section(PREFACE_TITLE.to_string(), &buffer, last_page))
        }
        None => {}
    }

    sections
}

fn section(title: String, lines: &[&str], page: u32) -> ParsedElement {
    ParsedElement::Section {
        title,
        content: lines.join("\n"),
        page,
    }
}

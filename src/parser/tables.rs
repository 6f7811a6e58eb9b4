use super::ParsedElement;
use crate::page_map::PageMap;
use regex::Regex;
use std::sync::LazyLock;

/// Cell separator: a tab or a run of two or more whitespace characters
static CELL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t|\s{2,}").expect("cell separator pattern must compile"));

/// Whether a trimmed line looks like a table row
pub fn is_table_line(line: &str) -> bool {
    CELL_SEPARATOR.is_match(line)
}

/// Split a table row into its non-empty, trimmed cells
pub fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Separate each page into alternating paragraph and table runs
pub fn parse_text_and_tables(page_map: &PageMap) -> Vec<ParsedElement> {
    let mut elements = Vec::new();

    for entry in page_map {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in entry.text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if is_table_line(line) {
                if !paragraph.is_empty() {
                    elements.push(ParsedElement::Paragraph {
                        content: paragraph.join("\n"),
                        page: entry.page,
                    });
                    paragraph.clear();
                }
                rows.push(split_cells(line));
            } else {
                if !rows.is_empty() {
                    elements.push(ParsedElement::Table {
                        rows: std::mem::take(&mut rows),
                        page: entry.page,
                    });
                }
                paragraph.push(line);
            }
        }

        // At most one of the two runs is open here
        if !paragraph.is_empty() {
            elements.push(ParsedElement::Paragraph {
                content: paragraph.join("\n"),
                page: entry.page,
            });
        } else if !rows.is_empty() {
            elements.push(ParsedElement::Table {
                rows,
                page: entry.page,
            });
        }
    }

    elements
}

use super::*;
use crate::page_map::PageMapEntry;

fn make_page_map(pages: &[(u32, &str)]) -> PageMap {
    PageMap::new(
        pages
            .iter()
            .map(|(page, text)| PageMapEntry::new(*page, *text))
            .collect(),
    )
    .unwrap()
}

fn section(title: &str, content: &str, page: u32) -> ParsedElement {
    ParsedElement::Section {
        title: title.to_string(),
        content: content.to_string(),
        page,
    }
}

// ========================================================================
// all_text / by_pages
// ========================================================================

#[test]
fn test_all_text_joins_pages() {
    let pages = make_page_map(&[(1, "first"), (2, ""), (3, "third")]);
    let elements = parse(&pages, "all_text").unwrap();

    assert_eq!(
        elements,
        vec![ParsedElement::Text {
            content: "first\n\nthird".to_string(),
            page: 1,
        }]
    );
}

#[test]
fn test_all_text_empty_document() {
    let elements = parse_pages(&PageMap::default(), ParseMethod::AllText);
    assert_eq!(
        elements,
        vec![ParsedElement::Text {
            content: String::new(),
            page: 1,
        }]
    );
}

#[test]
fn test_by_pages_word_count() {
    let pages = make_page_map(&[(1, "这是 一页"), (4, "two words")]);
    let elements = parse(&pages, "by_pages").unwrap();

    assert_eq!(
        elements,
        vec![
            ParsedElement::Page {
                page_number: 1,
                content: "这是 一页".to_string(),
                word_count: 4,
            },
            ParsedElement::Page {
                page_number: 4,
                content: "two words".to_string(),
                word_count: 8,
            },
        ]
    );
}

// ========================================================================
// by_titles
// ========================================================================

#[test]
fn test_by_titles_closed_section_takes_next_title_page() {
    let pages = make_page_map(&[
        (1, "一、引言\n这是第一部分。"),
        (2, "二、结论\n这是第二部分。"),
    ]);
    let elements = parse(&pages, "by_titles").unwrap();

    assert_eq!(
        elements,
        vec![
            section("一、引言", "这是第一部分。", 2),
            section("二、结论", "这是第二部分。", 2),
        ]
    );
}

#[test]
fn test_by_titles_without_headings_is_one_preface() {
    let pages = make_page_map(&[
        (1, "plain text line\n\n  another line  "),
        (2, "more text on page two"),
    ]);
    let elements = parse_pages(&pages, ParseMethod::ByTitles);

    assert_eq!(
        elements,
        vec![section(
            PREFACE_TITLE,
            "plain text line\nanother line\nmore text on page two",
            2
        )]
    );
}

#[test]
fn test_by_titles_leading_content_becomes_preface() {
    let pages = make_page_map(&[
        (1, "封面说明\n版本 1.0"),
        (2, "第一章 总则\n本办法适用于全体员工。"),
        (3, "第二章 附则\n本办法自发布之日起施行。"),
    ]);
    let elements = parse_pages(&pages, ParseMethod::ByTitles);

    assert_eq!(
        elements,
        vec![
            section(PREFACE_TITLE, "封面说明\n版本 1.0", 2),
            section("第一章 总则", "本办法适用于全体员工。", 3),
            section("第二章 附则", "本办法自发布之日起施行。", 3),
        ]
    );
}

#[test]
fn test_by_titles_consecutive_headings_keep_empty_sections() {
    let pages = make_page_map(&[(1, "1. Overview\n2. Scope\nbody text")]);
    let elements = parse_pages(&pages, ParseMethod::ByTitles);

    assert_eq!(
        elements,
        vec![
            section("1. Overview", "", 1),
            section("2. Scope", "body text", 1),
        ]
    );
}

#[test]
fn test_by_titles_heading_at_start_has_no_preface() {
    let pages = make_page_map(&[(1, "A. First\nalpha"), (2, "beta")]);
    let elements = parse_pages(&pages, ParseMethod::ByTitles);

    assert_eq!(elements, vec![section("A. First", "alpha\nbeta", 2)]);
}

#[test]
fn test_by_titles_trailing_heading_without_body() {
    let pages = make_page_map(&[(1, "intro"), (2, ""), (3, "（一）结尾")]);
    let elements = parse_pages(&pages, ParseMethod::ByTitles);

    assert_eq!(
        elements,
        vec![
            section(PREFACE_TITLE, "intro", 3),
            section("（一）结尾", "", 3),
        ]
    );
}

#[test]
fn test_by_titles_empty_document() {
    assert!(parse_pages(&PageMap::default(), ParseMethod::ByTitles).is_empty());

    let blank = make_page_map(&[(1, "  \n\n")]);
    assert!(parse_pages(&blank, ParseMethod::ByTitles).is_empty());
}

// ========================================================================
// text_and_tables
// ========================================================================

#[test]
fn test_tab_line_is_table_row() {
    let pages = make_page_map(&[(1, "a\tb\tc")]);
    let elements = parse(&pages, "text_and_tables").unwrap();

    assert_eq!(
        elements,
        vec![ParsedElement::Table {
            rows: vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]],
            page: 1,
        }]
    );
}

#[test]
fn test_single_space_line_is_paragraph() {
    let pages = make_page_map(&[(1, "hello world")]);
    let elements = parse(&pages, "text_and_tables").unwrap();

    assert_eq!(
        elements,
        vec![ParsedElement::Paragraph {
            content: "hello world".to_string(),
            page: 1,
        }]
    );
}

#[test]
fn test_alternating_runs() {
    let text = "Quarterly report\nSummary follows\n\nItem  Q1  Q2\nRevenue\t10\t12\nNotes are below\n  Cost  5  6  ";
    let pages = make_page_map(&[(3, text)]);
    let elements = parse_pages(&pages, ParseMethod::TextAndTables);

    let kinds: Vec<&str> = elements.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec!["paragraph", "table", "paragraph", "table"]);

    assert_eq!(
        elements[0],
        ParsedElement::Paragraph {
            content: "Quarterly report\nSummary follows".to_string(),
            page: 3,
        }
    );
    match &elements[1] {
        ParsedElement::Table { rows, page } => {
            assert_eq!(*page, 3);
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0], vec!["Item", "Q1", "Q2"]);
            assert_eq!(rows[1], vec!["Revenue", "10", "12"]);
        }
        other => panic!("expected table, got {:?}", other),
    }
    match &elements[3] {
        ParsedElement::Table { rows, .. } => assert_eq!(rows[0], vec!["Cost", "5", "6"]),
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_runs_do_not_cross_pages() {
    let pages = make_page_map(&[(1, "x  y"), (2, "x  y"), (3, "plain"), (4, "plain")]);
    let elements = parse_pages(&pages, ParseMethod::TextAndTables);

    let pages_seen: Vec<u32> = elements.iter().map(|e| e.page()).collect();
    assert_eq!(pages_seen, vec![1, 2, 3, 4]);
}

// ========================================================================
// Dispatch and serialization
// ========================================================================

#[test]
fn test_unknown_method_rejected() {
    let pages = make_page_map(&[(1, "text")]);
    let err = parse(&pages, "by_sections").unwrap_err();
    assert_eq!(
        err,
        SegmentError::InvalidArgument("Unsupported parsing method: by_sections".to_string())
    );
    assert!(parse(&pages, "fixed_size").is_err());
}

#[test]
fn test_method_names() {
    for method in ParseMethod::ALL {
        assert_eq!(method.as_str().parse::<ParseMethod>().unwrap(), method);
    }
}

#[test]
fn test_element_wire_tags() {
    let text = serde_json::to_value(ParsedElement::Text {
        content: "x".to_string(),
        page: 1,
    })
    .unwrap();
    assert_eq!(text["type"], "Text");

    let table = serde_json::to_value(ParsedElement::Table {
        rows: vec![vec!["a".to_string()]],
        page: 2,
    })
    .unwrap();
    assert_eq!(
        table,
        serde_json::json!({ "type": "table", "rows": [["a"]], "page": 2 })
    );

    let page = serde_json::to_value(ParsedElement::Page {
        page_number: 3,
        content: "c".to_string(),
        word_count: 1,
    })
    .unwrap();
    assert_eq!(
        page,
        serde_json::json!({ "type": "page", "page_number": 3, "content": "c", "word_count": 1 })
    );
}

#[test]
fn test_element_deserializes_from_wire() {
    let element: ParsedElement = serde_json::from_str(
        r#"{"type": "section", "title": "前言", "content": "x", "page": 1}"#,
    )
    .unwrap();
    assert_eq!(element, section(PREFACE_TITLE, "x", 1));
    assert_eq!(element.kind(), "section");
}

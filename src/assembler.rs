use crate::chunker::{ChunkConfig, ChunkMethod, ChunkRecord, chunk_pages, chunk_pages_with};
use crate::error::SegmentError;
use crate::page_map::PageMap;
use crate::parser::{ParseMethod, ParsedElement, parse_pages};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

/// `chunking_method` recorded for the one-chunk-per-page document written
/// right after loading
pub const LOADED_METHOD: &str = "loaded";

/// Chunked document envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDocument {
    pub filename: String,
    pub total_chunks: usize,
    pub total_pages: usize,
    pub loading_method: String,
    pub chunking_method: String,
    pub timestamp: String,
    pub chunks: Vec<ChunkRecord>,
}

/// Parsed document envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDocument {
    pub metadata: ParseMetadata,
    pub content: Vec<ParsedElement>,
}

/// Document-level metadata of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseMetadata {
    pub filename: String,
    pub total_pages: usize,
    pub parsing_method: String,
    pub timestamp: String,
}

/// Per-call context: the page map of one document plus the facts about its
/// origin that end up in the envelope
///
/// Owned by the caller; nothing here outlives a single request.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    filename: String,
    loading_method: String,
    page_map: PageMap,
}

impl DocumentContext {
    pub fn new(filename: impl Into<String>, page_map: PageMap) -> Self {
        Self {
            filename: filename.into(),
            loading_method: String::new(),
            page_map,
        }
    }

    /// Rebuild the context from a previously loaded document
    pub fn from_loaded(document: &ChunkDocument) -> Result<Self, SegmentError> {
        let page_map = PageMap::from_chunk_document(document)?;
        Ok(Self::new(document.filename.clone(), page_map)
            .loading_method(document.loading_method.clone()))
    }

    /// Name of the extraction backend that produced the page map
    pub fn loading_method(mut self, method: impl Into<String>) -> Self {
        self.loading_method = method.into();
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn page_map(&self) -> &PageMap {
        &self.page_map
    }

    /// One chunk per page, recorded with `chunking_method = "loaded"`
    pub fn loaded(&self) -> ChunkDocument {
        let chunks = chunk_pages(&self.page_map, ChunkMethod::ByPages, None);
        self.chunk_envelope(LOADED_METHOD, chunks, now())
    }

    /// Chunk with a method given by name
    pub fn chunk(&self, method: &str, chunk_size: Option<usize>) -> Result<ChunkDocument, SegmentError> {
        let method: ChunkMethod = method.parse()?;
        let mut config = ChunkConfig::new();
        if let Some(size) = chunk_size {
            config = config.chunk_size(size);
        }
        Ok(self.chunk_with(method, &config))
    }

    pub fn chunk_with(&self, method: ChunkMethod, config: &ChunkConfig) -> ChunkDocument {
        let chunks = chunk_pages_with(&self.page_map, method, config);
        self.chunk_envelope(method.as_str(), chunks, now())
    }

    /// Parse with a method given by name
    pub fn parse(&self, method: &str) -> Result<ParseDocument, SegmentError> {
        let method: ParseMethod = method.parse()?;
        Ok(self.parse_with(method))
    }

    pub fn parse_with(&self, method: ParseMethod) -> ParseDocument {
        let content = parse_pages(&self.page_map, method);
        self.parse_envelope(method.as_str(), content, now())
    }

    fn chunk_envelope(&self, method: &str, chunks: Vec<ChunkRecord>, at: NaiveDateTime) -> ChunkDocument {
        info!(
            filename = %self.filename,
            method,
            chunks = chunks.len(),
            pages = self.page_map.len(),
            "assembled chunk document"
        );

        ChunkDocument {
            filename: self.filename.clone(),
            total_chunks: chunks.len(),
            total_pages: self.page_map.len(),
            loading_method: self.loading_method.clone(),
            chunking_method: method.to_string(),
            timestamp: format_timestamp(at),
            chunks,
        }
    }

    fn parse_envelope(
        &self,
        method: &str,
        content: Vec<ParsedElement>,
        at: NaiveDateTime,
    ) -> ParseDocument {
        info!(
            filename = %self.filename,
            method,
            elements = content.len(),
            pages = self.page_map.len(),
            "assembled parse document"
        );

        ParseDocument {
            metadata: ParseMetadata {
                filename: self.filename.clone(),
                total_pages: self.page_map.len(),
                parsing_method: method.to_string(),
                timestamp: format_timestamp(at),
            },
            content,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local time as ISO-8601 without offset, e.g. `2024-05-01T09:30:00.123456`
fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

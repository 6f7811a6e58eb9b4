use super::{
    ChunkId, ChunkMethod, DEFAULT_CHUNK_SIZE, RecursiveSplitter, SENTENCE_CHUNK_OVERLAP,
    SENTENCE_CHUNK_SIZE,
};
use crate::error::SegmentError;
use crate::page_map::{PageMap, count_words};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A chunk of page text ready for indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The text content of this chunk
    pub content: String,
    /// Positional metadata
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// 1-based, contiguous across the whole document
    pub chunk_id: ChunkId,
    /// Page the chunk came from
    pub page_number: u32,
    /// Decimal form of `page_number`
    pub page_range: String,
    /// Non-whitespace character count of `content`
    pub word_count: usize,
}

/// Size settings for the chunking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    chunk_size: usize,
    sentence_chunk_size: usize,
    sentence_overlap: usize,
}

impl ChunkConfig {
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            sentence_chunk_size: SENTENCE_CHUNK_SIZE,
            sentence_overlap: SENTENCE_CHUNK_OVERLAP,
        }
    }

    /// Character budget for `fixed_size`
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Target length for `by_sentences`
    pub fn sentence_chunk_size(mut self, size: usize) -> Self {
        self.sentence_chunk_size = size;
        self
    }

    /// Overlap for `by_sentences`
    pub fn sentence_overlap(mut self, overlap: usize) -> Self {
        self.sentence_overlap = overlap;
        self
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunk a page map with a method given by name
///
/// Fails with `InvalidArgument` when the method is not one of
/// `by_pages`, `fixed_size`, `by_paragraphs` or `by_sentences`.
pub fn chunk(
    page_map: &PageMap,
    method: &str,
    chunk_size: Option<usize>,
) -> Result<Vec<ChunkRecord>, SegmentError> {
    let method: ChunkMethod = method.parse()?;
    Ok(chunk_pages(page_map, method, chunk_size))
}

/// Chunk a page map using the default sizes, optionally overriding the
/// `fixed_size` budget
pub fn chunk_pages(
    page_map: &PageMap,
    method: ChunkMethod,
    chunk_size: Option<usize>,
) -> Vec<ChunkRecord> {
    let mut config = ChunkConfig::new();
    if let Some(size) = chunk_size {
        config = config.chunk_size(size);
    }
    chunk_pages_with(page_map, method, &config)
}

/// Chunk a page map with explicit size settings
///
/// Pages are never merged: every chunk belongs to exactly one page, and
/// chunk ids keep counting across page boundaries.
pub fn chunk_pages_with(
    page_map: &PageMap,
    method: ChunkMethod,
    config: &ChunkConfig,
) -> Vec<ChunkRecord> {
    debug!(%method, pages = page_map.len(), "chunking document");

    let mut records = Vec::new();

    for entry in page_map {
        let pieces = match method {
            ChunkMethod::ByPages => vec![entry.text.clone()],
            ChunkMethod::FixedSize => split_fixed_size(&entry.text, config.chunk_size),
            ChunkMethod::ByParagraphs => split_paragraphs(&entry.text),
            ChunkMethod::BySentences => {
                RecursiveSplitter::sentences(config.sentence_chunk_size, config.sentence_overlap)
                    .split_text(&entry.text)
            }
        };

        for content in pieces {
            let chunk_id = records.len() as ChunkId + 1;
            records.push(create_record(content, chunk_id, entry.page));
        }
    }

    debug!(%method, chunks = records.len(), "chunking complete");
    records
}

fn create_record(content: String, chunk_id: ChunkId, page: u32) -> ChunkRecord {
    let word_count = count_words(&content);

    ChunkRecord {
        content,
        metadata: ChunkMetadata {
            chunk_id,
            page_number: page,
            page_range: page.to_string(),
            word_count,
        },
    }
}

/// Greedily pack whitespace-separated tokens into pieces of at most
/// `chunk_size` characters. A token longer than the budget gets a piece of
/// its own and is never broken.
fn split_fixed_size(text: &str, chunk_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in text.split_whitespace() {
        let token_len = token.chars().count();

        if current_len + token_len + 1 <= chunk_size {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(token);
            current_len += token_len;
        } else {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Split on a newline followed by a single space, the paragraph break that
/// PDF text extraction leaves behind
fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

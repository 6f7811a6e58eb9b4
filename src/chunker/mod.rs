mod method;
mod recursive;
mod splitter;


pub use method::ChunkMethod;
pub use recursive::{RecursiveSplitter, SENTENCE_SEPARATORS};
pub use splitter::{ChunkConfig, ChunkMetadata, ChunkRecord, chunk, chunk_pages, chunk_pages_with};

/// Sequential chunk identifier, starting at 1 for each document
pub type ChunkId = u32;

/// Character budget for `fixed_size` when the caller gives none
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Target chunk length for `by_sentences`
pub const SENTENCE_CHUNK_SIZE: usize = 1000;

/// Characters carried from one sentence chunk into the next
pub const SENTENCE_CHUNK_OVERLAP: usize = 200;

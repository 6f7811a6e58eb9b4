// Public API exports
pub mod assembler;
pub mod chunker;
pub mod error;
pub mod page_map;
pub mod parser;

// Re-export main types for convenience
pub use error::SegmentError;
pub use page_map::{PageMap, PageMapEntry, count_words};

pub use chunker::{
    ChunkConfig, ChunkId, ChunkMetadata, ChunkMethod, ChunkRecord, DEFAULT_CHUNK_SIZE,
    RecursiveSplitter, chunk, chunk_pages, chunk_pages_with,
};

pub use parser::{HeadingKind, PREFACE_TITLE, ParseMethod, ParsedElement, parse, parse_pages};

pub use assembler::{ChunkDocument, DocumentContext, ParseDocument, ParseMetadata};

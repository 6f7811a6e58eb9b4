use std::collections::VecDeque;
use tracing::warn;

/// Sentence boundaries in priority order: full-width CJK terminators, Latin
/// terminators, then line breaks and finally single spaces
pub const SENTENCE_SEPARATORS: [&str; 8] = ["。", "！", "？", ".", "!", "?", "\n", " "];

/// Boundary-seeking splitter that prefers earlier separators and only falls
/// back to later ones for pieces that are still too long
///
/// Lengths are measured in characters, not bytes.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter<'a> {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &'a [&'a str],
}

impl<'a> RecursiveSplitter<'a> {
    pub fn new(chunk_size: usize, chunk_overlap: usize, separators: &'a [&'a str]) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            separators,
        }
    }

    /// Splitter over [`SENTENCE_SEPARATORS`]
    pub fn sentences(chunk_size: usize, chunk_overlap: usize) -> RecursiveSplitter<'static> {
        RecursiveSplitter::new(chunk_size, chunk_overlap, &SENTENCE_SEPARATORS)
    }

    /// Split text into trimmed, non-empty chunks
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_with(text, self.separators)
    }

    fn split_with(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let (pieces, fallbacks) = match pick_separator(text, separators) {
            Some((separator, fallbacks)) => (split_keep_separator(text, separator), fallbacks),
            None => (vec![text], &[][..]),
        };

        let mut chunks = Vec::new();
        let mut fitting: Vec<&str> = Vec::new();

        for piece in pieces {
            if char_len(piece) < self.chunk_size {
                fitting.push(piece);
                continue;
            }

            // Merge what fits so far before handling the oversized piece
            if !fitting.is_empty() {
                chunks.extend(self.merge(&fitting));
                fitting.clear();
            }

            if fallbacks.is_empty() {
                warn!(
                    length = char_len(piece),
                    target = self.chunk_size,
                    "no separator left to split piece, emitting it whole"
                );
                chunks.push(piece.to_string());
            } else {
                chunks.extend(self.split_with(piece, fallbacks));
            }
        }

        if !fitting.is_empty() {
            chunks.extend(self.merge(&fitting));
        }

        chunks
    }

    /// Pack pieces into chunks of at most `chunk_size` characters, carrying
    /// up to `chunk_overlap` trailing characters into the next chunk
    fn merge(&self, pieces: &[&str]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0;

        for &piece in pieces {
            let len = char_len(piece);

            if total + len > self.chunk_size && !window.is_empty() {
                if let Some(chunk) = join_window(&window) {
                    chunks.push(chunk);
                }

                while total > self.chunk_overlap || (total + len > self.chunk_size && total > 0) {
                    match window.pop_front() {
                        Some((_, dropped)) => total -= dropped,
                        None => break,
                    }
                }
            }

            window.push_back((piece, len));
            total += len;
        }

        if let Some(chunk) = join_window(&window) {
            chunks.push(chunk);
        }

        chunks
    }
}

/// First separator present in the text, plus the separators after it
///
/// When none occurs the last separator is used with no fallbacks left.
fn pick_separator<'s>(text: &str, separators: &'s [&'s str]) -> Option<(&'s str, &'s [&'s str])> {
    for (i, &separator) in separators.iter().enumerate() {
        if separator.is_empty() || text.contains(separator) {
            return Some((separator, &separators[i + 1..]));
        }
    }

    separators.last().map(|last| (*last, &[][..]))
}

/// Split so that each separator stays attached to the start of the piece
/// that follows it. Empty pieces are dropped.
fn split_keep_separator<'t>(text: &'t str, separator: &str) -> Vec<&'t str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices(separator) {
        if idx > start {
            pieces.push(&text[start..idx]);
        }
        start = idx;
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

fn join_window(window: &VecDeque<(&str, usize)>) -> Option<String> {
    let joined: String = window.iter().map(|(piece, _)| *piece).collect();
    let trimmed = joined.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

//! Chunking and file naming.
//!
//! Routes are packed greedily in input order: a chunk closes when it holds
//! `max_urls` routes or when the next route would push its estimated size
//! past `max_bytes`. A route larger than the byte budget on its own still
//! gets a chunk rather than being dropped.

use crate::route::ValidatedRoute;

/// Per-file ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLimits {
    pub max_urls: usize,
    pub max_bytes: usize,
}

impl SplitLimits {
    /// sitemaps.org limits.
    pub const PROTOCOL_MAX_URLS: usize = 50_000;
    pub const PROTOCOL_MAX_BYTES: usize = 50 * 1024 * 1024;
}

impl Default for SplitLimits {
    fn default() -> Self {
        Self {
            max_urls: Self::PROTOCOL_MAX_URLS,
            max_bytes: Self::PROTOCOL_MAX_BYTES,
        }
    }
}

/// An ordered slice of one sitemap set, numbered from zero.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub index: usize,
    pub routes: Vec<ValidatedRoute>,
}

/// Split `routes` into chunks.
///
/// `overhead` is the fixed size of an empty document and `measure` the size
/// of one entry. An empty input yields one empty chunk so every set still
/// produces a file.
pub fn split(
    routes: Vec<ValidatedRoute>,
    limits: SplitLimits,
    overhead: usize,
    measure: impl Fn(&ValidatedRoute) -> usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<ValidatedRoute> = Vec::new();
    let mut bytes = overhead;

    for route in routes {
        let len = measure(&route);
        if !current.is_empty()
            && (current.len() >= limits.max_urls || bytes + len > limits.max_bytes)
        {
            chunks.push(Chunk {
                index: chunks.len(),
                routes: std::mem::take(&mut current),
            });
            bytes = overhead;
        }
        bytes += len;
        current.push(route);
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(Chunk {
            index: chunks.len(),
            routes: current,
        });
    }
    chunks
}

// ============================================================================
// Naming
// ============================================================================

/// Output file names for a whole build.
#[derive(Debug, Clone, Copy)]
pub struct FileNaming<'a> {
    base_filename: &'a str,
    stem: &'a str,
    indexed: bool,
}

impl<'a> FileNaming<'a> {
    /// `set_chunks` holds, per sitemap set, its name and chunk count.
    ///
    /// An index is needed when there is more than one chunk overall or more
    /// than one named set.
    pub fn new(base_filename: &'a str, set_chunks: &[(Option<&str>, usize)]) -> Self {
        let total: usize = set_chunks.iter().map(|(_, n)| n).sum();
        let named = set_chunks.iter().filter(|(name, _)| name.is_some()).count();
        Self {
            base_filename,
            stem: base_filename.strip_suffix(".xml").unwrap_or(base_filename),
            indexed: total > 1 || named > 1,
        }
    }

    pub fn needs_index(&self) -> bool {
        self.indexed
    }

    /// File name of chunk `index` out of `count` in set `name`.
    pub fn chunk(&self, name: Option<&str>, index: usize, count: usize) -> String {
        let stem = self.stem;
        match (self.indexed, name) {
            (false, _) => self.base_filename.to_string(),
            (true, None) => format!("{stem}-{index}.xml"),
            (true, Some(name)) if count == 1 => format!("{stem}-{name}.xml"),
            (true, Some(name)) => format!("{stem}-{name}-{index}.xml"),
        }
    }

    pub fn index(&self) -> Option<String> {
        self.indexed.then(|| format!("{}-index.xml", self.stem))
    }
}

//! Memoized tokenization keyed by content fingerprint.
//!
//! Re-highlighting unchanged text is pure waste, so callers that redraw often
//! keep a small cache. The cache is a plain owned value with no locking; share
//! it behind whatever synchronization the caller already has.

use lexlight_syntax::{Language, Span, tokenize};
use lru::LruCache;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::NonZeroUsize;

/// Identity of a highlighting request: a hash of the text plus the language.
///
/// The length is kept alongside the hash so that collisions additionally
/// need equal sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hash: u64,
    len: usize,
    language: Language,
}

impl Fingerprint {
    pub fn new(text: &str, language: Language) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        Self {
            hash: hasher.finish(),
            len: text.len(),
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Bounded least-recently-used map from fingerprints to span lists.
#[derive(Debug)]
pub struct HighlightCache {
    /// `None` when the capacity is zero
    entries: Option<LruCache<Fingerprint, Vec<Span>>>,
    hits: u64,
    misses: u64,
}

impl HighlightCache {
    /// Creates a cache holding at most `capacity` span lists. Zero disables
    /// caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.cap().get())
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(hits, misses)` since creation or the last [`clear`](Self::clear).
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        if let Some(entries) = &mut self.entries {
            entries.clear();
        }
        self.hits = 0;
        self.misses = 0;
    }

    /// Returns cached spans and marks them as recently used.
    pub fn get(&mut self, fingerprint: &Fingerprint) -> Option<&[Span]> {
        self.entries.as_mut()?.get(fingerprint).map(Vec::as_slice)
    }

    /// Returns cached spans without touching the recency order.
    pub fn peek(&self, fingerprint: &Fingerprint) -> Option<&[Span]> {
        self.entries.as_ref()?.peek(fingerprint).map(Vec::as_slice)
    }

    /// Stores spans, evicting the least recently used entry when full.
    pub fn insert(&mut self, fingerprint: Fingerprint, spans: Vec<Span>) {
        let Some(entries) = &mut self.entries else {
            return;
        };
        if let Some((evicted, _)) = entries.push(fingerprint, spans) {
            if evicted != fingerprint {
                tracing::trace!(language = %evicted.language, "evicted cached spans");
            }
        }
    }

    /// Returns the spans for `text`, tokenizing only on a miss.
    pub fn spans(&mut self, text: &str, language: Language) -> Vec<Span> {
        let fingerprint = Fingerprint::new(text, language);
        if let Some(spans) = self.get(&fingerprint) {
            let spans = spans.to_vec();
            self.hits += 1;
            return spans;
        }

        self.misses += 1;
        let spans = tokenize(text, language);
        self.insert(fingerprint, spans.clone());
        spans
    }
}

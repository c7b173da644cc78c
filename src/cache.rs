//! Tokenized formula caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::tokenizer::{self, Token};

/// Global cache for tokenized formulas.
static CACHE: Mutex<Option<LruCache<String, Vec<Token>>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Tokenize a formula with default options, reusing the cached stream when
/// the same formula text was seen recently. Worksheets repeat the same
/// formula across many cells, so this trades a clone for a rescan.
pub fn tokenize_cached(formula: &str) -> Vec<Token> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache =
        cache_guard.get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(tokens) = cache.get(formula) {
        return tokens.clone();
    }

    let tokens = tokenizer::tokenize(formula);
    cache.put(formula.to_string(), tokens.clone());
    tokens
}

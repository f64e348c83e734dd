//! First-wins token aggregation.

use rustc_hash::FxHashSet;

use super::types::DesignToken;

/// Collects tokens from every source, keeping the first token per name.
#[derive(Debug, Default)]
pub struct TokenAggregator {
    seen: FxHashSet<String>,
    tokens: Vec<DesignToken>,
    raw_count: usize,
}

impl TokenAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Returns false if a token with the same name was already kept.
    pub fn push(&mut self, token: DesignToken) -> bool {
        self.raw_count += 1;
        if !self.seen.insert(token.name.clone()) {
            tracing::trace!(name = %token.name, source = %token.source.path, "duplicate token discarded");
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = DesignToken>) {
        for token in tokens {
            self.push(token);
        }
    }

    /// Tokens offered, including discarded duplicates.
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    pub fn duplicates_discarded(&self) -> usize {
        self.raw_count - self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Unique tokens in first-seen order.
    pub fn finish(self) -> Vec<DesignToken> {
        self.tokens
    }
}

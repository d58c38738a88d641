//! Keyed cache of fetched query results.
//!
//! DESIGN
//! ======
//! A plain map from [`QueryKey`] (entity kind + scope identifiers) to
//! [`CacheEntry`] (data, stale flag, generation). Nothing here is reactive;
//! `state::query` wraps it in a signal for components.
//!
//! Invalidation is prefix based: invalidating `comments` marks every
//! `comments/*` entry stale, invalidating `comments/P1` only that post's
//! lists. Each invalidation bumps the entry's generation, and a fetch that
//! started under an older generation lands stale, so a mutation that races an
//! in-flight read still forces one more read.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

use crate::net::types::CommentScope;

/// Entity kind, the first component of every key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Posts,
    Post,
    Comments,
    CommentCount,
    Likes,
    Profile,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub scope: Vec<String>,
}

impl QueryKey {
    pub fn new(kind: QueryKind) -> Self {
        Self { kind, scope: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.scope.push(segment.into());
        self
    }

    /// Feed list; `refresh` is the page's refresh-trigger counter.
    pub fn posts(refresh: u64) -> Self {
        Self::new(QueryKind::Posts).with(refresh.to_string())
    }

    pub fn post(post_id: &str) -> Self {
        Self::new(QueryKind::Post).with(post_id)
    }

    /// Prefix covering every list for `scope`, whatever its refresh value.
    pub fn comments_scope(scope: &CommentScope) -> Self {
        Self::new(QueryKind::Comments).with(scope.cache_segment())
    }

    pub fn comments(scope: &CommentScope, refresh: u64) -> Self {
        Self::comments_scope(scope).with(refresh.to_string())
    }

    pub fn comment_count(post_id: &str) -> Self {
        Self::new(QueryKind::CommentCount).with(post_id)
    }

    pub fn likes(post_id: &str) -> Self {
        Self::new(QueryKind::Likes).with(post_id)
    }

    pub fn profile(user_id: &str) -> Self {
        Self::new(QueryKind::Profile).with(user_id)
    }

    /// Whether `self` falls under `prefix`.
    pub fn matches(&self, prefix: &QueryKey) -> bool {
        self.kind == prefix.kind && self.scope.starts_with(&prefix.scope)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry<V> {
    /// Last successful result, if any fetch has completed.
    pub data: Option<V>,
    pub stale: bool,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, CacheEntry<V>>,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<V> QueryCache<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &QueryKey) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Cached data, only while the entry is fresh.
    pub fn fresh(&self, key: &QueryKey) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|e| !e.stale)
            .and_then(|e| e.data.as_ref())
    }

    /// Generation of `key`; zero for keys never seen.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.entries.get(key).map_or(0, |e| e.generation)
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_none_or(|e| e.stale || e.data.is_none())
    }

    /// Register a fetch for `key` and return the generation it started under.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> u64 {
        self.entries
            .entry(key.clone())
            .or_insert(CacheEntry { data: None, stale: true, generation: 0 })
            .generation
    }

    /// Store a fetch result. It is fresh only if no invalidation touched the
    /// key since `started_generation`.
    pub fn complete_fetch(&mut self, key: &QueryKey, data: V, started_generation: u64) {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert(CacheEntry { data: None, stale: true, generation: started_generation });
        entry.stale = entry.generation != started_generation;
        entry.data = Some(data);
    }

    /// Mark every entry under `prefix` stale and bump its generation.
    #[must_use]
    pub fn invalidate(mut self, prefix: &QueryKey) -> Self {
        for (key, entry) in &mut self.entries {
            if key.matches(prefix) {
                entry.stale = true;
                entry.generation += 1;
            }
        }
        self
    }
}

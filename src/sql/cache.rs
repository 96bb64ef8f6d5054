use crate::config::config;
use crate::error::Result;
use crate::sql::normalizer::{NormalizedSql, normalize};
use crate::trace;
use std::sync::{Arc, OnceLock};

/// Memoizes [`normalize`] results keyed by the raw statement text.
///
/// Normalization is a pure function of the text, so entries never invalidate;
/// the cache is bounded and evicts cold statements. Failed normalizations are
/// not cached — a statement that fails to lex is a caller bug that should
/// surface every time.
pub struct StatementCache {
    cache: moka::sync::Cache<String, Arc<NormalizedSql>>,
}

impl StatementCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: moka::sync::Cache::new(capacity),
        }
    }

    pub fn normalized(&self, sql: &str) -> Result<Arc<NormalizedSql>> {
        if let Some(hit) = self.cache.get(sql) {
            trace!("statement cache hit");
            return Ok(hit);
        }
        let parsed = Arc::new(normalize(sql)?);
        // a concurrent miss may compute the same pure value; last insert wins
        self.cache.insert(sql.to_string(), parsed.clone());
        Ok(parsed)
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

/// Process-wide cache instance sized from configuration.
pub fn statement_cache() -> &'static StatementCache {
    static CACHE: OnceLock<StatementCache> = OnceLock::new();
    CACHE.get_or_init(|| StatementCache::new(config().statement_cache_capacity))
}

/// Cache adapters for memoizing inventory command output
mod file_result_cache;
mod noop_result_cache;

pub use file_result_cache::{CacheEntry, FileResultCache, DEFAULT_CACHE_DIR, DEFAULT_CACHE_TTL};
pub use noop_result_cache::NoopResultCache;

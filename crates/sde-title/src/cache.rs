//! Memoized page title lookups.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use crate::fetch::TitleFetcher;

/// Default maximum number of cached titles.
pub const DEFAULT_CAPACITY: usize = 8192;

/// Memoizing front for a [`TitleFetcher`], keyed by URL.
///
/// Successful lookups are cached with least-recently-used eviction once
/// `capacity` entries are held. Failed lookups are never cached, so the next
/// call for the same URL retries the fetch.
///
/// The cache is an explicit handle: create one per build (or per worker) and
/// pass it to whatever needs titles. It is `Send + Sync`, the lock is never
/// held while fetching.
///
/// # Example
///
/// ```
/// use sde_title::{TitleCache, TitleError, TitleFetcher};
///
/// struct Offline;
///
/// impl TitleFetcher for Offline {
///     fn fetch_title(&self, _url: &str) -> Result<String, TitleError> {
///         Err(TitleError::MissingTitle)
///     }
/// }
///
/// let cache = TitleCache::new(Offline);
/// cache.seed("https://example.org", "Example Domain");
///
/// assert_eq!(cache.get_title("https://example.org"), "Example Domain");
/// assert_eq!(cache.get_title("https://bad.invalid"), "https://bad.invalid");
/// ```
pub struct TitleCache {
    fetcher: Box<dyn TitleFetcher>,
    capacity: usize,
    state: Mutex<LruState>,
}

#[derive(Default)]
struct LruState {
    entries: HashMap<String, CachedTitle>,
    /// Last use tick to URL, oldest first.
    recency: BTreeMap<u64, String>,
    clock: u64,
}

struct CachedTitle {
    title: String,
    last_used: u64,
}

impl LruState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn touch(&mut self, url: &str) -> Option<String> {
        let clock = self.tick();
        let entry = self.entries.get_mut(url)?;
        let key = self.recency.remove(&entry.last_used)?;
        entry.last_used = clock;
        self.recency.insert(clock, key);
        Some(entry.title.clone())
    }

    fn insert(&mut self, url: &str, title: String, capacity: usize) {
        let clock = self.tick();
        if let Some(previous) = self.entries.remove(url) {
            self.recency.remove(&previous.last_used);
        } else if self.entries.len() >= capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            url.to_owned(),
            CachedTitle {
                title,
                last_used: clock,
            },
        );
        self.recency.insert(clock, url.to_owned());
    }

    fn evict_oldest(&mut self) {
        if let Some((_, url)) = self.recency.pop_first() {
            self.entries.remove(&url);
        }
    }
}

impl TitleCache {
    /// Create a cache with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new(fetcher: impl TitleFetcher + 'static) -> Self {
        Self::with_capacity(fetcher, DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` titles (minimum 1).
    #[must_use]
    pub fn with_capacity(fetcher: impl TitleFetcher + 'static, capacity: usize) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            capacity: capacity.max(1),
            state: Mutex::new(LruState::default()),
        }
    }

    /// Return the page title for `url`, falling back to `url` itself.
    ///
    /// Only `http://` and `https://` URLs are fetched. Any failure is logged
    /// and degrades to the URL; it is not remembered.
    pub fn get_title(&self, url: &str) -> String {
        if !is_fetchable(url) {
            return url.to_owned();
        }

        if let Some(title) = self.lock().touch(url) {
            tracing::debug!(url, "title cache hit");
            return title;
        }

        match self.fetcher.fetch_title(url) {
            Ok(title) => {
                self.lock().insert(url, title.clone(), self.capacity);
                title
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Unable to look up page title");
                url.to_owned()
            }
        }
    }

    /// Store a known title without fetching.
    pub fn seed(&self, url: &str, title: impl Into<String>) {
        self.lock().insert(url, title.into(), self.capacity);
    }

    /// Whether a title for `url` is cached.
    pub fn contains(&self, url: &str) -> bool {
        self.lock().entries.contains_key(url)
    }

    /// Number of cached titles.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache holds no titles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Whether `url` uses a scheme titles can be fetched for.
fn is_fetchable(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

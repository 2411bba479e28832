//! Page title lookup for URL references.
//!
//! When an author links a URL without giving it a label, the label is taken
//! from the linked page's `<title>`. Fetching is slow and the same URL tends
//! to show up many times per build, so lookups go through a [`TitleCache`].
//!
//! - [`TitleFetcher`]: the expensive lookup (an HTTP fetch in production)
//! - [`HttpTitleFetcher`]: `ureq`-based fetcher with `<title>` extraction
//! - [`TitleCache`]: LRU memoization that never caches failures
//!
//! Lookups never fail from the caller's point of view: any error degrades to
//! the URL itself.

mod cache;
mod extract;
mod fetch;

pub use cache::{DEFAULT_CAPACITY, TitleCache};
pub use extract::extract_title;
pub use fetch::{HttpTitleFetcher, TitleError, TitleFetcher};

//! Page walking for list endpoints.

use std::future::Future;

use tracing::warn;

use crate::errors::Error;

/// Controls how list endpoints walk a paginated collection.
///
/// The defaults request 50 items per page and give up after 25 pages,
/// bounding any single listing at 1250 items. A fetch error ends the
/// walk and returns whatever accumulated so far; opt into
/// [`propagate_errors`](Pagination::propagate_errors) to surface it
/// instead.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    page_size: u32,
    max_pages: u32,
    propagate_errors: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page_size: 50,
            max_pages: 25,
            propagate_errors: false,
        }
    }
}

impl Pagination {
    /// Creates a pagination policy. Both values are clamped to at least 1.
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Pagination {
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
            propagate_errors: false,
        }
    }

    /// Items requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Upper bound on the number of pages fetched.
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Whether fetch errors abort the walk instead of being swallowed.
    pub fn propagate_errors(mut self, propagate: bool) -> Self {
        self.propagate_errors = propagate;
        self
    }

    /// Walks pages 1..=max_pages, calling `fetch_page(page, limit)` for
    /// each, and concatenates the results.
    ///
    /// The walk stops early on the first empty page. By default a fetch
    /// error also stops the walk, logging a warning and returning the
    /// items gathered so far.
    pub async fn fetch_all<T, F, Fut>(&self, mut fetch_page: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(u32, u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>, Error>>,
    {
        let mut items = Vec::new();
        for page in 1..=self.max_pages {
            let batch = match fetch_page(page, self.page_size).await {
                Ok(batch) => batch,
                Err(e) => {
                    if self.propagate_errors {
                        return Err(e);
                    }
                    warn!(page, error = %e, "stopping page walk after a failed fetch");
                    break;
                }
            };

            if batch.is_empty() {
                break;
            }
            items.extend(batch);
        }

        Ok(items)
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;

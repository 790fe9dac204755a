//! Cursor-based pagination over the remote list API
//!
//! Follows the opaque continuation cursor until either the caller's result
//! cap or the server's end-of-results signal is reached. Every page fetch
//! passes through the resilient invoker; the paginator itself performs no
//! retry logic of its own.

use std::sync::Arc;

use tracing::{debug, instrument};

use store_traits::{ListRequest, ResourceRef, ResourceStore, Result, RetryPolicy};

use crate::retry;

/// Drives a sequence of list requests to completion.
pub struct Paginator {
    store: Arc<dyn ResourceStore>,
    policy: RetryPolicy,
}

impl Paginator {
    pub fn new(store: Arc<dyn ResourceStore>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// Collect up to `max_results` resources matching `request`, in server
    /// order. `max_results == 0` means unbounded: collect until the server
    /// reports end-of-results.
    ///
    /// The per-page size hint is lowered to the remaining need when bounded,
    /// so the final page is never larger than requested. An empty page with
    /// a present cursor is not end-of-results; paging continues until the
    /// cursor disappears.
    #[instrument(skip(self, request), fields(query = ?request.query, max_results))]
    pub async fn collect(
        &self,
        request: &ListRequest,
        max_results: usize,
    ) -> Result<Vec<ResourceRef>> {
        let mut items: Vec<ResourceRef> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let hint = if max_results > 0 {
                let remaining = u32::try_from(max_results - items.len()).unwrap_or(u32::MAX);
                request.page_size.min(remaining).max(1)
            } else {
                request.page_size
            };
            let page_request = request.clone().page_size(hint);

            let page = retry::invoke(&self.policy, || {
                self.store.list(&page_request, cursor.as_deref())
            })
            .await?;

            debug!(
                fetched = page.items.len(),
                total = items.len() + page.items.len(),
                has_cursor = page.next_cursor.is_some(),
                "Fetched listing page"
            );

            items.extend(page.items);

            if max_results > 0 && items.len() >= max_results {
                items.truncate(max_results);
                return Ok(items);
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(items),
            }
        }
    }
}

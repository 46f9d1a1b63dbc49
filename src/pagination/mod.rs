//! Pagination controller for the index page
//!
//! Owns the loaded posts and the next-page cursor. `load_more` follows the
//! cursor URL the service handed out, appends the derived posts and stores
//! the response's own cursor. On any failure the state is left exactly as
//! it was.

use crate::cms::CmsClient;
use crate::content::{Post, PostPagination};
use crate::error::Result;
use crate::i18n::Locale;

/// Owned pagination state with an explicit load-more operation
#[derive(Debug, Clone)]
pub struct PaginationController {
    state: PostPagination,
    date_format: String,
    locale: &'static Locale,
}

impl PaginationController {
    /// Create a controller seeded with the initial page
    pub fn new(initial: PostPagination, date_format: &str, locale: &'static Locale) -> Self {
        Self {
            state: initial,
            date_format: date_format.to_string(),
            locale,
        }
    }

    /// The loaded posts, in display order
    pub fn posts(&self) -> &[Post] {
        &self.state.results
    }

    /// The stored next-page cursor
    pub fn next_page(&self) -> Option<&str> {
        self.state.next_page.as_deref()
    }

    /// Whether a further page is available
    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Borrow the whole pagination state
    pub fn state(&self) -> &PostPagination {
        &self.state
    }

    /// Consume the controller, returning its state
    pub fn into_state(self) -> PostPagination {
        self.state
    }

    /// Fetch the next page and append its posts
    ///
    /// Follows the stored cursor verbatim, appends the derived posts after
    /// the existing ones and replaces the cursor with the response's own
    /// value, which may be absent and end the pagination. Returns how many
    /// posts were appended; zero when no cursor is stored.
    ///
    /// Exclusive access through `&mut self` means at most one fetch per
    /// controller can be in flight. State is only touched after the whole
    /// page has been fetched and decoded, so a failure changes nothing.
    pub async fn load_more(&mut self, client: &CmsClient) -> Result<usize> {
        let url = match self.state.next_page.clone() {
            Some(url) if !url.is_empty() => url,
            _ => return Ok(0),
        };

        let page = client.fetch_page(&url).await?;
        let fetched = PostPagination::from_page(&page, &self.date_format, self.locale);

        let appended = fetched.results.len();
        self.state.results.extend(fetched.results);
        self.state.next_page = fetched.next_page;

        tracing::debug!("Loaded {} more posts", appended);
        Ok(appended)
    }
}

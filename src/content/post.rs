//! Post display models

use serde::{Deserialize, Serialize};

use crate::cms::{DocumentPage, RawDocument};
use crate::helpers;
use crate::i18n::Locale;

/// The displayed fields of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostData {
    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Author name
    pub author: String,
}

/// A post ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque document id, used as the entry's link target
    pub uid: Option<String>,

    /// Formatted display date
    ///
    /// Derived from the raw record's `last_publication_date`; the field
    /// keeps its historical name so rendered pages and serialized payloads
    /// stay stable.
    pub first_publication_date: Option<String>,

    /// Displayed fields
    pub data: PostData,
}

impl Post {
    /// Derive a display post from a raw service document
    ///
    /// This is the one raw-to-display mapping in the crate; the initial
    /// server-side load and every next-page fetch go through it.
    pub fn from_raw(raw: &RawDocument, date_format: &str, locale: &Locale) -> Self {
        let first_publication_date = raw
            .last_publication_date
            .as_deref()
            .and_then(|value| helpers::format_publication_date(value, date_format, locale));

        Self {
            uid: raw.uid.clone(),
            first_publication_date,
            data: PostData {
                title: raw.data.title.clone(),
                subtitle: raw.data.subtitle.clone(),
                author: raw.data.author.clone(),
            },
        }
    }
}

/// The pagination state behind the index page
///
/// `results` holds every loaded post in display order; `next_page` is the
/// cursor URL for the following page, absent once the service reports the
/// end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPagination {
    pub results: Vec<Post>,
    pub next_page: Option<String>,
}

impl PostPagination {
    /// Derive a display page from a raw result page
    pub fn from_page(page: &DocumentPage, date_format: &str, locale: &Locale) -> Self {
        Self {
            results: page
                .results
                .iter()
                .map(|raw| Post::from_raw(raw, date_format, locale))
                .collect(),
            next_page: page.next_page.clone(),
        }
    }

    /// Whether the page should offer a "load more" control
    pub fn has_more(&self) -> bool {
        self.next_page
            .as_deref()
            .map(|url| !url.is_empty())
            .unwrap_or(false)
    }
}

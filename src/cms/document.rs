//! Wire types for the content service responses

use serde::{Deserialize, Serialize};

/// The fetched fields of a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocumentData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// A document exactly as the service returns it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    pub last_publication_date: Option<String>,
    pub data: RawDocumentData,
}

/// One page of query results
///
/// `next_page` is a complete URL handed out by the service; it is followed
/// verbatim, never rebuilt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentPage {
    pub results: Vec<RawDocument>,
    pub next_page: Option<String>,
}

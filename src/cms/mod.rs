//! Client and wire types for the headless content service

mod client;
mod document;

pub use client::CmsClient;
pub use document::{DocumentPage, RawDocument, RawDocumentData};

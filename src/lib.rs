//! folhetim: a blog front page for headless CMS backends
//!
//! This crate serves a paginated blog index backed by a Prismic-style
//! content service. The first page of posts is rendered server-side with
//! embedded Tera templates and cached, while the load-more flow walks the
//! service's own pagination cursors.

pub mod cache;
pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod pagination;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// Configuration file name looked up in the base directory
const CONFIG_FILE: &str = "folhetim.yml";

/// The main application
#[derive(Clone)]
pub struct Folhetim {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Folhetim {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }
}

//! Site configuration (folhetim.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Content service
    pub api_url: String,
    pub access_token: Option<String>,
    pub content_type: String,
    pub fields: Vec<String>,
    pub page_size: usize,

    // Index page
    pub date_format: String,
    pub load_more_label: String,

    // Regeneration
    pub revalidate: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "folhetim".to_string(),
            description: String::new(),
            language: "pt-BR".to_string(),

            api_url: String::new(),
            access_token: None,
            content_type: "posts".to_string(),
            fields: vec![
                "title".to_string(),
                "subtitle".to_string(),
                "author".to_string(),
            ],
            page_size: 1,

            date_format: "dd MMM yyyy".to_string(),
            load_more_label: "Carregar mais posts".to_string(),

            revalidate: 1800,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

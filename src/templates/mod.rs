//! Built-in index page templates using the Tera template engine
//!
//! The page shell, the per-post entry markup and the style sheet are all
//! embedded in the binary; there is no theme directory to deploy alongside
//! the server.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::PostPagination;

/// Embedded style sheet, served at /styles.css
pub const STYLES: &str = include_str!("folha/styles.css");

/// Site fields exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl SiteData {
    fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
        }
    }
}

/// Template renderer with the embedded page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", include_str!("folha/index.html")),
            ("error.html", include_str!("folha/error.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the index page for a loaded pagination state
    ///
    /// One entry per post, in order. The "load more" control is emitted iff
    /// the state carries a next-page cursor.
    pub fn render_index(
        &self,
        config: &SiteConfig,
        pagination: &PostPagination,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        context.insert("posts", &pagination.results);
        context.insert("next_page", &pagination.next_page);
        context.insert("load_more_label", &config.load_more_label);
        self.render("index.html", &context)
    }

    /// Render the plain error page
    pub fn render_error(&self, config: &SiteConfig, message: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(config));
        context.insert("message", message);
        self.render("error.html", &context)
    }
}

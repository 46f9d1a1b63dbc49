//! Render the index page to static files

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cms::CmsClient;
use crate::content::PostPagination;
use crate::i18n::Locale;
use crate::templates::{TemplateRenderer, STYLES};
use crate::Folhetim;

/// Fetch the first page of posts and write `index.html` and `styles.css`
/// into the output directory.
pub async fn run(folhetim: &Folhetim, output_dir: &Path) -> Result<()> {
    let start = Instant::now();

    let config = &folhetim.config;
    let client = CmsClient::new(config)?;
    let renderer = TemplateRenderer::new()?;

    let page = client
        .query_documents(&config.content_type, &config.fields, config.page_size)
        .await?;
    let locale = Locale::for_tag(&config.language);
    let pagination = PostPagination::from_page(&page, &config.date_format, locale);

    tracing::info!("Loaded {} posts", pagination.results.len());

    let html = renderer.render_index(config, &pagination)?;

    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), html)?;
    fs::write(output_dir.join("styles.css"), STYLES)?;

    let duration = start.elapsed();
    tracing::info!("Rendered in {:.2}s", duration.as_secs_f64());

    Ok(())
}

//! Fetch posts and list them on the terminal

use anyhow::Result;

use crate::cms::CmsClient;
use crate::content::PostPagination;
use crate::i18n::Locale;
use crate::pagination::PaginationController;
use crate::Folhetim;

/// Load posts from the content service and print them.
///
/// Walks the pagination with the controller: `pages` bounds how many extra
/// pages to load after the first, `all` keeps going until the cursor runs
/// out.
pub async fn run(folhetim: &Folhetim, pages: usize, all: bool) -> Result<()> {
    let config = &folhetim.config;
    let client = CmsClient::new(config)?;

    let page = client
        .query_documents(&config.content_type, &config.fields, config.page_size)
        .await?;
    let locale = Locale::for_tag(&config.language);
    let initial = PostPagination::from_page(&page, &config.date_format, locale);

    let mut controller = PaginationController::new(initial, &config.date_format, locale);

    let mut remaining = pages;
    while controller.has_more() && (all || remaining > 0) {
        controller.load_more(&client).await?;
        if !all {
            remaining -= 1;
        }
    }

    println!("Posts ({}):", controller.posts().len());
    for post in controller.posts() {
        println!(
            "  {}  {}  [{}]",
            post.first_publication_date.as_deref().unwrap_or("-"),
            post.data.title,
            post.uid.as_deref().unwrap_or("-")
        );
    }
    if controller.has_more() {
        println!("  (more available)");
    }

    Ok(())
}

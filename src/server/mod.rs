//! HTTP server for the index page

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cache::{PageCache, Snapshot};
use crate::cms::CmsClient;
use crate::config::SiteConfig;
use crate::content::PostPagination;
use crate::error::FetchError;
use crate::i18n::Locale;
use crate::templates::{TemplateRenderer, STYLES};
use crate::Folhetim;

/// Server state shared across handlers
struct ServerState {
    config: SiteConfig,
    client: CmsClient,
    renderer: TemplateRenderer,
    cache: PageCache,
}

/// Start the server
pub async fn start(folhetim: &Folhetim, ip: &str, port: u16) -> Result<()> {
    let client = CmsClient::new(&folhetim.config)?;
    let renderer = TemplateRenderer::new()?;

    let state = Arc::new(ServerState {
        config: folhetim.config.clone(),
        client,
        renderer,
        cache: PageCache::new(folhetim.config.revalidate),
    });

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/api/next", get(next_page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the index page from the revalidation cache
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.cache.get_or_refresh(|| refresh_snapshot(&state)).await {
        Ok(snapshot) => Html(snapshot.html).into_response(),
        Err(e) => {
            tracing::error!("Failed to build index page: {:#}", e);
            let message = "Não foi possível carregar os posts";
            match state.renderer.render_error(&state.config, message) {
                Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                Err(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
                }
            }
        }
    }
}

/// Fetch the first page and render a fresh snapshot
async fn refresh_snapshot(state: &ServerState) -> Result<Snapshot> {
    let config = &state.config;
    let page = state
        .client
        .query_documents(&config.content_type, &config.fields, config.page_size)
        .await?;

    let locale = Locale::for_tag(&config.language);
    let pagination = PostPagination::from_page(&page, &config.date_format, locale);
    let html = state.renderer.render_index(config, &pagination)?;

    Ok(Snapshot::new(html, pagination))
}

/// Serve the embedded style sheet
async fn styles_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES)
}

#[derive(Deserialize)]
struct NextParams {
    url: String,
}

/// Fetch a next-page cursor for the in-page script
///
/// The response carries display-ready posts plus the new cursor. URLs off
/// the configured API origin are rejected before any request goes out.
async fn next_page_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NextParams>,
) -> Response {
    match state.client.fetch_page(&params.url).await {
        Ok(page) => {
            let locale = Locale::for_tag(&state.config.language);
            let pagination = PostPagination::from_page(&page, &state.config.date_format, locale);
            Json(pagination).into_response()
        }
        Err(err) => {
            let status = match err {
                FetchError::ForeignUrl(_) | FetchError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            };
            tracing::warn!("Next page fetch failed: {}", err);
            status.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_router(server: &MockServer) -> Router {
        test_router_with(server, SiteConfig::default())
    }

    fn test_router_with(server: &MockServer, mut config: SiteConfig) -> Router {
        config.api_url = server.uri();
        let client = CmsClient::new(&config).unwrap();
        let renderer = TemplateRenderer::new().unwrap();
        let cache = PageCache::new(config.revalidate);
        router(Arc::new(ServerState {
            config,
            client,
            renderer,
            cache,
        }))
    }

    fn first_page_body(server: &MockServer) -> serde_json::Value {
        serde_json::json!({
            "results": [
                {
                    "uid": "como-utilizar-hooks",
                    "last_publication_date": "2021-03-25T19:25:30+0000",
                    "data": {
                        "title": "Como utilizar Hooks",
                        "subtitle": "Pensando em sincronização",
                        "author": "Joseph Oliveira"
                    }
                }
            ],
            "next_page": format!("{}/documents/search?page=2", server.uri())
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page_is_served() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_page_body(&server)))
            .mount(&server)
            .await;

        let app = test_router(&server);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Como utilizar Hooks"));
        assert!(body.contains("25 mar 2021"));
        assert!(body.contains("Carregar mais posts"));
    }

    #[tokio::test]
    async fn test_index_page_is_cached_inside_window() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_page_body(&server)))
            .expect(1)
            .mount(&server)
            .await;

        let app = test_router(&server);
        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_index_page_failure_returns_error_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = test_router(&server);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.contains("Não foi possível carregar os posts"));
    }

    #[tokio::test]
    async fn test_styles_are_served() {
        let server = MockServer::start().await;
        let app = test_router(&server);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/styles.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_next_page_endpoint_returns_display_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {
                        "uid": "criando-um-app-do-zero",
                        "last_publication_date": "2021-04-02T08:00:00+0000",
                        "data": {
                            "title": "Criando um app do zero",
                            "subtitle": "Do create-react-app ao deploy",
                            "author": "Danilo Vieira"
                        }
                    }
                ],
                "next_page": null
            })))
            .mount(&server)
            .await;

        let cursor = format!("{}/documents/search?page=2", server.uri());
        let encoded: String = url::form_urlencoded::byte_serialize(cursor.as_bytes()).collect();

        let app = test_router(&server);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/next?url={}", encoded))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let page: PostPagination = serde_json::from_str(&body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(
            page.results[0].first_publication_date.as_deref(),
            Some("02 abr 2021")
        );
        assert!(page.next_page.is_none());
    }

    #[tokio::test]
    async fn test_next_page_endpoint_rejects_foreign_urls() {
        let server = MockServer::start().await;
        let cursor = "https://elsewhere.example.com/documents/search?page=2";
        let encoded: String = url::form_urlencoded::byte_serialize(cursor.as_bytes()).collect();

        let app = test_router(&server);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/next?url={}", encoded))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_next_page_endpoint_maps_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let cursor = format!("{}/documents/search?page=2", server.uri());
        let encoded: String = url::form_urlencoded::byte_serialize(cursor.as_bytes()).collect();

        let app = test_router(&server);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/next?url={}", encoded))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}

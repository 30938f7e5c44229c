use axum::extract::State;
use axum::Json;
use scraper::{Html, Selector};
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::LinkMetadataDto;
use crate::state::AppState;

/// Some servers reject default/empty agents, so we present a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// ── Extraction ─────────────────────────────────────────────────────────────

/// Parse metadata tags from `html` and return a `LinkMetadataDto`.
///
/// Each field falls through an ordered list of candidate sources and is left
/// unset when none yields non-empty text — a missing field is never an error.
/// Discovered favicon/preview URLs are resolved to absolute form against
/// `base_url`; a candidate that cannot be resolved is dropped silently.
pub fn extract_metadata(html: &str, base_url: &str) -> LinkMetadataDto {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    let title = get_meta_property(&document, "og:title")
        .or_else(|| get_meta_name(&document, "twitter:title"))
        .or_else(|| get_title_tag(&document));

    let description = get_meta_property(&document, "og:description")
        .or_else(|| get_meta_name(&document, "twitter:description"))
        .or_else(|| get_meta_name(&document, "description"));

    // First matching <link> wins; if it resolves to nothing usable, fall back
    // to the conventional /favicon.ico at the page's origin (when the page
    // URL itself parses — otherwise leave unset).
    let favicon_url = get_link_href(&document, "icon")
        .or_else(|| get_link_href(&document, "shortcut icon"))
        .or_else(|| get_link_href(&document, "apple-touch-icon"))
        .and_then(|href| resolve_url(base.as_ref(), &href))
        .or_else(|| {
            base.as_ref()
                .and_then(|b| b.join("/favicon.ico").ok())
                .map(Into::into)
        });

    // Unlike favicon, there is no default guess for the preview image.
    let preview_image_url = get_meta_property(&document, "og:image")
        .or_else(|| get_meta_property(&document, "og:image:url"))
        .or_else(|| get_meta_name(&document, "twitter:image"))
        .or_else(|| get_meta_name(&document, "twitter:image:src"))
        .and_then(|content| resolve_url(base.as_ref(), &content));

    LinkMetadataDto {
        url: base_url.to_string(),
        title,
        description,
        favicon_url,
        preview_image_url,
    }
}

/// Resolve `candidate` to an absolute URL string. Already-absolute candidates
/// pass through; relative ones are joined onto `base`. Returns `None` when
/// neither interpretation parses.
fn resolve_url(base: Option<&Url>, candidate: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(candidate) {
        return Some(absolute.into());
    }
    base?.join(candidate).ok().map(Into::into)
}

fn get_meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_meta_name(doc: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_link_href(doc: &Html, rel: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"link[rel="{rel}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_title_tag(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

// ── Request body ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct FetchMetadataRequest {
    pub url: String,
}

// ── Handler ────────────────────────────────────────────────────────────────

/// POST /metadata/fetch
///
/// Fetches the page at the given URL and returns its extracted metadata.
/// One outbound GET per call, no caching, no retries — callers needing
/// resilience layer their own on top.
pub async fn fetch_metadata(
    State(state): State<AppState>,
    Json(params): Json<FetchMetadataRequest>,
) -> AppResult<Json<LinkMetadataDto>> {
    let parsed = Url::parse(&params.url)
        .map_err(|_| AppError::Validation("Invalid URL format".into()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(AppError::Validation(
                "Only http/https URLs are supported".into(),
            ))
        }
    }

    let response = state.http.get(parsed).send().await.map_err(|e| {
        tracing::warn!(error = ?e, url = %params.url, "Failed to fetch URL for metadata extraction");
        AppError::Network(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::FetchFailed {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let html: String = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    Ok(Json(extract_metadata(&html, &params.url)))
}

// ── Unit tests ─────────────────────────────────────────────────────────────

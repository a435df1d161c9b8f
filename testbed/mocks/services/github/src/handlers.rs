use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::fixtures::EventFixture;

const DEFAULT_PER_PAGE: usize = 30;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "github-mock"
    }))
}

pub async fn list_user_events(
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    State(fixture): State<Arc<EventFixture>>,
) -> Result<Response, StatusCode> {
    if let Some(scripted) = fixture.get_scripted(&username) {
        let status = StatusCode::from_u16(scripted.status).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            scripted.body.clone(),
        )
            .into_response();
        if let Some(link) = &scripted.link {
            let value = HeaderValue::from_str(link).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
            response.headers_mut().insert(header::LINK, value);
        }
        return Ok(response);
    }

    let events = fixture.get_events(&username).ok_or(StatusCode::NOT_FOUND)?;

    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, 100);
    let page = query.page.unwrap_or(1).max(1);
    let total_pages = events.len().div_ceil(per_page).max(1);

    let start = ((page - 1) * per_page).min(events.len());
    let end = (start + per_page).min(events.len());
    let body = events[start..end].to_vec();
    tracing::debug!(
        "Serving {} events for {} (page {} of {})",
        body.len(),
        username,
        page,
        total_pages
    );

    let mut response = Json(body).into_response();
    if total_pages > 1 {
        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");
        let base = format!("http://{}/users/{}/events", host, username);
        let link = link_header(&base, page, per_page, total_pages);
        let value = HeaderValue::from_str(&link).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        response.headers_mut().insert(header::LINK, value);
    }

    Ok(response)
}

/// Link header in the layout the real API uses: prev, next, last, first.
pub fn link_header(base: &str, page: usize, per_page: usize, total_pages: usize) -> String {
    let link = |target: usize, rel: &str| {
        format!("<{}?page={}&per_page={}>; rel=\"{}\"", base, target, per_page, rel)
    };

    let mut links = Vec::new();
    if page > 1 {
        links.push(link((page - 1).min(total_pages), "prev"));
    }
    if page < total_pages {
        links.push(link(page + 1, "next"));
        links.push(link(total_pages, "last"));
    }
    if page > 1 {
        links.push(link(1, "first"));
    }
    links.join(", ")
}

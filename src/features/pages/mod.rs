pub mod model;

use crate::domain::{Page, PageDraft};
use crate::error::StoreError;
use crate::parser::markdown::compile_markdown_to_html;
use crate::slug::title_to_slug;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use model::{CreatedPage, JsonPage, PageForm, SearchParams};

pub fn pages_router() -> Router<AppState> {
    // "/search" sits alongside "/{hash}"; axum prefers the static segment so
    // search never shadows a page lookup
    Router::new()
        .route("/", get(list_pages_handler).post(create_page_handler))
        .route("/search", get(search_pages_handler))
        .route(
            "/{hash}",
            get(get_page_handler)
                .put(update_page_handler)
                .delete(delete_page_handler),
        )
}

async fn get_page_handler(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<JsonPage>, StatusCode> {
    match state.store.get_page(&hash).await {
        Ok(page) => Ok(Json(page_to_json_page(&page))),

        Err(StoreError::NotFound(_)) => Err(StatusCode::NOT_FOUND),

        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn list_pages_handler(State(state): State<AppState>) -> Json<Vec<JsonPage>> {
    let pages = state.store.get_pages().await;

    Json(pages.iter().map(page_to_json_page).collect())
}

async fn search_pages_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<JsonPage>> {
    let pages = state.store.search_pages(&params.q).await;

    Json(pages.iter().map(page_to_json_page).collect())
}

async fn create_page_handler(
    State(state): State<AppState>,
    Json(form): Json<PageForm>,
) -> Result<(StatusCode, Json<CreatedPage>), StatusCode> {
    let draft = draft_from_form(form, None);
    let hash = draft.hash.clone();

    match state.store.create_page(draft).await {
        Ok(()) => Ok((StatusCode::CREATED, Json(CreatedPage { hash }))),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn update_page_handler(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Json(form): Json<PageForm>,
) -> Result<StatusCode, StatusCode> {
    let draft = draft_from_form(form, Some(hash));

    match state.store.update_page(draft).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn delete_page_handler(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<StatusCode, StatusCode> {
    match state.store.delete_page(&hash).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

// the slug is derived from the title on create; updates keep the existing one.
// the date is stamped fresh on every write, RFC3339 in UTC
fn draft_from_form(form: PageForm, existing_hash: Option<String>) -> PageDraft {
    let hash = existing_hash.unwrap_or_else(|| title_to_slug(&form.name));

    PageDraft {
        hash,
        name: form.name,
        content: form.content,
        date: Utc::now().to_rfc3339(),
        author: form.author,
    }
}

pub fn page_to_json_page(page: &Page) -> JsonPage {
    JsonPage {
        id: page.id,
        hash: page.hash.to_owned(),
        name: page.name.to_owned(),
        content: page.content.to_owned(),
        html_content: compile_markdown_to_html(&page.content),
        date: page.date.to_rfc3339(),
        author: page.author.to_owned(),
    }
}

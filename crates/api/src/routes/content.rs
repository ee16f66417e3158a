//! Article content endpoints.

use std::sync::Arc;

use article_store::{ArticleStore, ContentEntry, ContentRow};
use axum::Json;
use axum::extract::State;
use serde::Serialize;

use super::{AppState, JsonBody, JsonObject, OkResponse, QueryPairs, first_param, text_field};
use crate::error::ApiError;

/// Body of `POST /api/save_content`: `{url, content}`.
#[derive(Debug)]
pub struct SaveContentRequest {
    pub url: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<JsonObject> for SaveContentRequest {
    type Error = ApiError;

    fn try_from(mut body: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            url: text_field(&mut body, "url")?,
            content: text_field(&mut body, "content")?,
        })
    }
}

impl From<SaveContentRequest> for ContentEntry {
    fn from(req: SaveContentRequest) -> Self {
        Self {
            url: req.url,
            content: req.content,
        }
    }
}

/// Body of a content lookup: `{"content": ...}` when a row exists, `{}`
/// otherwise. Both are served with 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Found { content: Option<String> },
    Missing {},
}

impl From<Option<ContentRow>> for ContentResponse {
    fn from(row: Option<ContentRow>) -> Self {
        match row {
            Some(row) => Self::Found {
                content: row.content,
            },
            None => Self::Missing {},
        }
    }
}

/// POST /api/save_content — upsert an article body by URL.
#[tracing::instrument(skip(state, req), fields(url = ?req.url))]
pub async fn save<S: ArticleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    JsonBody(req): JsonBody<SaveContentRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.save_content(req.into()).await?;
    Ok(Json(OkResponse::ok()))
}

/// GET /api/content — look up an article body by exact URL.
#[tracing::instrument(skip(state, params))]
pub async fn get<S: ArticleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: QueryPairs,
) -> Result<Json<ContentResponse>, ApiError> {
    // A missing url matches no row.
    let row = match first_param(&params, "url") {
        Some(url) => state.store.get_content(url).await?,
        None => None,
    };

    Ok(Json(row.into()))
}

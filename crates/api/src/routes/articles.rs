//! Article list endpoints.

use std::sync::Arc;

use article_store::{ArticleEntry, ArticleStore, ArticleSummary, ListQuery};
use axum::Json;
use axum::extract::State;
use common::{PER_PAGE, Page};

use super::{AppState, JsonBody, JsonObject, OkResponse, QueryPairs, first_param, text_field};
use crate::error::ApiError;

/// Body of `POST /api/save_list`: `{title, url, match}`.
#[derive(Debug)]
pub struct SaveListRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub match_keyword: Option<String>,
}

impl TryFrom<JsonObject> for SaveListRequest {
    type Error = ApiError;

    fn try_from(mut body: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            title: text_field(&mut body, "title")?,
            url: text_field(&mut body, "url")?,
            match_keyword: text_field(&mut body, "match")?,
        })
    }
}

impl From<SaveListRequest> for ArticleEntry {
    fn from(req: SaveListRequest) -> Self {
        Self {
            title: req.title,
            url: req.url,
            match_keyword: req.match_keyword,
        }
    }
}

/// POST /api/save_list — upsert an article list entry by URL.
#[tracing::instrument(skip(state, req), fields(url = ?req.url))]
pub async fn save<S: ArticleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    JsonBody(req): JsonBody<SaveListRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.save_article(req.into()).await?;
    Ok(Json(OkResponse::ok()))
}

/// Builds the listing query from `page` and the optional `tag` filter.
pub(crate) fn list_query(params: &[(String, String)]) -> ListQuery {
    let page = Page::parse(first_param(params, "page"));
    let query = ListQuery::page(page, PER_PAGE);

    match first_param(params, "tag").map(str::trim) {
        Some(tag) if !tag.is_empty() => query.match_keyword(tag),
        _ => query,
    }
}

/// GET /api/list — one page of articles, most recently updated first.
#[tracing::instrument(skip(state, params))]
pub async fn list<S: ArticleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: QueryPairs,
) -> Result<Json<Vec<ArticleSummary>>, ApiError> {
    let query = list_query(&params);
    tracing::debug!(offset = query.offset, tag = ?query.match_keyword, "listing articles");

    let articles = state.store.list_articles(query).await?;
    Ok(Json(articles))
}

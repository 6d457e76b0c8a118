// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListDto, CreatedArticleDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery, ArticleIdParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Listing parameters are kept as text so malformed numbers can be reported
/// with the API error body.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Page size (default 10).
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    /// Rows to skip (default 0).
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
    /// One of `publish`, `draft`, `thrash` (default `publish`).
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[schema(min_length = 20)]
    pub title: Option<String>,
    #[schema(min_length = 200)]
    pub content: Option<String>,
    #[schema(min_length = 3)]
    pub category: Option<String>,
    #[schema(example = "draft")]
    pub status: Option<String>,
}

/// Absent or empty fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/article/",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles with the given status.", body = ArticleListDto),
        (status = 400, description = "Invalid limit or offset.", body = ErrorResponse),
        (status = 500, description = "Database failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = ListArticlesQuery {
        limit: params.limit,
        offset: params.offset,
        status: params.status,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "Invalid id.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/article/",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = CreatedArticleDto),
        (status = 400, description = "Validation failed or malformed JSON.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<CreatedArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
        status: payload.status.unwrap_or_default(),
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Confirmation message.", body = String),
        (status = 400, description = "Invalid id or payload.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<String>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(format!("Article {id} has been updated")))
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Confirmation message.", body = String),
        (status = 400, description = "Invalid id.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Json<String>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(format!("Article {id} has been deleted")))
}

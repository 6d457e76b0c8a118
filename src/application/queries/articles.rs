use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticlePage, ArticleReadRepository, ArticleStatus, Pagination},
};
use std::sync::Arc;

pub const DEFAULT_STATUS: &str = "publish";

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug)]
pub struct GetArticleByIdQuery {
    pub id: ArticleId,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let pagination = Pagination::parse(query.limit.as_deref(), query.offset.as_deref())?;
        let status = query.status.as_deref().unwrap_or(DEFAULT_STATUS);

        // No stored row can carry a status outside the enum.
        let Ok(status) = status.parse::<ArticleStatus>() else {
            return Ok(ArticlePage::default().into());
        };

        let page = self.read_repo.list_by_status(status, pagination).await?;
        Ok(page.into())
    }

    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}

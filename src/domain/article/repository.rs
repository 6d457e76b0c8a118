use crate::domain::article::entity::{Article, ArticlePage, ArticleUpdate, NewArticle};
use crate::domain::article::pagination::Pagination;
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Fails with `DomainError::NotFound` when no row has the given id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<()>;
    /// Fails with `DomainError::NotFound` when no row has the given id.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list_by_status(
        &self,
        status: ArticleStatus,
        pagination: Pagination,
    ) -> DomainResult<ArticlePage>;
}

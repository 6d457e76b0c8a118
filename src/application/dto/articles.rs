use crate::domain::article::{Article, ArticleId, ArticlePage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article as rendered in responses. The id is a string in this shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ArticleDto {
    #[schema(example = "1")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[schema(example = "publish")]
    pub status: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    /// Rows matching the status filter, ignoring limit and offset.
    pub count: u64,
    pub data: Vec<ArticleDto>,
}

impl From<ArticlePage> for ArticleListDto {
    fn from(page: ArticlePage) -> Self {
        Self {
            count: page.total,
            data: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedArticleDto {
    pub id: i64,
}

impl From<ArticleId> for CreatedArticleDto {
    fn from(id: ArticleId) -> Self {
        Self { id: id.into() }
    }
}

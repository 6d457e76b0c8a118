use crate::domain::article::validation::FieldViolation;
use crate::domain::article::value_objects::{
    ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
}

impl Article {
    /// Applies the fields present in `update`; absent fields keep their value.
    pub fn apply(&mut self, update: &ArticleUpdate) {
        if let Some(title) = &update.title {
            self.title = title.as_str().to_string();
        }
        if let Some(content) = &update.content {
            self.content = content.as_str().to_string();
        }
        if let Some(category) = &update.category {
            self.category = category.as_str().to_string();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: ArticleCategory,
    pub status: ArticleStatus,
}

impl NewArticle {
    /// Validates every field and reports all failures at once.
    pub fn validate(
        title: String,
        content: String,
        category: String,
        status: &str,
    ) -> DomainResult<Self> {
        match (
            ArticleTitle::new(title),
            ArticleContent::new(content),
            ArticleCategory::new(category),
            status.parse::<ArticleStatus>(),
        ) {
            (Ok(title), Ok(content), Ok(category), Ok(status)) => Ok(Self {
                title,
                content,
                category,
                status,
            }),
            (title, content, category, status) => Err(DomainError::InvalidFields(
                [title.err(), content.err(), category.err(), status.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub category: Option<ArticleCategory>,
    pub status: Option<ArticleStatus>,
}

impl ArticleUpdate {
    /// Validates the supplied fields. Missing and empty values both mean
    /// "leave unchanged" and are never validated.
    pub fn validate(
        id: ArticleId,
        title: Option<String>,
        content: Option<String>,
        category: Option<String>,
        status: Option<String>,
    ) -> DomainResult<Self> {
        match (
            non_empty(title).map(ArticleTitle::new).transpose(),
            non_empty(content).map(ArticleContent::new).transpose(),
            non_empty(category).map(ArticleCategory::new).transpose(),
            non_empty(status)
                .map(|s| s.parse::<ArticleStatus>())
                .transpose(),
        ) {
            (Ok(title), Ok(content), Ok(category), Ok(status)) => Ok(Self {
                id,
                title,
                content,
                category,
                status,
            }),
            (title, content, category, status) => Err(DomainError::InvalidFields(
                [title.err(), content.err(), category.err(), status.err()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<FieldViolation>>(),
            )),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One page of a status-filtered listing plus the size of the whole filter.
#[derive(Debug, Clone, Default)]
pub struct ArticlePage {
    pub total: u64,
    pub items: Vec<Article>,
}

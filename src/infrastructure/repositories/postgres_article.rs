// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticlePage, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle, Pagination,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const SELECT_BY_ID: &str =
    "SELECT id, title, content, category, status FROM article WHERE id = $1";

const INSERT: &str = "INSERT INTO article (title, content, category, status)
     VALUES ($1, $2, $3, $4)
     RETURNING id";

// Empty strings leave the column untouched, matching the HTTP contract.
const UPDATE: &str = "UPDATE article SET
        title = COALESCE(NULLIF($1, ''), title),
        content = COALESCE(NULLIF($2, ''), content),
        category = COALESCE(NULLIF($3, ''), category),
        status = COALESCE(NULLIF($4, ''), status)
     WHERE id = $5";

const DELETE: &str = "DELETE FROM article WHERE id = $1";

// Count and page come from one statement so they share a snapshot. The count
// subquery always yields a row, so an empty page still carries the total.
const LIST_BY_STATUS: &str = "SELECT counted.total, page.id, page.title, page.content, page.category, page.status
     FROM (SELECT COUNT(*) AS total FROM article WHERE status = $1) AS counted
     LEFT JOIN LATERAL (
         SELECT id, title, content, category, status
         FROM article
         WHERE status = $1
         ORDER BY id
         LIMIT $2 OFFSET $3
     ) AS page ON TRUE
     ORDER BY page.id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ArticleStatus>().map_err(|_| {
            DomainError::Persistence(format!("unexpected article status {:?}", row.status))
        })?;

        Ok(Self {
            id: ArticleId::new(row.id),
            title: row.title,
            content: row.content,
            category: row.category,
            status,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticlePageRow {
    total: i64,
    id: Option<i64>,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    status: Option<String>,
}

impl ArticlePageRow {
    /// The lateral join yields one all-null article when the page is empty.
    fn into_article_row(self) -> Option<ArticleRow> {
        Some(ArticleRow {
            id: self.id?,
            title: self.title?,
            content: self.content?,
            category: self.category?,
            status: self.status?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            content,
            category,
            status,
        } = article;

        let id: i64 = sqlx::query_scalar(INSERT)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(category.as_str())
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(ArticleId::new(id))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<()> {
        let ArticleUpdate {
            id,
            title,
            content,
            category,
            status,
        } = update;

        let result = sqlx::query(UPDATE)
            .bind(title.as_ref().map(|t| t.as_str()))
            .bind(content.as_ref().map(|c| c.as_str()))
            .bind(category.as_ref().map(|c| c.as_str()))
            .bind(status.map(ArticleStatus::as_str))
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query(DELETE)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(SELECT_BY_ID)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_by_status(
        &self,
        status: ArticleStatus,
        pagination: Pagination,
    ) -> DomainResult<ArticlePage> {
        let rows = sqlx::query_as::<_, ArticlePageRow>(LIST_BY_STATUS)
            .bind(status.as_str())
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = rows.first().map_or(0, |row| row.total);
        let items = rows
            .into_iter()
            .filter_map(ArticlePageRow::into_article_row)
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ArticlePage {
            total: u64::try_from(total).unwrap_or_default(),
            items,
        })
    }
}

// tests/support/mocks.rs
use article_service::domain::article::{
    Article, ArticleId, ArticlePage, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle, Pagination,
};
use article_service::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// 記事テーブルを模したインメモリリポジトリ（id 昇順、ステータス絞り込み、空文字は変更なし）
pub struct InMemoryArticleRepo {
    rows: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicI64,
    inserts: AtomicUsize,
}

impl Default for InMemoryArticleRepo {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            inserts: AtomicUsize::new(0),
        }
    }
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `article` under its own id, bypassing validation.
    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(id, article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = Article {
            id: ArticleId::new(id),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            category: article.category.into_inner(),
            status: article.status,
        };
        self.rows.lock().unwrap().insert(id, row);
        Ok(ArticleId::new(id))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.apply(&update);
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list_by_status(
        &self,
        status: ArticleStatus,
        pagination: Pagination,
    ) -> DomainResult<ArticlePage> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<&Article> = rows.values().filter(|a| a.status == status).collect();
        let items = matching
            .iter()
            .skip(usize::try_from(pagination.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit).unwrap_or(usize::MAX))
            .map(|a| (*a).clone())
            .collect();
        Ok(ArticlePage {
            total: matching.len() as u64,
            items,
        })
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// 常にデータベース障害を返すリポジトリ
pub struct FailingArticleRepo;

fn unavailable() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        Err(unavailable())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<()> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn list_by_status(
        &self,
        _status: ArticleStatus,
        _pagination: Pagination,
    ) -> DomainResult<ArticlePage> {
        Err(unavailable())
    }
}

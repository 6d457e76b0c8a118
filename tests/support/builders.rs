// tests/support/builders.rs
use article_service::domain::article::{Article, ArticleId, ArticleStatus};
use serde_json::{Value, json};

/// Exactly 20 characters.
pub fn valid_title() -> String {
    "t".repeat(20)
}

/// Exactly 200 characters.
pub fn valid_content() -> String {
    "lorem ipsum ".repeat(17).chars().take(200).collect()
}

/// Create payload that satisfies every rule.
pub fn valid_payload(status: &str) -> Value {
    json!({
        "title": valid_title(),
        "content": valid_content(),
        "category": "tech",
        "status": status,
    })
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: ArticleStatus,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: valid_title(),
            content: valid_content(),
            category: "tech".into(),
            status: ArticleStatus::Publish,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: self.title,
            content: self.content,
            category: self.category,
            status: self.status,
        }
    }
}

// src/application/commands/articles.rs
use crate::{
    application::{dto::CreatedArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleUpdate, ArticleWriteRepository, NewArticle},
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
}

#[derive(Debug)]
pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug)]
pub struct DeleteArticleCommand {
    pub id: ArticleId,
}

pub struct ArticleCommandService {
    write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { write_repo }
    }

    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedArticleDto> {
        let new_article = NewArticle::validate(
            command.title,
            command.content,
            command.category,
            &command.status,
        )?;

        let id = self.write_repo.insert(new_article).await?;
        tracing::debug!(article_id = %id, "article created");
        Ok(id.into())
    }

    /// Replaces the non-empty fields of the command. A command with no usable
    /// field still has to hit an existing row.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            category,
            status,
        } = command;

        let update = ArticleUpdate::validate(id, title, content, category, status)?;
        self.write_repo.update(update).await?;
        tracing::debug!(article_id = %id, "article updated");
        Ok(())
    }

    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        self.write_repo.delete(command.id).await?;
        tracing::debug!(article_id = %command.id, "article deleted");
        Ok(())
    }
}

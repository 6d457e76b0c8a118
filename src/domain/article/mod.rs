pub mod entity;
pub mod pagination;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticlePage, ArticleUpdate, NewArticle};
pub use pagination::Pagination;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::FieldViolation;
pub use value_objects::{ArticleCategory, ArticleContent, ArticleId, ArticleStatus, ArticleTitle};

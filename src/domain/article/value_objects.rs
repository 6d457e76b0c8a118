use crate::domain::article::validation::{
    self, CATEGORY, CONTENT, FieldViolation, STATUS, TITLE,
};
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parses an identifier taken from a request path.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Validation("invalid article id".into()))
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub const MIN_CHARS: usize = 20;

    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into();
        validation::check_min_chars(TITLE, &value, Self::MIN_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub const MIN_CHARS: usize = 200;

    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into();
        validation::check_min_chars(CONTENT, &value, Self::MIN_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCategory(String);

impl ArticleCategory {
    pub const MIN_CHARS: usize = 3;

    pub fn new(value: impl Into<String>) -> Result<Self, FieldViolation> {
        let value = value.into();
        validation::check_min_chars(CATEGORY, &value, Self::MIN_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Publish,
    Draft,
    Thrash,
}

impl ArticleStatus {
    pub const NAMES: &'static [&'static str] = &["publish", "draft", "thrash"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Thrash => "thrash",
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = FieldViolation;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validation::check_one_of(STATUS, value, Self::NAMES)?;
        Ok(match value {
            "draft" => Self::Draft,
            "thrash" => Self::Thrash,
            _ => Self::Publish,
        })
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

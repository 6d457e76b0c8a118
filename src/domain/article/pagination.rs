use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_OFFSET: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Pagination {
    /// Parses raw query values. Absent values take the defaults; present but
    /// non-numeric or negative values are rejected.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> DomainResult<Self> {
        let limit = match limit {
            Some(raw) => parse_count(raw).ok_or_else(|| invalid("invalid limit"))?,
            None => DEFAULT_LIMIT,
        };
        let offset = match offset {
            Some(raw) => parse_count(raw).ok_or_else(|| invalid("invalid offset"))?,
            None => DEFAULT_OFFSET,
        };
        Ok(Self { limit, offset })
    }

    /// `limit` as a SQL `BIGINT`, saturating at its maximum.
    pub fn limit_i64(self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// `offset` as a SQL `BIGINT`, saturating at its maximum.
    pub fn offset_i64(self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

fn parse_count(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok()
}

fn invalid(msg: &str) -> DomainError {
    DomainError::Validation(msg.to_string())
}

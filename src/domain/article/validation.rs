//! Field rules for article payloads and the messages reported when they fail.
//!
//! Messages live in a lookup table keyed by the JSON field name. A rule that
//! fails on a field the table does not know about still produces a message,
//! built from the field name and the rule tag.

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const CATEGORY: &str = "category";
pub const STATUS: &str = "status";

const FIELD_MESSAGES: &[(&str, &str)] = &[
    (TITLE, "Title must be at least 20 characters long."),
    (CONTENT, "Content must be at least 200 characters long."),
    (CATEGORY, "Category must be at least 3 characters long."),
    (
        STATUS,
        "Status must be one of 'publish', 'draft', or 'thrash'.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinChars(usize),
    OneOf(&'static [&'static str]),
}

impl Rule {
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinChars(_) => "min",
            Self::OneOf(_) => "oneof",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

impl FieldViolation {
    pub const fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn message(&self) -> String {
        message_for(self.field).map_or_else(
            || format!("Field '{}' is invalid: {}", self.field, self.rule.tag()),
            str::to_string,
        )
    }
}

pub fn message_for(field: &str) -> Option<&'static str> {
    FIELD_MESSAGES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| *message)
}

/// Length is counted in characters, so multi-byte text is not penalised.
pub fn check_min_chars(field: &'static str, value: &str, min: usize) -> Result<(), FieldViolation> {
    if value.is_empty() {
        return Err(FieldViolation::new(field, Rule::Required));
    }
    if value.chars().count() < min {
        return Err(FieldViolation::new(field, Rule::MinChars(min)));
    }
    Ok(())
}

pub fn check_one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), FieldViolation> {
    if value.is_empty() {
        return Err(FieldViolation::new(field, Rule::Required));
    }
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(FieldViolation::new(field, Rule::OneOf(allowed)))
    }
}

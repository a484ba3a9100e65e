use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

// ----------------- Comment Request -----------------

/// The inner object of a `{ "newComment": {...} }` body, before validation.
///
/// Fields stay untyped so a missing field and a wrongly typed one can be told
/// apart. Unknown keys are dropped by serde.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct NewCommentRequest {
    pub username: Option<Value>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewCommentRequest {
    pub fn validate(self) -> Result<NewComment, ValidationError> {
        Ok(NewComment {
            username: required_string(self.username, "username")?,
            body: required_string(self.body, "body")?,
        })
    }
}

// ----------------- Vote Request -----------------

/// The inner object of a `{ "newVote": {...} }` body, before validation.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct NewVoteRequest {
    pub inc_votes: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIncrement {
    pub inc_votes: i64,
}

impl NewVoteRequest {
    pub fn validate(self) -> Result<VoteIncrement, ValidationError> {
        match self.inc_votes {
            None | Some(Value::Null) => Err(ValidationError::MissingField("inc_votes")),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(|inc_votes| VoteIncrement { inc_votes })
                .ok_or(ValidationError::WrongType("inc_votes")),
            Some(_) => Err(ValidationError::WrongType("inc_votes")),
        }
    }
}

fn required_string(value: Option<Value>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::WrongType(field)),
    }
}

// ----------------- Article Query -----------------

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ArticleQueryParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// Columns the article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article_id" => Ok(SortColumn::ArticleId),
            "title" => Ok(SortColumn::Title),
            "topic" => Ok(SortColumn::Topic),
            "author" => Ok(SortColumn::Author),
            "created_at" => Ok(SortColumn::CreatedAt),
            "votes" => Ok(SortColumn::Votes),
            "comment_count" => Ok(SortColumn::CommentCount),
            _ => Err(ValidationError::InvalidQuery("sort_by")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(ValidationError::InvalidQuery("order"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl ArticleQueryParams {
    pub fn validate(self) -> Result<ArticleFilter, ValidationError> {
        Ok(ArticleFilter {
            topic: self.topic,
            sort_by: self
                .sort_by
                .as_deref()
                .map(str::parse::<SortColumn>)
                .transpose()?
                .unwrap_or_default(),
            order: self
                .order
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Article, ArticleSummary, Comment};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Renders a timestamp the way it is stored and served: `2020-07-09T20:11:00.000Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArticleResponse {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArticleSummaryResponse {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: String,
}

impl ArticleResponse {
    pub fn new(
        Article {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
        }: Article,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at: format_timestamp(&created_at),
            votes,
            article_img_url,
        }
    }
}

impl ArticleSummaryResponse {
    pub fn new(
        ArticleSummary {
            article_id,
            title,
            topic,
            author,
            created_at,
            votes,
            article_img_url,
            comment_count,
        }: ArticleSummary,
    ) -> Self {
        ArticleSummaryResponse {
            article_id,
            title,
            topic,
            author,
            created_at: format_timestamp(&created_at),
            votes,
            article_img_url,
            comment_count,
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at,
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at: format_timestamp(&created_at),
        }
    }
}

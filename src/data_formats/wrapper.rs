use serde::{Deserialize, Serialize};

use super::response::{ArticleResponse, ArticleSummaryResponse, CommentResponse};

// ----------------- Request Envelopes -----------------

#[derive(Debug, Deserialize, Serialize)]
pub struct NewCommentWrapper<T> {
    #[serde(rename = "newComment")]
    pub new_comment: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NewVoteWrapper<T> {
    #[serde(rename = "newVote")]
    pub new_vote: T,
}

// ----------------- Response Envelopes -----------------

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper {
    pub article: ArticleResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper {
    pub articles: Vec<ArticleSummaryResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper {
    pub comment: CommentResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleCommentsWrapper {
    pub comments: Vec<CommentResponse>,
}

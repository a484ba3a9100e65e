use std::sync::Arc;

use axum::{extract::Query, http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleQueryParams, ArticleResponse, ArticleSummaryResponse, ArticleWrapper,
        CommentResponse, CommentWrapper, MultipleArticlesWrapper, MultipleCommentsWrapper,
        NewCommentRequest, NewCommentWrapper, NewVoteRequest, NewVoteWrapper,
    },
    db_helpers::{
        add_comment_to_article_in_db, get_article_by_id_in_db, get_comments_for_article_in_db,
        increment_article_votes_in_db, list_all_articles,
    },
    errors::{RequestError, ValidationError},
    extractors::{ArticleId, ValidJson},
    JsonResponse,
};

type JsonResult<T> = Result<Json<T>, RequestError>;

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found() -> RequestError {
    RequestError::NotFound("Route not found")
}

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    query: Result<Query<ArticleQueryParams>, axum::extract::rejection::QueryRejection>,
) -> JsonResult<MultipleArticlesWrapper> {
    let Query(params) =
        query.map_err(|rejection| ValidationError::MalformedQuery(rejection.body_text()))?;
    let filter = params.validate()?;
    let articles = list_all_articles(&pool, filter)
        .await?
        .into_iter()
        .map(ArticleSummaryResponse::new)
        .collect();
    Ok(Json(MultipleArticlesWrapper { articles }))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ArticleId(article_id): ArticleId,
) -> JsonResult<ArticleWrapper> {
    let article = match get_article_by_id_in_db(&*pool, article_id).await? {
        Some(article) => article,
        None => return Err(RequestError::NotFound("Article not found")),
    };
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::new(article),
    }))
}

pub async fn patch_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ArticleId(article_id): ArticleId,
    ValidJson(NewVoteWrapper { new_vote }): ValidJson<NewVoteWrapper<NewVoteRequest>>,
) -> JsonResult<ArticleWrapper> {
    let increment = new_vote.validate()?;
    let article = increment_article_votes_in_db(&pool, article_id, increment.inc_votes).await?;
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::new(article),
    }))
}

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ArticleId(article_id): ArticleId,
) -> JsonResult<MultipleCommentsWrapper> {
    let comments = get_comments_for_article_in_db(&pool, article_id)
        .await?
        .into_iter()
        .map(CommentResponse::new)
        .collect();
    Ok(Json(MultipleCommentsWrapper { comments }))
}

pub async fn post_comment_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    ArticleId(article_id): ArticleId,
    ValidJson(NewCommentWrapper { new_comment }): ValidJson<NewCommentWrapper<NewCommentRequest>>,
) -> Result<JsonResponse<CommentWrapper>, RequestError> {
    let new_comment = new_comment.validate()?;
    let comment = add_comment_to_article_in_db(&pool, article_id, new_comment).await?;
    tracing::info!(comment_id = comment.comment_id, article_id, "comment created");
    Ok((
        StatusCode::CREATED,
        Json(CommentWrapper {
            comment: CommentResponse::new(comment),
        }),
    ))
}

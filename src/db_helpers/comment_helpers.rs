use chrono::Utc;
use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::{format_timestamp, NewComment},
    errors::RequestError,
    models::Comment,
};

use super::{get_article_by_id_in_db, get_user_by_username};

pub async fn get_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, RequestError> {
    let mut tx = pool.begin().await?;
    if get_article_by_id_in_db(&mut tx, article_id).await?.is_none() {
        return Err(RequestError::NotFound("Article not found"));
    }
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id,
               article_id,
               author,
               body,
               votes,
               created_at
        FROM   comments
        WHERE  article_id = $1
        ORDER  BY created_at DESC, comment_id ASC
        "#,
    )
    .bind(article_id)
    .fetch_all(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(result)
}

pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    NewComment { username, body }: NewComment,
) -> Result<Comment, RequestError> {
    let mut tx = pool.begin().await?;

    if get_article_by_id_in_db(&mut tx, article_id).await?.is_none() {
        return Err(RequestError::NotFound("Article not found"));
    }
    if get_user_by_username(&mut tx, &username).await?.is_none() {
        return Err(RequestError::NotFound("User not found"));
    }

    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (body, article_id, author, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING comment_id,
                  article_id,
                  author,
                  body,
                  votes,
                  created_at
        "#,
    )
    .bind(body)
    .bind(article_id)
    .bind(username)
    .bind(format_timestamp(&Utc::now()))
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;

    Ok(result)
}

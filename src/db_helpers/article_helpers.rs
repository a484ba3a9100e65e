use sqlx::{sqlite::SqliteExecutor, Sqlite, SqlitePool};

use crate::data_formats::ArticleFilter;
use crate::errors::{RequestError, ValidationError};
use crate::models::{Article, ArticleSummary};

use super::get_topic_by_slug;

const ARTICLE_COLUMNS: &str = r#"
            article_id, title, topic, author, body, created_at, votes, article_img_url
"#;

pub async fn list_all_articles(
    pool: &SqlitePool,
    ArticleFilter {
        topic,
        sort_by,
        order,
    }: ArticleFilter,
) -> Result<Vec<ArticleSummary>, RequestError> {
    let mut tx = pool.begin().await?;

    if let Some(slug) = &topic {
        if get_topic_by_slug(&mut tx, slug).await?.is_none() {
            return Err(RequestError::NotFound("Topic not found"));
        }
    }

    // Only the ORDER BY clause is spliced in, and only from fixed column names.
    let query = format!(
        r#"
            SELECT articles.article_id,
                   articles.title,
                   articles.topic,
                   articles.author,
                   articles.created_at,
                   articles.votes,
                   articles.article_img_url,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
            WHERE  ( articles.topic = $1
                    OR $1 IS NULL )
            GROUP  BY articles.article_id
            ORDER  BY {} {}, articles.article_id ASC
        "#,
        sort_by.as_sql(),
        order.as_sql()
    );

    let articles = sqlx::query_as::<Sqlite, ArticleSummary>(&query)
        .bind(topic)
        .fetch_all(&mut tx)
        .await?;

    tx.commit().await?;
    Ok(articles)
}

pub async fn get_article_by_id_in_db<'e, E>(
    executor: E,
    article_id: i64,
) -> Result<Option<Article>, RequestError>
where
    E: SqliteExecutor<'e>,
{
    let query = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1");
    let result = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(article_id)
        .fetch_optional(executor)
        .await?;
    Ok(result)
}

/// Adds `inc_votes` to the article's tally in a single statement so concurrent
/// increments cannot overwrite each other. An increment that would take the
/// tally past the i64 range leaves the row untouched and is rejected.
pub async fn increment_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, RequestError> {
    let mut tx = pool.begin().await?;
    let query = format!(
        r#"
        UPDATE articles
        SET    votes = votes + $1
        WHERE  article_id = $2
           AND CASE
                   WHEN $1 >= 0 THEN votes <= 9223372036854775807 - $1
                   ELSE votes >= ( -9223372036854775807 - 1 ) - $1
               END
        RETURNING {ARTICLE_COLUMNS}
        "#
    );
    let result = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?;

    let article = match result {
        Some(article) => article,
        None => {
            // No row updated: either the article is missing or the guard tripped.
            return match get_article_by_id_in_db(&mut tx, article_id).await? {
                Some(_) => Err(ValidationError::OutOfRange("inc_votes").into()),
                None => Err(RequestError::NotFound("Article not found")),
            };
        }
    };
    tx.commit().await?;

    Ok(article)
}

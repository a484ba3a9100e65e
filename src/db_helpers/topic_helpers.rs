use sqlx::{sqlite::SqliteExecutor, Sqlite};

use crate::{errors::RequestError, models::Topic};

pub async fn get_topic_by_slug<'e, E>(executor: E, slug: &str) -> Result<Option<Topic>, RequestError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query_as::<Sqlite, Topic>(
        r#"
        SELECT slug, description FROM topics WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(executor)
    .await?;
    Ok(result)
}

use sqlx::{sqlite::SqliteExecutor, Sqlite};

use crate::{errors::RequestError, models::User};

pub async fn get_user_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<User>, RequestError>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT username, name, avatar_url FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(executor)
    .await?;
    Ok(result)
}

#![allow(dead_code)]

use std::time::Duration;

use ncnews::{get_random_free_port, make_router, run_migrations, serve};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const IMG_GREAT_MAN: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";
const IMG_DEFAULT: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

pub const ARTICLE_COUNT: usize = 13;

const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

const USERS: &[(&str, &str)] = &[
    ("butter_bridge", "jonny"),
    ("icellusedkars", "sam"),
    ("rogersop", "paul"),
    ("lurker", "do_nothing"),
];

// (title, topic, author, body, created_at, votes)
const ARTICLES: &[(&str, &str, &str, &str, &str, i64)] = &[
    ("Living in the shadow of a great man", "mitch", "butter_bridge", "I find this existence challenging", "2020-07-09T20:11:00.000Z", 100),
    ("Sony Vaio; or, The Laptop", "mitch", "icellusedkars", "Call me Mitchell.", "2020-10-16T05:03:00.000Z", 0),
    ("Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", "some gifs", "2020-11-03T09:12:00.000Z", 0),
    ("Student SUES Mitch!", "mitch", "rogersop", "We all love Mitch and all his wonderful works.", "2020-05-06T01:14:00.000Z", 0),
    ("UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", "Bastet walks amongst us", "2020-08-03T13:14:00.000Z", 0),
    ("A", "mitch", "icellusedkars", "Delicious tin of cat food", "2020-10-18T01:00:00.000Z", 0),
    ("Z", "mitch", "icellusedkars", "I was hungry.", "2020-01-07T14:08:00.000Z", 0),
    ("Does Mitch predate civilisation?", "mitch", "icellusedkars", "Archaeologists have uncovered a gigantic statue", "2020-04-17T01:08:00.000Z", 0),
    ("They're not exactly dogs, are they?", "mitch", "butter_bridge", "Well? Think about it.", "2020-06-06T09:10:00.000Z", 0),
    ("Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", "Who are we kidding", "2020-05-14T04:15:00.000Z", 0),
    ("Am I a cat?", "mitch", "icellusedkars", "Having run out of ideas for articles", "2020-01-15T22:21:00.000Z", 0),
    ("Another article about Mitch", "mitch", "butter_bridge", "There will never be enough articles about Mitch!", "2020-10-11T11:24:00.000Z", 0),
    ("Moustache", "mitch", "butter_bridge", "Have you seen the size of that thing?", "2020-10-11T11:24:00.000Z", 0),
];

// (article_id, author, body, created_at, votes)
const COMMENTS: &[(i64, &str, &str, &str, i64)] = &[
    (9, "butter_bridge", "Oh, I've got compassion running out of my nose, pal!", "2020-04-06T12:17:00.000Z", 16),
    (1, "butter_bridge", "The beautiful thing about treasure is that it exists.", "2020-10-31T03:03:00.000Z", 14),
    (1, "butter_bridge", "Replacing the quiet elegance of the dark suit and tie", "2020-03-01T01:13:00.000Z", 100),
    (1, "icellusedkars", " I carry a log — yes. Is it funny to you?", "2020-02-23T12:01:00.000Z", -100),
    (1, "icellusedkars", "I hate streaming noses", "2020-11-03T21:00:00.000Z", 0),
    (1, "icellusedkars", "I hate streaming eyes even more", "2020-04-11T21:02:00.000Z", 0),
    (1, "icellusedkars", "Lobster pot", "2020-05-15T20:19:00.000Z", 0),
    (1, "icellusedkars", "Delicious crackerbreads", "2020-04-14T20:19:00.000Z", 0),
    (1, "icellusedkars", "Superficially charming", "2020-01-01T03:08:00.000Z", 0),
    (1, "icellusedkars", "git push origin master", "2020-06-20T07:24:00.000Z", 0),
    (1, "icellusedkars", "Ambidextrous marsupial", "2020-09-19T23:10:00.000Z", 0),
    (3, "icellusedkars", "Ambidextrous marsupial", "2020-09-20T23:10:00.000Z", 0),
    (3, "icellusedkars", "Fruit pastilles", "2020-06-15T10:25:00.000Z", 0),
    (1, "icellusedkars", "This morning, I showered for nine minutes.", "2020-07-21T00:20:00.000Z", 16),
    (5, "butter_bridge", "I am 100% sure that we're not completely sure.", "2020-11-24T00:08:00.000Z", 1),
    (5, "icellusedkars", "What do you see? I have no idea where this will lead us.", "2020-06-09T05:00:00.000Z", 16),
    (6, "butter_bridge", "This is a bad article name", "2020-10-11T15:23:00.000Z", 1),
    (9, "icellusedkars", "The owls are not what they seem.", "2020-03-14T17:02:00.000Z", 20),
    (6, "rogersop", "Same minute, second opinion", "2020-10-11T15:23:00.000Z", 0),
];

pub async fn seed(pool: &SqlitePool) {
    let mut tx = pool.begin().await.expect("begin seed transaction");
    for &(slug, description) in TOPICS {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(slug)
            .bind(description)
            .execute(&mut tx)
            .await
            .expect("insert topic");
    }
    for &(username, name) in USERS {
        sqlx::query("INSERT INTO users (username, name) VALUES ($1, $2)")
            .bind(username)
            .bind(name)
            .execute(&mut tx)
            .await
            .expect("insert user");
    }
    for (i, &(title, topic, author, body, created_at, votes)) in ARTICLES.iter().enumerate() {
        let img = if i == 0 { IMG_GREAT_MAN } else { IMG_DEFAULT };
        sqlx::query(
            r#"
            INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(body)
        .bind(created_at)
        .bind(votes)
        .bind(img)
        .execute(&mut tx)
        .await
        .expect("insert article");
    }
    for &(article_id, author, body, created_at, votes) in COMMENTS {
        sqlx::query(
            r#"
            INSERT INTO comments (article_id, author, body, created_at, votes)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(article_id)
        .bind(author)
        .bind(body)
        .bind(created_at)
        .bind(votes)
        .execute(&mut tx)
        .await
        .expect("insert comment");
    }
    tx.commit().await.expect("commit seed transaction");
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub pool: SqlitePool,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Starts the real router on a free port over a freshly seeded in-memory database.
pub async fn spawn_app() -> TestApp {
    // A single long-lived connection, since every `:memory:` connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory database");
    run_migrations(&pool).await.expect("run migrations");
    seed(&pool).await;

    let (_, addr) = get_random_free_port();
    let server_pool = pool.clone();
    tokio::spawn(async move {
        if let Err(e) = serve(make_router(), server_pool, addr).await {
            panic!("test server failed: {e:#}");
        }
    });

    let app = TestApp {
        address: format!("http://{addr}"),
        client: reqwest::Client::new(),
        pool,
    };
    for _ in 0..100 {
        if app.client.get(app.url("/check_health")).send().await.is_ok() {
            return app;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("test server did not start on {addr}");
}

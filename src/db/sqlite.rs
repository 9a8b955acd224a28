use crate::db::models::{NewPost, Post};
use crate::db::schema::SQLITE_INIT;
use crate::error::ScribeError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct PostsStorage {
    pool: SqlitePool,
}

impl PostsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database (creating the file if missing) and initialize the schema.
    pub async fn connect(database_url: &str) -> Result<Self, ScribeError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ScribeError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a post and return it with the store-assigned id.
    pub async fn insert(&self, post: NewPost) -> Result<Post, ScribeError> {
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(&post.title)
            .bind(&post.content)
            .execute(&self.pool)
            .await?;
        Ok(Post {
            id: result.last_insert_rowid(),
            title: post.title,
            content: post.content,
        })
    }

    /// All posts in the store's natural (rowid) order.
    pub async fn list_all(&self) -> Result<Vec<Post>, ScribeError> {
        let rows = sqlx::query("SELECT id, title, content FROM posts")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>, ScribeError> {
        let row = sqlx::query("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Delete by id, handing back the removed row; `None` when nothing matched.
    pub async fn delete_by_id(&self, id: i64) -> Result<Option<Post>, ScribeError> {
        let row = sqlx::query("DELETE FROM posts WHERE id = ? RETURNING id, title, content")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_model).transpose()
    }

    fn row_to_model(row: SqliteRow) -> Result<Post, ScribeError> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let content: Option<String> = row.try_get("content")?;
        Ok(Post { id, title, content })
    }
}

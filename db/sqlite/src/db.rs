use anyhow::Result;
use sqlx::{
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqlitePoolOptions, SqliteQueryResult, SqliteRow},
    Error, Pool, Sqlite,
};

use crate::query::tutor;

pub struct SqliteDb {
    pool: Pool<Sqlite>,
}

impl SqliteDb {
    pub async fn new(path: &str, max_connections: &u32) -> Result<Self> {
        tc_log::info(Some("⚡"), "[SQLite] Initializing component");

        let url = format!("sqlite:{path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(*max_connections)
            .connect(&url)
            .await?;

        Self::init(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Result<SqliteQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_one<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<T, Error> {
        query.fetch_one(&self.pool).await
    }

    pub async fn fetch_optional<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }

    async fn init(pool: &Pool<Sqlite>) -> Result<()> {
        tutor::init(pool).await
    }
}

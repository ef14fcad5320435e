use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::tutor::TutorModel};

// Upserting keeps the rowid of an existing row, so ordering by rowid stays
// insertion order across updates.
const UPSERT: &str = "INSERT INTO \"tutors\" (\"email\", \"first_name\", \"last_name\", \"phone_number\", \"password\", \"verified\") VALUES (?, ?, ?, ?, ?, ?) ON CONFLICT (\"email\") DO UPDATE SET \"first_name\" = excluded.\"first_name\", \"last_name\" = excluded.\"last_name\", \"phone_number\" = excluded.\"phone_number\", \"password\" = excluded.\"password\", \"verified\" = excluded.\"verified\"";
const SELECT_BY_EMAIL: &str = "SELECT \"email\", \"first_name\", \"last_name\", \"phone_number\", \"password\", \"verified\" FROM \"tutors\" WHERE \"email\" = ?";
const SELECT_MANY: &str = "SELECT \"email\", \"first_name\", \"last_name\", \"phone_number\", \"password\", \"verified\" FROM \"tutors\" ORDER BY \"rowid\" ASC";
const COUNT_BY_EMAIL: &str = "SELECT COUNT(1) FROM \"tutors\" WHERE \"email\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    tc_log::info(Some("🔧"), "[SQLite] Setting up tutors table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"tutors\" (\"email\" text NOT NULL, \"first_name\" text NOT NULL, \"last_name\" text NOT NULL, \"phone_number\" text NOT NULL, \"password\" text NOT NULL, \"verified\" boolean NOT NULL DEFAULT 0, PRIMARY KEY (\"email\"))").await?;

    pool.prepare(UPSERT).await?;
    pool.prepare(SELECT_BY_EMAIL).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(COUNT_BY_EMAIL).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn upsert_tutor(&self, value: &TutorModel) -> Result<()> {
        self.execute(
            sqlx::query(UPSERT)
                .bind(value.email())
                .bind(value.first_name())
                .bind(value.last_name())
                .bind(value.phone_number())
                .bind(value.password())
                .bind(value.verified()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_tutor_by_email(&self, email: &str) -> Result<Option<TutorModel>> {
        Ok(self
            .fetch_optional(sqlx::query_as(SELECT_BY_EMAIL).bind(email))
            .await?)
    }

    pub async fn exists_tutor_by_email(&self, email: &str) -> Result<bool> {
        let (count,): (i64,) = self
            .fetch_one(sqlx::query_as(COUNT_BY_EMAIL).bind(email))
            .await?;
        Ok(count > 0)
    }

    pub async fn select_many_tutors(&self) -> Result<Vec<TutorModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }
}

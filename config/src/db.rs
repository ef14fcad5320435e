use serde::Deserialize;

use self::sqlite::DbSqliteConfig;

pub mod sqlite;

/// Storage selection. Without a `sqlite` section the tutors live in memory
/// for the lifetime of the process.
#[derive(Deserialize, Default)]
pub struct DbConfig {
    sqlite: Option<DbSqliteConfig>,
}

impl DbConfig {
    pub fn sqlite(&self) -> &Option<DbSqliteConfig> {
        &self.sqlite
    }
}

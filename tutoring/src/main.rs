use std::sync::Arc;

use tc_api_rest::{context::ApiRestCtx, ApiRestServer};
use tc_dao::Db;
use tc_db_memory::db::MemoryDb;
use tc_db_sqlite::db::SqliteDb;
use tc_service::tutor::TutorService;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = match tc_config::from_path(&config_path) {
        Ok(config) => config,
        Err(err) => tc_log::panic(None, format!("[Tutoring] {err:#}")),
    };

    if let Err(err) = tc_log::init(config.log().display_level(), config.log().level_filter()) {
        tc_log::panic(None, format!("[Tutoring] {err}"));
    }

    tc_log::info(Some("🚀"), "[Tutoring] Starting");

    let db = match config.db().sqlite() {
        Some(sqlite) => match SqliteDb::new(sqlite.path(), sqlite.max_connections()).await {
            Ok(db) => Db::SqliteDb(db),
            Err(err) => tc_log::panic(
                None,
                format!("[Tutoring] Opening SQLite database failed: {err}"),
            ),
        },
        None => {
            tc_log::warn(
                None,
                "[Tutoring] No database configuration is specified, tutors are kept in memory",
            );
            Db::MemoryDb(MemoryDb::new())
        }
    };

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        ApiRestCtx::new(TutorService::new(Arc::new(db))),
    );

    match api_rest_server.run().await {
        Ok(_) => tc_log::info(Some("👋"), "[Tutoring] Turned off"),
        Err(err) => tc_log::error(
            Some("👋"),
            format!("[Tutoring] Turned off with error: {err}"),
        ),
    }
}

use tc_db_memory::db::MemoryDb;
use tc_db_sqlite::db::SqliteDb;

pub mod repository;
pub mod tutor;

pub enum Db {
    SqliteDb(SqliteDb),
    MemoryDb(MemoryDb),
}

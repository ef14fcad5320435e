//! The storage contract the tutor service is written against.

use anyhow::Result;
use async_trait::async_trait;

use crate::{tutor::TutorDao, Db};

/// Keyed store of tutors, addressed by email.
///
/// Implementations must make a single `save` atomic; nothing above this
/// trait coordinates concurrent writers.
#[async_trait]
pub trait TutorRepository: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    async fn find_by_email(&self, email: &str) -> Result<Option<TutorDao>>;

    /// Every tutor, in the order the store keeps them.
    async fn find_all(&self) -> Result<Vec<TutorDao>>;

    /// Insert, or overwrite the record with the same email.
    async fn save(&self, tutor: &TutorDao) -> Result<TutorDao>;
}

#[async_trait]
impl TutorRepository for Db {
    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        TutorDao::db_exists_by_email(self, email).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<TutorDao>> {
        TutorDao::db_select_by_email(self, email).await
    }

    async fn find_all(&self) -> Result<Vec<TutorDao>> {
        TutorDao::db_select_many(self).await
    }

    async fn save(&self, tutor: &TutorDao) -> Result<TutorDao> {
        tutor.db_upsert(self).await?;
        Ok(tutor.clone())
    }
}

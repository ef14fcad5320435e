use anyhow::Result;
use tc_db_memory::model::tutor::TutorModel as TutorMemoryModel;
use tc_db_sqlite::model::tutor::TutorModel as TutorSqliteModel;

use crate::Db;

/// One tutoring-company instructor, keyed by email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorDao {
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    password: String,
    verified: bool,
}

impl TutorDao {
    /// New tutors always start unverified.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Self {
        Self {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            phone_number: phone_number.to_owned(),
            password: password.to_owned(),
            verified: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn verified(&self) -> &bool {
        &self.verified
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = first_name.to_owned();
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = last_name.to_owned();
    }

    pub fn set_phone_number(&mut self, phone_number: &str) {
        self.phone_number = phone_number.to_owned();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_owned();
    }

    pub fn set_verified(&mut self, verified: &bool) {
        self.verified = *verified;
    }

    pub async fn db_upsert(&self, db: &Db) -> Result<()> {
        match db {
            Db::SqliteDb(db) => db.upsert_tutor(&self.to_sqlitedb_model()).await,
            Db::MemoryDb(db) => db.upsert_tutor(&self.to_memorydb_model()).await,
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Option<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_tutor_by_email(email)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))),
            Db::MemoryDb(db) => Ok(db
                .select_tutor_by_email(email)
                .await?
                .map(|model| Self::from_memorydb_model(&model))),
        }
    }

    pub async fn db_exists_by_email(db: &Db, email: &str) -> Result<bool> {
        match db {
            Db::SqliteDb(db) => db.exists_tutor_by_email(email).await,
            Db::MemoryDb(db) => db.exists_tutor_by_email(email).await,
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let tutors = db.select_many_tutors().await?;
                let mut tutors_data = Vec::with_capacity(tutors.len());
                for tutor in &tutors {
                    tutors_data.push(Self::from_sqlitedb_model(tutor));
                }
                Ok(tutors_data)
            }
            Db::MemoryDb(db) => {
                let tutors = db.select_many_tutors().await?;
                let mut tutors_data = Vec::with_capacity(tutors.len());
                for tutor in &tutors {
                    tutors_data.push(Self::from_memorydb_model(tutor));
                }
                Ok(tutors_data)
            }
        }
    }

    fn from_sqlitedb_model(model: &TutorSqliteModel) -> Self {
        Self {
            email: model.email().to_owned(),
            first_name: model.first_name().to_owned(),
            last_name: model.last_name().to_owned(),
            phone_number: model.phone_number().to_owned(),
            password: model.password().to_owned(),
            verified: *model.verified(),
        }
    }

    fn to_sqlitedb_model(&self) -> TutorSqliteModel {
        TutorSqliteModel::new(
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.password,
            &self.verified,
        )
    }

    fn from_memorydb_model(model: &TutorMemoryModel) -> Self {
        Self {
            email: model.email().to_owned(),
            first_name: model.first_name().to_owned(),
            last_name: model.last_name().to_owned(),
            phone_number: model.phone_number().to_owned(),
            password: model.password().to_owned(),
            verified: *model.verified(),
        }
    }

    fn to_memorydb_model(&self) -> TutorMemoryModel {
        TutorMemoryModel::new(
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.password,
            &self.verified,
        )
    }
}

#[cfg(test)]
mod tests {
    use tc_db_memory::db::MemoryDb;
    use tc_db_sqlite::db::SqliteDb;
    use tempfile::TempDir;

    use super::*;

    async fn exercise(db: &Db) {
        let mut tutor = TutorDao::new("John", "Smith", "john@example.com", "5145550000", "pw1");
        assert!(!tutor.verified());

        tutor.db_upsert(db).await.unwrap();
        assert!(TutorDao::db_exists_by_email(db, "john@example.com")
            .await
            .unwrap());
        assert_eq!(
            TutorDao::db_select_by_email(db, "john@example.com")
                .await
                .unwrap(),
            Some(tutor.clone())
        );

        tutor.set_verified(&true);
        tutor.set_phone_number("5145551111");
        tutor.db_upsert(db).await.unwrap();

        let all = TutorDao::db_select_many(db).await.unwrap();
        assert_eq!(all, vec![tutor]);
        assert!(TutorDao::db_select_by_email(db, "jane@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn memory_round_trip() {
        exercise(&Db::MemoryDb(MemoryDb::new())).await;
    }

    #[tokio::test]
    async fn sqlite_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tutors.db");
        let db = SqliteDb::new(path.to_str().unwrap(), &1).await.unwrap();

        exercise(&Db::SqliteDb(db)).await;
    }
}

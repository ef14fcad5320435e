use anyhow::Result;

use crate::{db::MemoryDb, model::tutor::TutorModel};

impl MemoryDb {
    pub async fn upsert_tutor(&self, value: &TutorModel) -> Result<()> {
        let mut tutors = self.tutors().write().await;
        match tutors.iter_mut().find(|tutor| tutor.email() == value.email()) {
            Some(tutor) => *tutor = value.clone(),
            None => tutors.push(value.clone()),
        }
        Ok(())
    }

    pub async fn select_tutor_by_email(&self, email: &str) -> Result<Option<TutorModel>> {
        Ok(self
            .tutors()
            .read()
            .await
            .iter()
            .find(|tutor| tutor.email() == email)
            .cloned())
    }

    pub async fn exists_tutor_by_email(&self, email: &str) -> Result<bool> {
        Ok(self
            .tutors()
            .read()
            .await
            .iter()
            .any(|tutor| tutor.email() == email))
    }

    pub async fn select_many_tutors(&self) -> Result<Vec<TutorModel>> {
        Ok(self.tutors().read().await.clone())
    }
}

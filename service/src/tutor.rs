//! Tutor lifecycle: creation, updates, verification and its revocation,
//! and lookups.
//!
//! Every operation runs its precondition checks before the single write it
//! performs, so a rejected call leaves the store untouched.

use std::sync::Arc;

use tc_dao::{repository::TutorRepository, tutor::TutorDao};
use tc_error::{Error, Result};

use crate::validation;

pub struct TutorService<R: TutorRepository> {
    repository: Arc<R>,
}

impl<R: TutorRepository> TutorService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        tc_log::info(Some("⚡"), "[TutorService] Initializing component");

        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Checked in order: email not taken, email well-formed, no blank field.
    pub async fn create_tutor(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<TutorDao> {
        tc_log::debug(None, format!("[TutorService] Creating tutor {email}"));

        self.tutor_unique(email).await?;
        validation::regex_email(email).inspect_err(|_| {
            tc_log::warn(None, format!("[TutorService] Rejected email {email}"));
        })?;
        if validation::invalid_tutor_info(first_name, last_name, email, phone_number, password) {
            tc_log::warn(None, format!("[TutorService] Incomplete details for {email}"));
            return Err(Error::InvalidArgument(
                "Your tutor details are incomplete!".to_owned(),
            ));
        }

        let tutor = TutorDao::new(first_name, last_name, email, phone_number, password);
        let tutor = self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Created tutor {email}"));
        Ok(tutor)
    }

    /// Withdraws a tutor's verified status. The record itself is kept, so
    /// the email stays taken.
    pub async fn revoke_verification(&self, email: &str) -> Result<()> {
        tc_log::debug(None, format!("[TutorService] Revoking verification of {email}"));

        self.tutor_exist(email).await?;
        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_verified(&false);
        self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Revoked verification of {email}"));
        Ok(())
    }

    pub async fn update_tutor(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        password: &str,
    ) -> Result<()> {
        tc_log::debug(None, format!("[TutorService] Updating tutor {email}"));

        self.tutor_exist(email).await?;
        if validation::invalid_tutor_info(first_name, last_name, email, phone_number, password) {
            tc_log::warn(None, format!("[TutorService] Incomplete details for {email}"));
            return Err(Error::InvalidArgument(
                "Your tutor details are incomplete!".to_owned(),
            ));
        }

        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_first_name(first_name);
        tutor.set_last_name(last_name);
        tutor.set_phone_number(phone_number);
        tutor.set_password(password);
        self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Updated tutor {email}"));
        Ok(())
    }

    pub async fn update_tutor_password(&self, email: &str, password: &str) -> Result<()> {
        tc_log::debug(None, format!("[TutorService] Updating password of {email}"));

        self.tutor_exist(email).await?;
        if validation::is_blank(password) {
            tc_log::warn(None, format!("[TutorService] Blank password for {email}"));
            return Err(Error::InvalidArgument(
                "Your password input is not correct".to_owned(),
            ));
        }

        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_password(password);
        self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Updated password of {email}"));
        Ok(())
    }

    /// Neither existence nor blankness is checked up front; a missing tutor
    /// surfaces as [`Error::NullReference`] and a blank name is stored as is.
    pub async fn update_tutor_first_name(&self, email: &str, first_name: &str) -> Result<()> {
        tc_log::debug(None, format!("[TutorService] Updating first name of {email}"));

        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_first_name(first_name);
        self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Updated first name of {email}"));
        Ok(())
    }

    /// Same contract as [`Self::update_tutor_first_name`].
    pub async fn update_tutor_last_name(&self, email: &str, last_name: &str) -> Result<()> {
        tc_log::debug(None, format!("[TutorService] Updating last name of {email}"));

        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_last_name(last_name);
        self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Updated last name of {email}"));
        Ok(())
    }

    pub async fn verify_tutor(&self, email: &str) -> Result<TutorDao> {
        tc_log::debug(None, format!("[TutorService] Verifying tutor {email}"));

        let mut tutor = self.fetch_for_update(email).await?;
        tutor.set_verified(&true);
        let tutor = self.repository.save(&tutor).await?;

        tc_log::info(None, format!("[TutorService] Verified tutor {email}"));
        Ok(tutor)
    }

    pub async fn get_tutor(&self, email: &str) -> Result<Option<TutorDao>> {
        Ok(self.repository.find_by_email(email).await?)
    }

    pub async fn get_all_tutors(&self) -> Result<Vec<TutorDao>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_verified_tutors(&self) -> Result<Vec<TutorDao>> {
        let mut tutors = self.get_all_tutors().await?;
        tutors.retain(|tutor| *tutor.verified());
        Ok(tutors)
    }

    pub async fn tutor_unique(&self, email: &str) -> Result<()> {
        if self.repository.exists_by_email(email).await? {
            tc_log::warn(None, format!("[TutorService] Tutor {email} already exists"));
            return Err(Error::DuplicateEntity("Tutor Already Exists".to_owned()));
        }
        Ok(())
    }

    pub async fn tutor_exist(&self, email: &str) -> Result<()> {
        if !self.repository.exists_by_email(email).await? {
            tc_log::warn(None, format!("[TutorService] Tutor {email} does not exist"));
            return Err(Error::NotFound("Tutor Does not Exist".to_owned()));
        }
        Ok(())
    }

    async fn fetch_for_update(&self, email: &str) -> Result<TutorDao> {
        match self.repository.find_by_email(email).await? {
            Some(tutor) => Ok(tutor),
            None => {
                tc_log::warn(None, format!("[TutorService] No tutor record for {email}"));
                Err(Error::NullReference(format!(
                    "Tutor record for {email} is absent"
                )))
            }
        }
    }
}

use sqlx::prelude::FromRow;

#[derive(FromRow)]
pub struct TutorModel {
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    password: String,
    verified: bool,
}

impl TutorModel {
    pub fn new(
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        password: &str,
        verified: &bool,
    ) -> Self {
        Self {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            phone_number: phone_number.to_owned(),
            password: password.to_owned(),
            verified: *verified,
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
}

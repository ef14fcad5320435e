use serde::{Deserialize, Serialize};
use tc_dao::tutor::TutorDao;

// Absent JSON fields read as "", so they fail the same blank checks as an
// explicitly empty value.

#[derive(Deserialize)]
pub struct TutorReqPath {
    email: String,
}

impl TutorReqPath {
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Deserialize)]
pub struct InsertOneTutorReqJson {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    password: Option<String>,
}

impl InsertOneTutorReqJson {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct UpdateOneTutorReqJson {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    password: Option<String>,
}

impl UpdateOneTutorReqJson {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_deref().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct UpdateTutorPasswordReqJson {
    password: Option<String>,
}

impl UpdateTutorPasswordReqJson {
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct UpdateTutorFirstNameReqJson {
    first_name: Option<String>,
}

impl UpdateTutorFirstNameReqJson {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub struct UpdateTutorLastNameReqJson {
    last_name: Option<String>,
}

impl UpdateTutorLastNameReqJson {
    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }
}

/// Public view of a tutor. The password never leaves the server.
#[derive(Serialize)]
pub struct TutorResJson {
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    verified: bool,
}

impl TutorResJson {
    pub fn new(
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        verified: &bool,
    ) -> Self {
        Self {
            email: email.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            phone_number: phone_number.to_owned(),
            verified: *verified,
        }
    }
}

impl From<&TutorDao> for TutorResJson {
    fn from(tutor: &TutorDao) -> Self {
        Self::new(
            tutor.email(),
            tutor.first_name(),
            tutor.last_name(),
            tutor.phone_number(),
            tutor.verified(),
        )
    }
}

//! Failure kinds raised by tutor operations.
//!
//! Every variant except [`Error::Repository`] is a rejected precondition and
//! is raised before anything is written. `Repository` wraps a failure of the
//! storage driver itself.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record with this email already exists.
    #[error("{0}")]
    DuplicateEntity(String),

    /// An existence check found no record with this email.
    #[error("{0}")]
    NotFound(String),

    /// A record was fetched without an existence check and turned out to be
    /// absent when it was about to be modified.
    #[error("{0}")]
    NullReference(String),

    /// A required field is empty or blank.
    #[error("{0}")]
    InvalidArgument(String),

    /// The email does not have the `local@domain.tld` shape.
    #[error("{0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEntity(_) => "DuplicateEntity",
            Self::NotFound(_) => "NotFound",
            Self::NullReference(_) => "NullReference",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::InvalidFormat(_) => "InvalidFormat",
            Self::Repository(_) => "Repository",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = Error::DuplicateEntity("Tutor Already Exists".to_owned());
        assert_eq!(err.to_string(), "Tutor Already Exists");
        assert_eq!(err.kind(), "DuplicateEntity");
    }

    #[test]
    fn storage_failures_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(anyhow::anyhow!("disk full"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Repository(_)));
        assert_eq!(err.to_string(), "disk full");
    }
}

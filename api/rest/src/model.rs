use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use serde::Serialize;
use tc_error::Error;

pub mod tutor;

#[derive(Serialize)]
pub struct Response {
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationRes>,
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: &Option<PaginationRes>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination: *pagination,
                data: Some(data),
            }),
            Err(err) => Self::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match err {
            Error::DuplicateEntity(_) => StatusCode::CONFLICT,
            Error::NotFound(_) | Error::NullReference(_) => StatusCode::NOT_FOUND,
            Error::InvalidArgument(_) | Error::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            Error::Repository(err) => {
                // Driver errors stay in the log; clients only get the generic text.
                tc_log::error(None, format!("[ApiRestServer] Storage failure: {err:#}"));
                return Self::error_raw(
                    &StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                );
            }
        };

        Self::error_raw(&status_code, &err.to_string())
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        if status_code.is_server_error() {
            tc_log::error(None, format!("[ApiRestServer] {message}"));
        } else {
            tc_log::warn(None, format!("[ApiRestServer] {message}"));
        }

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}

#[derive(Serialize, Clone, Copy)]
pub struct PaginationRes {
    count: usize,
    total: usize,
}

impl PaginationRes {
    pub fn new(count: &usize, total: &usize) -> Self {
        Self {
            count: *count,
            total: *total,
        }
    }
}

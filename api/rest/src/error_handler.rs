use actix_web::{
    body::{to_bytes, MessageBody},
    dev::ServiceResponse,
    http::header,
    middleware::ErrorHandlerResponse,
    Result,
};
use futures::executor;

use crate::model::Response;

/// Rewraps framework-generated error responses (unknown route, unreadable
/// JSON body, ...) into the JSON envelope. Responses that already carry JSON
/// pass through untouched.
pub fn default_error_handler<B: MessageBody>(
    svc_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&svc_res) {
        return Ok(ErrorHandlerResponse::Response(svc_res.map_into_left_body()));
    }

    let (req, res) = svc_res.into_parts();
    let status_code = res.status();

    let mut message = executor::block_on(body_text(res.into_body()));
    if message.trim().is_empty() {
        // Routing misses come back with an empty body.
        message = status_code
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_owned();
    }

    let res = Response::error_raw(&status_code, &message);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

fn is_json<B>(svc_res: &ServiceResponse<B>) -> bool {
    svc_res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .is_some_and(|content_type| content_type.to_lowercase().starts_with("application/json"))
}

async fn body_text<B: MessageBody>(body: B) -> String {
    match to_bytes(body).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            let err: Box<dyn std::error::Error> = err.into();
            err.to_string()
        }
    }
}

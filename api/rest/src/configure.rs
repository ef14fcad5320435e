use actix_web::web;

use crate::service::{root::root_api, tutor::tutor_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .service(web::scope("/api/rest").configure(tutor_api));
}

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{
    context::ApiRestCtx,
    model::{
        tutor::{
            InsertOneTutorReqJson, TutorReqPath, TutorResJson, UpdateOneTutorReqJson,
            UpdateTutorFirstNameReqJson, UpdateTutorLastNameReqJson, UpdateTutorPasswordReqJson,
        },
        PaginationRes, Response,
    },
};

pub fn tutor_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/tutor", web::post().to(insert_one))
        .route("/tutors", web::get().to(find_many))
        .route("/tutors/verified", web::get().to(find_many_verified))
        .route("/tutor/{email}", web::get().to(find_one))
        .route("/tutor/{email}", web::put().to(update_one))
        .route("/tutor/{email}/password", web::patch().to(update_password))
        .route("/tutor/{email}/first_name", web::patch().to(update_first_name))
        .route("/tutor/{email}/last_name", web::patch().to(update_last_name))
        .route("/tutor/{email}/verify", web::post().to(verify_one))
        .route("/tutor/{email}/revoke", web::post().to(revoke_one));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertOneTutorReqJson>,
) -> HttpResponse {
    match ctx
        .tutor()
        .create_tutor(
            data.first_name(),
            data.last_name(),
            data.email(),
            data.phone_number(),
            data.password(),
        )
        .await
    {
        Ok(tutor) => Response::data(&StatusCode::CREATED, &None, TutorResJson::from(&tutor)),
        Err(err) => Response::error(&err),
    }
}

async fn find_one(ctx: web::Data<ApiRestCtx>, path: web::Path<TutorReqPath>) -> HttpResponse {
    find_one_response(&ctx, path.email()).await
}

async fn find_many(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    match ctx.tutor().get_all_tutors().await {
        Ok(tutors) => many_response(&tutors),
        Err(err) => Response::error(&err),
    }
}

async fn find_many_verified(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    match ctx.tutor().get_verified_tutors().await {
        Ok(tutors) => many_response(&tutors),
        Err(err) => Response::error(&err),
    }
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<TutorReqPath>,
    data: web::Json<UpdateOneTutorReqJson>,
) -> HttpResponse {
    if let Err(err) = ctx
        .tutor()
        .update_tutor(
            path.email(),
            data.first_name(),
            data.last_name(),
            data.phone_number(),
            data.password(),
        )
        .await
    {
        return Response::error(&err);
    }

    find_one_response(&ctx, path.email()).await
}

async fn update_password(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<TutorReqPath>,
    data: web::Json<UpdateTutorPasswordReqJson>,
) -> HttpResponse {
    if let Err(err) = ctx
        .tutor()
        .update_tutor_password(path.email(), data.password())
        .await
    {
        return Response::error(&err);
    }

    find_one_response(&ctx, path.email()).await
}

async fn update_first_name(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<TutorReqPath>,
    data: web::Json<UpdateTutorFirstNameReqJson>,
) -> HttpResponse {
    if let Err(err) = ctx
        .tutor()
        .update_tutor_first_name(path.email(), data.first_name())
        .await
    {
        return Response::error(&err);
    }

    find_one_response(&ctx, path.email()).await
}

async fn update_last_name(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<TutorReqPath>,
    data: web::Json<UpdateTutorLastNameReqJson>,
) -> HttpResponse {
    if let Err(err) = ctx
        .tutor()
        .update_tutor_last_name(path.email(), data.last_name())
        .await
    {
        return Response::error(&err);
    }

    find_one_response(&ctx, path.email()).await
}

async fn verify_one(ctx: web::Data<ApiRestCtx>, path: web::Path<TutorReqPath>) -> HttpResponse {
    match ctx.tutor().verify_tutor(path.email()).await {
        Ok(tutor) => Response::data(&StatusCode::OK, &None, TutorResJson::from(&tutor)),
        Err(err) => Response::error(&err),
    }
}

async fn revoke_one(ctx: web::Data<ApiRestCtx>, path: web::Path<TutorReqPath>) -> HttpResponse {
    if let Err(err) = ctx.tutor().revoke_verification(path.email()).await {
        return Response::error(&err);
    }

    find_one_response(&ctx, path.email()).await
}

async fn find_one_response(ctx: &ApiRestCtx, email: &str) -> HttpResponse {
    match ctx.tutor().get_tutor(email).await {
        Ok(Some(tutor)) => Response::data(&StatusCode::OK, &None, TutorResJson::from(&tutor)),
        Ok(None) => Response::error_raw(&StatusCode::NOT_FOUND, "Tutor Does not Exist"),
        Err(err) => Response::error(&err),
    }
}

fn many_response(tutors: &[tc_dao::tutor::TutorDao]) -> HttpResponse {
    let tutors_res: Vec<TutorResJson> = tutors.iter().map(TutorResJson::from).collect();
    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&tutors_res.len(), &tutors_res.len())),
        &tutors_res,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{middleware::ErrorHandlers, test, App};
    use serde_json::{json, Value};
    use tc_dao::Db;
    use tc_db_memory::db::MemoryDb;
    use tc_service::tutor::TutorService;

    use crate::{configure::configure, error_handler::default_error_handler};

    use super::*;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                    .app_data(web::Data::new(ApiRestCtx::new(TutorService::new(
                        Arc::new(Db::MemoryDb(MemoryDb::new())),
                    ))))
                    .configure(configure),
            )
            .await
        };
    }

    fn john() -> Value {
        json!({
            "first_name": "John",
            "last_name": "Smith",
            "email": "john@example.com",
            "phone_number": "5145550000",
            "password": "pw1",
        })
    }

    #[actix_web::test]
    async fn root_reports_running() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/rest").to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(res["data"], "Tutoring company is running");
    }

    #[actix_web::test]
    async fn create_then_find() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(john())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["email"], "john@example.com");
        assert_eq!(body["data"]["verified"], false);
        assert!(body["data"].get("password").is_none());

        let req = test::TestRequest::get()
            .uri("/api/rest/tutor/john@example.com")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["first_name"], "John");
        assert!(body["error"].is_null());
    }

    #[actix_web::test]
    async fn create_maps_errors_to_statuses() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(john())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(john())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["message"], "Tutor Already Exists");

        let mut bad_email = john();
        bad_email["email"] = json!("john-at-example");
        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(bad_email)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["message"], "invalid email style");

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(json!({ "email": "jane@example.com", "first_name": "Jane" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["message"], "Your tutor details are incomplete!");
    }

    #[actix_web::test]
    async fn unknown_tutor_is_not_found() {
        let app = init_app!();

        let req = test::TestRequest::get()
            .uri("/api/rest/tutor/missing@example.com")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::patch()
            .uri("/api/rest/tutor/missing@example.com/first_name")
            .set_json(json!({ "first_name": "X" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/rest/tutors").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn verify_list_and_revoke() {
        let app = init_app!();

        for (first_name, email) in [("Ann", "ann@example.com"), ("Bob", "bob@example.com")] {
            let req = test::TestRequest::post()
                .uri("/api/rest/tutor")
                .set_json(json!({
                    "first_name": first_name,
                    "last_name": "Lee",
                    "email": email,
                    "phone_number": "5145550000",
                    "password": "pw",
                }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor/bob@example.com/verify")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["verified"], true);

        let req = test::TestRequest::get()
            .uri("/api/rest/tutors/verified")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["email"], "bob@example.com");
        assert_eq!(body["pagination"]["count"], 1);

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor/bob@example.com/revoke")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["verified"], false);

        let req = test::TestRequest::get().uri("/api/rest/tutors").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["email"], "ann@example.com");
        assert_eq!(body["data"][1]["email"], "bob@example.com");

        let req = test::TestRequest::get()
            .uri("/api/rest/tutors/verified")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn updates_return_the_refreshed_tutor() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/rest/tutor")
            .set_json(john())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/rest/tutor/john@example.com")
            .set_json(json!({
                "first_name": "Jon",
                "last_name": "Smyth",
                "phone_number": "4385551234",
                "password": "pw2",
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["first_name"], "Jon");
        assert_eq!(body["data"]["phone_number"], "4385551234");

        let req = test::TestRequest::patch()
            .uri("/api/rest/tutor/john@example.com/last_name")
            .set_json(json!({ "last_name": "Smith" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["last_name"], "Smith");

        let req = test::TestRequest::patch()
            .uri("/api/rest/tutor/john@example.com/password")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn framework_errors_use_the_envelope() {
        let app = init_app!();

        let req = test::TestRequest::get()
            .uri("/api/rest/nothing/here")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["status"], "Not Found");
    }
}

use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use tracing::debug;

fn unauthorized(req: ServiceRequest, message: &str) -> ServiceResponse<BoxBody> {
    let resp = HttpResponse::Unauthorized().json(json!({
        "error": "Unauthorized",
        "message": message,
    }));
    req.into_response(resp.map_into_boxed_body())
}

/// Bearer-token verification filter for resource scopes that opt in.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?
        .clone();

    let header_value = match req.headers().get("Authorization") {
        Some(h) => match h.to_str() {
            Ok(v) => v.to_string(),
            Err(_) => {
                return Ok(unauthorized(req, "Invalid Authorization header encoding"));
            }
        },
        None => return Ok(unauthorized(req, "Missing Authorization header")),
    };

    let token = match header_value.strip_prefix("Bearer ") {
        Some(t) => t,
        None => {
            return Ok(unauthorized(
                req,
                "Authorization header must start with Bearer",
            ));
        }
    };

    let claims = match verify_token(token, &config.jwt_secret) {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "Rejected bearer token");
            return Ok(unauthorized(req, "Invalid or expired token"));
        }
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.id,
        username: claims.username,
    });

    next.call(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::generate_token;
    use crate::testing::test_config;
    use actix_web::middleware::from_fn;
    use actix_web::{App, http::StatusCode, test, web};

    async fn whoami(user: AuthUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    macro_rules! guarded_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(Data::new(test_config()))
                    .service(
                        web::scope("/guarded")
                            .wrap(from_fn(auth_middleware))
                            .route("", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_header_is_rejected() {
        let app = guarded_app!();
        let req = test::TestRequest::get().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Missing Authorization header");
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_rejected() {
        let app = guarded_app!();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Basic dTE6cDE="))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn foreign_signature_is_rejected() {
        let app = guarded_app!();
        let token = generate_token(1, "u1", "someone-else", 3600).unwrap();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid or expired token");
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler() {
        let app = guarded_app!();
        let config = test_config();
        let token = generate_token(42, "u1", &config.jwt_secret, 3600).unwrap();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], 42);
        assert_eq!(body["username"], "u1");
    }
}

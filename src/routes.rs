use crate::{
    api::{LookupRoute, Resource, lookup, resource},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
    error::ApiError,
    model::{ENTITIES, Entity},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{
    App, HttpResponse, Responder,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    get,
    middleware::{Condition, Logger, NormalizePath, from_fn},
    web::{self, Data},
};
use sqlx::MySqlPool;
use std::sync::Arc;

#[get("/")]
async fn index() -> impl Responder {
    "Coffee trade API"
}

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

/// Malformed or mistyped JSON bodies get the same envelope as every other 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(format!("Invalid JSON body: {}", err)).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(format!("Invalid query: {}", err)).into())
}

fn resource_scope(entity: &'static Entity, protected: bool) -> actix_web::Scope<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut scope = web::scope(&format!("/{}", entity.path)).app_data(Resource(entity));

    // lookups first: their fixed segments must win over `/{id}`
    for l in entity.lookups {
        scope = scope.service(
            web::resource(l.route())
                .app_data(LookupRoute(l))
                .route(web::get().to(lookup::lookup)),
        );
    }

    scope
        .service(
            web::resource("")
                .route(web::get().to(resource::list))
                .route(web::post().to(resource::create)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(resource::get))
                .route(web::put().to(resource::update))
                .route(web::delete().to(resource::delete)),
        )
        .wrap(Condition::new(protected, from_fn(auth_middleware)))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let register_limiter = Arc::new(build_limiter(config.rate_register_per_min));

    // Public auth routes
    cfg.service(
        web::resource("/login")
            .wrap(login_limiter)
            .route(web::post().to(handlers::login)),
    )
    .service(
        web::resource("/register")
            .wrap(register_limiter)
            .route(web::post().to(handlers::register)),
    );

    // One scope per catalog entity
    for entity in ENTITIES {
        cfg.service(resource_scope(entity, config.is_protected(entity.path)));
    }
}

/// The complete application; `main` serves it and tests drive it through `init_service`.
pub fn app(
    pool: MySqlPool,
    config: Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(NormalizePath::trim())
        .app_data(Data::new(pool))
        .app_data(Data::new(config.clone()))
        .app_data(json_config())
        .app_data(query_config())
        .default_service(web::to(|| async {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "Not Found",
                "message": "Route not found",
            }))
        }))
        .service(index)
        .configure(|cfg| configure(cfg, &config))
}

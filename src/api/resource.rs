use crate::{
    api::{Operation, Resource},
    error::ApiError,
    models::ListQuery,
    utils::db_utils::{
        build_delete_by_key, build_insert_sql, build_select_all, build_select_by_key,
        build_update_sql, execute, fetch_all, fetch_optional, parse_key,
    },
};
use actix_web::{HttpResponse, web};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::{debug, info};

pub async fn list(
    Resource(entity): Resource,
    pool: web::Data<MySqlPool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let stmt = build_select_all(entity, query.limit, query.offset);
    let rows = fetch_all(pool.get_ref(), entity, stmt).await?;

    debug!(op = %Operation::List, table = entity.table, rows = rows.len(), "Listed rows");
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get(
    Resource(entity): Resource,
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let key = parse_key(&path).ok_or_else(|| ApiError::not_found(entity.name))?;

    let row = fetch_optional(pool.get_ref(), entity, build_select_by_key(entity, key)).await?;

    debug!(op = %Operation::Get, table = entity.table, key, found = row.is_some(), "Fetched row");
    row.map(|r| HttpResponse::Ok().json(r))
        .ok_or_else(|| ApiError::not_found(entity.name))
}

pub async fn create(
    Resource(entity): Resource,
    pool: web::Data<MySqlPool>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let stmt = build_insert_sql(entity, &body)?;

    let result = execute(pool.get_ref(), stmt)
        .await
        .map_err(|e| ApiError::from_db(e, &format!("{} already exists", entity.name)))?;
    let id = result.last_insert_id();

    info!(op = %Operation::Create, table = entity.table, id, "Created row");
    Ok(HttpResponse::Created().json(json!({
        "message": format!("{} created successfully", entity.name),
        "id": id,
    })))
}

pub async fn update(
    Resource(entity): Resource,
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let key = parse_key(&path).ok_or_else(|| ApiError::not_found(entity.name))?;
    let stmt = build_update_sql(entity, &body, key)?;

    let result = execute(pool.get_ref(), stmt)
        .await
        .map_err(|e| ApiError::from_db(e, &format!("{} already exists", entity.name)))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found(entity.name));
    }

    info!(op = %Operation::Update, table = entity.table, key, "Updated row");
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} updated successfully", entity.name)
    })))
}

pub async fn delete(
    Resource(entity): Resource,
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let key = parse_key(&path).ok_or_else(|| ApiError::not_found(entity.name))?;

    let result = execute(pool.get_ref(), build_delete_by_key(entity, key)).await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::not_found(entity.name));
    }

    info!(op = %Operation::Delete, table = entity.table, key, "Deleted row");
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} deleted successfully", entity.name)
    })))
}

#[cfg(test)]
mod tests {
    use crate::testing::{lazy_pool, test_app, test_config, test_pool};
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};
    use uuid::Uuid;

    #[actix_web::test]
    async fn unknown_fields_are_rejected_before_sql() {
        let app = test::init_service(test_app(lazy_pool(), test_config())).await;
        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json(json!({ "GradeName": "AA", "DROP TABLE grades; --": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["field"], "DROP TABLE grades; --");
        assert_eq!(body["errors"][0]["message"], "Unknown field");
    }

    #[actix_web::test]
    async fn empty_update_is_rejected() {
        let app = test::init_service(test_app(lazy_pool(), test_config())).await;
        let req = test::TestRequest::put()
            .uri("/growers/1")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "No fields provided");
    }

    #[actix_web::test]
    async fn malformed_json_uses_error_envelope() {
        let app = test::init_service(test_app(lazy_pool(), test_config())).await;
        let req = test::TestRequest::post()
            .uri("/agents")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ \"AgentName\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Bad Request");
    }

    #[actix_web::test]
    async fn non_numeric_key_is_not_found() {
        let app = test::init_service(test_app(lazy_pool(), test_config())).await;
        let req = test::TestRequest::get().uri("/warrants/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Warrant not found");
    }

    #[actix_web::test]
    async fn bad_paging_is_rejected() {
        let app = test::init_service(test_app(lazy_pool(), test_config())).await;
        let req = test::TestRequest::get().uri("/lots?limit=many").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Bad Request");
    }

    #[actix_web::test]
    async fn protected_resource_requires_token() {
        let mut config = test_config();
        config.protected_resources = vec!["payments".to_string()];
        let app = test::init_service(test_app(lazy_pool(), config)).await;

        let req = test::TestRequest::get().uri("/payments").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // unlisted resources stay open; the lazy pool fails only once SQL runs
        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json(json!({ "Color": "green" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn crud_round_trip() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let app = test::init_service(test_app(pool, test_config())).await;
        let name = format!("AA-{}", Uuid::new_v4());

        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json(json!({ "GradeName": name, "GradeCode": "AA", "ClassId": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_u64().unwrap();

        let req = test::TestRequest::get().uri(&format!("/grades/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let row: Value = test::read_body_json(resp).await;
        assert_eq!(row["GradeId"], id);
        assert_eq!(row["GradeName"], name.as_str());
        assert_eq!(row["GradeCode"], "AA");
        assert_eq!(row["ClassId"], 1);

        // partial update keeps untouched columns
        let req = test::TestRequest::put()
            .uri(&format!("/grades/{}", id))
            .set_json(json!({ "Description": "Bold, bright acidity" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&format!("/grades/{}", id)).to_request();
        let row: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(row["Description"], "Bold, bright acidity");
        assert_eq!(row["GradeCode"], "AA");

        let req = test::TestRequest::get().uri("/grades").to_request();
        let rows: Value = test::call_and_read_body_json(&app, req).await;
        assert!(rows.as_array().unwrap().iter().any(|r| r["GradeId"] == id));

        // duplicate unique column
        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json(json!({ "GradeName": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::delete().uri(&format!("/grades/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri(&format!("/grades/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_keys_are_not_found() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let app = test::init_service(test_app(pool, test_config())).await;
        let missing = "/grades/2147483000";

        let req = test::TestRequest::get().uri(missing).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(missing)
            .set_json(json!({ "Description": "none" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(missing).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn concurrent_creates_get_distinct_keys() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let app = test::init_service(test_app(pool, test_config())).await;

        let requests = (0..16).map(|_| {
            let req = test::TestRequest::post()
                .uri("/grades")
                .set_json(json!({ "GradeName": format!("C-{}", Uuid::new_v4()) }))
                .to_request();
            test::call_and_read_body_json::<_, _, Value>(&app, req)
        });
        let created = futures::future::join_all(requests).await;

        let mut ids: Vec<u64> = created.iter().map(|c| c["id"].as_u64().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}

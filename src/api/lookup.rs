use crate::{
    api::{LookupRoute, Operation, Resource},
    error::ApiError,
    utils::db_utils::{build_select_where, coerce, fetch_all},
};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use sqlx::MySqlPool;
use tracing::debug;

/// Fixed multi-column lookup. Always answers with an array, empty when
/// nothing matches or a path value cannot match the column type.
pub async fn lookup(
    Resource(entity): Resource,
    LookupRoute(lookup): LookupRoute,
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, ApiError> {
    let mut filters = Vec::with_capacity(lookup.columns.len());

    for name in lookup.columns {
        let column = entity
            .column(name)
            .ok_or_else(|| ApiError::Internal(format!("lookup on unknown column {}", name)))?;
        let raw = req.match_info().get(name).unwrap_or_default();

        match coerce(column, &Value::String(raw.to_string())) {
            Ok(value) => filters.push((column.name, value)),
            Err(reason) => {
                debug!(column = column.name, ty = %column.ty, raw, reason = %reason,"Lookup value cannot match");
                return Ok(HttpResponse::Ok().json(Vec::<Value>::new()));
            }
        }
    }

    let rows = fetch_all(pool.get_ref(), entity, build_select_where(entity, filters)).await?;

    debug!(op = %Operation::Lookup, table = entity.table, rows = rows.len(), "Lookup");
    Ok(HttpResponse::Ok().json(rows))
}

use crate::auth::password::hash_password;
use crate::error::{ApiError, FieldError};
use crate::model::{Column, ColumnType, Entity};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use sqlx::mysql::{MySqlQueryResult, MySqlRow};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use tracing::debug;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    I64(i64),
    Decimal(Decimal),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Null,
}

/// ===============================
/// SQL statement container
/// ===============================
#[derive(Debug)]
pub struct SqlStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Backtick-quote an identifier. Identifiers only ever come from the entity catalog.
pub fn quoted(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Key first, then every column that may be returned to a client.
pub fn select_columns(entity: &Entity) -> String {
    std::iter::once(entity.key)
        .chain(entity.visible_columns().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Path keys are integers; anything else cannot match a row.
pub fn parse_key(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// ===============================
/// JSON -> SqlValue for one column
/// ===============================
pub fn coerce(column: &Column, value: &Value) -> Result<SqlValue, String> {
    if value.is_null() {
        return match column.ty {
            ColumnType::Password => Err("must be a non-empty string".to_string()),
            _ => Ok(SqlValue::Null),
        };
    }

    match column.ty {
        ColumnType::Int => match value {
            Value::Number(n) => n.as_i64().map(SqlValue::I64),
            Value::String(s) => s.trim().parse().ok().map(SqlValue::I64),
            _ => None,
        }
        .ok_or_else(|| "must be an integer".to_string()),

        ColumnType::Decimal => match value {
            Value::Number(n) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .ok(),
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        }
        .map(SqlValue::Decimal)
        .ok_or_else(|| "must be a number".to_string()),

        ColumnType::Text => match value {
            Value::String(s) => Ok(SqlValue::String(s.clone())),
            Value::Number(n) => Ok(SqlValue::String(n.to_string())),
            _ => Err("must be a string".to_string()),
        },

        ColumnType::Date => value
            .as_str()
            .and_then(parse_date)
            .map(SqlValue::Date)
            .ok_or_else(|| "must be a date (YYYY-MM-DD)".to_string()),

        ColumnType::DateTime => value
            .as_str()
            .and_then(parse_datetime)
            .map(SqlValue::DateTime)
            .ok_or_else(|| "must be a datetime (YYYY-MM-DD HH:MM:SS)".to_string()),

        ColumnType::Flag => match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            _ => None,
        }
        .map(SqlValue::Bool)
        .ok_or_else(|| "must be 0, 1 or a boolean".to_string()),

        ColumnType::Password => match value {
            Value::String(s) if !s.is_empty() => Ok(SqlValue::String(s.clone())),
            _ => Err("must be a non-empty string".to_string()),
        },
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date()))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
}

/// Replaces plaintext in password columns with its bcrypt hash.
fn seal(column: &Column, value: SqlValue) -> Result<SqlValue, ApiError> {
    match (column.ty, value) {
        (ColumnType::Password, SqlValue::String(plain)) => hash_password(&plain)
            .map(SqlValue::String)
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e))),
        (_, value) => Ok(value),
    }
}

fn payload_object(payload: &Value) -> Result<&Map<String, Value>, ApiError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("Payload must be a JSON object"))?;

    if obj.is_empty() {
        return Err(ApiError::bad_request("No fields provided"));
    }
    Ok(obj)
}

fn unknown_keys(entity: &Entity, obj: &Map<String, Value>) -> Vec<FieldError> {
    obj.keys()
        .filter(|k| entity.column(k).is_none())
        .map(|k| {
            if k == entity.key {
                FieldError::new(k.as_str(), "Primary key cannot be set")
            } else {
                FieldError::new(k.as_str(), "Unknown field")
            }
        })
        .collect()
}

/// Coerces every allow-listed column present in `obj`, in catalog order.
/// With `enforce_required`, absent or null required columns are errors.
fn collect_assignments(
    entity: &Entity,
    obj: &Map<String, Value>,
    enforce_required: bool,
) -> Result<Vec<(&'static Column, SqlValue)>, ApiError> {
    let mut errors = unknown_keys(entity, obj);
    let mut assignments = Vec::with_capacity(obj.len());

    for column in entity.columns {
        match obj.get(column.name) {
            None if enforce_required && column.required => {
                errors.push(FieldError::new(column.name, "is required"));
            }
            None => {}
            Some(raw) => match coerce(column, raw) {
                Ok(SqlValue::Null) if enforce_required && column.required => {
                    errors.push(FieldError::new(column.name, "must not be null"));
                }
                Ok(value) => assignments.push((column, value)),
                Err(message) => errors.push(FieldError::new(column.name, message)),
            },
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    assignments
        .into_iter()
        .map(|(column, value)| seal(column, value).map(|v| (column, v)))
        .collect()
}

/// ===============================
/// Build INSERT from an allow-listed payload
/// ===============================
pub fn build_insert_sql(entity: &Entity, payload: &Value) -> Result<SqlStatement, ApiError> {
    let obj = payload_object(payload)?;
    let assignments = collect_assignments(entity, obj, true)?;

    let columns = assignments
        .iter()
        .map(|(c, _)| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; assignments.len()].join(", ");

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(entity.table),
        columns,
        placeholders
    );

    Ok(SqlStatement {
        sql,
        values: assignments.into_iter().map(|(_, v)| v).collect(),
    })
}

/// ===============================
/// Build partial UPDATE by key
/// ===============================
pub fn build_update_sql(
    entity: &Entity,
    payload: &Value,
    key: i64,
) -> Result<SqlStatement, ApiError> {
    let obj = payload_object(payload)?;
    let assignments = collect_assignments(entity, obj, false)?;

    let set_clause = assignments
        .iter()
        .map(|(c, _)| format!("{} = ?", quoted(c.name)))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(entity.table),
        set_clause,
        quoted(entity.key)
    );

    let mut values: Vec<SqlValue> = assignments.into_iter().map(|(_, v)| v).collect();
    values.push(SqlValue::I64(key));

    Ok(SqlStatement { sql, values })
}

pub fn build_select_all(entity: &Entity, limit: Option<u32>, offset: Option<u32>) -> SqlStatement {
    let limit = match (limit, entity.list_limit) {
        (Some(requested), Some(cap)) => Some(requested.min(cap)),
        (requested, cap) => requested.or(cap),
    };

    let mut sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_columns(entity),
        quoted(entity.table),
        quoted(entity.key)
    );
    let mut values = Vec::new();

    match (limit, offset) {
        (Some(limit), Some(offset)) => {
            sql.push_str(" LIMIT ? OFFSET ?");
            values.push(SqlValue::I64(limit as i64));
            values.push(SqlValue::I64(offset as i64));
        }
        (Some(limit), None) => {
            sql.push_str(" LIMIT ?");
            values.push(SqlValue::I64(limit as i64));
        }
        // MySQL has no OFFSET without LIMIT
        (None, Some(offset)) => {
            sql.push_str(" LIMIT ? OFFSET ?");
            values.push(SqlValue::I64(i64::MAX));
            values.push(SqlValue::I64(offset as i64));
        }
        (None, None) => {}
    }

    SqlStatement { sql, values }
}

pub fn build_select_by_key(entity: &Entity, key: i64) -> SqlStatement {
    SqlStatement {
        sql: format!(
            "SELECT {} FROM {} WHERE {} = ?",
            select_columns(entity),
            quoted(entity.table),
            quoted(entity.key)
        ),
        values: vec![SqlValue::I64(key)],
    }
}

/// `SELECT ... WHERE a = ? AND b = ?`, for the fixed lookup routes.
pub fn build_select_where(entity: &Entity, filters: Vec<(&str, SqlValue)>) -> SqlStatement {
    let conditions = filters
        .iter()
        .map(|(name, _)| format!("{} = ?", quoted(name)))
        .collect::<Vec<_>>()
        .join(" AND ");

    SqlStatement {
        sql: format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {}",
            select_columns(entity),
            quoted(entity.table),
            conditions,
            quoted(entity.key)
        ),
        values: filters.into_iter().map(|(_, v)| v).collect(),
    }
}

pub fn build_delete_by_key(entity: &Entity, key: i64) -> SqlStatement {
    SqlStatement {
        sql: format!(
            "DELETE FROM {} WHERE {} = ?",
            quoted(entity.table),
            quoted(entity.key)
        ),
        values: vec![SqlValue::I64(key)],
    }
}

fn bind_all<'q>(
    mut query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    values: Vec<SqlValue>,
) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
    for value in values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::Decimal(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::DateTime(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }
    query
}

/// ===============================
/// Execute INSERT / UPDATE / DELETE
/// ===============================
pub async fn execute(pool: &MySqlPool, stmt: SqlStatement) -> Result<MySqlQueryResult, sqlx::Error> {
    debug!(sql = %stmt.sql, params = stmt.values.len(), "Executing statement");
    bind_all(sqlx::query(&stmt.sql), stmt.values)
        .execute(pool)
        .await
}

pub async fn fetch_all(
    pool: &MySqlPool,
    entity: &Entity,
    stmt: SqlStatement,
) -> Result<Vec<Value>, sqlx::Error> {
    debug!(sql = %stmt.sql, params = stmt.values.len(), "Fetching rows");
    let rows = bind_all(sqlx::query(&stmt.sql), stmt.values)
        .fetch_all(pool)
        .await?;

    rows.iter().map(|row| row_to_json(entity, row)).collect()
}

pub async fn fetch_optional(
    pool: &MySqlPool,
    entity: &Entity,
    stmt: SqlStatement,
) -> Result<Option<Value>, sqlx::Error> {
    debug!(sql = %stmt.sql, params = stmt.values.len(), "Fetching row");
    let row = bind_all(sqlx::query(&stmt.sql), stmt.values)
        .fetch_optional(pool)
        .await?;

    row.map(|r| row_to_json(entity, &r)).transpose()
}

/// ===============================
/// MySqlRow -> JSON object
/// ===============================
pub fn row_to_json(entity: &Entity, row: &MySqlRow) -> Result<Value, sqlx::Error> {
    let mut map = Map::new();
    map.insert(
        entity.key.to_string(),
        decode_cell(row, &Column::new(entity.key, ColumnType::Int))?,
    );
    for column in entity.visible_columns() {
        map.insert(column.name.to_string(), decode_cell(row, column)?);
    }
    Ok(Value::Object(map))
}

// Integer signedness and text collations vary across the legacy schema, so
// those columns skip sqlx's type-compatibility check.
fn decode_cell(row: &MySqlRow, column: &Column) -> Result<Value, sqlx::Error> {
    let name = column.name;
    let value = match column.ty {
        ColumnType::Int | ColumnType::Flag => row
            .try_get_unchecked::<Option<i64>, _>(name)?
            .map(Value::from),
        ColumnType::Text => row
            .try_get_unchecked::<Option<String>, _>(name)?
            .map(Value::String),
        ColumnType::Decimal => row
            .try_get::<Option<Decimal>, _>(name)?
            .map(|d| Value::String(d.to_string())),
        ColumnType::Date => row
            .try_get::<Option<NaiveDate>, _>(name)?
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
        ColumnType::DateTime => row
            .try_get::<Option<NaiveDateTime>, _>(name)?
            .map(|d| Value::String(d.format("%Y-%m-%d %H:%M:%S").to_string())),
        ColumnType::Password => None,
    };
    Ok(value.unwrap_or(Value::Null))
}

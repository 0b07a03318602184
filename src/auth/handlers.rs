use crate::{
    auth::{jwt::generate_token, password::verify_password},
    config::Config,
    error::{ApiError, FieldError},
    model::user::{CREATED_AT, PASSWORD, USERNAME, USERS},
    models::{LoginReqDto, LoginResponse, RegisterReq},
    utils::db_utils::{build_insert_sql, execute, quoted, row_to_json, select_columns},
};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde_json::{Map, Value, json};
use sqlx::{MySqlPool, Row};
use tracing::{debug, error, info, instrument, warn};

// auth end points

fn validate_registration(user: &RegisterReq) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if user.username.trim().is_empty() {
        errors.push(FieldError::new("username", "must not be empty"));
    }
    if user.password.is_empty() {
        errors.push(FieldError::new("password", "must not be empty"));
    }
    if let Some(email) = &user.email {
        if !email.contains('@') {
            errors.push(FieldError::new("email", "must be a valid email address"));
        }
    }
    for key in [USERNAME, PASSWORD] {
        if user.profile.contains_key(key) {
            errors.push(FieldError::new(key, "Unknown field"));
        }
    }

    errors
}

/// Row for `users`, built from the registration body.
fn registration_payload(user: RegisterReq) -> Value {
    let mut row = Map::new();
    row.insert(USERNAME.to_string(), Value::String(user.username.trim().to_string()));
    row.insert(PASSWORD.to_string(), Value::String(user.password));
    if let Some(email) = user.email {
        row.insert("email".to_string(), Value::String(email));
    }
    row.extend(user.profile);
    row.entry(CREATED_AT)
        .or_insert_with(|| Value::String(Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string()));

    Value::Object(row)
}

/// User registration handler
#[instrument(name = "auth_register", skip(pool, user), fields(username = %user.username))]
pub async fn register(
    user: web::Json<RegisterReq>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, ApiError> {
    let errors = validate_registration(&user);
    if !errors.is_empty() {
        info!("Validation failed");
        return Err(ApiError::validation(errors));
    }

    // hashes the password on the way in
    let stmt = build_insert_sql(&USERS, &registration_payload(user.into_inner()))?;

    let result = execute(pool.get_ref(), stmt)
        .await
        .map_err(|e| ApiError::from_db(e, "Username already exists"))?;

    info!(user_id = result.last_insert_id(), "User registered");
    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "id": result.last_insert_id(),
    })))
}

#[instrument(
    name = "auth_login",
    skip(pool, config, user),
    fields(username = %user.username)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    // 1️⃣ Basic validation
    if user.username.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(ApiError::bad_request("Username and password are required"));
    }

    debug!("Fetching user from database");

    // 2️⃣ Fetch user, hash included only for the comparison below
    let sql = format!(
        "SELECT {}, {} FROM {} WHERE {} = ?",
        select_columns(&USERS),
        quoted(PASSWORD),
        quoted(USERS.table),
        quoted(USERNAME)
    );
    let row = match sqlx::query(&sql)
        .bind(user.username.trim())
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(row)) => row,
        Ok(None) => {
            info!("Invalid credentials: user not found");
            return Err(ApiError::invalid_credentials());
        }
        Err(e) => {
            error!(error = %e, "Database error while fetching user");
            return Err(ApiError::DatabaseFault(e));
        }
    };

    let stored_hash: String = row.try_get_unchecked(PASSWORD)?;
    let profile = row_to_json(&USERS, &row)?;
    let user_id = profile[USERS.key]
        .as_i64()
        .ok_or_else(|| ApiError::Internal("user row without id".to_string()))?;

    // 3️⃣ Verify password
    debug!("Verifying password");

    match verify_password(&user.password, &stored_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!("Invalid credentials: password mismatch");
            return Err(ApiError::invalid_credentials());
        }
        Err(e) => {
            warn!(error = %e, user_id, "Stored password is not a bcrypt hash");
            return Err(ApiError::invalid_credentials());
        }
    }

    // 4️⃣ Issue token
    let token = generate_token(user_id, user.username.trim(), &config.jwt_secret, config.token_ttl)
        .map_err(|e| ApiError::Internal(format!("token encoding failed: {}", e)))?;

    info!(user_id, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: profile,
    }))
}

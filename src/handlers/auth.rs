// src/handlers/auth.rs

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{AuthResponse, CreateUserRequest, LoginRequest, PublicUser, User},
    utils::{
        hash::{hash_password, verify_password},
        jwt::{bearer_token, sign_jwt, verify_jwt},
    },
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created with a token so the client is signed in immediately.
pub async fn register(
    State(pool): State<PgPool>,
    State(config): State<Config>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password, created_at
        "#,
    )
    .bind(payload.name.trim())
    .bind(payload.email.trim().to_lowercase())
    .bind(hashed_password)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            AppError::Conflict("Email already exists".to_string())
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    tracing::info!(user_id = user.id, "Registered new user");

    let token = sign_jwt(&user, &config.jwt_secret, config.jwt_expiration)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// Authenticates a user and returns a JWT token.
///
/// Unknown emails answer 404 and wrong passwords 401.
pub async fn login(
    State(pool): State<PgPool>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(payload.email.trim().to_lowercase())
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?
    .ok_or(AppError::NotFound("User does not exist".to_string()))?;

    if !verify_password(&payload.password, &user.password)? {
        return Err(AppError::AuthError("Incorrect password".to_string()));
    }

    let token = sign_jwt(&user, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        token,
        user: PublicUser::from(&user),
    }))
}

/// Checks the bearer token and echoes the user it belongs to.
///
/// Unlike the protected routes this answers with a JSON body either way, so
/// clients can tell an expired session from a bad token.
pub async fn verify_token(
    State(config): State<Config>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let Some(token) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token is missing", "valid": false })),
        );
    };

    match verify_jwt(token, &config.jwt_secret) {
        Ok(claims) => (
            StatusCode::OK,
            Json(json!({
                "valid": true,
                "user": PublicUser {
                    id: claims.sub,
                    name: claims.name,
                    email: claims.email,
                },
            })),
        ),
        Err(e) => {
            let message = match e {
                AppError::AuthError(msg) => msg,
                other => other.to_string(),
            };
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message, "valid": false })),
            )
        }
    }
}

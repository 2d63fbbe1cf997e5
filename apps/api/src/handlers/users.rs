use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use tracing::info;
use utilisateur_domain::{USER_DELETED_MESSAGE, UserFilter, UserId, UserPatch};

use crate::dto::{CreateUserRequest, GenericMessageResponse, UpdateUserRequest, UserResponse};
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Default, serde::Deserialize)]
pub struct UserListQuery {
    pub prenom: Option<String>,
    pub nom: Option<String>,
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .list_users(UserFilter::new(query.prenom, query.nom))
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user(UserId::parse(user_id.as_str())?)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<UserResponse>)> {
    let user = state
        .user_service
        .create_user(
            payload.prenom.as_deref().unwrap_or_default(),
            payload.nom.as_deref().unwrap_or_default(),
        )
        .await?;

    info!(user_id = %user.id(), "user created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("/users/{}", user.id()))],
        Json(UserResponse::from(user)),
    ))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(
            UserId::parse(user_id.as_str())?,
            UserPatch::new(payload.prenom, payload.nom),
        )
        .await?;

    info!(user_id = %user.id(), "user updated");

    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<GenericMessageResponse>> {
    let user_id = UserId::parse(user_id.as_str())?;
    state.user_service.delete_user(user_id).await?;

    info!(user_id = %user_id, "user deleted");

    Ok(Json(GenericMessageResponse {
        message: USER_DELETED_MESSAGE.to_owned(),
    }))
}

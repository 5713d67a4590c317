use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequestParts, Path, State as AxumState, rejection::JsonRejection},
    http::request::Parts,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::admin::{AdminUserForm, admin_view};
use crate::profile::{ProfileData, parse_stored_profile, serialize_profile};
use crate::server::{error::AppError, state::State};
use crate::store::{Role, UserRecord};

pub const USER_HEADER: &str = "x-user-id";

/// The signed-in user, taken from the identity header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| Caller(v.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}

async fn active_user(state: &State, caller: &Caller) -> Result<UserRecord, AppError> {
    let user = state
        .store
        .user(&caller.0)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", caller.0)))?;
    if user.role == Role::Banned {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

async fn admin_user(state: &State, caller: &Caller) -> Result<UserRecord, AppError> {
    let user = active_user(state, caller).await?;
    if user.role != Role::Admin {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

pub async fn get_profile(
    AxumState(state): AxumState<Arc<State>>,
    caller: Caller,
) -> Result<Json<Value>, AppError> {
    let user = active_user(&state, &caller).await?;
    Ok(Json(parse_stored_profile(user.profile_content.as_deref())))
}

pub async fn post_profile(
    AxumState(state): AxumState<Arc<State>>,
    caller: Caller,
    payload: Result<Json<ProfileData>, JsonRejection>,
) -> Result<Json<String>, AppError> {
    let user = active_user(&state, &caller).await?;
    let Json(data) = payload?;

    let content = serialize_profile(&data)?;
    let updated = state.store.set_profile(&user.id, content).await?;
    debug!("Stored profile for {}", updated.id);

    Ok(Json(updated.profile_content.unwrap_or_default()))
}

pub async fn get_admin_user(
    AxumState(state): AxumState<Arc<State>>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    admin_user(&state, &caller).await?;
    let user = state
        .store
        .user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
    Ok(Json(admin_view(user)))
}

pub async fn post_update_user(
    AxumState(state): AxumState<Arc<State>>,
    caller: Caller,
    payload: Result<Json<AdminUserForm>, JsonRejection>,
) -> Result<Json<UserRecord>, AppError> {
    let admin = admin_user(&state, &caller).await?;
    let Json(form) = payload?;

    let request = form.reformat()?;
    let id = request.id.clone();
    let updated = state.store.update_user(&id, request.into_update()).await?;
    info!("{} updated user {id}", admin.id);

    Ok(Json(admin_view(updated)))
}

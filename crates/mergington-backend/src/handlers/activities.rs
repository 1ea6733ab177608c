use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};

use mergington::data::{Activities, Activity, EmailQuery, MessageResponse};
use mergington::id::{ActivityName, ParticipantEmail};
use mergington::log;

use super::ApiError;
use crate::services::RosterService;

/// Where `GET /` sends browsers.
pub const INDEX_PAGE: &str = "/static/index.html";

/// Handler for `/`, redirects to the frontend
pub async fn index() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

/// Handler to list every activity with its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Activities>, ApiError> {
    let activities = state.roster.list_activities().await?;
    Ok(Json(activities))
}

/// Handler to get a single activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let activity = state.roster.get_activity(&activity_name.into()).await?;
    Ok(Json(activity))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = ActivityName::from(activity_name);
    let email = ParticipantEmail::from(query.email);

    let message = state
        .roster
        .enroll(&activity_name, &email)
        .await
        .inspect_err(|err| {
            log::debug!("Signup of {} for {} failed: {}", email, activity_name, err)
        })?;

    Ok(Json(MessageResponse { message }))
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = ActivityName::from(activity_name);
    let email = ParticipantEmail::from(query.email);

    let message = state
        .roster
        .withdraw(&activity_name, &email)
        .await
        .inspect_err(|err| {
            log::debug!("Unregister of {} from {} failed: {}", email, activity_name, err)
        })?;

    Ok(Json(MessageResponse { message }))
}

use crate::{
    api::models::*,
    core::{
        booking::BookingSummary,
        errors::SquadError,
        models::{
            audit::{AppLog, GroupAudit},
            group::Group,
            movie::Movie,
        },
        services::SquadService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    routing::{delete, get, post},
};

use std::sync::Arc;

pub type SharedService = Arc<SquadService<InMemoryLogging, InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/movies", get(list_movies))
        .route("/groups", post(create_group).get(get_group_by_query))
        .route("/groups/{group_id}", get(get_group).patch(patch_group))
        .route("/groups/{group_id}/vote", post(cast_vote))
        .route("/groups/{group_id}/vote/{member_id}", delete(withdraw_vote))
        .route("/groups/{group_id}/summary", get(booking_summary))
        .route("/groups/{group_id}/audits", get(get_group_audits))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

pub(crate) async fn health() -> &'static str {
    "OK"
}

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "Movie catalog", body = [Movie])
    )
)]
pub(crate) async fn list_movies(State(service): State<SharedService>) -> Json<Vec<Movie>> {
    Json(service.list_movies())
}

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Group created successfully", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_group(
    State(service): State<SharedService>,
    payload: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<Json<Group>, ApiError> {
    let Json(req) = payload?;
    let group = service.create_group(req.name, req.created_by, req.movies).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups",
    params(GroupQuery),
    responses(
        (status = 200, description = "Group retrieved successfully", body = Group),
        (status = 400, description = "Group ID required", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_by_query(
    State(service): State<SharedService>,
    Query(query): Query<GroupQuery>,
) -> Result<Json<Group>, ApiError> {
    let group_id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or(SquadError::MissingGroupId)?;
    let group = service.get_group(&group_id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group to retrieve")
    ),
    responses(
        (status = 200, description = "Group retrieved successfully", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    let group = service.get_group(&group_id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    patch,
    path = "/groups/{group_id}",
    request_body = PatchGroupRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group to update")
    ),
    responses(
        (status = 200, description = "Group updated successfully", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Update not allowed in the current state", body = ErrorResponse)
    )
)]
pub(crate) async fn patch_group(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    payload: Result<Json<PatchGroupRequest>, JsonRejection>,
) -> Result<Json<Group>, ApiError> {
    // Unknown groups are a 404 whatever the body looks like.
    service.get_group(&group_id).await?;
    let Json(req) = payload?;
    let group = service.update_group(&group_id, req.into_updates()?).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/groups/{group_id}/vote",
    request_body = VoteRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group to vote in")
    ),
    responses(
        (status = 200, description = "Vote recorded", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Voting is closed", body = ErrorResponse)
    )
)]
pub(crate) async fn cast_vote(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<Group>, ApiError> {
    let Json(req) = payload?;
    let group = service
        .cast_vote(&group_id, req.member_id, req.member_name, req.movie_id)
        .await?;
    Ok(Json(group))
}

#[utoipa::path(
    delete,
    path = "/groups/{group_id}/vote/{member_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group"),
        ("member_id" = String, Path, description = "ID of the member withdrawing their vote")
    ),
    responses(
        (status = 200, description = "Vote withdrawn", body = Group),
        (status = 404, description = "Group or member not found", body = ErrorResponse),
        (status = 409, description = "Nothing to withdraw or voting is closed", body = ErrorResponse)
    )
)]
pub(crate) async fn withdraw_vote(
    State(service): State<SharedService>,
    Path((group_id, member_id)): Path<(String, String)>,
) -> Result<Json<Group>, ApiError> {
    let group = service.withdraw_vote(&group_id, member_id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/summary",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Booking summary", body = BookingSummary),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Booking not confirmed yet", body = ErrorResponse)
    )
)]
pub(crate) async fn booking_summary(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<BookingSummary>, ApiError> {
    let summary = service.booking_summary(&group_id).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/audits",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Group audit trail", body = [GroupAudit]),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_group_audits(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<GroupAudit>>, ApiError> {
    let audits = service.get_group_audits(&group_id).await?;
    Ok(Json(audits))
}

#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "Application activity log", body = [AppLog])
    )
)]
pub(crate) async fn get_app_logs(State(service): State<SharedService>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

use utoipa::OpenApi;

use crate::{
    api::models::{CreateGroupRequest, ErrorResponse, PatchGroupRequest, VoteRequest},
    core::{
        booking::BookingSummary,
        models::{
            audit::{AppLog, GroupAudit},
            group::{Group, GroupStatus, Member},
            movie::Movie,
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_movies,
        super::handlers::create_group,
        super::handlers::get_group_by_query,
        super::handlers::get_group,
        super::handlers::patch_group,
        super::handlers::cast_vote,
        super::handlers::withdraw_vote,
        super::handlers::booking_summary,
        super::handlers::get_group_audits,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateGroupRequest,
        VoteRequest,
        PatchGroupRequest,
        ErrorResponse,
        Group,
        GroupStatus,
        Member,
        Movie,
        BookingSummary,
        AppLog,
        GroupAudit
    )),
    info(
        title = "Squad Seats API",
        description = "API for voting on a movie as a group and booking seats together",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

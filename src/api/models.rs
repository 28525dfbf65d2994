use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::booking::GroupUpdate;
use crate::core::errors::SquadError;
use crate::core::models::group::GroupStatus;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub created_by: String,
    pub movies: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub member_id: String,
    pub member_name: String,
    pub movie_id: String,
}

/// Fields a client may change on an existing group. Anything else in the
/// body is rejected.
#[derive(Deserialize, ToSchema, Default, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchGroupRequest {
    pub name: Option<String>,
    pub selected_showtime: Option<String>,
    pub selected_seats: Option<Vec<String>>,
    pub status: Option<GroupStatus>,
}

impl PatchGroupRequest {
    pub fn into_updates(self) -> Result<Vec<GroupUpdate>, SquadError> {
        let mut updates = Vec::new();
        if let Some(name) = self.name {
            updates.push(GroupUpdate::Rename { name });
        }

        match (self.selected_showtime, self.selected_seats, self.status) {
            (None, None, None) => {}
            (Some(showtime), Some(seats), None | Some(GroupStatus::Confirmed)) => {
                updates.push(GroupUpdate::ConfirmBooking { showtime, seats });
            }
            (None, None, Some(GroupStatus::Completed)) => updates.push(GroupUpdate::Complete),
            (None, None, Some(GroupStatus::Voting)) => {
                return Err(SquadError::invalid_input(
                    "status",
                    "Invalid status",
                    "A group cannot be moved back to voting",
                ));
            }
            (None, None, Some(GroupStatus::Confirmed)) | (Some(_), None, _) | (None, Some(_), _) => {
                return Err(SquadError::invalid_input(
                    "selectedSeats",
                    "Incomplete booking",
                    "Confirming a booking needs both selectedShowtime and selectedSeats",
                ));
            }
            (Some(_), Some(_), Some(status)) => {
                return Err(SquadError::invalid_input(
                    "status",
                    "Invalid status",
                    format!("Cannot set status {} together with a booking", status),
                ));
            }
        }
        Ok(updates)
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupQuery {
    /// ID of the group to retrieve
    pub id: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SquadError to implement IntoResponse
pub struct ApiError(pub SquadError);

impl From<SquadError> for ApiError {
    fn from(err: SquadError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(SquadError::invalid_input(
            "body",
            "Malformed body",
            rejection.body_text(),
        ))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SquadError::GroupNotFound(_) | SquadError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            SquadError::MissingGroupId
            | SquadError::InvalidInput(..)
            | SquadError::MovieNotFound(_)
            | SquadError::MovieNotInShortlist(_)
            | SquadError::InvalidShowtime(_)
            | SquadError::InvalidSeat(_)
            | SquadError::DuplicateSeat(_)
            | SquadError::SeatCountMismatch { .. } => StatusCode::BAD_REQUEST,
            SquadError::VotingClosed(_)
            | SquadError::NoVoteToWithdraw(_)
            | SquadError::WinnerNotDecided(_)
            | SquadError::InvalidStatusTransition { .. }
            | SquadError::BookingNotConfirmed(_) => StatusCode::CONFLICT,
            SquadError::StorageError(_) | SquadError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self.0 {
            SquadError::GroupNotFound(_) => "Group not found".to_string(),
            SquadError::InvalidInput(_, field) => format!("{}: {}", field.title, field.description),
            other => other.to_string(),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

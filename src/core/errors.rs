use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum SquadError {
    #[error("Group {0} not found")]
    GroupNotFound(String),
    #[error("Group ID required")]
    MissingGroupId,
    #[error("Member {0} not found")]
    MemberNotFound(String),
    #[error("Movie {0} not found")]
    MovieNotFound(String),
    #[error("Movie {0} is not on the group shortlist")]
    MovieNotInShortlist(String),
    #[error("Voting is closed for group {0}")]
    VotingClosed(String),
    #[error("Member {0} has no vote to withdraw")]
    NoVoteToWithdraw(String),
    #[error("No winning movie decided for group {0}")]
    WinnerNotDecided(String),
    #[error("Showtime {0} is not available for the winning movie")]
    InvalidShowtime(String),
    #[error("Invalid seat: {0}")]
    InvalidSeat(String),
    #[error("Seat {0} selected more than once")]
    DuplicateSeat(String),
    #[error("Expected {expected} seats, got {actual}")]
    SeatCountMismatch { expected: usize, actual: usize },
    #[error("Cannot move group from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("Booking for group {0} is not confirmed")]
    BookingNotConfirmed(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl SquadError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SquadError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.into(),
                description: description.into(),
            },
        )
    }
}

use crate::core::voting::VoteTally;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Voting,
    Confirmed,
    Completed,
}

impl GroupStatus {
    /// Confirming again while confirmed overwrites the booking.
    pub fn can_transition_to(self, next: GroupStatus) -> bool {
        matches!(
            (self, next),
            (GroupStatus::Voting, GroupStatus::Confirmed)
                | (GroupStatus::Confirmed, GroupStatus::Confirmed)
                | (GroupStatus::Confirmed, GroupStatus::Completed)
        )
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GroupStatus::Voting => "voting",
            GroupStatus::Confirmed => "confirmed",
            GroupStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<String>,
}

impl Member {
    pub fn new(id: String, name: String) -> Self {
        Member { id, name, vote: None }
    }

    pub fn has_voted(&self) -> bool {
        self.vote.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub members: Vec<Member>,
    pub movies: Vec<String>,
    #[schema(value_type = Object)]
    pub votes: VoteTally,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_showtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_seats: Option<Vec<String>>,
    pub status: GroupStatus,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Group {
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn has_movie(&self, movie_id: &str) -> bool {
        self.movies.iter().any(|m| m == movie_id)
    }

    pub fn all_voted(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(Member::has_voted)
    }

    pub fn voted_count(&self) -> usize {
        self.members.iter().filter(|m| m.has_voted()).count()
    }
}

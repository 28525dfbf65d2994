mod booking_tests;
mod vote_tests;

use crate::core::models::group::Group;
use crate::core::services::SquadService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> SquadService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    SquadService::new(storage, logging)
}

pub async fn create_test_group(service: &SquadService<InMemoryLogging, InMemoryStorage>, movies: &[&str]) -> Group {
    service
        .create_group(
            "Friday Night".to_string(),
            "Alice".to_string(),
            movies.iter().map(|m| m.to_string()).collect(),
        )
        .await
        .unwrap()
}

pub fn creator_id(group: &Group) -> String {
    group.members[0].id.clone()
}

pub fn assert_tally_matches_members(group: &Group) {
    assert_eq!(group.votes.total(), group.voted_count() as i64);
    for member in &group.members {
        if let Some(vote) = &member.vote {
            assert!(group.votes.get(vote).unwrap_or(0) > 0, "vote {} has no tally", vote);
        }
    }
}

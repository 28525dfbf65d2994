use crate::core::booking::GroupUpdate;
use crate::core::errors::SquadError;
use crate::core::voting::VoteTally;
use crate::tests::{assert_tally_matches_members, create_test_group, create_test_service, creator_id};
use std::sync::Arc;

#[tokio::test]
async fn test_new_member_added_once() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2", "3"]).await;

    for movie in ["1", "2", "3", "2"] {
        service
            .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), movie.to_string())
            .await
            .unwrap();
    }

    let group = service.get_group(&group.id).await.unwrap();
    assert_eq!(group.members.len(), 2);
    assert_eq!(group.members[1].id, "m-bob");
    assert_eq!(group.members[1].vote.as_deref(), Some("2"));
    assert_tally_matches_members(&group);
}

#[tokio::test]
async fn test_returning_member_keeps_original_name() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;

    service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "1".to_string())
        .await
        .unwrap();
    let group = service
        .cast_vote(&group.id, "m-bob".to_string(), "Robert".to_string(), "2".to_string())
        .await
        .unwrap();

    assert_eq!(group.member("m-bob").unwrap().name, "Bob");
}

#[tokio::test]
async fn test_switching_vote_moves_tally() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;

    let before = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "1".to_string())
        .await
        .unwrap();
    assert_eq!(before.votes.get("1"), Some(1));

    let after = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "2".to_string())
        .await
        .unwrap();
    assert_eq!(after.votes.get("1"), Some(0));
    assert_eq!(after.votes.get("2"), Some(1));
    assert_eq!(after.votes.total(), before.votes.total());
    assert_tally_matches_members(&after);
}

#[tokio::test]
async fn test_revote_same_movie_keeps_tally() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);

    let first = service
        .cast_vote(&group.id, creator.clone(), "Alice".to_string(), "2".to_string())
        .await
        .unwrap();
    let second = service
        .cast_vote(&group.id, creator, "Alice".to_string(), "2".to_string())
        .await
        .unwrap();

    assert_eq!(first.votes, second.votes);
    assert_eq!(second.votes.get("2"), Some(1));
    assert_eq!(second.winning_movie.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_winner_set_when_last_member_votes() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);

    let partial = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "2".to_string())
        .await
        .unwrap();
    assert!(partial.winning_movie.is_none());

    let complete = service
        .cast_vote(&group.id, creator, "Alice".to_string(), "2".to_string())
        .await
        .unwrap();
    assert_eq!(complete.winning_movie.as_deref(), Some("2"));

    let audits = service.get_group_audits(&group.id).await.unwrap();
    assert_eq!(audits.iter().filter(|a| a.action == "winner_decided").count(), 1);
}

#[tokio::test]
async fn test_tie_goes_to_first_created_tally() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);

    // 1 gets the first ever vote, then Bob joins on 1 and Alice switches to 2.
    service
        .cast_vote(&group.id, creator.clone(), "Alice".to_string(), "1".to_string())
        .await
        .unwrap();
    service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "1".to_string())
        .await
        .unwrap();
    let group = service
        .cast_vote(&group.id, creator, "Alice".to_string(), "2".to_string())
        .await
        .unwrap();

    assert_eq!(group.votes.get("1"), Some(1));
    assert_eq!(group.votes.get("2"), Some(1));
    assert_eq!(group.winning_movie.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_tie_break_is_not_lexicographic() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);

    service
        .cast_vote(&group.id, creator, "Alice".to_string(), "2".to_string())
        .await
        .unwrap();
    let group = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "1".to_string())
        .await
        .unwrap();

    assert_eq!(group.winning_movie.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_vote_outside_shortlist_rejected() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;

    let result = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "5".to_string())
        .await;
    assert_eq!(result.unwrap_err(), SquadError::MovieNotInShortlist("5".to_string()));

    let unchanged = service.get_group(&group.id).await.unwrap();
    assert_eq!(unchanged.members.len(), 1);
    assert!(unchanged.votes.is_empty());
}

#[tokio::test]
async fn test_vote_on_missing_group() {
    let service = create_test_service();
    let result = service
        .cast_vote("nope", "m-bob".to_string(), "Bob".to_string(), "1".to_string())
        .await;
    assert_eq!(result.unwrap_err(), SquadError::GroupNotFound("nope".to_string()));
}

#[tokio::test]
async fn test_new_member_needs_a_name() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let result = service
        .cast_vote(&group.id, "m-bob".to_string(), " ".to_string(), "1".to_string())
        .await;
    assert!(matches!(result, Err(SquadError::InvalidInput(field, _)) if field == "memberName"));
}

#[tokio::test]
async fn test_withdraw_vote_clears_winner() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);

    let decided = service
        .cast_vote(&group.id, creator.clone(), "Alice".to_string(), "1".to_string())
        .await
        .unwrap();
    assert_eq!(decided.winning_movie.as_deref(), Some("1"));

    let withdrawn = service.withdraw_vote(&group.id, creator.clone()).await.unwrap();
    assert!(withdrawn.winning_movie.is_none());
    assert!(withdrawn.members[0].vote.is_none());
    assert_eq!(withdrawn.votes.get("1"), Some(0));
    assert_tally_matches_members(&withdrawn);

    let again = service.withdraw_vote(&group.id, creator).await;
    assert!(matches!(again, Err(SquadError::NoVoteToWithdraw(_))));

    let stranger = service.withdraw_vote(&group.id, "m-zed".to_string()).await;
    assert_eq!(stranger.unwrap_err(), SquadError::MemberNotFound("m-zed".to_string()));
}

#[tokio::test]
async fn test_voting_closed_after_confirmation() {
    let service = create_test_service();
    let group = create_test_group(&service, &["1", "2"]).await;
    let creator = creator_id(&group);
    service
        .cast_vote(&group.id, creator.clone(), "Alice".to_string(), "1".to_string())
        .await
        .unwrap();
    service
        .update_group(
            &group.id,
            vec![GroupUpdate::ConfirmBooking {
                showtime: "1:00 PM".to_string(),
                seats: vec!["D5".to_string()],
            }],
        )
        .await
        .unwrap();

    let late = service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "2".to_string())
        .await;
    assert!(matches!(late, Err(SquadError::VotingClosed(_))));

    let withdraw = service.withdraw_vote(&group.id, creator).await;
    assert!(matches!(withdraw, Err(SquadError::VotingClosed(_))));
}

#[tokio::test]
async fn test_concurrent_votes_are_not_lost() {
    let service = Arc::new(create_test_service());
    let group = create_test_group(&service, &["1", "2", "3"]).await;

    let votes = (0..50).map(|i| {
        let service = service.clone();
        let group_id = group.id.clone();
        tokio::spawn(async move {
            service
                .cast_vote(
                    &group_id,
                    format!("m-{}", i),
                    format!("Member {}", i),
                    ["1", "2", "3"][i % 3].to_string(),
                )
                .await
        })
    });
    for result in futures::future::join_all(votes).await {
        result.unwrap().unwrap();
    }

    let group = service.get_group(&group.id).await.unwrap();
    assert_eq!(group.members.len(), 51);
    assert_eq!(group.votes.total(), 50);
    assert_eq!(group.votes.get("1"), Some(17));
    assert!(group.winning_movie.is_none());
    assert_tally_matches_members(&group);
}

#[test]
fn test_tally_leader_and_order() {
    let mut tally = VoteTally::new();
    assert_eq!(tally.leader(), None);

    tally.increment("b");
    tally.increment("a");
    tally.increment("a");
    tally.decrement("a");
    assert_eq!(tally.leader(), Some("b"));

    tally.increment("a");
    assert_eq!(tally.leader(), Some("a"));

    let json = serde_json::to_string(&tally).unwrap();
    assert_eq!(json, r#"{"b":1,"a":2}"#);

    let back: VoteTally = serde_json::from_str(&json).unwrap();
    assert_eq!(back.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn test_tally_leader_ignores_zero_counts() {
    let mut tally = VoteTally::new();
    tally.increment("x");
    tally.decrement("x");
    assert_eq!(tally.get("x"), Some(0));
    assert_eq!(tally.leader(), None);
}

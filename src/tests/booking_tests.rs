use crate::core::booking::{GroupUpdate, validate_seat, validate_seats};
use crate::core::errors::SquadError;
use crate::core::models::group::{Group, GroupStatus};
use crate::core::services::SquadService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{create_test_group, create_test_service, creator_id};

/// Two members who both picked movie 3.
async fn decided_group(service: &SquadService<InMemoryLogging, InMemoryStorage>) -> Group {
    let group = create_test_group(service, &["3", "4"]).await;
    service
        .cast_vote(&group.id, "m-bob".to_string(), "Bob".to_string(), "3".to_string())
        .await
        .unwrap();
    service
        .cast_vote(&group.id, creator_id(&group), "Alice".to_string(), "3".to_string())
        .await
        .unwrap()
}

fn confirm(showtime: &str, seats: &[&str]) -> Vec<GroupUpdate> {
    vec![GroupUpdate::ConfirmBooking {
        showtime: showtime.to_string(),
        seats: seats.iter().map(|s| s.to_string()).collect(),
    }]
}

#[tokio::test]
async fn test_confirm_booking() {
    let service = create_test_service();
    let group = decided_group(&service).await;
    assert_eq!(group.winning_movie.as_deref(), Some("3"));

    let confirmed = service
        .update_group(&group.id, confirm("6:00 PM", &["E4", "E5"]))
        .await
        .unwrap();
    assert_eq!(confirmed.status, GroupStatus::Confirmed);
    assert_eq!(confirmed.selected_showtime.as_deref(), Some("6:00 PM"));
    assert_eq!(
        confirmed.selected_seats,
        Some(vec!["E4".to_string(), "E5".to_string()])
    );

    // Confirming again replaces the booking.
    let moved = service
        .update_group(&group.id, confirm("9:00 PM", &["A1", "A2"]))
        .await
        .unwrap();
    assert_eq!(moved.selected_showtime.as_deref(), Some("9:00 PM"));
}

#[tokio::test]
async fn test_confirm_requires_winner() {
    let service = create_test_service();
    let group = create_test_group(&service, &["3", "4"]).await;
    let result = service.update_group(&group.id, confirm("6:00 PM", &["E4"])).await;
    assert!(matches!(result, Err(SquadError::WinnerNotDecided(_))));

    let unchanged = service.get_group(&group.id).await.unwrap();
    assert_eq!(unchanged.status, GroupStatus::Voting);
    assert!(unchanged.selected_seats.is_none());
}

#[tokio::test]
async fn test_confirm_rejects_bad_showtime_and_seats() {
    let service = create_test_service();
    let group = decided_group(&service).await;

    let showtime = service.update_group(&group.id, confirm("6:30 PM", &["E4", "E5"])).await;
    assert_eq!(showtime.unwrap_err(), SquadError::InvalidShowtime("6:30 PM".to_string()));

    let too_few = service.update_group(&group.id, confirm("6:00 PM", &["E4"])).await;
    assert_eq!(
        too_few.unwrap_err(),
        SquadError::SeatCountMismatch { expected: 2, actual: 1 }
    );

    let duplicate = service.update_group(&group.id, confirm("6:00 PM", &["E4", "E4"])).await;
    assert_eq!(duplicate.unwrap_err(), SquadError::DuplicateSeat("E4".to_string()));

    let off_grid = service.update_group(&group.id, confirm("6:00 PM", &["E4", "J1"])).await;
    assert_eq!(off_grid.unwrap_err(), SquadError::InvalidSeat("J1".to_string()));

    let group = service.get_group(&group.id).await.unwrap();
    assert_eq!(group.status, GroupStatus::Voting);
}

#[tokio::test]
async fn test_failed_update_batch_is_atomic() {
    let service = create_test_service();
    let group = decided_group(&service).await;

    let mut updates = vec![GroupUpdate::Rename {
        name: "Renamed".to_string(),
    }];
    updates.extend(confirm("6:00 PM", &["E4"]));
    assert!(service.update_group(&group.id, updates).await.is_err());

    let group = service.get_group(&group.id).await.unwrap();
    assert_eq!(group.name, "Friday Night");
}

#[tokio::test]
async fn test_complete_only_after_confirmation() {
    let service = create_test_service();
    let group = decided_group(&service).await;

    let early = service.update_group(&group.id, vec![GroupUpdate::Complete]).await;
    assert_eq!(
        early.unwrap_err(),
        SquadError::InvalidStatusTransition {
            from: "voting".to_string(),
            to: "completed".to_string(),
        }
    );

    service
        .update_group(&group.id, confirm("3:00 PM", &["C1", "C2"]))
        .await
        .unwrap();
    let completed = service
        .update_group(&group.id, vec![GroupUpdate::Complete])
        .await
        .unwrap();
    assert_eq!(completed.status, GroupStatus::Completed);

    let reconfirm = service.update_group(&group.id, confirm("3:00 PM", &["C1", "C2"])).await;
    assert!(matches!(reconfirm, Err(SquadError::InvalidStatusTransition { .. })));
}

#[tokio::test]
async fn test_booking_summary() {
    let service = create_test_service();
    let group = decided_group(&service).await;

    let pending = service.booking_summary(&group.id).await;
    assert!(matches!(pending, Err(SquadError::BookingNotConfirmed(_))));

    service
        .update_group(&group.id, confirm("12:00 PM", &["B9", "B10"]))
        .await
        .unwrap();
    let summary = service.booking_summary(&group.id).await.unwrap();
    assert_eq!(summary.movie_title, "Laughter Therapy");
    assert_eq!(summary.showtime, "12:00 PM");
    assert_eq!(summary.member_count, 2);
    assert_eq!(summary.ticket_price_cents, 1299);
    assert_eq!(summary.total_price_cents, 2598);
    assert_eq!(summary.convenience_fee_cents, 200);
    assert_eq!(summary.grand_total_cents, 2798);
}

#[test]
fn test_seat_ids() {
    for seat in ["A1", "H10", "D7"] {
        assert!(validate_seat(seat).is_ok(), "{} should be valid", seat);
    }
    for seat in ["", "A", "A0", "A01", "A11", "I3", "a1", "B-1", "C2x"] {
        assert!(validate_seat(seat).is_err(), "{} should be invalid", seat);
    }
}

#[test]
fn test_validate_seats_counts_before_duplicates() {
    let seats = vec!["A1".to_string(), "A1".to_string()];
    assert_eq!(
        validate_seats(&seats, 3),
        Err(SquadError::SeatCountMismatch { expected: 3, actual: 2 })
    );
    assert_eq!(validate_seats(&seats, 2), Err(SquadError::DuplicateSeat("A1".to_string())));
}

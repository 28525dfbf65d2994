use crate::constants::{CONVENIENCE_FEE_CENTS, SEAT_ROWS, SEATS_PER_ROW, TICKET_PRICE_CENTS};
use crate::core::catalog::find_movie;
use crate::core::errors::SquadError;
use crate::core::models::group::{Group, GroupStatus};
use crate::core::validation::validate_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// The transitions a group can go through after creation, other than voting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupUpdate {
    ConfirmBooking { showtime: String, seats: Vec<String> },
    Complete,
    Rename { name: String },
}

impl GroupUpdate {
    pub fn action(&self) -> &'static str {
        match self {
            GroupUpdate::ConfirmBooking { .. } => crate::constants::BOOKING_CONFIRMED,
            GroupUpdate::Complete => crate::constants::BOOKING_COMPLETED,
            GroupUpdate::Rename { .. } => crate::constants::GROUP_RENAMED,
        }
    }
}

/// Seat ids look like `C7`: a row letter followed by a seat number.
pub fn validate_seat(seat: &str) -> Result<(), SquadError> {
    let mut chars = seat.chars();
    let row = chars.next().ok_or_else(|| SquadError::InvalidSeat(seat.to_string()))?;
    if !SEAT_ROWS.contains(&row) {
        return Err(SquadError::InvalidSeat(seat.to_string()));
    }
    let number: &str = chars.as_str();
    if number.starts_with('0') || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(SquadError::InvalidSeat(seat.to_string()));
    }
    match number.parse::<u8>() {
        Ok(n) if (1..=SEATS_PER_ROW).contains(&n) => Ok(()),
        _ => Err(SquadError::InvalidSeat(seat.to_string())),
    }
}

pub fn validate_seats(seats: &[String], member_count: usize) -> Result<(), SquadError> {
    if seats.len() != member_count {
        return Err(SquadError::SeatCountMismatch {
            expected: member_count,
            actual: seats.len(),
        });
    }
    let mut seen = HashSet::new();
    for seat in seats {
        validate_seat(seat)?;
        if !seen.insert(seat.as_str()) {
            return Err(SquadError::DuplicateSeat(seat.clone()));
        }
    }
    Ok(())
}

fn transition(group: &mut Group, next: GroupStatus) -> Result<(), SquadError> {
    if !group.status.can_transition_to(next) {
        return Err(SquadError::InvalidStatusTransition {
            from: group.status.to_string(),
            to: next.to_string(),
        });
    }
    group.status = next;
    Ok(())
}

pub fn apply_update(group: &mut Group, update: GroupUpdate) -> Result<(), SquadError> {
    match update {
        GroupUpdate::ConfirmBooking { showtime, seats } => {
            if !group.status.can_transition_to(GroupStatus::Confirmed) {
                return Err(SquadError::InvalidStatusTransition {
                    from: group.status.to_string(),
                    to: GroupStatus::Confirmed.to_string(),
                });
            }
            let winner = group
                .winning_movie
                .as_deref()
                .ok_or_else(|| SquadError::WinnerNotDecided(group.id.clone()))?;
            let movie = find_movie(winner).ok_or_else(|| SquadError::MovieNotFound(winner.to_string()))?;
            if !movie.has_showtime(&showtime) {
                return Err(SquadError::InvalidShowtime(showtime));
            }
            validate_seats(&seats, group.members.len())?;

            group.selected_showtime = Some(showtime);
            group.selected_seats = Some(seats);
            transition(group, GroupStatus::Confirmed)
        }
        GroupUpdate::Complete => transition(group, GroupStatus::Completed),
        GroupUpdate::Rename { name } => {
            group.name = validate_name("name", &name)?;
            Ok(())
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub group_id: String,
    pub group_name: String,
    pub movie_id: String,
    pub movie_title: String,
    pub showtime: String,
    pub seats: Vec<String>,
    pub member_count: usize,
    pub ticket_price_cents: u64,
    /// Ticket price times the number of seats.
    pub total_price_cents: u64,
    pub convenience_fee_cents: u64,
    pub grand_total_cents: u64,
    pub status: GroupStatus,
}

pub fn booking_summary(group: &Group) -> Result<BookingSummary, SquadError> {
    let not_confirmed = || SquadError::BookingNotConfirmed(group.id.clone());
    if group.status == GroupStatus::Voting {
        return Err(not_confirmed());
    }
    let movie_id = group.winning_movie.clone().ok_or_else(not_confirmed)?;
    let showtime = group.selected_showtime.clone().ok_or_else(not_confirmed)?;
    let seats = group.selected_seats.clone().ok_or_else(not_confirmed)?;
    let movie_title = find_movie(&movie_id)
        .map(|m| m.title.clone())
        .ok_or_else(|| SquadError::MovieNotFound(movie_id.clone()))?;
    let total_price_cents = TICKET_PRICE_CENTS * seats.len() as u64;

    Ok(BookingSummary {
        group_id: group.id.clone(),
        group_name: group.name.clone(),
        movie_id,
        movie_title,
        showtime,
        member_count: group.members.len(),
        ticket_price_cents: TICKET_PRICE_CENTS,
        total_price_cents,
        convenience_fee_cents: CONVENIENCE_FEE_CENTS,
        grand_total_cents: total_price_cents + CONVENIENCE_FEE_CENTS,
        seats,
        status: group.status,
    })
}

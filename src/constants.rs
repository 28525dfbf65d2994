// Activity names recorded in the app log and group audit trail.
pub const GROUP_CREATED: &str = "group_created";
pub const GROUP_RENAMED: &str = "group_renamed";
pub const MEMBER_JOINED: &str = "member_joined";
pub const VOTE_CAST: &str = "vote_cast";
pub const VOTE_WITHDRAWN: &str = "vote_withdrawn";
pub const WINNER_DECIDED: &str = "winner_decided";
pub const BOOKING_CONFIRMED: &str = "booking_confirmed";
pub const BOOKING_COMPLETED: &str = "booking_completed";

pub const GROUP_ID_LENGTH: usize = 7;
pub const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_SHORTLIST_SIZE: usize = 2;

pub const SEAT_ROWS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
pub const SEATS_PER_ROW: u8 = 10;
pub const TICKET_PRICE_CENTS: u64 = 1299;
// Flat fee per booking, not per seat.
pub const CONVENIENCE_FEE_CENTS: u64 = 200;

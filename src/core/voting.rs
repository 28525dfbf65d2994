//! Per-movie tallies and winner selection for a group's shortlist vote.

use crate::core::errors::SquadError;
use crate::core::models::group::{Group, GroupStatus, Member};
use crate::core::validation::validate_name;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Vote counts keyed by movie id, kept in the order each key was first created.
///
/// Keys are never removed, even when a count drops back to zero, so the
/// creation order stays stable and decides ties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<(String, i64)>,
}

impl VoteTally {
    pub fn new() -> Self {
        VoteTally { entries: Vec::new() }
    }

    pub fn get(&self, movie_id: &str) -> Option<i64> {
        self.entries.iter().find(|(id, _)| id == movie_id).map(|(_, count)| *count)
    }

    pub fn increment(&mut self, movie_id: &str) {
        *self.entry(movie_id) += 1;
    }

    pub fn decrement(&mut self, movie_id: &str) {
        *self.entry(movie_id) -= 1;
    }

    pub fn total(&self) -> i64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// First key holding the strictly greatest positive count.
    pub fn leader(&self) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (id, count) in self.iter() {
            if count > best.map_or(0, |(_, max)| max) {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }

    fn entry(&mut self, movie_id: &str) -> &mut i64 {
        let pos = match self.entries.iter().position(|(id, _)| id == movie_id) {
            Some(pos) => pos,
            None => {
                self.entries.push((movie_id.to_string(), 0));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}

impl Serialize for VoteTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, count) in &self.entries {
            map.serialize_entry(id, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VoteTally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = VoteTally;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of movie ids to vote counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<VoteTally, A::Error> {
                let mut tally = VoteTally::new();
                while let Some((id, count)) = access.next_entry::<String, i64>()? {
                    *tally.entry(&id) = count;
                }
                Ok(tally)
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

/// What a vote did to the group, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub joined: bool,
    pub previous_vote: Option<String>,
    pub winner_decided: bool,
}

pub fn apply_vote(
    group: &mut Group,
    member_id: &str,
    member_name: &str,
    movie_id: &str,
) -> Result<VoteOutcome, SquadError> {
    if group.status != GroupStatus::Voting {
        return Err(SquadError::VotingClosed(group.id.clone()));
    }
    if member_id.trim().is_empty() {
        return Err(SquadError::invalid_input(
            "memberId",
            "Invalid memberId",
            "memberId cannot be empty",
        ));
    }
    if !group.has_movie(movie_id) {
        return Err(SquadError::MovieNotInShortlist(movie_id.to_string()));
    }

    let joined = group.member(member_id).is_none();
    if joined {
        let name = validate_name("memberName", member_name)?;
        group.members.push(Member::new(member_id.to_string(), name));
    }

    // Member is present now; the name of a returning member is left untouched.
    let index = group
        .members
        .iter()
        .position(|m| m.id == member_id)
        .ok_or_else(|| SquadError::MemberNotFound(member_id.to_string()))?;

    let previous_vote = group.members[index].vote.take().filter(|v| !v.is_empty());
    if let Some(previous) = &previous_vote {
        group.votes.decrement(previous);
    }
    group.members[index].vote = Some(movie_id.to_string());
    group.votes.increment(movie_id);

    let had_winner = group.winning_movie.is_some();
    refresh_winner(group);

    Ok(VoteOutcome {
        joined,
        previous_vote,
        winner_decided: !had_winner && group.winning_movie.is_some(),
    })
}

/// Removes a member's vote. Returns the movie the vote was for.
pub fn withdraw_vote(group: &mut Group, member_id: &str) -> Result<String, SquadError> {
    if group.status != GroupStatus::Voting {
        return Err(SquadError::VotingClosed(group.id.clone()));
    }
    let member = group
        .members
        .iter_mut()
        .find(|m| m.id == member_id)
        .ok_or_else(|| SquadError::MemberNotFound(member_id.to_string()))?;
    let previous = member
        .vote
        .take()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SquadError::NoVoteToWithdraw(member_id.to_string()))?;
    group.votes.decrement(&previous);
    refresh_winner(group);
    Ok(previous)
}

/// A winner exists exactly while every member has a vote.
pub fn refresh_winner(group: &mut Group) {
    group.winning_movie = if group.all_voted() {
        group.votes.leader().map(String::from)
    } else {
        None
    };
}

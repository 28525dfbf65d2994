use crate::constants::{
    GROUP_CREATED, GROUP_ID_LENGTH, ID_ALPHABET, MEMBER_JOINED, MIN_SHORTLIST_SIZE, VOTE_CAST, VOTE_WITHDRAWN,
    WINNER_DECIDED,
};
use crate::core::booking::{self, BookingSummary, GroupUpdate};
use crate::core::catalog;
use crate::core::errors::SquadError;
use crate::core::models::{
    audit::{AppLog, GroupAudit},
    group::{Group, GroupStatus, Member},
    movie::Movie,
};
use crate::core::validation::validate_name;
use crate::core::voting::{self, VoteTally};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use nanoid::nanoid;
use serde_json::json;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct SquadService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> SquadService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        SquadService { storage, logging }
    }

    pub(crate) async fn log_and_audit(
        &self,
        group_id: Option<&str>,
        action: &str,
        log_details: serde_json::Value,
        member_id: Option<&str>,
    ) -> Result<(), SquadError> {
        self.logging.log_action(action, log_details.clone(), member_id).await?;
        if let Some(gid) = group_id {
            let details = serde_json::from_value(log_details)
                .map_err(|e| SquadError::LoggingError(format!("Audit details must be an object: {}", e)))?;
            self.storage
                .save_group_audit(GroupAudit {
                    id: Uuid::new_v4().to_string(),
                    group_id: gid.to_string(),
                    action: action.to_string(),
                    member_id: member_id.map(String::from),
                    details,
                    timestamp: Utc::now(),
                })
                .await?;
        }
        Ok(())
    }

    fn validate_shortlist(&self, movie_ids: &[String]) -> Result<(), SquadError> {
        if movie_ids.len() < MIN_SHORTLIST_SIZE {
            return Err(SquadError::invalid_input(
                "movies",
                "Shortlist Too Short",
                format!("Pick at least {} movies", MIN_SHORTLIST_SIZE),
            ));
        }
        let mut seen = HashSet::new();
        for id in movie_ids {
            if catalog::find_movie(id).is_none() {
                return Err(SquadError::MovieNotFound(id.clone()));
            }
            if !seen.insert(id.as_str()) {
                return Err(SquadError::invalid_input(
                    "movies",
                    "Duplicate Movie",
                    format!("Movie {} is listed more than once", id),
                ));
            }
        }
        Ok(())
    }

    pub async fn create_group(
        &self,
        name: String,
        created_by: String,
        movie_ids: Vec<String>,
    ) -> Result<Group, SquadError> {
        let name = validate_name("name", &name)?;
        let created_by = validate_name("createdBy", &created_by)?;
        self.validate_shortlist(&movie_ids)?;

        let creator = Member::new(nanoid!(GROUP_ID_LENGTH, &ID_ALPHABET), created_by.clone());
        let mut group = Group {
            id: nanoid!(GROUP_ID_LENGTH, &ID_ALPHABET),
            name,
            created_by,
            members: vec![creator.clone()],
            movies: movie_ids,
            votes: VoteTally::new(),
            winning_movie: None,
            selected_showtime: None,
            selected_seats: None,
            status: GroupStatus::Voting,
            created_at: Utc::now(),
        };
        // The id check and the insert happen under one lock, so a clash just redraws.
        while !self.storage.insert_group(group.clone()).await? {
            debug!("Group id {} already taken, drawing another", group.id);
            group.id = nanoid!(GROUP_ID_LENGTH, &ID_ALPHABET);
        }
        info!("Created group {} with {} movies", group.id, group.movies.len());

        self.log_and_audit(
            Some(&group.id),
            GROUP_CREATED,
            json!({ "group_id": group.id, "name": group.name, "movies": group.movies }),
            Some(&creator.id),
        )
        .await?;
        Ok(group)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group, SquadError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| SquadError::GroupNotFound(group_id.to_string()))
    }

    /// Applies every update in order as a single atomic change. A missing
    /// group is reported before anything wrong with the updates themselves.
    pub async fn update_group(&self, group_id: &str, updates: Vec<GroupUpdate>) -> Result<Group, SquadError> {
        self.get_group(group_id).await?;
        if updates.is_empty() {
            return Err(SquadError::invalid_input(
                "body",
                "Empty Update",
                "No supported fields to update",
            ));
        }
        let actions: Vec<&'static str> = updates.iter().map(GroupUpdate::action).collect();
        let (group, ()) = self
            .storage
            .update_group(group_id, move |group| {
                updates
                    .into_iter()
                    .try_for_each(|update| booking::apply_update(group, update))
            })
            .await
            .inspect_err(|e| warn!("Update {:?} rejected for group {}: {}", actions, group_id, e))?
            .ok_or_else(|| SquadError::GroupNotFound(group_id.to_string()))?;
        info!("Group {} updated: {:?} (status {})", group.id, actions, group.status);

        for action in actions {
            self.log_and_audit(
                Some(&group.id),
                action,
                json!({
                    "group_id": group.id,
                    "name": group.name,
                    "status": group.status,
                    "showtime": group.selected_showtime,
                    "seats": group.selected_seats,
                }),
                None,
            )
            .await?;
        }
        Ok(group)
    }

    pub async fn cast_vote(
        &self,
        group_id: &str,
        member_id: String,
        member_name: String,
        movie_id: String,
    ) -> Result<Group, SquadError> {
        let (mid, vid) = (member_id.clone(), movie_id.clone());
        let (group, outcome) = self
            .storage
            .update_group(group_id, move |group| {
                voting::apply_vote(group, &member_id, &member_name, &movie_id)
            })
            .await?
            .ok_or_else(|| SquadError::GroupNotFound(group_id.to_string()))?;
        debug!("Tally for group {}: {:?}", group.id, group.votes);

        if outcome.joined {
            info!("Member {} joined group {}", mid, group.id);
            self.log_and_audit(
                Some(&group.id),
                MEMBER_JOINED,
                json!({ "group_id": group.id, "member_count": group.members.len() }),
                Some(&mid),
            )
            .await?;
        }
        self.log_and_audit(
            Some(&group.id),
            VOTE_CAST,
            json!({ "group_id": group.id, "movie_id": vid, "previous_vote": outcome.previous_vote }),
            Some(&mid),
        )
        .await?;
        if outcome.winner_decided {
            info!("Group {} picked movie {:?}", group.id, group.winning_movie);
            self.log_and_audit(
                Some(&group.id),
                WINNER_DECIDED,
                json!({ "group_id": group.id, "winning_movie": group.winning_movie }),
                None,
            )
            .await?;
        }
        Ok(group)
    }

    pub async fn withdraw_vote(&self, group_id: &str, member_id: String) -> Result<Group, SquadError> {
        let mid = member_id.clone();
        let (group, previous) = self
            .storage
            .update_group(group_id, move |group| voting::withdraw_vote(group, &member_id))
            .await?
            .ok_or_else(|| SquadError::GroupNotFound(group_id.to_string()))?;
        info!("Member {} withdrew vote for {} in group {}", mid, previous, group.id);

        self.log_and_audit(
            Some(&group.id),
            VOTE_WITHDRAWN,
            json!({ "group_id": group.id, "movie_id": previous }),
            Some(&mid),
        )
        .await?;
        Ok(group)
    }

    pub async fn booking_summary(&self, group_id: &str) -> Result<BookingSummary, SquadError> {
        let group = self.get_group(group_id).await?;
        booking::booking_summary(&group)
    }

    pub fn list_movies(&self) -> Vec<Movie> {
        catalog::list_movies().to_vec()
    }

    pub async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, SquadError> {
        self.get_group(group_id).await?;
        self.storage.get_group_audits(group_id).await
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SquadError> {
        self.logging.get_logs().await
    }
}

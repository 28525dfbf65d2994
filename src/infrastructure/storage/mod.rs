use crate::core::errors::SquadError;
use crate::core::models::{audit::GroupAudit, group::Group};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores a new group. Returns `false`, leaving the existing record alone,
    /// when the id is already taken.
    async fn insert_group(&self, group: Group) -> Result<bool, SquadError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, SquadError>;
    /// Runs `update` against the stored group as one atomic step. The stored
    /// record is only replaced when `update` succeeds. `Ok(None)` means the
    /// group does not exist.
    async fn update_group<T, F>(&self, group_id: &str, update: F) -> Result<Option<(Group, T)>, SquadError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Group) -> Result<T, SquadError> + Send + 'static;
    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), SquadError>;
    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, SquadError>;
}

pub mod in_memory;

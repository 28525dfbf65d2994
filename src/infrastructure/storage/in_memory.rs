use crate::core::errors::SquadError;
use crate::core::models::{audit::GroupAudit, group::Group};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    group_audits: Arc<RwLock<HashMap<String, Vec<GroupAudit>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            groups: Arc::new(RwLock::new(HashMap::new())),
            group_audits: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_group(&self, group: Group) -> Result<bool, SquadError> {
        let mut groups = self.groups.write().await;
        match groups.entry(group.id.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(group);
                Ok(true)
            }
        }
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, SquadError> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn update_group<T, F>(&self, group_id: &str, update: F) -> Result<Option<(Group, T)>, SquadError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Group) -> Result<T, SquadError> + Send + 'static,
    {
        let mut groups = self.groups.write().await;
        let Some(stored) = groups.get_mut(group_id) else {
            return Ok(None);
        };
        // Work on a copy so a failed update leaves the record untouched.
        let mut draft = stored.clone();
        let value = update(&mut draft)?;
        *stored = draft.clone();
        Ok(Some((draft, value)))
    }

    async fn save_group_audit(&self, audit: GroupAudit) -> Result<(), SquadError> {
        let mut audits = self.group_audits.write().await;
        audits.entry(audit.group_id.clone()).or_default().push(audit);
        Ok(())
    }

    async fn get_group_audits(&self, group_id: &str) -> Result<Vec<GroupAudit>, SquadError> {
        let audits = self.group_audits.read().await;
        Ok(audits.get(group_id).cloned().unwrap_or_default())
    }
}

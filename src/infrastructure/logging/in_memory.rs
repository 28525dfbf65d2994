use crate::core::errors::SquadError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<Mutex<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        InMemoryLogging {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        member_id: Option<&str>,
    ) -> Result<(), SquadError> {
        let details = serde_json::from_value(details)
            .map_err(|e| SquadError::LoggingError(format!("Log details must be an object: {}", e)))?;
        tracing::debug!(action, member_id, "recording app log");
        let mut logs = self.logs.lock().await;
        logs.push(AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            member_id: member_id.map(String::from),
            details,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, SquadError> {
        Ok(self.logs.lock().await.clone())
    }
}

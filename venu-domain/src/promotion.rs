use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Promotion request status in the lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionStatus {
    Pending,
    Approved,
    Rejected,
}

/// A host's request to have a listing featured for a window of dates.
/// Created as PENDING; an admin resolves it to a terminal state. While
/// pending, the host can cancel by deleting the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub status: PromotionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PromotionRequest {
    pub fn new(
        listing_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            listing_id,
            status: PromotionStatus::Pending,
            start_date,
            end_date,
            message,
            admin_note: None,
            created_at: Utc::now(),
        }
    }

    /// Requested window length in days, derived rather than stored
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn approve(&mut self, admin_note: Option<String>) -> Result<(), PromotionError> {
        self.resolve(PromotionStatus::Approved, admin_note)
    }

    pub fn reject(&mut self, admin_note: Option<String>) -> Result<(), PromotionError> {
        self.resolve(PromotionStatus::Rejected, admin_note)
    }

    fn resolve(
        &mut self,
        status: PromotionStatus,
        admin_note: Option<String>,
    ) -> Result<(), PromotionError> {
        if self.status != PromotionStatus::Pending {
            return Err(PromotionError::AlreadyResolved(self.id.to_string()));
        }
        self.status = status;
        self.admin_note = admin_note;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromotionError {
    #[error("Promotion request already resolved: {0}")]
    AlreadyResolved(String),
}

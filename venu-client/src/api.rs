use crate::app_config::ClientConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;
use venu_domain::{BlockedDateRange, BookingRequest, Listing, SpecialPricingEntry};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

/// Booking created by the backend. The total it carries is the
/// authoritative charge amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub status: String,
    pub total_cents: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityDates {
    unavailable_dates: Vec<NaiveDate>,
}

/// Data access for the listing REST API, one method per endpoint
#[async_trait]
pub trait ListingApi: Send + Sync {
    async fn fetch_listing(&self, id: Uuid) -> Result<Listing, ClientError>;

    async fn fetch_blocked_dates(&self, id: Uuid) -> Result<Vec<BlockedDateRange>, ClientError>;

    async fn fetch_special_pricing(&self, id: Uuid)
        -> Result<Vec<SpecialPricingEntry>, ClientError>;

    /// Server-computed unavailable dates around the candidate date. The
    /// server may apply rules the client cannot see (existing bookings),
    /// so this set is authoritative over local checks.
    async fn fetch_unavailable_dates(
        &self,
        id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ClientError>;

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError>;
}

pub struct HttpListingApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpListingApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let response = self.client.get(url.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn fetch_listing(&self, id: Uuid) -> Result<Listing, ClientError> {
        self.get_json(format!("{}/listings/{}", self.base_url, id)).await
    }

    async fn fetch_blocked_dates(&self, id: Uuid) -> Result<Vec<BlockedDateRange>, ClientError> {
        self.get_json(format!("{}/listings/{}/blocked-dates", self.base_url, id))
            .await
    }

    async fn fetch_special_pricing(
        &self,
        id: Uuid,
    ) -> Result<Vec<SpecialPricingEntry>, ClientError> {
        self.get_json(format!("{}/listings/{}/special-pricing", self.base_url, id))
            .await
    }

    async fn fetch_unavailable_dates(
        &self,
        id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveDate>, ClientError> {
        let dates: AvailabilityDates = self
            .get_json(format!(
                "{}/listings/{}/availability?date={}",
                self.base_url, id, date
            ))
            .await?;
        Ok(dates.unavailable_dates)
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError> {
        let url = format!("{}/bookings", self.base_url);
        debug!("POST {}", url);
        let response = self.client.post(url.as_str()).json(request).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

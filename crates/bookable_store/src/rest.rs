// --- File: crates/bookable_store/src/rest.rs ---
//! REST client for the managed relational store.
//!
//! The store exposes a PostgREST-style interface: one endpoint per table with
//! filters passed as query parameters. This module implements the
//! `SchedulingStore` trait on top of it.

use bookable_common::http::client::{create_client, DEFAULT_TIMEOUT_SECS};
use bookable_common::services::{
    BlockRecord, BookingRecord, BoxFuture, BusinessConfigRecord, SchedulingStore, ServiceRecord,
};
use bookable_common::{configuration_error, BookableError, Context};
use bookable_config::StoreConfig;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Errors that can occur when talking to the store's REST interface.
#[derive(Error, Debug)]
pub enum RestStoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Store returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("business configuration row not found")]
    MissingBusinessConfig,
}

/// REST store client.
///
/// Created once at process start from `StoreConfig` and shared by `Arc`.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Create a new store client from configuration.
    ///
    /// Fails when the API key is absent; it is usually injected through
    /// `APP__STORE__API_KEY` rather than written into a config file.
    pub fn new(config: &StoreConfig) -> Result<Self, BookableError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| configuration_error("store API key missing"))?;
        let client = create_client(DEFAULT_TIMEOUT_SECS, true)
            .context("failed to build store HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch one table query, decoding the rows as `T`.
    async fn fetch<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<Vec<T>, RestStoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, path_and_query);
        debug!(%url, "querying store");
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RestStoreError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}

impl SchedulingStore for RestStore {
    type Error = RestStoreError;

    fn business_config(&self) -> BoxFuture<'_, BusinessConfigRecord, Self::Error> {
        Box::pin(async move {
            let mut rows: Vec<BusinessConfigRecord> =
                self.fetch("business_config?select=*&limit=1").await?;
            rows.pop().ok_or(RestStoreError::MissingBusinessConfig)
        })
    }

    fn bookings_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        Box::pin(async move {
            self.fetch(&format!(
                "bookings?select=id,barber_id,date,start_time,service_id,status\
                 &date=eq.{date}&barber_id=eq.{barber_id}&status=in.(pending,confirmed)"
            ))
            .await
        })
    }

    fn blocks_for_day(
        &self,
        date: NaiveDate,
        barber_id: Uuid,
    ) -> BoxFuture<'_, Vec<BlockRecord>, Self::Error> {
        Box::pin(async move {
            // Blocks without a barber scope apply to the whole shop.
            self.fetch(&format!(
                "blocks?select=id,barber_id,date,start_time,end_time,reason\
                 &date=eq.{date}&or=(barber_id.eq.{barber_id},barber_id.is.null)"
            ))
            .await
        })
    }

    fn services_by_id(
        &self,
        service_ids: &[Uuid],
    ) -> BoxFuture<'_, Vec<ServiceRecord>, Self::Error> {
        let joined = service_ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Box::pin(async move {
            if joined.is_empty() {
                return Ok(Vec::new());
            }
            self.fetch(&format!(
                "services?select=id,name,duration_minutes,price_cents,active&id=in.({joined})"
            ))
            .await
        })
    }
}

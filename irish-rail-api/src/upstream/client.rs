//! Irish Rail realtime HTTP client.
//!
//! Thin transport layer: one method per upstream endpoint, each returning
//! decoded DTOs. Empty bodies and non-success statuses surface as errors;
//! the normalization layer decides what to do with them.

use super::decode::decode;
use super::error::UpstreamError;
use super::types::{
    ArrayOfObjHaconPositions, ArrayOfObjStation, ArrayOfObjStationData, ArrayOfObjTrainMovements,
    ArrayOfObjTrainPositions, HaconPositionXml, StationDataXml, StationXml, TrainMovementXml,
    TrainPositionXml,
};

/// Default base URL for the realtime service.
const DEFAULT_BASE_URL: &str = "https://api.irishrail.ie/realtime/realtime.asmx";

/// Configuration for the realtime client.
#[derive(Debug, Clone)]
pub struct RailConfig {
    /// Base URL for the API (defaults to the production service)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RailConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Irish Rail realtime API.
#[derive(Debug, Clone)]
pub struct RailClient {
    http: reqwest::Client,
    base_url: String,
}

impl RailClient {
    /// Create a new realtime client with the given configuration.
    pub fn new(config: RailConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full station feed (`getAllStationsXML`).
    pub async fn get_all_stations(&self) -> Result<Vec<StationXml>, UpstreamError> {
        let url = format!("{}/getAllStationsXML", self.base_url);
        let body = self.fetch_text(self.http.get(&url)).await?;
        let result: ArrayOfObjStation = decode(&body)?;
        Ok(result.stations)
    }

    /// Fetch the type-filtered station feed
    /// (`getAllStationsXML_WithStationType`).
    ///
    /// `station_type` is one of the upstream's single-letter categories,
    /// e.g. "A" (all), "M" (mainline), "S" (suburban), "D" (DART).
    pub async fn get_stations_with_type(
        &self,
        station_type: &str,
    ) -> Result<Vec<StationXml>, UpstreamError> {
        let url = format!("{}/getAllStationsXML_WithStationType", self.base_url);
        let request = self.http.get(&url).query(&[("StationType", station_type)]);
        let body = self.fetch_text(request).await?;
        let result: ArrayOfObjStation = decode(&body)?;
        Ok(result.stations)
    }

    /// Fetch the live timetable for a station (`getStationDataByCodeXML`).
    pub async fn get_station_data(
        &self,
        station_code: &str,
    ) -> Result<Vec<StationDataXml>, UpstreamError> {
        let url = format!("{}/getStationDataByCodeXML", self.base_url);
        let request = self.http.get(&url).query(&[("StationCode", station_code)]);
        let body = self.fetch_text(request).await?;
        let result: ArrayOfObjStationData = decode(&body)?;
        Ok(result.entries)
    }

    /// Fetch hacon train positions (`getHaconTrainsXML`).
    ///
    /// This endpoint only answers to a POST with no body.
    pub async fn get_hacon_positions(&self) -> Result<Vec<HaconPositionXml>, UpstreamError> {
        let url = format!("{}/getHaconTrainsXML", self.base_url);
        let body = self.fetch_text(self.http.post(&url)).await?;
        let result: ArrayOfObjHaconPositions = decode(&body)?;
        Ok(result.trains)
    }

    /// Fetch all currently running trains (`getCurrentTrainsXML`).
    pub async fn get_current_trains(&self) -> Result<Vec<TrainPositionXml>, UpstreamError> {
        let url = format!("{}/getCurrentTrainsXML", self.base_url);
        let body = self.fetch_text(self.http.get(&url)).await?;
        let result: ArrayOfObjTrainPositions = decode(&body)?;
        Ok(result.trains)
    }

    /// Fetch currently running trains of one type
    /// (`getCurrentTrainsXML_WithTrainType`).
    pub async fn get_current_trains_with_type(
        &self,
        train_type: &str,
    ) -> Result<Vec<TrainPositionXml>, UpstreamError> {
        let url = format!("{}/getCurrentTrainsXML_WithTrainType", self.base_url);
        let request = self.http.get(&url).query(&[("TrainType", train_type)]);
        let body = self.fetch_text(request).await?;
        let result: ArrayOfObjTrainPositions = decode(&body)?;
        Ok(result.trains)
    }

    /// Fetch the stop list for a train on a date (`getTrainMovementsXML`).
    ///
    /// `train_date` must be in the upstream's "7 Mar 2024" format; see
    /// [`crate::normalize::format_train_date`].
    pub async fn get_train_movements(
        &self,
        train_code: &str,
        train_date: &str,
    ) -> Result<Vec<TrainMovementXml>, UpstreamError> {
        let url = format!("{}/getTrainMovementsXML", self.base_url);
        let request = self
            .http
            .get(&url)
            .query(&[("TrainId", train_code), ("TrainDate", train_date)]);
        let body = self.fetch_text(request).await?;
        let result: ArrayOfObjTrainMovements = decode(&body)?;
        Ok(result.movements)
    }

    /// Send a request and return the body text.
    ///
    /// A success status with an empty body is an error: the upstream
    /// sometimes responds this way when it is unhealthy, and callers must
    /// not mistake it for an empty result set.
    async fn fetch_text(&self, request: reqwest::RequestBuilder) -> Result<String, UpstreamError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(UpstreamError::EmptyResponse);
        }

        Ok(body)
    }
}

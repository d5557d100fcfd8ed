//! Live station directory.
//!
//! Thread-safe code → [`Station`] lookup, fetched from the all-stations
//! feed at startup and refreshed in the background. Replaces re-fetching
//! the full feed on every code lookup; lookups are in-memory exact matches.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::Station;
use crate::normalize::station_record;
use crate::upstream::{RailClient, StationXml, UpstreamError};

/// Thread-safe station directory with support for background refresh.
#[derive(Clone)]
pub struct StationDirectory {
    inner: Arc<RwLock<HashMap<String, Station>>>,
    client: RailClient,
}

impl StationDirectory {
    /// Create a directory by fetching the all-stations feed.
    ///
    /// This will fail if the feed is unreachable.
    pub async fn fetch(client: RailClient) -> Result<Self, UpstreamError> {
        let stations = client.get_all_stations().await?;
        let map = build_map(stations);

        Ok(Self {
            inner: Arc::new(RwLock::new(map)),
            client,
        })
    }

    /// Create an empty directory (for tests).
    pub fn empty(client: RailClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            client,
        }
    }

    /// Look up a station by exact code match.
    pub async fn get(&self, code: &str) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.get(code).cloned()
    }

    /// Number of stations in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the directory is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-fetch the all-stations feed and swap in the new mapping.
    ///
    /// On failure the existing mapping is preserved and the error is
    /// returned.
    pub async fn refresh(&self) -> Result<usize, UpstreamError> {
        let stations = self.client.get_all_stations().await?;
        let map = build_map(stations);
        let count = map.len();

        let mut guard = self.inner.write().await;
        *guard = map;

        Ok(count)
    }

    /// Replace the directory contents with fixture data (for tests).
    #[cfg(test)]
    pub(crate) async fn load(&self, stations: Vec<Station>) {
        let mut guard = self.inner.write().await;
        *guard = stations.into_iter().map(|s| (s.code.clone(), s)).collect();
    }
}

/// Build the code → station map from feed DTOs.
fn build_map(stations: Vec<StationXml>) -> HashMap<String, Station> {
    stations
        .into_iter()
        .map(station_record)
        .map(|s| (s.code.clone(), s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::RailConfig;

    fn station_xml(code: &str, name: &str) -> StationXml {
        StationXml {
            station_desc: name.to_string(),
            station_alias: None,
            station_latitude: "53.0".to_string(),
            station_longitude: "-6.0".to_string(),
            station_code: code.to_string(),
            station_id: Some("1".to_string()),
        }
    }

    fn test_client() -> RailClient {
        RailClient::new(RailConfig::new().with_base_url("http://localhost:1/realtime.asmx"))
            .unwrap()
    }

    #[test]
    fn build_map_indexes_by_code() {
        let map = build_map(vec![
            station_xml("BFSTC", "Belfast Central"),
            station_xml("BRAY", "Bray"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("BFSTC").unwrap().name, "Belfast Central");
    }

    #[tokio::test]
    async fn get_is_exact_match() {
        let directory = StationDirectory::empty(test_client());
        directory
            .load(vec![station_record(station_xml("BFSTC", "Belfast Central"))])
            .await;

        let found = directory.get("BFSTC").await.unwrap();
        assert_eq!(found.name, "Belfast Central");

        assert!(directory.get("ZZZZZ").await.is_none());
        assert!(directory.get("bfstc").await.is_none());
    }

    #[tokio::test]
    async fn empty_directory_has_no_entries() {
        let directory = StationDirectory::empty(test_client());
        assert!(directory.is_empty().await);
        assert_eq!(directory.len().await, 0);
    }
}

//! The normalizer service layer.
//!
//! One method per public operation. Each runs its upstream fetch(es),
//! converts to normalized records, and converts every upstream failure
//! (transport error, error status, empty body, decode failure) into the
//! operation's documented fallback: an empty list or `None`. Nothing here
//! returns an error to the web layer.

use tracing::warn;

use crate::directory::StationDirectory;
use crate::model::{
    HaconTrain, Station, StationDetail, TimetableEntry, TrainMovement, TrainPosition,
};
use crate::upstream::RailClient;

use super::convert;

/// Normalization service over the realtime client and station directory.
#[derive(Clone)]
pub struct RailService {
    client: RailClient,
    directory: StationDirectory,
}

impl RailService {
    pub fn new(client: RailClient, directory: StationDirectory) -> Self {
        Self { client, directory }
    }

    /// All stations, sorted by display name.
    pub async fn all_stations(&self) -> Vec<Station> {
        match self.client.get_all_stations().await {
            Ok(dtos) => {
                let mut stations: Vec<Station> =
                    dtos.into_iter().map(convert::station_record).collect();
                convert::sort_stations(&mut stations);
                stations
            }
            Err(e) => {
                warn!("getAllStationsXML failed: {e}");
                Vec::new()
            }
        }
    }

    /// Stations of one type, sorted by display name.
    pub async fn stations_by_type(&self, station_type: &str) -> Vec<Station> {
        match self.client.get_stations_with_type(station_type).await {
            Ok(dtos) => {
                let mut stations: Vec<Station> =
                    dtos.into_iter().map(convert::station_record).collect();
                convert::sort_stations(&mut stations);
                stations
            }
            Err(e) => {
                warn!("getAllStationsXML_WithStationType failed: {e}");
                Vec::new()
            }
        }
    }

    /// A station's identity merged with its live timetable.
    ///
    /// Best-effort merge: the directory lookup and the timetable fetch fail
    /// independently, each degrading to its own empty half. Returns `None`
    /// only when the code is unknown and the timetable came back empty.
    pub async fn station_by_code(&self, code: &str) -> Option<StationDetail> {
        let station = self.directory.get(code).await;
        let services = self.station_timetable(code).await;

        merge_station_detail(station, services)
    }

    /// The live timetable for a station, each entry carrying its inferred
    /// service category.
    pub async fn station_timetable(&self, code: &str) -> Vec<TimetableEntry> {
        match self.client.get_station_data(code).await {
            Ok(dtos) => dtos.into_iter().map(convert::timetable_entry).collect(),
            Err(e) => {
                warn!("getStationDataByCodeXML failed for {code}: {e}");
                Vec::new()
            }
        }
    }

    /// Hacon train positions with location names resolved from the station
    /// reference table.
    pub async fn hacon_trains(&self) -> Vec<HaconTrain> {
        match self.client.get_hacon_positions().await {
            Ok(dtos) => dtos.into_iter().map(convert::hacon_train).collect(),
            Err(e) => {
                warn!("getHaconTrainsXML failed: {e}");
                Vec::new()
            }
        }
    }

    /// All currently running trains.
    pub async fn current_trains(&self) -> Vec<TrainPosition> {
        match self.client.get_current_trains().await {
            Ok(dtos) => dtos.into_iter().map(convert::train_position).collect(),
            Err(e) => {
                warn!("getCurrentTrainsXML failed: {e}");
                Vec::new()
            }
        }
    }

    /// Currently running trains of one type.
    pub async fn trains_by_type(&self, train_type: &str) -> Vec<TrainPosition> {
        match self.client.get_current_trains_with_type(train_type).await {
            Ok(dtos) => dtos.into_iter().map(convert::train_position).collect(),
            Err(e) => {
                warn!("getCurrentTrainsXML_WithTrainType failed: {e}");
                Vec::new()
            }
        }
    }

    /// A single running train, found by linear scan of the current-trains
    /// feed; there is no by-code upstream endpoint.
    pub async fn train_by_code(&self, code: &str) -> Option<TrainPosition> {
        self.current_trains()
            .await
            .into_iter()
            .find(|t| t.code == code)
    }

    /// Stop events for a train on a date (upstream "7 Mar 2024" format).
    pub async fn train_movements(&self, code: &str, date: &str) -> Vec<TrainMovement> {
        match self.client.get_train_movements(code, date).await {
            Ok(dtos) => dtos.into_iter().map(convert::train_movement).collect(),
            Err(e) => {
                warn!("getTrainMovementsXML failed for {code} on {date}: {e}");
                Vec::new()
            }
        }
    }
}

/// Merge the two independently fetched halves of a station detail.
fn merge_station_detail(
    station: Option<Station>,
    services: Vec<TimetableEntry>,
) -> Option<StationDetail> {
    if station.is_none() && services.is_empty() {
        return None;
    }

    Some(StationDetail { station, services })
}

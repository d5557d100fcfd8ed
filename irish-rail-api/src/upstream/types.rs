//! Realtime API response DTOs.
//!
//! These types map directly to the XML documents the realtime endpoints
//! produce. Every leaf is kept as a string: the wire format carries no type
//! information, and callers that need numbers parse them explicitly.
//! `Option` marks tags the service is known to omit.

use serde::Deserialize;

/// Response from `getAllStationsXML` / `getAllStationsXML_WithStationType`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjStation {
    #[serde(rename = "objStation", default)]
    pub stations: Vec<StationXml>,
}

/// One station in the all-stations feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationXml {
    /// Display name, e.g. "Belfast Central"
    #[serde(rename = "StationDesc")]
    pub station_desc: String,

    /// Alternate name; often an empty element
    #[serde(rename = "StationAlias")]
    pub station_alias: Option<String>,

    #[serde(rename = "StationLatitude")]
    pub station_latitude: String,

    #[serde(rename = "StationLongitude")]
    pub station_longitude: String,

    /// Upstream-assigned station code, e.g. "BFSTC"
    #[serde(rename = "StationCode")]
    pub station_code: String,

    /// Numeric id; unused downstream but always present on the wire
    #[serde(rename = "StationId")]
    pub station_id: Option<String>,
}

/// Response from `getStationDataByCodeXML`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjStationData {
    #[serde(rename = "objStationData", default)]
    pub entries: Vec<StationDataXml>,
}

/// One train movement through a station on the station-data feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDataXml {
    #[serde(rename = "Traincode")]
    pub train_code: String,

    #[serde(rename = "Stationfullname")]
    pub station_fullname: String,

    #[serde(rename = "Stationcode")]
    pub station_code: String,

    /// Origin station display name, as used by the service-type rules
    #[serde(rename = "Origin")]
    pub origin: String,

    #[serde(rename = "Destination")]
    pub destination: String,

    #[serde(rename = "Origintime")]
    pub origin_time: String,

    #[serde(rename = "Destinationtime")]
    pub destination_time: String,

    /// Minutes until the train is due at this station
    #[serde(rename = "Duein")]
    pub due_in: String,

    /// Minutes late (negative when running early)
    #[serde(rename = "Late")]
    pub late: String,

    #[serde(rename = "Exparrival")]
    pub exp_arrival: String,

    #[serde(rename = "Expdepart")]
    pub exp_depart: String,

    #[serde(rename = "Scharrival")]
    pub sch_arrival: String,

    #[serde(rename = "Schdepart")]
    pub sch_depart: String,

    /// "Northbound", "Southbound" or "To <destination>"
    #[serde(rename = "Direction")]
    pub direction: String,

    /// Upstream train category ("DART", "Train", ...)
    #[serde(rename = "Traintype")]
    pub train_type: String,
}

/// Response from `getHaconTrainsXML`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjHaconPositions {
    #[serde(rename = "objHaconPositions", default)]
    pub trains: Vec<HaconPositionXml>,
}

/// One train on the hacon positions feed.
///
/// Location fields carry codes only; display names are joined in from the
/// station reference table during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct HaconPositionXml {
    #[serde(rename = "TrainCode")]
    pub train_code: String,

    #[serde(rename = "TrainOrigin")]
    pub train_origin: String,

    #[serde(rename = "TrainOriginTime")]
    pub train_origin_time: String,

    #[serde(rename = "TrainDestination")]
    pub train_destination: String,

    #[serde(rename = "TrainDestinationTime")]
    pub train_destination_time: String,

    #[serde(rename = "NextLocation")]
    pub next_location: String,

    #[serde(rename = "NextLocationTime")]
    pub next_location_time: String,

    #[serde(rename = "LastLocation")]
    pub last_location: String,

    /// Stop kind at the last location ("S" stop, "P" pass, ...)
    #[serde(rename = "LastLocationType")]
    pub last_location_type: String,

    #[serde(rename = "TrainDate")]
    pub train_date: String,

    #[serde(rename = "TrainStatus")]
    pub train_status: String,

    #[serde(rename = "SchArrival")]
    pub sch_arrival: String,

    #[serde(rename = "SchDepart")]
    pub sch_depart: String,

    /// Minutes off schedule
    #[serde(rename = "Difference")]
    pub difference: String,

    #[serde(rename = "TrainDirection")]
    pub train_direction: String,

    #[serde(rename = "TrainLatitude")]
    pub train_latitude: String,

    #[serde(rename = "TrainLongitude")]
    pub train_longitude: String,
}

/// Response from `getCurrentTrainsXML` / `getCurrentTrainsXML_WithTrainType`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjTrainPositions {
    #[serde(rename = "objTrainPositions", default)]
    pub trains: Vec<TrainPositionXml>,
}

/// One running train on the current-trains feed.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainPositionXml {
    /// "R" running, "N" not yet running, "T" terminated
    #[serde(rename = "TrainStatus")]
    pub train_status: String,

    #[serde(rename = "TrainCode")]
    pub train_code: String,

    #[serde(rename = "TrainDate")]
    pub train_date: String,

    /// Multi-line human-readable position summary
    #[serde(rename = "PublicMessage")]
    pub public_message: String,

    #[serde(rename = "Direction")]
    pub direction: String,

    #[serde(rename = "TrainLatitude")]
    pub train_latitude: String,

    #[serde(rename = "TrainLongitude")]
    pub train_longitude: String,
}

/// Response from `getTrainMovementsXML`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayOfObjTrainMovements {
    #[serde(rename = "objTrainMovements", default)]
    pub movements: Vec<TrainMovementXml>,
}

/// One stop event for a train on a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainMovementXml {
    #[serde(rename = "TrainCode")]
    pub train_code: String,

    #[serde(rename = "TrainDate")]
    pub train_date: String,

    #[serde(rename = "LocationCode")]
    pub location_code: String,

    #[serde(rename = "LocationFullName")]
    pub location_full_name: String,

    #[serde(rename = "LocationOrder")]
    pub location_order: String,

    /// "O" origin, "S" stop, "T" timing point, "D" destination
    #[serde(rename = "LocationType")]
    pub location_type: String,

    #[serde(rename = "TrainOrigin")]
    pub train_origin: String,

    #[serde(rename = "TrainDestination")]
    pub train_destination: String,

    #[serde(rename = "ScheduledArrival")]
    pub scheduled_arrival: String,

    #[serde(rename = "ScheduledDeparture")]
    pub scheduled_departure: String,

    #[serde(rename = "ExpectedArrival")]
    pub expected_arrival: Option<String>,

    #[serde(rename = "ExpectedDeparture")]
    pub expected_departure: Option<String>,

    /// Actual arrival; absent until the stop has happened
    #[serde(rename = "Arrival")]
    pub arrival: Option<String>,

    /// Actual departure; absent until the stop has happened
    #[serde(rename = "Departure")]
    pub departure: Option<String>,

    #[serde(rename = "AutoArrival")]
    pub auto_arrival: Option<String>,

    #[serde(rename = "AutoDepart")]
    pub auto_depart: Option<String>,

    /// "C" current, "N" next, "-" otherwise
    #[serde(rename = "StopType")]
    pub stop_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::decode;

    #[test]
    fn station_data_fixture_decodes() {
        let xml = r#"<ArrayOfObjStationData>
              <objStationData>
                <Servertime>2024-03-07T10:00:21.203</Servertime>
                <Traincode>E109</Traincode>
                <Stationfullname>Dublin Connolly</Stationfullname>
                <Stationcode>CNLLY</Stationcode>
                <Querytime>10:00:21</Querytime>
                <Traindate>7 Mar 2024</Traindate>
                <Origin>Malahide</Origin>
                <Destination>Greystones</Destination>
                <Origintime>10:05</Origintime>
                <Destinationtime>11:17</Destinationtime>
                <Status>En Route</Status>
                <Lastlocation>Departed Clontarf Road</Lastlocation>
                <Duein>5</Duein>
                <Late>1</Late>
                <Exparrival>10:21</Exparrival>
                <Expdepart>10:22</Expdepart>
                <Scharrival>10:20</Scharrival>
                <Schdepart>10:21</Schdepart>
                <Direction>Southbound</Direction>
                <Traintype>DART</Traintype>
                <Locationtype>S</Locationtype>
              </objStationData>
            </ArrayOfObjStationData>"#;

        let result: ArrayOfObjStationData = decode(xml).unwrap();
        assert_eq!(result.entries.len(), 1);

        let entry = &result.entries[0];
        assert_eq!(entry.train_code, "E109");
        assert_eq!(entry.origin, "Malahide");
        assert_eq!(entry.due_in, "5");
        assert_eq!(entry.direction, "Southbound");
    }

    #[test]
    fn hacon_positions_fixture_decodes() {
        let xml = r#"<ArrayOfObjHaconPositions>
              <objHaconPositions>
                <TrainCode>E109</TrainCode>
                <TrainOrigin>MHIDE</TrainOrigin>
                <TrainOriginTime>10:05</TrainOriginTime>
                <TrainDestination>GSTNS</TrainDestination>
                <TrainDestinationTime>11:17</TrainDestinationTime>
                <NextLocation>BRAY</NextLocation>
                <NextLocationTime>11:02</NextLocationTime>
                <LastLocation>SKILL</LastLocation>
                <LastLocationType>S</LastLocationType>
                <TrainDate>7 Mar 2024</TrainDate>
                <TrainStatus>R</TrainStatus>
                <SchArrival>10:58</SchArrival>
                <SchDepart>10:59</SchDepart>
                <Difference>1</Difference>
                <TrainDirection>Southbound</TrainDirection>
                <TrainLatitude>53.1462</TrainLatitude>
                <TrainLongitude>-6.11008</TrainLongitude>
              </objHaconPositions>
            </ArrayOfObjHaconPositions>"#;

        let result: ArrayOfObjHaconPositions = decode(xml).unwrap();
        assert_eq!(result.trains.len(), 1);

        let train = &result.trains[0];
        assert_eq!(train.train_origin, "MHIDE");
        assert_eq!(train.last_location_type, "S");
        assert_eq!(train.difference, "1");
    }

    #[test]
    fn train_positions_fixture_decodes() {
        let xml = r#"<ArrayOfObjTrainPositions>
              <objTrainPositions>
                <TrainStatus>R</TrainStatus>
                <TrainLatitude>53.2856</TrainLatitude>
                <TrainLongitude>-6.23422</TrainLongitude>
                <TrainCode>E109</TrainCode>
                <TrainDate>7 Mar 2024</TrainDate>
                <PublicMessage>E109\n10:05 - Malahide to Greystones (1 mins late)</PublicMessage>
                <Direction>Southbound</Direction>
              </objTrainPositions>
              <objTrainPositions>
                <TrainStatus>N</TrainStatus>
                <TrainLatitude>0</TrainLatitude>
                <TrainLongitude>0</TrainLongitude>
                <TrainCode>P141</TrainCode>
                <TrainDate>7 Mar 2024</TrainDate>
                <PublicMessage>P141\nHeuston to Portlaoise</PublicMessage>
                <Direction>Southbound</Direction>
              </objTrainPositions>
            </ArrayOfObjTrainPositions>"#;

        let result: ArrayOfObjTrainPositions = decode(xml).unwrap();
        assert_eq!(result.trains.len(), 2);
        assert_eq!(result.trains[0].train_code, "E109");
        assert_eq!(result.trains[1].train_status, "N");
    }

    #[test]
    fn train_movements_fixture_decodes_with_absent_actuals() {
        let xml = r#"<ArrayOfObjTrainMovements>
              <objTrainMovements>
                <TrainCode>E109</TrainCode>
                <TrainDate>07 Mar 2024</TrainDate>
                <LocationCode>BRAY</LocationCode>
                <LocationFullName>Bray</LocationFullName>
                <LocationOrder>24</LocationOrder>
                <LocationType>S</LocationType>
                <TrainOrigin>Malahide</TrainOrigin>
                <TrainDestination>Greystones</TrainDestination>
                <ScheduledArrival>11:04</ScheduledArrival>
                <ScheduledDeparture>11:05</ScheduledDeparture>
                <ExpectedArrival>11:05</ExpectedArrival>
                <ExpectedDeparture>11:06</ExpectedDeparture>
                <StopType>N</StopType>
              </objTrainMovements>
            </ArrayOfObjTrainMovements>"#;

        let result: ArrayOfObjTrainMovements = decode(xml).unwrap();
        assert_eq!(result.movements.len(), 1);

        let movement = &result.movements[0];
        assert_eq!(movement.location_code, "BRAY");
        assert_eq!(movement.expected_arrival.as_deref(), Some("11:05"));
        // Actual times are absent until the stop has happened
        assert_eq!(movement.arrival, None);
        assert_eq!(movement.departure, None);
    }
}

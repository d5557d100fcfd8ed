//! Request and response envelopes.
//!
//! Every success response is `{"success": true, "<key>": <data>}`; error
//! responses are `{"success": false, "errorCode": n, "errorMessage": s}`.

use serde::{Deserialize, Serialize};

use crate::model::{
    HaconTrain, Station, StationDetail, TimetableEntry, TrainMovement, TrainPosition,
};

/// Query parameters for `/stations`.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// Upstream station type filter ("A", "M", "S", "D")
    #[serde(rename = "type")]
    pub station_type: Option<String>,
}

/// Query parameters for `/trains`.
#[derive(Debug, Deserialize)]
pub struct TrainsQuery {
    /// Upstream train type filter ("A", "M", "S", "D")
    #[serde(rename = "type")]
    pub train_type: Option<String>,
}

/// Query parameters for `/trains/{code}`.
#[derive(Debug, Deserialize)]
pub struct TrainQuery {
    /// When "true", attach today's movements to the train record
    pub movements: Option<String>,
}

/// Root greeting.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub success: bool,
    pub stations: Vec<Station>,
}

#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub success: bool,
    pub station: Option<StationDetail>,
}

#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub success: bool,
    pub timetable: Vec<TimetableEntry>,
}

#[derive(Debug, Serialize)]
pub struct HaconTrainsResponse {
    pub success: bool,
    pub trains: Vec<HaconTrain>,
}

#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    pub success: bool,
    pub trains: Vec<TrainPosition>,
}

/// A train record with movements optionally attached.
#[derive(Debug, Serialize)]
pub struct TrainDetail {
    #[serde(flatten)]
    pub position: TrainPosition,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub movements: Option<Vec<TrainMovement>>,
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub success: bool,
    pub train: Option<TrainDetail>,
}

#[derive(Debug, Serialize)]
pub struct MovementsResponse {
    pub success: bool,
    pub movements: Vec<TrainMovement>,
}

/// Error envelope, used by the 404 fallback.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,

    #[serde(rename = "errorCode")]
    pub error_code: u16,

    #[serde(rename = "errorMessage")]
    pub error_message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_uses_camel_case_keys() {
        let json = serde_json::to_value(ErrorResponse {
            success: false,
            error_code: 404,
            error_message: "Route not found.",
        })
        .unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["errorCode"], 404);
        assert_eq!(json["errorMessage"], "Route not found.");
    }

    #[test]
    fn train_detail_flattens_and_skips_absent_movements() {
        let detail = TrainDetail {
            position: TrainPosition {
                status: "R".into(),
                code: "E109".into(),
                date: "7 Mar 2024".into(),
                public_message: "E109\\n10:05 - Malahide to Greystones".into(),
                direction: "Southbound".into(),
                latitude: "53.28".into(),
                longitude: "-6.14".into(),
            },
            movements: None,
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["code"], "E109");
        assert!(json.get("movements").is_none());
    }
}

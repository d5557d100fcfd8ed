//! Normalized record types.
//!
//! These are the shapes the API serves. Field sets are fixed and total:
//! anything the upstream omits surfaces as `null` or an empty string,
//! never as a missing key.

use serde::Serialize;

/// A station from the live all-stations feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Display name, e.g. "Belfast Central"
    pub name: String,

    /// Upstream-assigned code, e.g. "BFSTC"; the identity key
    pub code: String,

    /// Alternate name; empty string when the upstream has none
    pub alias: String,

    pub latitude: String,
    pub longitude: String,
}

/// A station merged with its live timetable.
///
/// Either half can be missing independently: an unknown code still carries
/// its timetable, and a timetable fetch failure still carries the station
/// identity with an empty `services` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationDetail {
    #[serde(flatten)]
    pub station: Option<Station>,

    pub services: Vec<TimetableEntry>,
}

/// One scheduled or live movement of a train through a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableEntry {
    /// Train code, e.g. "E109"
    pub code: String,

    pub origin: String,
    pub origin_time: String,
    pub destination: String,
    pub destination_time: String,

    /// Upstream train category ("DART", "Train", ...)
    #[serde(rename = "type")]
    pub train_type: String,

    /// Inferred service category: a configured rule name or "Unknown"
    pub service: String,

    pub station_fullname: String,
    pub station_code: String,

    /// Minutes until due at this station
    pub due_in: String,

    /// Minutes late (negative when early)
    pub late: String,

    pub exp_arrival: String,
    pub exp_depart: String,
    pub sch_arrival: String,
    pub sch_depart: String,
    pub direction: String,
}

/// Current snapshot of a running train.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainPosition {
    /// "R" running, "N" not yet running, "T" terminated
    pub status: String,

    pub code: String,
    pub date: String,

    /// Multi-line human-readable position summary
    pub public_message: String,

    pub direction: String,
    pub latitude: String,
    pub longitude: String,
}

/// A location on a hacon train record: code plus the display name resolved
/// from the station reference table. `name` is `null` when the code is
/// absent or not in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRef {
    pub name: Option<String>,
    pub code: String,
    pub time: String,
}

/// The previous location on a hacon train record; carries a stop type
/// instead of a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrevStopRef {
    pub name: Option<String>,
    pub code: String,

    /// "S" stop, "P" pass, ...
    #[serde(rename = "type")]
    pub stop_type: String,
}

/// An enriched train position from the hacon feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaconTrain {
    pub code: String,
    pub origin: StopRef,
    pub destination: StopRef,
    pub next_location: StopRef,
    pub prev_location: PrevStopRef,
    pub date: String,
    pub status: String,
    pub sch_arrival: String,
    pub sch_depart: String,

    /// Minutes off schedule
    pub difference: String,

    pub direction: String,
    pub latitude: String,
    pub longitude: String,
}

/// One stop event for a train on a given date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainMovement {
    pub code: String,
    pub date: String,
    pub location_code: String,
    pub location_full_name: String,
    pub location_order: String,
    pub location_type: String,
    pub train_origin: String,
    pub train_destination: String,
    pub scheduled_arrival: String,
    pub scheduled_departure: String,
    pub expected_arrival: Option<String>,
    pub expected_departure: Option<String>,

    /// Actual times; `null` until the stop has happened
    pub arrival: Option<String>,
    pub departure: Option<String>,

    pub auto_arrival: Option<String>,
    pub auto_depart: Option<String>,
    pub stop_type: String,
}

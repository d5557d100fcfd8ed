//! Conversion from upstream DTOs to normalized records.
//!
//! Everything here is pure: the only lookups are against the static
//! service-type rules and the static station reference table.

use chrono::NaiveDate;

use crate::model::{
    HaconTrain, PrevStopRef, Station, StopRef, TimetableEntry, TrainMovement, TrainPosition,
};
use crate::reference;
use crate::service_types::classify;
use crate::upstream::{
    HaconPositionXml, StationDataXml, StationXml, TrainMovementXml, TrainPositionXml,
};

/// Convert an all-stations feed entry.
pub fn station_record(dto: StationXml) -> Station {
    Station {
        name: dto.station_desc,
        code: dto.station_code,
        alias: dto.station_alias.unwrap_or_default(),
        latitude: dto.station_latitude,
        longitude: dto.station_longitude,
    }
}

/// Sort stations ascending by display name.
///
/// Comparison folds case and Latin accents so that accented names sort
/// adjacent to their unaccented forms, matching locale-aware collation for
/// the names this feed produces. The underlying sort is stable.
pub fn sort_stations(stations: &mut [Station]) {
    stations.sort_by_cached_key(|s| sort_key(&s.name));
}

/// Collation key: lowercase with common Latin accents folded to their base
/// letters.
fn sort_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ý' => 'y',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Convert a station-data feed entry, inferring its service category from
/// the origin/destination pair.
pub fn timetable_entry(dto: StationDataXml) -> TimetableEntry {
    let service = classify(&dto.origin, &dto.destination).to_string();

    TimetableEntry {
        code: dto.train_code,
        origin: dto.origin,
        origin_time: dto.origin_time,
        destination: dto.destination,
        destination_time: dto.destination_time,
        train_type: dto.train_type,
        service,
        station_fullname: dto.station_fullname,
        station_code: dto.station_code,
        due_in: dto.due_in,
        late: dto.late,
        exp_arrival: dto.exp_arrival,
        exp_depart: dto.exp_depart,
        sch_arrival: dto.sch_arrival,
        sch_depart: dto.sch_depart,
        direction: dto.direction,
    }
}

/// Convert a current-trains feed entry.
pub fn train_position(dto: TrainPositionXml) -> TrainPosition {
    TrainPosition {
        status: dto.train_status,
        code: dto.train_code,
        date: dto.train_date,
        public_message: dto.public_message,
        direction: dto.direction,
        latitude: dto.train_latitude,
        longitude: dto.train_longitude,
    }
}

/// Convert a hacon positions entry, resolving each location code to a
/// display name via the station reference table.
pub fn hacon_train(dto: HaconPositionXml) -> HaconTrain {
    HaconTrain {
        code: dto.train_code,
        origin: StopRef {
            name: resolved_name(&dto.train_origin),
            code: dto.train_origin,
            time: dto.train_origin_time,
        },
        destination: StopRef {
            name: resolved_name(&dto.train_destination),
            code: dto.train_destination,
            time: dto.train_destination_time,
        },
        next_location: StopRef {
            name: resolved_name(&dto.next_location),
            code: dto.next_location,
            time: dto.next_location_time,
        },
        prev_location: PrevStopRef {
            name: resolved_name(&dto.last_location),
            code: dto.last_location,
            stop_type: dto.last_location_type,
        },
        date: dto.train_date,
        status: dto.train_status,
        sch_arrival: dto.sch_arrival,
        sch_depart: dto.sch_depart,
        difference: dto.difference,
        direction: dto.train_direction,
        latitude: dto.train_latitude,
        longitude: dto.train_longitude,
    }
}

fn resolved_name(code: &str) -> Option<String> {
    reference::station_name(code).map(str::to_string)
}

/// Convert a train-movements feed entry.
pub fn train_movement(dto: TrainMovementXml) -> TrainMovement {
    TrainMovement {
        code: dto.train_code,
        date: dto.train_date,
        location_code: dto.location_code,
        location_full_name: dto.location_full_name,
        location_order: dto.location_order,
        location_type: dto.location_type,
        train_origin: dto.train_origin,
        train_destination: dto.train_destination,
        scheduled_arrival: dto.scheduled_arrival,
        scheduled_departure: dto.scheduled_departure,
        expected_arrival: dto.expected_arrival,
        expected_departure: dto.expected_departure,
        arrival: dto.arrival,
        departure: dto.departure,
        auto_arrival: dto.auto_arrival,
        auto_depart: dto.auto_depart,
        stop_type: dto.stop_type,
    }
}

/// Format a date the way the movements endpoint expects: day of month with
/// no leading zero, English abbreviated month, four-digit year.
pub fn format_train_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str) -> Station {
        Station {
            name: name.to_string(),
            code: name.to_uppercase(),
            alias: String::new(),
            latitude: String::new(),
            longitude: String::new(),
        }
    }

    #[test]
    fn station_record_defaults_missing_alias_to_empty() {
        let record = station_record(StationXml {
            station_desc: "Howth".into(),
            station_alias: None,
            station_latitude: "53.3909".into(),
            station_longitude: "-6.07351".into(),
            station_code: "HOWTH".into(),
            station_id: None,
        });

        assert_eq!(record.alias, "");
        assert_eq!(record.code, "HOWTH");
    }

    #[test]
    fn sorting_is_ascending_by_name() {
        let mut stations = vec![station("Sligo"), station("Arklow"), station("Mallow")];
        sort_stations(&mut stations);

        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Arklow", "Mallow", "Sligo"]);
    }

    #[test]
    fn sorting_folds_case_and_accents() {
        let mut stations = vec![
            station("cobh"),
            station("Cóbh West"),
            station("Cork"),
            station("Athlone"),
        ];
        sort_stations(&mut stations);

        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        // "Cóbh West" sorts adjacent to "cobh", not after "Cork"
        assert_eq!(names, ["Athlone", "cobh", "Cóbh West", "Cork"]);
    }

    #[test]
    fn timetable_entry_is_classified() {
        let entry = timetable_entry(StationDataXml {
            train_code: "E109".into(),
            station_fullname: "Bray".into(),
            station_code: "BRAY".into(),
            origin: "Malahide".into(),
            destination: "Greystones".into(),
            origin_time: "10:05".into(),
            destination_time: "11:17".into(),
            due_in: "7".into(),
            late: "0".into(),
            exp_arrival: "10:44".into(),
            exp_depart: "10:45".into(),
            sch_arrival: "10:44".into(),
            sch_depart: "10:45".into(),
            direction: "Southbound".into(),
            train_type: "DART".into(),
        });

        assert_eq!(entry.service, "DART");
        assert_eq!(entry.code, "E109");
    }

    #[test]
    fn unknown_route_is_classified_as_unknown() {
        let entry = timetable_entry(StationDataXml {
            train_code: "A123".into(),
            station_fullname: "Thurles".into(),
            station_code: "THRLS".into(),
            origin: "Nowhere".into(),
            destination: "Elsewhere".into(),
            origin_time: "09:00".into(),
            destination_time: "12:00".into(),
            due_in: "20".into(),
            late: "3".into(),
            exp_arrival: "10:03".into(),
            exp_depart: "10:05".into(),
            sch_arrival: "10:00".into(),
            sch_depart: "10:02".into(),
            direction: "To Elsewhere".into(),
            train_type: "Train".into(),
        });

        assert_eq!(entry.service, "Unknown");
    }

    #[test]
    fn hacon_train_resolves_location_names() {
        let train = hacon_train(HaconPositionXml {
            train_code: "E109".into(),
            train_origin: "MHIDE".into(),
            train_origin_time: "10:05".into(),
            train_destination: "GSTNS".into(),
            train_destination_time: "11:17".into(),
            next_location: "BRAY".into(),
            next_location_time: "11:02".into(),
            last_location: "SKILL".into(),
            last_location_type: "S".into(),
            train_date: "7 Mar 2024".into(),
            train_status: "R".into(),
            sch_arrival: "10:58".into(),
            sch_depart: "10:59".into(),
            difference: "1".into(),
            train_direction: "Southbound".into(),
            train_latitude: "53.14".into(),
            train_longitude: "-6.11".into(),
        });

        assert_eq!(train.origin.name.as_deref(), Some("Malahide"));
        assert_eq!(train.destination.name.as_deref(), Some("Greystones"));
        assert_eq!(train.next_location.name.as_deref(), Some("Bray"));
        assert_eq!(train.prev_location.name.as_deref(), Some("Shankill"));
        assert_eq!(train.prev_location.stop_type, "S");
    }

    #[test]
    fn hacon_train_with_unknown_code_has_null_name() {
        let train = hacon_train(HaconPositionXml {
            train_code: "X999".into(),
            train_origin: "ZZZZZ".into(),
            train_origin_time: "10:05".into(),
            train_destination: String::new(),
            train_destination_time: String::new(),
            next_location: "BRAY".into(),
            next_location_time: "11:02".into(),
            last_location: String::new(),
            last_location_type: String::new(),
            train_date: "7 Mar 2024".into(),
            train_status: "R".into(),
            sch_arrival: String::new(),
            sch_depart: String::new(),
            difference: "0".into(),
            train_direction: String::new(),
            train_latitude: String::new(),
            train_longitude: String::new(),
        });

        assert_eq!(train.origin.name, None);
        assert_eq!(train.origin.code, "ZZZZZ");
        assert_eq!(train.destination.name, None);
        assert_eq!(train.next_location.name.as_deref(), Some("Bray"));
    }

    #[test]
    fn train_date_has_no_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_train_date(date), "7 Mar 2024");
    }

    #[test]
    fn train_date_two_digit_day() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_train_date(date), "25 Dec 2024");
    }
}

//! Static station reference table.
//!
//! A fixed code → display name mapping used for name-resolution joins on
//! feeds that only carry codes (the hacon positions feed). Separate from
//! the live-fetched [`crate::directory::StationDirectory`]: this table is
//! embedded in the binary and never changes at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReferenceStation {
    code: String,
    name: String,
}

static STATION_NAMES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let stations: Vec<ReferenceStation> =
        serde_json::from_str(include_str!("../data/stations.json"))
            .expect("embedded station table is valid JSON");

    stations.into_iter().map(|s| (s.code, s.name)).collect()
});

/// Resolve a station code to its display name.
///
/// Returns `None` for an empty code or a code not in the table; callers
/// surface that as a `null` name rather than failing.
pub fn station_name(code: &str) -> Option<&'static str> {
    if code.is_empty() {
        return None;
    }

    STATION_NAMES.get(code).map(String::as_str)
}

//! Route-based service type classification.
//!
//! A static rule table maps origin/destination pairs to a named service
//! category ("DART", "Enterprise", ...). The table is embedded in the
//! binary and parsed once on first use; it is never mutated.

use std::sync::LazyLock;

use serde::Deserialize;

/// Sentinel returned when no configured route matches.
pub const UNKNOWN_SERVICE: &str = "Unknown";

/// One origin/destination pair in a rule's route table.
///
/// `from`/`to` are station display names as they appear in the timetable
/// feed's `Origin`/`Destination` fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub bidirectional: bool,
}

/// A named service category with the routes it covers.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTypeRule {
    pub name: String,
    pub routes: Vec<Route>,
}

static SERVICE_TYPES: LazyLock<Vec<ServiceTypeRule>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/service_types.json"))
        .expect("embedded service type table is valid JSON")
});

/// Classify an origin/destination pair against the configured rules.
///
/// Rules and their routes are evaluated in configured order and the first
/// match wins: a route matches on its exact direction, or on the reversed
/// pair when flagged bidirectional. Returns [`UNKNOWN_SERVICE`] when no
/// route matches. Pure and deterministic; no I/O.
pub fn classify(origin: &str, destination: &str) -> &'static str {
    match_rules(&SERVICE_TYPES, origin, destination).unwrap_or(UNKNOWN_SERVICE)
}

fn match_rules<'a>(
    rules: &'a [ServiceTypeRule],
    origin: &str,
    destination: &str,
) -> Option<&'a str> {
    for rule in rules {
        for route in &rule.routes {
            let forward = route.from == origin && route.to == destination;
            let reverse =
                route.bidirectional && route.from == destination && route.to == origin;

            if forward || reverse {
                return Some(&rule.name);
            }
        }
    }

    None
}

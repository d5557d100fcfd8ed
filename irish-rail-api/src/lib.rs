//! REST façade over the Irish Rail realtime XML service.
//!
//! Calls a fixed set of upstream XML endpoints, decodes them, remaps field
//! names into stable record shapes, and enriches the results (station-name
//! lookup joins, route-based service-type classification) before serving
//! them as JSON.

pub mod directory;
pub mod model;
pub mod normalize;
pub mod reference;
pub mod service_types;
pub mod upstream;
pub mod web;

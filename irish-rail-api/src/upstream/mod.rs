//! Irish Rail realtime API client.
//!
//! The realtime service is a legacy SOAP endpoint that also serves plain
//! XML documents over GET/POST. Key characteristics:
//! - Every response is an XML document (or an empty body on some failures)
//! - All leaf values are text; nothing is typed on the wire
//! - The hacon positions endpoint only answers to POST, with no body

mod client;
mod decode;
mod error;
mod types;

pub use client::{RailClient, RailConfig};
pub use decode::decode;
pub use error::{DecodeError, UpstreamError};
pub use types::{
    ArrayOfObjHaconPositions, ArrayOfObjStation, ArrayOfObjStationData, ArrayOfObjTrainMovements,
    ArrayOfObjTrainPositions, HaconPositionXml, StationDataXml, StationXml, TrainMovementXml,
    TrainPositionXml,
};

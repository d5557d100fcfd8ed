//! Normalization and enrichment layer.
//!
//! Pure conversions from upstream DTOs to the stable record shapes, plus
//! [`RailService`], which runs fetch → convert → enrich per operation and
//! degrades every upstream failure to an empty or null result.

mod convert;
mod service;

pub use convert::{
    format_train_date, hacon_train, sort_stations, station_record, timetable_entry,
    train_movement, train_position,
};
pub use service::RailService;

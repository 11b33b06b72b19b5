//! Tariff aggregate
//!
//! Contains the lookup-table types, the LT-1A schedule data, and the
//! bi-monthly bill calculation.

pub mod model;
pub mod schedule;

pub use model::{BillBreakdown, RangeTable, RateBand, TariffSchedule, TelescopicSlab};

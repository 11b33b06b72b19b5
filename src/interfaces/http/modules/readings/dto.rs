//! Meter-reading DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveDailyReadingRequest {
    /// Reading date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Meter reading in units
    #[validate(range(min = 0.0, message = "reading must be non-negative"))]
    pub units: f64,
}

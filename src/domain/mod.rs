pub mod tariff;

// Re-export commonly used types
pub use tariff::{BillBreakdown, RangeTable, RateBand, TariffSchedule, TelescopicSlab};
pub use crate::shared::types::errors::{DomainError, DomainResult};

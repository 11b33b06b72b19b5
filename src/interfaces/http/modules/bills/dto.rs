//! Bill DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::BillBreakdown;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EstimateBillRequest {
    /// Bi-monthly units consumed
    #[validate(range(min = 0, message = "units must be non-negative"))]
    pub units: i64,
}

/// Itemized bi-monthly bill. Subsidies are negative amounts; all monetary
/// fields are rounded to two decimals.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BillResponse {
    pub total_units: u64,
    #[schema(value_type = f64)]
    pub fixed_charge: Decimal,
    #[schema(value_type = f64)]
    pub energy_charge: Decimal,
    #[schema(value_type = f64)]
    pub electricity_duty: Decimal,
    #[schema(value_type = f64)]
    pub fuel_surcharge: Decimal,
    #[schema(value_type = f64)]
    pub meter_rent: Decimal,
    #[schema(value_type = f64)]
    pub fc_subsidy: Decimal,
    #[schema(value_type = f64)]
    pub ec_subsidy: Decimal,
    #[schema(value_type = f64)]
    pub total_bill: Decimal,
}

impl From<BillBreakdown> for BillResponse {
    fn from(b: BillBreakdown) -> Self {
        Self {
            total_units: b.total_units,
            fixed_charge: b.fixed_charge,
            energy_charge: b.energy_charge,
            electricity_duty: b.electricity_duty,
            fuel_surcharge: b.fuel_surcharge,
            meter_rent: b.meter_rent,
            fc_subsidy: b.fc_subsidy,
            ec_subsidy: b.ec_subsidy,
            total_bill: b.total_bill,
        }
    }
}

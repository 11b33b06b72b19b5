//! Billing service for bi-monthly bill estimation

use tracing::info;

use crate::domain::{BillBreakdown, DomainResult, TariffSchedule};

/// Service for billing operations
pub struct BillingService {
    schedule: TariffSchedule,
}

impl BillingService {
    /// `schedule` is expected to have passed [`TariffSchedule::validate`];
    /// [`TariffSchedule::domestic`] returns it that way.
    pub fn new(schedule: TariffSchedule) -> Self {
        Self { schedule }
    }

    /// Estimate the bi-monthly bill for the given consumption.
    pub fn estimate(&self, units: u64) -> DomainResult<BillBreakdown> {
        let breakdown = self.schedule.bill(units);

        info!(
            units,
            energy_charge = %breakdown.energy_charge,
            total_bill = %breakdown.total_bill,
            "Bi-monthly bill estimated"
        );

        Ok(breakdown)
    }
}

// ── Tests ──────────────────────────────────────────────────────

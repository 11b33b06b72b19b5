//! Tariff domain entities
//!
//! Lookup tables, telescopic slabs, and the bi-monthly bill calculation.

use rust_decimal::Decimal;

use crate::shared::types::errors::{DomainError, DomainResult};

/// One interval of a [`RangeTable`]: a closed `[lower, upper]` unit range
/// mapped to a monetary amount. `upper == None` marks the open-ended top
/// band.
#[derive(Debug, Clone, Copy)]
pub struct RateBand {
    pub lower: u64,
    pub upper: Option<u64>,
    pub amount: Decimal,
}

impl RateBand {
    pub const fn bounded(lower: u64, upper: u64, amount: Decimal) -> Self {
        Self {
            lower,
            upper: Some(upper),
            amount,
        }
    }

    pub const fn open(lower: u64, amount: Decimal) -> Self {
        Self {
            lower,
            upper: None,
            amount,
        }
    }

    pub fn contains(&self, units: u64) -> bool {
        units >= self.lower && self.upper.map_or(true, |upper| units <= upper)
    }
}

/// Ordered set of disjoint unit intervals mapped to amounts.
///
/// Lookup returns the first band containing the input. [`RangeTable::validate`]
/// must pass before a table is put into service, which makes an unmatched
/// lookup unreachable.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    name: &'static str,
    bands: &'static [RateBand],
}

impl RangeTable {
    pub const fn new(name: &'static str, bands: &'static [RateBand]) -> Self {
        Self { name, bands }
    }

    pub fn lookup(&self, units: u64) -> DomainResult<Decimal> {
        self.bands
            .iter()
            .find(|band| band.contains(units))
            .map(|band| band.amount)
            .ok_or(DomainError::UnmatchedRange {
                table: self.name,
                units,
            })
    }

    /// Amount of the lowest band.
    pub fn first_amount(&self) -> Decimal {
        self.bands
            .first()
            .map(|band| band.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Checks that the bands start at `expected_start`, are contiguous
    /// without overlap, and end with an open upper bound.
    pub fn validate(&self, expected_start: u64) -> DomainResult<()> {
        let first = self
            .bands
            .first()
            .ok_or_else(|| self.malformed("no bands configured"))?;
        if first.lower != expected_start {
            return Err(self.malformed(format!(
                "first band starts at {} instead of {}",
                first.lower, expected_start
            )));
        }

        for pair in self.bands.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            match prev.upper {
                None => {
                    return Err(self.malformed(format!(
                        "band at {} follows an open-ended band",
                        next.lower
                    )));
                }
                Some(upper) if next.lower != upper + 1 => {
                    return Err(self.malformed(format!(
                        "bands [{}, {}] and [{}, ..] are not contiguous",
                        prev.lower, upper, next.lower
                    )));
                }
                Some(_) => {}
            }
        }

        match self.bands.last() {
            Some(last) if last.upper.is_none() => Ok(()),
            _ => Err(self.malformed("highest band must have an open upper bound")),
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> DomainError {
        DomainError::MalformedTable {
            table: self.name,
            reason: reason.into(),
        }
    }
}

/// One telescopic slab: up to `width` units billed at `rate` per unit.
#[derive(Debug, Clone, Copy)]
pub struct TelescopicSlab {
    pub width: u64,
    pub rate: Decimal,
}

impl TelescopicSlab {
    pub const fn new(width: u64, rate: Decimal) -> Self {
        Self { width, rate }
    }
}

/// Complete tariff schedule for one consumer class.
///
/// All tables are process-wide constants; [`TariffSchedule::validate`] runs
/// once at startup.
#[derive(Debug, Clone)]
pub struct TariffSchedule {
    pub fixed_charges: RangeTable,
    /// Slabs applied cumulatively from zero while consumption stays at or
    /// below `telescopic_limit`.
    pub telescopic_slabs: &'static [TelescopicSlab],
    /// Flat per-unit rates applied to the whole consumption above
    /// `telescopic_limit`.
    pub flat_rates: RangeTable,
    /// Rate used if no flat-rate band matches.
    pub flat_rate_fallback: Decimal,
    pub fc_subsidy: RangeTable,
    pub ec_subsidy: RangeTable,
    pub duty_rate: Decimal,
    pub fuel_surcharge_per_unit: Decimal,
    pub meter_rent: Decimal,
    pub telescopic_limit: u64,
}

impl TariffSchedule {
    /// Checks every lookup table before the schedule is put into service.
    pub fn validate(&self) -> DomainResult<()> {
        self.fixed_charges.validate(0)?;
        self.flat_rates.validate(self.telescopic_limit + 1)?;
        self.fc_subsidy.validate(0)?;
        self.ec_subsidy.validate(0)?;

        let covered: u64 = self.telescopic_slabs.iter().map(|slab| slab.width).sum();
        if covered < self.telescopic_limit {
            return Err(DomainError::MalformedTable {
                table: "telescopic_slabs",
                reason: format!("slabs cover {} of {} units", covered, self.telescopic_limit),
            });
        }

        Ok(())
    }

    /// Calculate the bi-monthly bill for `units` consumed.
    ///
    /// Internal arithmetic keeps full decimal precision; every output field
    /// is rounded to 2 decimal places independently, and the total sums the
    /// unrounded components before its own rounding.
    pub fn bill(&self, units: u64) -> BillBreakdown {
        let consumed = Decimal::from(units);

        let mut fixed_charge = self.fixed_charges.lookup(units).unwrap_or(Decimal::ZERO);
        if units == 0 {
            // A zero-consumption bill still carries the lowest slab's fixed charge.
            fixed_charge = self.fixed_charges.first_amount();
        }

        let energy_charge = if units > self.telescopic_limit {
            // Above the limit the flat rate applies to the entire
            // consumption, not only the units past the limit.
            let rate = self
                .flat_rates
                .lookup(units)
                .unwrap_or(self.flat_rate_fallback);
            consumed * rate
        } else {
            let mut charge = Decimal::ZERO;
            let mut remaining = units;
            for slab in self.telescopic_slabs {
                if remaining == 0 {
                    break;
                }
                let in_slab = remaining.min(slab.width);
                charge += Decimal::from(in_slab) * slab.rate;
                remaining -= in_slab;
            }
            charge
        };

        let electricity_duty = energy_charge * self.duty_rate;
        let fuel_surcharge = consumed * self.fuel_surcharge_per_unit;
        let meter_rent = self.meter_rent;
        let fc_subsidy = self.fc_subsidy.lookup(units).unwrap_or(Decimal::ZERO);
        let ec_subsidy = self.ec_subsidy.lookup(units).unwrap_or(Decimal::ZERO);

        // Subsidies are negative amounts, so the total is a plain sum.
        let total_bill = fixed_charge
            + energy_charge
            + electricity_duty
            + fuel_surcharge
            + meter_rent
            + fc_subsidy
            + ec_subsidy;

        BillBreakdown {
            total_units: units,
            fixed_charge: fixed_charge.round_dp(2),
            energy_charge: energy_charge.round_dp(2),
            electricity_duty: electricity_duty.round_dp(2),
            fuel_surcharge: fuel_surcharge.round_dp(2),
            meter_rent: meter_rent.round_dp(2),
            fc_subsidy: fc_subsidy.round_dp(2),
            ec_subsidy: ec_subsidy.round_dp(2),
            total_bill: total_bill.round_dp(2),
        }
    }
}

/// Itemized bi-monthly bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillBreakdown {
    pub total_units: u64,
    pub fixed_charge: Decimal,
    pub energy_charge: Decimal,
    pub electricity_duty: Decimal,
    pub fuel_surcharge: Decimal,
    pub meter_rent: Decimal,
    pub fc_subsidy: Decimal,
    pub ec_subsidy: Decimal,
    pub total_bill: Decimal,
}

// ── Tests ──────────────────────────────────────────────────────

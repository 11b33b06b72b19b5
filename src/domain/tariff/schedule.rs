//! Published KSEB Domestic (LT-1A) bi-monthly tariff data.
//!
//! Rates and subsidies follow the KSEB online bill calculator tables and are
//! subject to revision by KSERC. The EC subsidy deliberately dips at the
//! 241-289 bin; that is what the published data says.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{RangeTable, RateBand, TariffSchedule, TelescopicSlab};
use crate::shared::types::errors::DomainResult;

/// Bi-monthly fixed charge per consumption slab.
const FIXED_CHARGES: RangeTable = RangeTable::new(
    "fixed_charges",
    &[
        RateBand::bounded(0, 100, dec!(99.5)),
        RateBand::bounded(101, 200, dec!(169.0)),
        RateBand::bounded(201, 300, dec!(209.0)),
        RateBand::bounded(301, 400, dec!(279.0)),
        RateBand::bounded(401, 500, dec!(318.5)),
        RateBand::bounded(501, 600, dec!(437.0)),
        RateBand::bounded(601, 800, dec!(517.5)),
        RateBand::open(801, dec!(568.0)),
    ],
);

/// Telescopic energy-charge slabs for consumption up to 500 units.
const TELESCOPIC_SLABS: &[TelescopicSlab] = &[
    TelescopicSlab::new(100, dec!(3.35)),
    TelescopicSlab::new(100, dec!(4.25)),
    TelescopicSlab::new(100, dec!(5.35)),
    TelescopicSlab::new(100, dec!(7.20)),
    TelescopicSlab::new(100, dec!(8.50)),
];

/// Non-telescopic per-unit rates for consumption above 500 units.
const NON_TELESCOPIC_RATES: RangeTable = RangeTable::new(
    "non_telescopic_rates",
    &[
        RateBand::bounded(501, 600, dec!(6.75)),
        RateBand::bounded(601, 800, dec!(7.95)),
        RateBand::open(801, dec!(8.25)),
    ],
);

/// Fixed-charge subsidy: granted up to 300 units, withdrawn above.
const FC_SUBSIDY: RangeTable = RangeTable::new(
    "fc_subsidy",
    &[
        RateBand::bounded(0, 300, dec!(-40.0)),
        RateBand::open(301, dec!(0.0)),
    ],
);

/// Energy-charge subsidy bins. Non-monotonic: the amount shrinks again in
/// the 241-289 bin before vanishing at 290.
const EC_SUBSIDY: RangeTable = RangeTable::new(
    "ec_subsidy",
    &[
        RateBand::bounded(0, 44, dec!(-6.0)),
        RateBand::bounded(45, 99, dec!(-37.5)),
        RateBand::bounded(100, 111, dec!(-43.5)),
        RateBand::bounded(112, 123, dec!(-49.5)),
        RateBand::bounded(124, 180, dec!(-78.0)),
        RateBand::bounded(181, 222, dec!(-99.0)),
        RateBand::bounded(223, 233, dec!(-104.5)),
        RateBand::bounded(234, 240, dec!(-108.0)),
        RateBand::bounded(241, 289, dec!(-78.0)),
        RateBand::open(290, dec!(0.0)),
    ],
);

const DUTY_RATE: Decimal = dec!(0.10);
const FUEL_SURCHARGE_PER_UNIT: Decimal = dec!(0.08);
const METER_RENT: Decimal = dec!(12.0);
const TELESCOPIC_LIMIT: u64 = 500;
const FLAT_RATE_FALLBACK: Decimal = dec!(8.25);

impl TariffSchedule {
    /// The KSEB Domestic LT-1A bi-monthly schedule, validated.
    pub fn domestic() -> DomainResult<Self> {
        let schedule = Self {
            fixed_charges: FIXED_CHARGES,
            telescopic_slabs: TELESCOPIC_SLABS,
            flat_rates: NON_TELESCOPIC_RATES,
            flat_rate_fallback: FLAT_RATE_FALLBACK,
            fc_subsidy: FC_SUBSIDY,
            ec_subsidy: EC_SUBSIDY,
            duty_rate: DUTY_RATE,
            fuel_surcharge_per_unit: FUEL_SURCHARGE_PER_UNIT,
            meter_rent: METER_RENT,
            telescopic_limit: TELESCOPIC_LIMIT,
        };
        schedule.validate()?;
        Ok(schedule)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn schedule() -> TariffSchedule {
        TariffSchedule::domestic().unwrap()
    }

    #[test]
    fn domestic_schedule_validates() {
        assert!(TariffSchedule::domestic().is_ok());
    }

    #[test]
    fn zero_units_still_produce_a_full_breakdown() {
        let bill = schedule().bill(0);
        assert_eq!(bill.total_units, 0);
        assert_eq!(bill.fixed_charge, dec!(99.5));
        assert_eq!(bill.energy_charge, Decimal::ZERO);
        assert_eq!(bill.electricity_duty, Decimal::ZERO);
        assert_eq!(bill.fuel_surcharge, Decimal::ZERO);
        assert_eq!(bill.meter_rent, dec!(12.0));
        assert_eq!(bill.fc_subsidy, dec!(-40.0));
        assert_eq!(bill.ec_subsidy, dec!(-6.0));
        assert_eq!(bill.total_bill, dec!(65.5));
    }

    #[test]
    fn first_slab_holds_through_100_units() {
        let s = schedule();
        for units in 0..=100 {
            let bill = s.bill(units);
            assert_eq!(bill.fixed_charge, dec!(99.5), "units={units}");
            assert_eq!(
                bill.energy_charge,
                dec!(3.35) * Decimal::from(units),
                "units={units}"
            );
        }
    }

    #[test]
    fn telescopic_walk_crosses_partial_slab() {
        // 100 @ 3.35 + 100 @ 4.25 + 50 @ 5.35
        let bill = schedule().bill(250);
        assert_eq!(bill.fixed_charge, dec!(209.0));
        assert_eq!(bill.energy_charge, dec!(1027.5));
        assert_eq!(bill.electricity_duty, dec!(102.75));
        assert_eq!(bill.fuel_surcharge, dec!(20.0));
        assert_eq!(bill.fc_subsidy, dec!(-40.0));
        assert_eq!(bill.ec_subsidy, dec!(-78.0));
        assert_eq!(bill.total_bill, dec!(1253.25));
    }

    #[test]
    fn telescopic_upper_edge_uses_all_five_slabs() {
        let bill = schedule().bill(500);
        assert_eq!(bill.fixed_charge, dec!(318.5));
        assert_eq!(bill.energy_charge, dec!(2865.0));
        assert_eq!(bill.total_bill, dec!(3522.0));
    }

    #[test]
    fn flat_rate_applies_to_entire_consumption() {
        let s = schedule();
        assert_eq!(s.bill(501).energy_charge, dec!(3381.75));
        assert_eq!(s.bill(555).energy_charge, dec!(3746.25));
        assert_eq!(s.bill(794).energy_charge, dec!(6312.30));
    }

    #[test]
    fn top_bins_are_open_ended() {
        let bill = schedule().bill(1000);
        assert_eq!(bill.fixed_charge, dec!(568.0));
        assert_eq!(bill.energy_charge, dec!(8250.0));
        assert_eq!(bill.ec_subsidy, Decimal::ZERO);
        assert_eq!(bill.total_bill, dec!(9735.0));
    }

    #[test]
    fn ec_subsidy_dips_then_recovers() {
        let s = schedule();
        let ec = |units: u64| s.bill(units).ec_subsidy;
        assert_eq!(ec(44), dec!(-6.0));
        assert_eq!(ec(45), dec!(-37.5));
        assert_eq!(ec(100), dec!(-43.5));
        assert_eq!(ec(112), dec!(-49.5));
        assert_eq!(ec(124), dec!(-78.0));
        assert_eq!(ec(181), dec!(-99.0));
        assert_eq!(ec(223), dec!(-104.5));
        assert_eq!(ec(240), dec!(-108.0));
        // the published table drops back here, it is not smoothed out
        assert_eq!(ec(241), dec!(-78.0));
        assert_eq!(ec(289), dec!(-78.0));
        assert_eq!(ec(290), Decimal::ZERO);
    }

    #[test]
    fn fc_subsidy_withdrawn_above_300() {
        let s = schedule();
        assert_eq!(s.bill(300).fc_subsidy, dec!(-40.0));
        assert_eq!(s.bill(301).fc_subsidy, Decimal::ZERO);
    }

    #[test]
    fn fixed_charge_never_decreases() {
        let s = schedule();
        let mut previous = s.bill(0).fixed_charge;
        for units in 1..=1200 {
            let current = s.bill(units).fixed_charge;
            assert!(current >= previous, "fixed charge dropped at {units} units");
            previous = current;
        }
    }

    #[test]
    fn total_is_rounded_after_summation() {
        // At 555 units the duty is 374.625 and the unrounded component sum
        // is 4614.275: both round half-to-even independently, so the total
        // differs from the sum of the rounded fields by one paisa.
        let bill = schedule().bill(555);
        assert_eq!(bill.electricity_duty, dec!(374.62));
        assert_eq!(bill.total_bill, dec!(4614.28));

        let rounded_parts = bill.fixed_charge
            + bill.energy_charge
            + bill.electricity_duty
            + bill.fuel_surcharge
            + bill.meter_rent
            + bill.fc_subsidy
            + bill.ec_subsidy;
        assert_eq!(rounded_parts, dec!(4614.27));
        assert_ne!(rounded_parts, bill.total_bill);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let s = schedule();
        assert_eq!(s.bill(250), s.bill(250));
        assert_eq!(s.bill(0), s.bill(0));
    }

    #[test]
    fn fuel_surcharge_is_per_unit_on_the_whole_consumption() {
        let s = schedule();
        assert_eq!(s.bill(125).fuel_surcharge, dec!(10.0));
        assert_eq!(s.bill(555).fuel_surcharge, dec!(44.4));
    }
}

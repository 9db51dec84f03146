use bon::builder;
use serde::Serialize;

use crate::{
    core::InvalidInput,
    prelude::*,
    quantity::{
        fuel::{DollarsPerGallon, GallonsPerHour},
        money::{Dollars, DollarsPerHour},
        time::Hours,
    },
};

/// Annual operating cost of one configuration, itemised.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnnualCostBreakdown {
    pub fuel_cost: Dollars,
    pub labor_cost: Dollars,

    /// Straight-line depreciation without salvage value.
    pub capital_cost: Dollars,

    pub autonomy_cost: Dollars,

    /// Exactly the sum of the four components above.
    pub total_cost: Dollars,
}

/// Annual cost of running `unit_count` mowers for `hours_per_week` each.
#[builder]
#[allow(clippy::too_many_arguments)]
pub fn compute_annual_cost(
    unit_count: u32,
    fuel_consumption: GallonsPerHour,
    labor_rate: DollarsPerHour,
    hours_per_week: Hours,
    weeks_per_year: u32,
    capital_cost_per_unit: Dollars,
    lifespan_years: u32,
    #[builder(default)] autonomy_overhead: Dollars,
    #[builder(default = DollarsPerGallon::DEFAULT_FUEL_PRICE)] fuel_price: DollarsPerGallon,
) -> Result<AnnualCostBreakdown, InvalidInput> {
    if lifespan_years == 0 {
        return Err(InvalidInput::Lifespan);
    }
    let unit_count = f64::from(unit_count);
    let weeks_per_year = f64::from(weeks_per_year);

    let fuel_cost = fuel_consumption * unit_count * hours_per_week * weeks_per_year * fuel_price;
    let labor_cost = labor_rate * unit_count * hours_per_week * weeks_per_year;
    let capital_cost = capital_cost_per_unit * unit_count / f64::from(lifespan_years);
    let total_cost = fuel_cost + labor_cost + capital_cost + autonomy_overhead;
    debug!(%fuel_cost, %labor_cost, %capital_cost, %autonomy_overhead, %total_cost);

    Ok(AnnualCostBreakdown {
        fuel_cost,
        labor_cost,
        capital_cost,
        autonomy_cost: autonomy_overhead,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_labor_fleet_ok() -> Result {
        let costs = compute_annual_cost()
            .unit_count(5)
            .fuel_consumption(GallonsPerHour(4.0))
            .labor_rate(DollarsPerHour(24.0))
            .hours_per_week(Hours(35.0))
            .weeks_per_year(52)
            .capital_cost_per_unit(Dollars(138_000.0))
            .lifespan_years(7)
            .call()?;
        assert_relative_eq!(costs.fuel_cost.0, 91_000.0);
        assert_relative_eq!(costs.labor_cost.0, 218_400.0);
        assert_relative_eq!(costs.capital_cost.0, 690_000.0 / 7.0);
        assert_eq!(costs.autonomy_cost, Dollars::ZERO);
        assert_relative_eq!(costs.total_cost.0, 91_000.0 + 218_400.0 + 690_000.0 / 7.0);
        Ok(())
    }

    #[test]
    fn test_custom_fuel_price_and_overhead() -> Result {
        let costs = compute_annual_cost()
            .unit_count(1)
            .fuel_consumption(GallonsPerHour(2.0))
            .labor_rate(DollarsPerHour::ZERO)
            .hours_per_week(Hours(10.0))
            .weeks_per_year(50)
            .capital_cost_per_unit(Dollars::ZERO)
            .lifespan_years(1)
            .autonomy_overhead(Dollars(1_000.0))
            .fuel_price(DollarsPerGallon(4.0))
            .call()?;
        assert_relative_eq!(costs.fuel_cost.0, 4_000.0);
        assert_relative_eq!(costs.total_cost.0, 5_000.0);
        Ok(())
    }

    #[test]
    fn test_zero_lifespan() {
        let result = compute_annual_cost()
            .unit_count(1)
            .fuel_consumption(GallonsPerHour(4.0))
            .labor_rate(DollarsPerHour(24.0))
            .hours_per_week(Hours(35.0))
            .weeks_per_year(52)
            .capital_cost_per_unit(Dollars(138_000.0))
            .lifespan_years(0)
            .call();
        assert_eq!(result, Err(InvalidInput::Lifespan));
    }

    #[test]
    fn test_doubling_lifespan_halves_capital() -> Result {
        let capital_cost = |lifespan_years| {
            compute_annual_cost()
                .unit_count(3)
                .fuel_consumption(GallonsPerHour(4.75))
                .labor_rate(DollarsPerHour(24.0))
                .hours_per_week(Hours(35.0))
                .weeks_per_year(52)
                .capital_cost_per_unit(Dollars(175_000.0))
                .lifespan_years(lifespan_years)
                .call()
                .map(|costs| costs.capital_cost)
        };
        for lifespan_years in 1..=15 {
            assert_relative_eq!(
                capital_cost(lifespan_years * 2)?.0,
                capital_cost(lifespan_years)?.0 / 2.0,
            );
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn total_is_sum_of_components(
            unit_count in 1_u32..50,
            fuel_consumption in 0.1_f64..20.0,
            labor_rate in 0.0_f64..100.0,
            hours_per_week in 1_u32..168,
            capital_cost_per_unit in 0.0_f64..1_000_000.0,
            lifespan_years in 1_u32..30,
            autonomy_overhead in 0.0_f64..1_000_000.0,
            fuel_price in 0.0_f64..10.0,
        ) {
            let costs = compute_annual_cost()
                .unit_count(unit_count)
                .fuel_consumption(GallonsPerHour(fuel_consumption))
                .labor_rate(DollarsPerHour(labor_rate))
                .hours_per_week(Hours(f64::from(hours_per_week)))
                .weeks_per_year(52)
                .capital_cost_per_unit(Dollars(capital_cost_per_unit))
                .lifespan_years(lifespan_years)
                .autonomy_overhead(Dollars(autonomy_overhead))
                .fuel_price(DollarsPerGallon(fuel_price))
                .call()
                .unwrap();
            prop_assert_eq!(
                costs.total_cost,
                costs.fuel_cost + costs.labor_cost + costs.capital_cost + costs.autonomy_cost,
            );
        }
    }
}

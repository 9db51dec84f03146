use serde::Serialize;

use crate::{
    core::{
        AnnualCostBreakdown,
        Configuration,
        Fleet,
        InvalidInput,
        LaborMode,
        Operation,
        compute_annual_cost,
        compute_autonomy_overhead,
        compute_fleet_size,
        compute_hours_needed,
    },
    prelude::*,
    quantity::money::{Dollars, DollarsPerHour},
};

/// Annual costs of the baseline and alternative configurations side by side.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline_fleet: Fleet,
    pub alternative_fleet: Fleet,
    pub baseline: AnnualCostBreakdown,
    pub alternative: AnnualCostBreakdown,

    /// Baseline total minus alternative total, negative when the alternative costs more.
    pub savings_absolute: Dollars,

    /// Savings relative to the baseline total, in percent.
    pub savings_percentage: f64,

    pub is_favorable: bool,
}

/// Compare the annual costs of two configurations under the same operation.
///
/// Each configuration is evaluated on its own: fleet size depends on the width,
/// and in the autonomous mode so does the autonomy overhead.
#[instrument(level = Level::DEBUG, skip_all, fields(labor_mode = labor_mode.name()))]
pub fn compare(
    operation: &Operation,
    baseline: &Configuration,
    alternative: &Configuration,
    labor_mode: &LaborMode,
) -> Result<Comparison, InvalidInput> {
    operation.validate()?;
    labor_mode.validate()?;

    let (baseline_fleet, baseline) = evaluate(operation, baseline, labor_mode)?;
    let (alternative_fleet, alternative) = evaluate(operation, alternative, labor_mode)?;

    if baseline.total_cost == Dollars::ZERO {
        return Err(InvalidInput::ZeroBaselineCost);
    }
    let savings_absolute = baseline.total_cost - alternative.total_cost;
    let savings_percentage = savings_absolute / baseline.total_cost * 100.0;
    debug!(%savings_absolute, savings_percentage, "compared");

    Ok(Comparison {
        baseline_fleet,
        alternative_fleet,
        baseline,
        alternative,
        savings_absolute,
        savings_percentage,
        is_favorable: savings_percentage > 0.0,
    })
}

/// Size the fleet for one configuration and cost it.
fn evaluate(
    operation: &Operation,
    configuration: &Configuration,
    labor_mode: &LaborMode,
) -> Result<(Fleet, AnnualCostBreakdown), InvalidInput> {
    configuration.validate()?;

    let hours_per_week = operation.hours_per_week();
    let hours_needed =
        compute_hours_needed(operation.weekly_goal, configuration.width, operation.cutting_speed)?;
    let fleet = Fleet { hours_needed, unit_count: compute_fleet_size(hours_needed, hours_per_week)? };
    debug!(width = %configuration.width, %hours_needed, fleet.unit_count);

    let (labor_rate, autonomy_overhead) = match *labor_mode {
        LaborMode::Labor { labor_rate } => (labor_rate, Dollars::ZERO),
        LaborMode::Autonomous { overseer_salary, kit_cost, annual_fees } => {
            let overhead = compute_autonomy_overhead()
                .unit_count(fleet.unit_count)
                .overseer_salary(overseer_salary)
                .kit_cost_per_unit(kit_cost)
                .annual_fee_per_unit(annual_fees)
                .lifespan_years(operation.lifespan_years)
                .call()?;
            (DollarsPerHour::ZERO, overhead)
        }
    };

    let costs = compute_annual_cost()
        .unit_count(fleet.unit_count)
        .fuel_consumption(configuration.fuel_consumption)
        .labor_rate(labor_rate)
        .hours_per_week(hours_per_week)
        .weeks_per_year(operation.weeks_per_year)
        .capital_cost_per_unit(configuration.capital_cost)
        .lifespan_years(operation.lifespan_years)
        .autonomy_overhead(autonomy_overhead)
        .fuel_price(operation.fuel_price)
        .call()?;
    Ok((fleet, costs))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::OperatingScenario,
        quantity::{area::Acres, fuel::DollarsPerGallon},
    };

    #[test]
    fn test_labor_regression() -> Result {
        let comparison = OperatingScenario::sample().compare()?;

        assert_eq!(comparison.baseline_fleet.unit_count, 5);
        assert_eq!(comparison.alternative_fleet.unit_count, 3);

        assert_eq!(
            comparison.baseline.total_cost,
            Dollars(
                4.0 * 5.0 * 35.0 * 52.0 * 2.5 + 24.0 * 5.0 * 35.0 * 52.0 + 138_000.0 * 5.0 / 7.0
            ),
        );
        assert_eq!(
            comparison.alternative.total_cost,
            Dollars(
                4.75 * 3.0 * 35.0 * 52.0 * 2.5 + 24.0 * 3.0 * 35.0 * 52.0 + 175_000.0 * 3.0 / 7.0
            ),
        );
        assert_abs_diff_eq!(comparison.baseline.total_cost.0, 407_971.43, epsilon = 0.01);
        assert_abs_diff_eq!(comparison.alternative.total_cost.0, 270_877.50, epsilon = 0.01);
        assert_abs_diff_eq!(comparison.savings_absolute.0, 137_093.93, epsilon = 0.01);
        assert_abs_diff_eq!(comparison.savings_percentage, 33.60, epsilon = 0.01);
        assert!(comparison.is_favorable);
        Ok(())
    }

    #[test]
    fn test_autonomous_regression() -> Result {
        let comparison = OperatingScenario::sample_autonomous().compare()?;

        assert_eq!(comparison.baseline.labor_cost, Dollars::ZERO);
        assert_eq!(comparison.alternative.labor_cost, Dollars::ZERO);

        // Overhead is sized by each configuration's own fleet:
        assert_abs_diff_eq!(
            comparison.baseline.autonomy_cost.0,
            80_000.0 + 5.0 * 75_000.0 / 7.0 + 5.0 * 20_000.0,
            epsilon = 1e-6,
        );
        assert_abs_diff_eq!(
            comparison.alternative.autonomy_cost.0,
            80_000.0 + 3.0 * 75_000.0 / 7.0 + 3.0 * 20_000.0,
            epsilon = 1e-6,
        );
        assert_abs_diff_eq!(comparison.baseline.total_cost.0, 423_142.86, epsilon = 0.01);
        assert_abs_diff_eq!(comparison.alternative.total_cost.0, 311_980.36, epsilon = 0.01);
        assert!(comparison.is_favorable);
        Ok(())
    }

    #[test]
    fn test_identical_configurations() -> Result {
        let mut scenario = OperatingScenario::sample();
        scenario.alternative = scenario.baseline;
        let comparison = scenario.compare()?;
        assert_eq!(comparison.savings_absolute, Dollars::ZERO);
        assert_abs_diff_eq!(comparison.savings_percentage, 0.0);
        assert!(!comparison.is_favorable);
        Ok(())
    }

    #[test]
    fn test_unfavorable() -> Result {
        let mut scenario = OperatingScenario::sample();
        scenario.alternative.capital_cost = Dollars(5_000_000.0);
        let comparison = scenario.compare()?;
        assert!(comparison.savings_absolute < Dollars::ZERO);
        assert!(comparison.savings_percentage < 0.0);
        assert!(!comparison.is_favorable);
        Ok(())
    }

    #[test]
    fn test_zero_baseline_cost() {
        let mut scenario = OperatingScenario::sample();
        scenario.operation.fuel_price = DollarsPerGallon::ZERO;
        scenario.labor_mode = LaborMode::Labor { labor_rate: DollarsPerHour::ZERO };
        scenario.baseline.capital_cost = Dollars::ZERO;
        assert_eq!(scenario.compare(), Err(InvalidInput::ZeroBaselineCost));
    }

    #[test]
    fn test_zero_lifespan() {
        let mut scenario = OperatingScenario::sample();
        scenario.operation.lifespan_years = 0;
        assert_eq!(scenario.compare(), Err(InvalidInput::Lifespan));
    }

    #[test]
    fn test_unrepresentable_fleet() {
        let mut scenario = OperatingScenario::sample();
        scenario.operation.weekly_goal = Acres(1.0e12);
        scenario.operation.working_days_per_week = 1;
        scenario.operation.hours_per_day = 1;
        assert!(matches!(scenario.compare(), Err(InvalidInput::FleetSize(_))));
    }
}

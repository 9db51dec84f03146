use serde::{Deserialize, Serialize};

use crate::{
    core::{Comparison, InvalidInput, compare},
    quantity::{
        area::Acres,
        fuel::{DollarsPerGallon, GallonsPerHour},
        length::Feet,
        money::{Dollars, DollarsPerHour},
        speed::MilesPerHour,
        time::Hours,
    },
};

/// Operating parameters shared by both compared configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "weekly_goal_acres")]
    pub weekly_goal: Acres,

    /// `1..=7`.
    pub working_days_per_week: u32,

    /// `1..=24`.
    pub hours_per_day: u32,

    /// Mower lifespan, used for straight-line depreciation.
    pub lifespan_years: u32,

    #[serde(default = "Operation::default_fuel_price")]
    pub fuel_price: DollarsPerGallon,

    #[serde(rename = "cutting_speed_mph", default = "Operation::default_cutting_speed")]
    pub cutting_speed: MilesPerHour,

    #[serde(default = "Operation::default_weeks_per_year")]
    pub weeks_per_year: u32,
}

impl Operation {
    pub const DEFAULT_WEEKS_PER_YEAR: u32 = 52;

    const fn default_fuel_price() -> DollarsPerGallon {
        DollarsPerGallon::DEFAULT_FUEL_PRICE
    }

    const fn default_cutting_speed() -> MilesPerHour {
        MilesPerHour::TYPICAL_CUTTING
    }

    const fn default_weeks_per_year() -> u32 {
        Self::DEFAULT_WEEKS_PER_YEAR
    }

    /// Weekly hours each unit is available for.
    #[must_use]
    pub fn hours_per_week(&self) -> Hours {
        Hours::per_week(self.working_days_per_week, self.hours_per_day)
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.weekly_goal.is_positive() {
            return Err(InvalidInput::WeeklyGoal(self.weekly_goal));
        }
        if !(1..=7).contains(&self.working_days_per_week) {
            return Err(InvalidInput::WorkingDays(self.working_days_per_week));
        }
        if !(1..=24).contains(&self.hours_per_day) {
            return Err(InvalidInput::HoursPerDay(self.hours_per_day));
        }
        if self.lifespan_years == 0 {
            return Err(InvalidInput::Lifespan);
        }
        if self.weeks_per_year == 0 {
            return Err(InvalidInput::WeeksPerYear);
        }
        if !self.cutting_speed.is_positive() {
            return Err(InvalidInput::CuttingSpeed(self.cutting_speed));
        }
        InvalidInput::ensure_amount("fuel price", self.fuel_price.0)
    }
}

/// One of the two compared mower setups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "width_feet")]
    pub width: Feet,

    /// Purchase price per unit.
    pub capital_cost: Dollars,

    #[serde(rename = "fuel_consumption_gal_per_hr")]
    pub fuel_consumption: GallonsPerHour,
}

impl Configuration {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.width.is_positive() {
            return Err(InvalidInput::EffectiveWidth(self.width));
        }
        if !self.fuel_consumption.is_positive() {
            return Err(InvalidInput::FuelConsumption(self.fuel_consumption));
        }
        InvalidInput::ensure_amount("capital cost", self.capital_cost.0)
    }
}

/// Who drives the mowers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LaborMode {
    /// Paid operators, one per unit, billed by the hour.
    Labor { labor_rate: DollarsPerHour },

    /// Autonomous tractors under a single overseer.
    Autonomous {
        overseer_salary: Dollars,

        /// Autonomy kit price per unit.
        kit_cost: Dollars,

        /// Recurring fees per unit per year.
        annual_fees: Dollars,
    },
}

impl LaborMode {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Labor { .. } => "Labor",
            Self::Autonomous { .. } => "Autonomous",
        }
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        match *self {
            Self::Labor { labor_rate } => InvalidInput::ensure_amount("labor rate", labor_rate.0),
            Self::Autonomous { overseer_salary, kit_cost, annual_fees } => {
                InvalidInput::ensure_amount("overseer salary", overseer_salary.0)?;
                InvalidInput::ensure_amount("kit cost", kit_cost.0)?;
                InvalidInput::ensure_amount("annual fees", annual_fees.0)
            }
        }
    }
}

/// Complete input of a comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingScenario {
    #[serde(flatten)]
    pub operation: Operation,

    /// The current machine.
    pub baseline: Configuration,

    /// The proposed machine.
    pub alternative: Configuration,

    pub labor_mode: LaborMode,
}

impl OperatingScenario {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        self.operation.validate()?;
        self.baseline.validate()?;
        self.alternative.validate()?;
        self.labor_mode.validate()
    }

    pub fn compare(&self) -> Result<Comparison, InvalidInput> {
        compare(&self.operation, &self.baseline, &self.alternative, &self.labor_mode)
    }

    /// Current 24 ft mower against a 37 ft wide-area mower, with paid operators.
    #[cfg(test)]
    pub const fn sample() -> Self {
        Self {
            operation: Operation {
                weekly_goal: Acres(2000.0),
                working_days_per_week: 5,
                hours_per_day: 7,
                lifespan_years: 7,
                fuel_price: DollarsPerGallon::DEFAULT_FUEL_PRICE,
                cutting_speed: MilesPerHour::TYPICAL_CUTTING,
                weeks_per_year: Operation::DEFAULT_WEEKS_PER_YEAR,
            },
            baseline: Configuration {
                width: Feet(24.0),
                capital_cost: Dollars(138_000.0),
                fuel_consumption: GallonsPerHour(4.0),
            },
            alternative: Configuration {
                width: Feet(37.0),
                capital_cost: Dollars(175_000.0),
                fuel_consumption: GallonsPerHour(4.75),
            },
            labor_mode: LaborMode::Labor { labor_rate: DollarsPerHour(24.0) },
        }
    }

    /// [`Self::sample`] operated autonomously.
    #[cfg(test)]
    pub const fn sample_autonomous() -> Self {
        let mut scenario = Self::sample();
        scenario.labor_mode = LaborMode::Autonomous {
            overseer_salary: Dollars(80_000.0),
            kit_cost: Dollars(75_000.0),
            annual_fees: Dollars(20_000.0),
        };
        scenario
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_deserialize_labor_scenario_ok() -> Result {
        // language=toml
        const SCENARIO: &str = r#"
            weekly_goal_acres = 2000.0
            working_days_per_week = 5
            hours_per_day = 7
            lifespan_years = 7

            [baseline]
            width_feet = 24.0
            capital_cost = 138000.0
            fuel_consumption_gal_per_hr = 4.0

            [alternative]
            width_feet = 37.0
            capital_cost = 175000.0
            fuel_consumption_gal_per_hr = 4.75

            [labor_mode]
            type = "labor"
            labor_rate = 24.0
        "#;
        let scenario: OperatingScenario = toml::from_str(SCENARIO)?;
        assert_eq!(scenario, OperatingScenario::sample());
        Ok(())
    }

    #[test]
    fn test_deserialize_autonomous_scenario_ok() -> Result {
        // language=toml
        const SCENARIO: &str = r#"
            weekly_goal_acres = 2000.0
            working_days_per_week = 5
            hours_per_day = 7
            lifespan_years = 7
            fuel_price = 2.5
            cutting_speed_mph = 4.35
            weeks_per_year = 52

            [baseline]
            width_feet = 24.0
            capital_cost = 138000.0
            fuel_consumption_gal_per_hr = 4.0

            [alternative]
            width_feet = 37.0
            capital_cost = 175000.0
            fuel_consumption_gal_per_hr = 4.75

            [labor_mode]
            type = "autonomous"
            overseer_salary = 80000.0
            kit_cost = 75000.0
            annual_fees = 20000.0
        "#;
        let scenario: OperatingScenario = toml::from_str(SCENARIO)?;
        assert_eq!(scenario, OperatingScenario::sample_autonomous());
        Ok(())
    }

    #[test]
    fn test_validate_sample_ok() -> Result {
        OperatingScenario::sample().validate()?;
        OperatingScenario::sample_autonomous().validate()?;
        Ok(())
    }

    #[test]
    fn test_validate_schedule() {
        let mut scenario = OperatingScenario::sample();
        scenario.operation.working_days_per_week = 8;
        assert_eq!(scenario.validate(), Err(InvalidInput::WorkingDays(8)));

        let mut scenario = OperatingScenario::sample();
        scenario.operation.hours_per_day = 0;
        assert_eq!(scenario.validate(), Err(InvalidInput::HoursPerDay(0)));
    }

    #[test]
    fn test_validate_lifespan() {
        let mut scenario = OperatingScenario::sample();
        scenario.operation.lifespan_years = 0;
        assert_eq!(scenario.validate(), Err(InvalidInput::Lifespan));
    }

    #[test]
    fn test_validate_negative_amount() {
        let mut scenario = OperatingScenario::sample();
        scenario.labor_mode = LaborMode::Labor { labor_rate: DollarsPerHour(-1.0) };
        assert_eq!(
            scenario.validate(),
            Err(InvalidInput::NegativeAmount { name: "labor rate", value: -1.0 }),
        );
    }

    #[test]
    fn test_validate_alternative_width() {
        let mut scenario = OperatingScenario::sample();
        scenario.alternative.width = Feet::ZERO;
        assert_eq!(scenario.validate(), Err(InvalidInput::EffectiveWidth(Feet::ZERO)));
    }
}

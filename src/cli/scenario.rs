use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};

use crate::{
    core::{Configuration, LaborMode, OperatingScenario, Operation},
    prelude::*,
    quantity::{
        area::Acres,
        fuel::{DollarsPerGallon, GallonsPerHour},
        length::Feet,
        money::{Dollars, DollarsPerHour},
        speed::MilesPerHour,
    },
};

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Read the whole scenario from a TOML file, ignoring the other scenario options.
    #[clap(long = "scenario", env = "SCENARIO_PATH")]
    pub path: Option<PathBuf>,

    #[clap(flatten)]
    pub operation: OperationArgs,

    #[clap(flatten)]
    pub baseline: BaselineArgs,

    #[clap(flatten)]
    pub alternative: AlternativeArgs,

    #[clap(flatten)]
    pub labor: LaborArgs,
}

impl ScenarioArgs {
    #[instrument(skip_all)]
    pub fn load(&self) -> Result<OperatingScenario> {
        let scenario = match &self.path {
            Some(path) => {
                info!(path = %path.display(), "reading the scenario…");
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
            }
            None => OperatingScenario {
                operation: self.operation.into(),
                baseline: self.baseline.into(),
                alternative: self.alternative.into(),
                labor_mode: self.labor.into(),
            },
        };
        scenario.validate().context("invalid scenario")?;
        Ok(scenario)
    }
}

#[derive(Copy, Clone, Parser)]
pub struct OperationArgs {
    /// Acres to be mown every week.
    #[clap(long = "weekly-goal-acres", default_value = "2000", env = "WEEKLY_GOAL_ACRES")]
    pub weekly_goal: Acres,

    #[clap(long, default_value = "5", env = "WORKING_DAYS_PER_WEEK")]
    pub working_days_per_week: u32,

    #[clap(long, default_value = "7", env = "HOURS_PER_DAY")]
    pub hours_per_day: u32,

    /// Mower life in years.
    #[clap(long, default_value = "7", env = "LIFESPAN_YEARS")]
    pub lifespan_years: u32,

    /// Fuel price per gallon.
    #[clap(long, default_value = "2.5", env = "FUEL_PRICE")]
    pub fuel_price: DollarsPerGallon,

    /// Field speed in miles per hour.
    #[clap(long = "cutting-speed-mph", default_value = "4.35", env = "CUTTING_SPEED_MPH")]
    pub cutting_speed: MilesPerHour,

    #[clap(long, default_value = "52", env = "WEEKS_PER_YEAR")]
    pub weeks_per_year: u32,
}

impl From<OperationArgs> for Operation {
    fn from(args: OperationArgs) -> Self {
        Self {
            weekly_goal: args.weekly_goal,
            working_days_per_week: args.working_days_per_week,
            hours_per_day: args.hours_per_day,
            lifespan_years: args.lifespan_years,
            fuel_price: args.fuel_price,
            cutting_speed: args.cutting_speed,
            weeks_per_year: args.weeks_per_year,
        }
    }
}

/// The current machine.
#[derive(Copy, Clone, Parser)]
pub struct BaselineArgs {
    #[clap(long = "baseline-width-feet", default_value = "24", env = "BASELINE_WIDTH_FEET")]
    pub baseline_width: Feet,

    #[clap(long = "baseline-capital-cost", default_value = "138000", env = "BASELINE_CAPITAL_COST")]
    pub baseline_capital_cost: Dollars,

    /// Gallons per hour.
    #[clap(
        long = "baseline-fuel-consumption",
        default_value = "4.0",
        env = "BASELINE_FUEL_CONSUMPTION"
    )]
    pub baseline_fuel_consumption: GallonsPerHour,
}

impl From<BaselineArgs> for Configuration {
    fn from(args: BaselineArgs) -> Self {
        Self {
            width: args.baseline_width,
            capital_cost: args.baseline_capital_cost,
            fuel_consumption: args.baseline_fuel_consumption,
        }
    }
}

/// The proposed wide-area mower.
#[derive(Copy, Clone, Parser)]
pub struct AlternativeArgs {
    #[clap(long = "alternative-width-feet", default_value = "37", env = "ALTERNATIVE_WIDTH_FEET")]
    pub alternative_width: Feet,

    #[clap(
        long = "alternative-capital-cost",
        default_value = "175000",
        env = "ALTERNATIVE_CAPITAL_COST"
    )]
    pub alternative_capital_cost: Dollars,

    /// Gallons per hour.
    #[clap(
        long = "alternative-fuel-consumption",
        default_value = "4.75",
        env = "ALTERNATIVE_FUEL_CONSUMPTION"
    )]
    pub alternative_fuel_consumption: GallonsPerHour,
}

impl From<AlternativeArgs> for Configuration {
    fn from(args: AlternativeArgs) -> Self {
        Self {
            width: args.alternative_width,
            capital_cost: args.alternative_capital_cost,
            fuel_consumption: args.alternative_fuel_consumption,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OperationType {
    /// Paid operators.
    Labor,

    /// Autonomous tractors.
    Autonomous,
}

#[derive(Copy, Clone, Parser)]
pub struct LaborArgs {
    #[clap(long, value_enum, default_value = "labor", env = "OPERATION_TYPE")]
    pub operation_type: OperationType,

    /// Hourly operator rate, labor operation only.
    #[clap(long, default_value = "24", env = "LABOR_RATE")]
    pub labor_rate: DollarsPerHour,

    /// Annual salary of the fleet overseer, autonomous operation only.
    #[clap(long, default_value = "80000", env = "OVERSEER_SALARY")]
    pub overseer_salary: Dollars,

    /// Autonomy kit cost per tractor, autonomous operation only.
    #[clap(long, default_value = "75000", env = "KIT_COST")]
    pub kit_cost: Dollars,

    /// Annual fees per tractor, autonomous operation only.
    #[clap(long, default_value = "20000", env = "ANNUAL_FEES")]
    pub annual_fees: Dollars,
}

impl From<LaborArgs> for LaborMode {
    fn from(args: LaborArgs) -> Self {
        match args.operation_type {
            OperationType::Labor => Self::Labor { labor_rate: args.labor_rate },
            OperationType::Autonomous => Self::Autonomous {
                overseer_salary: args.overseer_salary,
                kit_cost: args.kit_cost,
                annual_fees: args.annual_fees,
            },
        }
    }
}

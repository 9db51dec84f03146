//! Annual cost model of a mower fleet.
//!
//! Pure and deterministic: every function takes explicit parameters and either returns
//! the computed value or [`InvalidInput`].

mod autonomy;
mod comparison;
mod cost;
mod coverage;
mod error;
mod fleet;
mod scenario;

pub use self::{
    autonomy::compute_autonomy_overhead,
    comparison::{Comparison, compare},
    cost::{AnnualCostBreakdown, compute_annual_cost},
    coverage::compute_hours_needed,
    error::InvalidInput,
    fleet::{Fleet, compute_fleet_size},
    scenario::{Configuration, LaborMode, OperatingScenario, Operation},
};

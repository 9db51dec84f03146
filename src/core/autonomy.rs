use bon::builder;

use crate::{core::InvalidInput, prelude::*, quantity::money::Dollars};

/// Annual cost of operating the fleet autonomously instead of paying operators by the hour.
///
/// The overseer salary is flat: one supervisor watches the whole fleet regardless of its size.
/// The autonomy kits are depreciated over the mower lifespan, the fees are charged per unit.
#[builder]
pub fn compute_autonomy_overhead(
    unit_count: u32,
    overseer_salary: Dollars,
    kit_cost_per_unit: Dollars,
    annual_fee_per_unit: Dollars,
    lifespan_years: u32,
) -> Result<Dollars, InvalidInput> {
    if lifespan_years == 0 {
        return Err(InvalidInput::Lifespan);
    }
    let unit_count = f64::from(unit_count);
    let kit_cost = kit_cost_per_unit * unit_count / f64::from(lifespan_years);
    let fees = annual_fee_per_unit * unit_count;
    let overhead = overseer_salary + kit_cost + fees;
    debug!(%overseer_salary, %kit_cost, %fees, %overhead);
    Ok(overhead)
}

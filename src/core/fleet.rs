use serde::Serialize;

use crate::{core::InvalidInput, prelude::*, quantity::time::Hours};

/// Mowers one configuration needs to meet the weekly goal.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fleet {
    /// Machine hours per week needed by a single mower to cover the whole goal.
    pub hours_needed: Hours,

    /// Number of units, always at least one.
    pub unit_count: u32,
}

/// Smallest number of units whose combined weekly availability covers the required hours.
///
/// An exact multiple needs no extra unit, any remainder adds exactly one.
pub fn compute_fleet_size(
    total_hours_required: Hours,
    hours_available_per_unit: Hours,
) -> Result<u32, InvalidInput> {
    if !hours_available_per_unit.is_positive() {
        return Err(InvalidInput::AvailableHours(hours_available_per_unit));
    }
    if !total_hours_required.is_positive() {
        return Err(InvalidInput::RequiredHours(total_hours_required));
    }
    let remainder = total_hours_required.0 % hours_available_per_unit.0;
    let whole = ((total_hours_required.0 - remainder) / hours_available_per_unit.0).round();
    let unit_count = if remainder > 0.0 { whole + 1.0 } else { whole };
    if unit_count > f64::from(u32::MAX) {
        return Err(InvalidInput::FleetSize(total_hours_required));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let unit_count = unit_count as u32;
    Ok(unit_count)
}

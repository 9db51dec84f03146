use crate::{
    core::InvalidInput,
    prelude::*,
    quantity::{
        area::{Acres, AcresPerHour},
        length::Feet,
        speed::MilesPerHour,
        time::Hours,
    },
};

/// Weekly machine hours one mower of the given width needs to cover the goal.
///
/// The hourly coverage is the area swept by the working width at the cutting speed,
/// see [`AcresPerHour::swept`]. Pass [`MilesPerHour::TYPICAL_CUTTING`] unless the actual
/// field speed is known.
pub fn compute_hours_needed(
    weekly_goal: Acres,
    effective_width: Feet,
    cutting_speed: MilesPerHour,
) -> Result<Hours, InvalidInput> {
    if !effective_width.is_positive() {
        return Err(InvalidInput::EffectiveWidth(effective_width));
    }
    if !cutting_speed.is_positive() {
        return Err(InvalidInput::CuttingSpeed(cutting_speed));
    }
    if !weekly_goal.is_positive() {
        return Err(InvalidInput::WeeklyGoal(weekly_goal));
    }
    let coverage = AcresPerHour::swept(effective_width, cutting_speed);
    let hours = weekly_goal / coverage;
    trace!(%effective_width, %coverage, %hours);
    Ok(hours)
}

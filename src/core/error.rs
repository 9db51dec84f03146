use thiserror::Error;

use crate::quantity::{
    area::Acres,
    fuel::GallonsPerHour,
    length::Feet,
    speed::MilesPerHour,
    time::Hours,
};

/// A cost model parameter outside of its valid range.
///
/// The cost model rejects such input instead of clamping it or producing `NaN` and infinities.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum InvalidInput {
    #[error("weekly goal must be positive, got {0}")]
    WeeklyGoal(Acres),

    #[error("effective width must be positive, got {0}")]
    EffectiveWidth(Feet),

    #[error("cutting speed must be positive, got {0}")]
    CuttingSpeed(MilesPerHour),

    #[error("fuel consumption must be positive, got {0}")]
    FuelConsumption(GallonsPerHour),

    #[error("working days per week must be within 1..=7, got {0}")]
    WorkingDays(u32),

    #[error("hours per day must be within 1..=24, got {0}")]
    HoursPerDay(u32),

    #[error("weeks per year must be positive")]
    WeeksPerYear,

    #[error("lifespan must be at least one year")]
    Lifespan,

    #[error("required hours must be positive, got {0}")]
    RequiredHours(Hours),

    #[error("available hours per unit must be positive, got {0}")]
    AvailableHours(Hours),

    #[error("{0} of work does not fit into any representable fleet")]
    FleetSize(Hours),

    #[error("{name} must be a finite non-negative amount, got {value}")]
    NegativeAmount { name: &'static str, value: f64 },

    #[error("baseline total cost is zero, savings percentage is undefined")]
    ZeroBaselineCost,
}

impl InvalidInput {
    /// Reject negative, `NaN` and infinite money amounts.
    pub(crate) fn ensure_amount(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::NegativeAmount { name, value })
        }
    }
}

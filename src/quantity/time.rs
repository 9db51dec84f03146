quantity!(Hours, suffix: "h", precision: 1);

impl Hours {
    /// Hours available per unit per week given the working schedule.
    #[must_use]
    pub fn per_week(working_days: u32, hours_per_day: u32) -> Self {
        Self(f64::from(working_days) * f64::from(hours_per_day))
    }
}

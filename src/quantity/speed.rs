quantity!(MilesPerHour, suffix: "mph", precision: 2);

impl MilesPerHour {
    /// Typical field speed of a tractor-drawn mower.
    pub const TYPICAL_CUTTING: Self = Self(4.35);
}

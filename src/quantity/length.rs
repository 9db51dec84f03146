quantity!(
    /// Working width of a mower.
    Feet, suffix: "ft", precision: 0
);

impl Feet {
    pub const PER_MILE: f64 = 5280.0;
}

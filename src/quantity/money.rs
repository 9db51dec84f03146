use crate::quantity::time::Hours;

quantity!(
    /// US dollars.
    Dollars, suffix: "USD", precision: 2
);

quantity!(DollarsPerHour, suffix: "USD/h", precision: 2);

implement_mul!(DollarsPerHour, Hours, Dollars);

impl Dollars {
    pub const ONE_CENT: Self = Self(0.01);
}

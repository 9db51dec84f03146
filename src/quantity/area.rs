use crate::quantity::{length::Feet, speed::MilesPerHour, time::Hours};

quantity!(Acres, suffix: "ac", precision: 0);
quantity!(AcresPerHour, suffix: "ac/h", precision: 2);

implement_div!(Acres, AcresPerHour, Hours);
implement_mul!(AcresPerHour, Hours, Acres);

impl Acres {
    pub const PER_SQUARE_MILE: f64 = 640.0;
}

impl AcresPerHour {
    /// Area covered per hour by a strip of the given width travelling at the given speed.
    #[must_use]
    pub fn swept(width: Feet, speed: MilesPerHour) -> Self {
        Self(width.0 / Feet::PER_MILE * speed.0 * Acres::PER_SQUARE_MILE)
    }
}

use crate::quantity::{money::Dollars, time::Hours};

quantity!(Gallons, suffix: "gal", precision: 1);
quantity!(GallonsPerHour, suffix: "gal/h", precision: 2);
quantity!(DollarsPerGallon, suffix: "USD/gal", precision: 2);

implement_mul!(GallonsPerHour, Hours, Gallons);
implement_mul!(Gallons, DollarsPerGallon, Dollars);

impl DollarsPerGallon {
    pub const DEFAULT_FUEL_PRICE: Self = Self(2.5);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_fuel_bill() {
        let burnt = GallonsPerHour(4.0) * Hours(35.0);
        assert_eq!(burnt, Gallons(140.0));
        assert_relative_eq!((burnt * DollarsPerGallon::DEFAULT_FUEL_PRICE).0, 350.0);
    }
}

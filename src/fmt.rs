use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::quantity::money::Dollars;

/// Percentage with two decimals, the value is already multiplied by 100.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Dollar amount with thousands separators and cents: `$137,093.93`.
pub struct FormattedDollars(pub Dollars);

impl FormattedDollars {
    /// Cents above this do not fit into `u64` and are printed without separators.
    const MAX_CENTS: f64 = 1.0e18;
}

impl Display for FormattedDollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let abs = self.0.0.abs();
        let rounded_cents = (abs * 100.0).round();
        if !rounded_cents.is_finite() || rounded_cents >= Self::MAX_CENTS {
            let sign = if self.0 < Dollars::ZERO { "-" } else { "" };
            return write!(f, "{sign}${abs:.2}");
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = rounded_cents as u64;
        let sign = if self.0 < Dollars::ZERO && cents != 0 { "-" } else { "" };
        let digits = (cents / 100).to_string();
        let whole = digits
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .join(",");
        write!(f, "{sign}${whole}.{:02}", cents % 100)
    }
}

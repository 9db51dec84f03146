use std::fmt::{Display, Formatter};

use crate::{fmt::FormattedDollars, quantity::money::Dollars};

/// Horizontal text bar chart of annual costs.
#[must_use]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, Dollars)>,

    /// Length of the longest bar in characters.
    pub width: usize,
}

impl BarChart {
    pub const DEFAULT_WIDTH: usize = 40;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn bar_length(&self, value: Dollars, max_value: Dollars) -> usize {
        if max_value <= Dollars::ZERO || value <= Dollars::ZERO {
            return 0;
        }
        (value / max_value * self.width as f64).round() as usize
    }
}

impl Display for BarChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        let max_value = self.bars.iter().map(|(_, value)| *value).max().unwrap_or(Dollars::ZERO);
        let label_width = self.bars.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        for (label, value) in &self.bars {
            let length = self.bar_length(*value, max_value);
            writeln!(
                f,
                "{label:>label_width$} │{bar:<width$}│ {amount}",
                bar = "█".repeat(length),
                width = self.width,
                amount = FormattedDollars(*value),
            )?;
        }
        Ok(())
    }
}

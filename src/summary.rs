use std::fmt::{Display, Formatter};

use crate::{
    chart::BarChart,
    core::{Comparison, OperatingScenario},
    fmt::{FormattedDollars, FormattedPercentage},
    tables::build_breakdown_table,
};

/// Human-readable rendition of a comparison: headline, cost breakdown, and chart.
#[must_use]
pub struct Summary<'a> {
    pub scenario: &'a OperatingScenario,
    pub comparison: &'a Comparison,

    /// Colour the breakdown table regardless of the output.
    pub styled: bool,
}

impl Summary<'_> {
    pub fn headline(&self) -> String {
        if self.comparison.is_favorable {
            format!(
                "A {} ft mower will provide {} increased efficiency/cost savings equating to {}.",
                self.scenario.alternative.width.0,
                FormattedPercentage(self.comparison.savings_percentage),
                FormattedDollars(self.comparison.savings_absolute),
            )
        } else {
            String::from("Please consider adjusting inputs or contact us for a detailed analysis.")
        }
    }

    pub fn chart(&self) -> BarChart {
        BarChart {
            title: format!("Annual Cost Comparison ({})", self.scenario.labor_mode.name()),
            bars: vec![
                (format!("{} ft", self.scenario.baseline.width.0), self.comparison.baseline.total_cost),
                (
                    format!("{} ft", self.scenario.alternative.width.0),
                    self.comparison.alternative.total_cost,
                ),
            ],
            width: BarChart::DEFAULT_WIDTH,
        }
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut table = build_breakdown_table(self.scenario, self.comparison);
        if self.styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        writeln!(f, "{}", self.headline())?;
        writeln!(f)?;
        writeln!(f, "{table}")?;
        writeln!(f)?;
        write!(f, "{}", self.chart())
    }
}

use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use chrono::{DateTime, Local};

use crate::{api::crm::Contact, fmt::FormattedDollars, prelude::*, summary::Summary};

/// Downloadable plain-text ROI report.
#[must_use]
pub struct Report<'a> {
    pub contact: Option<&'a Contact>,
    pub summary: Summary<'a>,
    pub generated_at: DateTime<Local>,
}

impl Report<'_> {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        fs::write(path, self.to_string())
            .with_context(|| format!("failed to write the report to `{}`", path.display()))?;
        info!("written the report");
        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ROI Report")?;
        writeln!(f, "Generated at: {}", self.generated_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(f)?;
        if let Some(contact) = self.contact {
            writeln!(f, "Name: {}", contact.name)?;
            writeln!(f, "Email: {}", contact.email)?;
            writeln!(f, "Phone: {}", contact.phone)?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "Annual savings with {}: {}",
            self.summary.scenario.labor_mode.name().to_lowercase(),
            FormattedDollars(self.summary.comparison.savings_absolute),
        )?;
        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}

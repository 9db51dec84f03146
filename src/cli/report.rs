use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::{
    api::crm::Contact,
    cli::scenario::ScenarioArgs,
    prelude::*,
    report::Report,
    summary::Summary,
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    #[clap(long, short, default_value = "roi-report.txt", env = "REPORT_PATH")]
    pub output: PathBuf,

    #[clap(long)]
    pub name: Option<String>,

    #[clap(long)]
    pub email: Option<String>,

    #[clap(long)]
    pub phone: Option<String>,
}

impl ReportArgs {
    fn contact(&self) -> Option<Contact> {
        if self.name.is_none() && self.email.is_none() && self.phone.is_none() {
            return None;
        }
        Some(Contact {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
        })
    }
}

/// Write the report, unless the proposed mower does not pay off.
#[instrument(skip_all)]
pub fn report(args: &ReportArgs) -> Result {
    let scenario = args.scenario.load()?;
    let comparison = scenario.compare()?;
    let summary = Summary { scenario: &scenario, comparison: &comparison, styled: false };

    if !comparison.is_favorable {
        warn!("the proposed mower does not save anything, not generating the report");
        println!("{}", summary.headline());
        return Ok(());
    }

    let contact = args.contact();
    Report { contact: contact.as_ref(), summary, generated_at: Local::now() }
        .write_to(&args.output)?;
    println!("Report written to `{}`.", args.output.display());
    Ok(())
}

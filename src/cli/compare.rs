use clap::Parser;

use crate::{cli::scenario::ScenarioArgs, prelude::*, summary::Summary};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Print the comparison as JSON instead of the summary.
    #[clap(long)]
    pub json: bool,
}

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result {
    let scenario = args.scenario.load()?;
    let comparison = scenario.compare()?;
    info!(comparison.savings_percentage, comparison.is_favorable, "compared");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{}", Summary { scenario: &scenario, comparison: &comparison, styled: true });
    }
    Ok(())
}

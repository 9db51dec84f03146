use clap::Parser;

use crate::{
    api::crm::{self, Contact},
    cli::scenario::ScenarioArgs,
    prelude::*,
    summary::Summary,
};

#[derive(Parser)]
pub struct ContactArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub email: String,

    #[clap(long)]
    pub phone: String,

    #[clap(flatten)]
    pub crm: CrmArgs,
}

#[derive(Parser)]
pub struct CrmArgs {
    #[clap(long = "crm-api-key", env = "CRM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Contacts endpoint.
    #[clap(long = "crm-url", default_value = crm::Api::DEFAULT_URL, env = "CRM_URL")]
    pub url: String,
}

/// Print the comparison and submit the lead.
///
/// The CRM being unavailable is not an error: the comparison has been printed anyway.
#[instrument(skip_all)]
pub fn contact(args: &ContactArgs) -> Result {
    let scenario = args.scenario.load()?;
    let comparison = scenario.compare()?;
    println!("{}", Summary { scenario: &scenario, comparison: &comparison, styled: true });

    let contact =
        Contact { name: args.name.clone(), email: args.email.clone(), phone: args.phone.clone() };
    let api = crm::Api::new(args.crm.url.clone(), args.crm.api_key.clone());
    if api.submit(&contact, &scenario) {
        println!("Thanks for reaching out! We will share a detailed report to your email soon.");
    } else {
        println!("Could not reach the CRM, please check your connection and try again.");
    }
    Ok(())
}

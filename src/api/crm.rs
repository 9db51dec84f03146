use std::time::Duration;

use itertools::Itertools;
use serde::Serialize;
use ureq::Agent;

use crate::{
    core::{LaborMode, OperatingScenario},
    prelude::*,
};

/// Who asked to be contacted.
#[derive(Clone, Debug)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// CRM contacts API client.
pub struct Api {
    client: Agent,
    url: String,
    api_key: String,
}

impl Api {
    pub const DEFAULT_URL: &'static str = "https://api.hubapi.com/crm/v3/objects/contacts";

    pub fn new(url: String, api_key: String) -> Self {
        let client =
            Agent::config_builder().timeout_global(Some(Duration::from_secs(10))).build().into();
        Self { client, url, api_key }
    }

    /// Submit the lead, logging a failure instead of returning it.
    ///
    /// # Returns
    ///
    /// Whether the CRM has accepted the lead.
    pub fn submit(&self, contact: &Contact, scenario: &OperatingScenario) -> bool {
        match self.create_contact(contact, scenario) {
            Ok(()) => true,
            Err(error) => {
                warn!("failed to send the lead to the CRM: {error:#}");
                false
            }
        }
    }

    #[instrument(skip_all, fields(email = %contact.email))]
    fn create_contact(&self, contact: &Contact, scenario: &OperatingScenario) -> Result {
        info!("sending…");
        self.client
            .post(self.url.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(Request::new(contact, scenario))
            .with_context(|| format!("failed to create a contact at `{}`", self.url))?;
        info!("sent");
        Ok(())
    }
}

#[derive(Serialize)]
struct Request<'a> {
    properties: Properties<'a>,
}

impl<'a> Request<'a> {
    fn new(contact: &'a Contact, scenario: &OperatingScenario) -> Self {
        Self {
            properties: Properties {
                email: &contact.email,
                first_name: &contact.name,
                phone: &contact.phone,
                input_data: format_input_data(scenario),
            },
        }
    }
}

#[derive(Serialize)]
struct Properties<'a> {
    email: &'a str,

    #[serde(rename = "firstname")]
    first_name: &'a str,

    phone: &'a str,

    /// Raw scenario inputs as an HTML key-value listing.
    input_data: String,
}

/// Flatten the scenario into `<p><strong>Key</strong>: value</p>` lines.
///
/// Fields that do not apply to the labor mode are reported as zeros.
fn format_input_data(scenario: &OperatingScenario) -> String {
    let (labor_rate, overseer_salary, kit_cost, annual_fees) = match scenario.labor_mode {
        LaborMode::Labor { labor_rate } => (labor_rate.0, 0.0, 0.0, 0.0),
        LaborMode::Autonomous { overseer_salary, kit_cost, annual_fees } => {
            (0.0, overseer_salary.0, kit_cost.0, annual_fees.0)
        }
    };
    let operation = &scenario.operation;
    let fields: [(&str, String); 14] = [
        ("weekly_goal", operation.weekly_goal.0.to_string()),
        ("working_days", operation.working_days_per_week.to_string()),
        ("hours_per_day", operation.hours_per_day.to_string()),
        ("baseline_width", scenario.baseline.width.0.to_string()),
        ("alternative_width", scenario.alternative.width.0.to_string()),
        ("baseline_capital_cost", scenario.baseline.capital_cost.0.to_string()),
        ("alternative_capital_cost", scenario.alternative.capital_cost.0.to_string()),
        ("operation_type", scenario.labor_mode.name().to_string()),
        ("labor_rate", labor_rate.to_string()),
        ("baseline_fuel_consumption", scenario.baseline.fuel_consumption.0.to_string()),
        ("alternative_fuel_consumption", scenario.alternative.fuel_consumption.0.to_string()),
        ("overseer_salary", overseer_salary.to_string()),
        ("kit_cost", kit_cost.to_string()),
        ("annual_fees", annual_fees.to_string()),
    ];
    fields
        .iter()
        .map(|(key, value)| format!("<p><strong>{}</strong>: {value}</p>", title_case(key)))
        .join("")
}

/// `snake_case` to `Title Case`.
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .join(" ")
}

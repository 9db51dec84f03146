use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{AnnualCostBreakdown, Comparison, OperatingScenario},
    fmt::FormattedDollars,
    quantity::money::Dollars,
};

/// Fleet sizing and itemised annual costs of both configurations.
///
/// The table is not styled by default, call [`Table::enforce_styling`] to colour it for a terminal.
pub fn build_breakdown_table(scenario: &OperatingScenario, comparison: &Comparison) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new(""),
        Cell::new(format!("Current ({} ft)", scenario.baseline.width.0)),
        Cell::new(format!("Proposed ({} ft)", scenario.alternative.width.0)),
    ]);

    table.add_row(vec![
        Cell::new("Mowers"),
        Cell::new(comparison.baseline_fleet.unit_count).set_alignment(CellAlignment::Right),
        Cell::new(comparison.alternative_fleet.unit_count).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Hours needed per week"),
        Cell::new(comparison.baseline_fleet.hours_needed).set_alignment(CellAlignment::Right),
        Cell::new(comparison.alternative_fleet.hours_needed).set_alignment(CellAlignment::Right),
    ]);

    let items: [(&str, fn(&AnnualCostBreakdown) -> Dollars); 4] = [
        ("Fuel", |costs| costs.fuel_cost),
        ("Labor", |costs| costs.labor_cost),
        ("Capital", |costs| costs.capital_cost),
        ("Autonomy", |costs| costs.autonomy_cost),
    ];
    for (name, item) in items {
        table.add_row(vec![
            Cell::new(name),
            cost_cell(item(&comparison.baseline)).add_attribute(Attribute::Dim),
            cost_cell(item(&comparison.alternative)).add_attribute(Attribute::Dim),
        ]);
    }

    let (baseline_color, alternative_color) =
        total_colors(comparison.baseline.total_cost, comparison.alternative.total_cost);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        cost_cell(comparison.baseline.total_cost).add_attribute(Attribute::Bold).fg(baseline_color),
        cost_cell(comparison.alternative.total_cost)
            .add_attribute(Attribute::Bold)
            .fg(alternative_color),
    ]);
    table
}

fn cost_cell(cost: Dollars) -> Cell {
    Cell::new(FormattedDollars(cost)).set_alignment(CellAlignment::Right)
}

/// Cheaper total in green, dearer in red, both plain when they are within a cent.
fn total_colors(baseline: Dollars, alternative: Dollars) -> (Color, Color) {
    if (baseline - alternative).0.abs() < Dollars::ONE_CENT.0 {
        (Color::Reset, Color::Reset)
    } else if alternative < baseline {
        (Color::Red, Color::Green)
    } else {
        (Color::Green, Color::Red)
    }
}

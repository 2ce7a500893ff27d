use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{EconomicParameter, OptimizationReport, ProfitBreakdown, Scenario, SweepPoint};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Format the fixed and adjustable parameters of a scenario as a string.
pub fn format_parameter_table(scenario: &Scenario) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Scenario Parameters".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Parameter", "Value", "Unit"]);

    let reactor = &scenario.reactor;
    table.add_row(vec![
        Cell::new("Feed Concentration (C_A_in)"),
        Cell::new(format!("{}", reactor.feed_concentration)),
        Cell::new("mol/m^3"),
    ]);
    table.add_row(vec![
        Cell::new("Rate Constant (k)"),
        Cell::new(format!("{}", reactor.rate_constant)),
        Cell::new("1/s"),
    ]);
    table.add_row(vec![
        Cell::new("Flow Rate (F)"),
        Cell::new(format!("{}", reactor.flow_rate)),
        Cell::new("m^3/s"),
    ]);
    table.add_row(vec![
        Cell::new("Maximum Volume (V_max)"),
        Cell::new(format!("{}", scenario.range.max)),
        Cell::new("m^3"),
    ]);

    for parameter in EconomicParameter::ALL {
        table.add_row(vec![
            Cell::new(parameter.label()),
            Cell::new(format!("{:.2}", parameter.get(&scenario.economics))),
            Cell::new(""),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the scenario parameter table.
pub fn print_parameter_table(scenario: &Scenario) {
    print!("{}", format_parameter_table(scenario));
}

/// Format the optimum found by an optimisation run.
pub fn format_optimum_summary(report: &OptimizationReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Optimum".bold().green()));
    output.push_str(&format!(
        "{}\n",
        format!(
            "Sampled {} volumes in [{}, {}] m^3",
            report.sample_count, report.scenario.range.min, report.scenario.range.max
        )
        .dimmed()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!(
        "  Optimal Reactor Volume: {} m\u{b3}\n",
        format!("{:.2}", report.optimum.optimal_volume).bold()
    ));
    output.push_str(&format!(
        "  Maximum Profit:         {} \u{20ac}/s\n",
        format!("{:.2}", report.optimum.max_profit).bold()
    ));
    output
}

/// Print the optimum summary.
pub fn print_optimum_summary(report: &OptimizationReport) {
    print!("{}", format_optimum_summary(report));
}

/// Format the model terms at a single volume.
pub fn format_breakdown_table(breakdown: &ProfitBreakdown) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Profit Breakdown at V = {} m^3", breakdown.volume)
            .bold()
            .green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec!["Term", "Value", "Unit"]);
    let rows = [
        ("Residence Time", format!("{:.1}", breakdown.residence_time), "s"),
        ("Conversion", format!("{:.4}", breakdown.conversion), ""),
        ("Revenue", format!("{:.4}", breakdown.revenue), "\u{20ac}/s"),
        (
            "Capital + Operating Cost",
            format!("{:.4}", breakdown.capital_operating_cost),
            "\u{20ac}/s",
        ),
        ("Reagent Cost", format!("{:.4}", breakdown.reagent_cost), "\u{20ac}/s"),
        ("Profit", format!("{:.4}", breakdown.profit), "\u{20ac}/s"),
    ];
    for (name, value, unit) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value), Cell::new(unit)]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the profit breakdown table.
pub fn print_breakdown_table(breakdown: &ProfitBreakdown) {
    print!("{}", format_breakdown_table(breakdown));
}

/// Format the optimum as a function of one swept parameter.
pub fn format_sweep_table(parameter: EconomicParameter, points: &[SweepPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Optimum vs {}", parameter.label()).bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = new_table(vec![parameter.label(), "Optimal V (m^3)", "Max Profit (\u{20ac}/s)"]);
    for point in points {
        table.add_row(vec![
            Cell::new(format!("{:.3}", point.value)),
            Cell::new(format!("{:.3}", point.optimal_volume)),
            Cell::new(format!("{:.3}", point.max_profit)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the sweep table.
pub fn print_sweep_table(parameter: EconomicParameter, points: &[SweepPoint]) {
    print!("{}", format_sweep_table(parameter, points));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parameter_table() {
        let output = format_parameter_table(&Scenario::default());
        assert!(output.contains("Scenario Parameters"));
        assert!(output.contains("Flow Rate (F)"));
        assert!(output.contains("0.001"));
        assert!(output.contains("P_B (€/mol)"));
        assert!(output.contains("50.00"));
    }

    #[test]
    fn test_format_optimum_summary() {
        let report = Scenario::default().optimize().unwrap();
        let output = format_optimum_summary(&report);
        assert!(output.contains("Optimal Reactor Volume"));
        assert!(output.contains("2.57"));
        assert!(output.contains("36.33"));
        assert!(output.contains("Sampled 1200 volumes"));
    }

    #[test]
    fn test_format_breakdown_table() {
        let breakdown = Scenario::default().breakdown(0.0).unwrap();
        let output = format_breakdown_table(&breakdown);
        assert!(output.contains("Residence Time"));
        assert!(output.contains("Reagent Cost"));
        assert!(output.contains("-10.0000"));
    }

    #[test]
    fn test_format_sweep_table() {
        let points = vec![
            SweepPoint {
                value: 20.0,
                optimal_volume: 1.59,
                max_profit: 9.5,
            },
            SweepPoint {
                value: 80.0,
                optimal_volume: 3.28,
                max_profit: 63.1,
            },
        ];
        let output = format_sweep_table(EconomicParameter::ProductPrice, &points);
        assert!(output.contains("Optimum vs P_B"));
        assert!(output.contains("20.000"));
        assert!(output.contains("3.280"));
    }
}

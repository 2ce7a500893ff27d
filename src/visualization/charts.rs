use colored::Colorize;

use super::config::AxisBounds;
use crate::models::{OptimumResult, ProfitCurve};

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 18;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Empty,
    Curve,
    Optimum,
}

fn column_of(x: f64, bounds: &AxisBounds) -> usize {
    let frac = (x - bounds.x_min) / (bounds.x_max - bounds.x_min);
    (frac * (CHART_WIDTH - 1) as f64).round() as usize
}

fn row_of(y: f64, bounds: &AxisBounds) -> usize {
    let frac = (bounds.y_max - y) / (bounds.y_max - bounds.y_min);
    (frac * (CHART_HEIGHT - 1) as f64).round() as usize
}

/// Format a text plot of profit against volume, with a vertical marker at
/// the optimal volume. Samples outside `bounds` are clipped.
pub fn format_profit_chart(
    curve: &ProfitCurve,
    optimum: &OptimumResult,
    bounds: &AxisBounds,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        "Profit as a Function of Reactor Volume".bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(CHART_WIDTH + 12)));

    if curve.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }
    if let Err(e) = bounds.validate() {
        output.push_str(&format!("  Cannot draw chart: {e}\n"));
        return output;
    }

    let mut grid = vec![vec![Mark::Empty; CHART_WIDTH]; CHART_HEIGHT];

    let optimum_visible = bounds.contains_x(optimum.optimal_volume);
    if optimum_visible {
        let col = column_of(optimum.optimal_volume, bounds);
        for row in grid.iter_mut() {
            row[col] = Mark::Optimum;
        }
    } else {
        tracing::warn!(
            optimal_volume = optimum.optimal_volume,
            x_min = bounds.x_min,
            x_max = bounds.x_max,
            "optimal volume lies outside the displayed volume axis"
        );
    }

    for point in &curve.points {
        if bounds.contains_x(point.volume) && bounds.contains_y(point.profit) {
            grid[row_of(point.profit, bounds)][column_of(point.volume, bounds)] = Mark::Curve;
        }
    }

    let y_mid = (bounds.y_min + bounds.y_max) / 2.0;
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            format!("{:>9.2}", bounds.y_max)
        } else if r == CHART_HEIGHT / 2 {
            format!("{:>9.2}", y_mid)
        } else if r == CHART_HEIGHT - 1 {
            format!("{:>9.2}", bounds.y_min)
        } else {
            " ".repeat(9)
        };

        let line: String = row
            .iter()
            .map(|mark| match mark {
                Mark::Empty => " ".to_string(),
                Mark::Curve => "\u{2022}".blue().to_string(),
                Mark::Optimum => "\u{2506}".red().to_string(),
            })
            .collect();
        output.push_str(&format!("{label} \u{2502}{line}\n"));
    }

    output.push_str(&format!("{} \u{2514}{}\n", " ".repeat(9), "\u{2500}".repeat(CHART_WIDTH)));
    let x_lo = format!("{:.2}", bounds.x_min);
    let x_hi = format!("{:.2}", bounds.x_max);
    let gap = (CHART_WIDTH + 1).saturating_sub(x_lo.len() + x_hi.len());
    output.push_str(&format!(
        "{}  {x_lo}{}{x_hi}\n",
        " ".repeat(9),
        " ".repeat(gap)
    ));
    output.push_str(&format!(
        "{}Volume (m^3) vs Profit (\u{20ac}/s)\n",
        " ".repeat(11)
    ));

    let legend = format!(
        "Optimal V = {:.2} m^3, Max Profit = {:.2} \u{20ac}/s",
        optimum.optimal_volume, optimum.max_profit
    );
    if optimum_visible {
        output.push_str(&format!("  {} {}\n", "\u{2506}".red(), legend));
    } else {
        output.push_str(&format!("  {} (outside displayed range)\n", legend));
    }

    output.push('\n');
    output
}

/// Print the profit chart.
pub fn print_profit_chart(curve: &ProfitCurve, optimum: &OptimumResult, bounds: &AxisBounds) {
    print!("{}", format_profit_chart(curve, optimum, bounds));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfitPoint;

    fn sample_curve() -> (ProfitCurve, OptimumResult) {
        let points: Vec<ProfitPoint> = (0..=30)
            .map(|i| {
                let volume = i as f64 * 0.1;
                ProfitPoint {
                    volume,
                    profit: 40.0 - 10.0 * (volume - 1.5).powi(2),
                }
            })
            .collect();
        (
            ProfitCurve { points },
            OptimumResult {
                optimal_volume: 1.5,
                max_profit: 40.0,
            },
        )
    }

    #[test]
    fn test_format_chart_empty() {
        let output = format_profit_chart(
            &ProfitCurve::default(),
            &OptimumResult {
                optimal_volume: 0.0,
                max_profit: 0.0,
            },
            &AxisBounds::default(),
        );
        assert!(output.contains("No data available."));
    }

    #[test]
    fn test_format_chart_with_data() {
        let (curve, optimum) = sample_curve();
        let output = format_profit_chart(&curve, &optimum, &AxisBounds::default());
        assert!(output.contains("Profit as a Function of Reactor Volume"));
        assert!(output.contains("Optimal V = 1.50 m^3, Max Profit = 40.00"));
        assert!(output.contains("50.00"));
        assert!(output.contains("3.00"));
        assert!(output.contains('\u{2022}'));
        assert!(output.contains('\u{2506}'));
    }

    #[test]
    fn test_chart_row_count() {
        let (curve, optimum) = sample_curve();
        let output = format_profit_chart(&curve, &optimum, &AxisBounds::default());
        let plot_rows = output.lines().filter(|l| l.contains('\u{2502}')).count();
        assert_eq!(plot_rows, CHART_HEIGHT);
    }

    #[test]
    fn test_optimum_outside_bounds_is_reported() {
        let (curve, optimum) = sample_curve();
        let bounds = AxisBounds {
            x_min: 2.0,
            x_max: 3.0,
            ..AxisBounds::default()
        };
        let output = format_profit_chart(&curve, &optimum, &bounds);
        assert!(output.contains("outside displayed range"));
        assert!(!output.contains('\u{2506}'));
    }

    #[test]
    fn test_invalid_bounds_message() {
        let (curve, optimum) = sample_curve();
        let bounds = AxisBounds {
            y_min: 10.0,
            y_max: 10.0,
            ..AxisBounds::default()
        };
        let output = format_profit_chart(&curve, &optimum, &bounds);
        assert!(output.contains("Cannot draw chart"));
    }

    #[test]
    fn test_column_and_row_mapping() {
        let b = AxisBounds::default();
        assert_eq!(column_of(0.0, &b), 0);
        assert_eq!(column_of(3.0, &b), CHART_WIDTH - 1);
        assert_eq!(row_of(50.0, &b), 0);
        assert_eq!(row_of(0.0, &b), CHART_HEIGHT - 1);
    }
}

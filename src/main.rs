use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cstr_profit::{
    analysis::EconomicParameter,
    config::{load_config, ScenarioConfig},
    io,
    visualization::{
        print_breakdown_table, print_optimum_summary, print_parameter_table, print_profit_chart,
        print_sweep_table,
    },
};

#[derive(Parser)]
#[command(
    name = "cstr-profit",
    about = "CSTR Profit Optimizer - steady-state profit vs. reactor volume",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Scenario inputs. Flags override values from `--config`, which override defaults.
#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// TOML scenario file with [reactor], [economics], [range] and [display] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feed concentration C_A_in (mol/m^3)
    #[arg(long)]
    feed_concentration: Option<f64>,

    /// First-order rate constant k (1/s)
    #[arg(long)]
    rate_constant: Option<f64>,

    /// Volumetric flow rate F (m^3/s)
    #[arg(long)]
    flow_rate: Option<f64>,

    /// Largest reactor volume to sample (m^3)
    #[arg(long)]
    v_max: Option<f64>,

    /// Reagent price P_A (€/mol)
    #[arg(long, allow_negative_numbers = true)]
    reagent_price: Option<f64>,

    /// Product price P_B (€/mol)
    #[arg(long, allow_negative_numbers = true)]
    product_price: Option<f64>,

    /// Capital cost coefficient C_C
    #[arg(long, allow_negative_numbers = true)]
    capital_coeff: Option<f64>,

    /// Operating cost coefficient C_O
    #[arg(long, allow_negative_numbers = true)]
    operating_coeff: Option<f64>,

    /// Capital cost scaling exponent m
    #[arg(long, allow_negative_numbers = true)]
    capital_exponent: Option<f64>,

    /// Operating cost scaling exponent n
    #[arg(long, allow_negative_numbers = true)]
    operating_exponent: Option<f64>,
}

/// Display-only axis bounds for the chart.
#[derive(Args, Debug, Default)]
struct DisplayArgs {
    #[arg(long, allow_negative_numbers = true)]
    x_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_max: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample profit over the volume range and report the optimal volume
    Optimize {
        #[command(flatten)]
        scenario: ScenarioArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Skip the text chart
        #[arg(long)]
        no_chart: bool,

        /// Export the result (.csv, .json or .xlsx)
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Pretty-print JSON export
        #[arg(long)]
        pretty: bool,
    },

    /// Show every term of the profit model at one reactor volume
    Evaluate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Reactor volume (m^3)
        #[arg(long)]
        volume: f64,
    },

    /// Re-optimise across a range of one economic parameter
    Sweep {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Parameter to vary: reagent_price, product_price, capital_cost_coeff,
        /// operating_cost_coeff, capital_exponent or operating_exponent
        #[arg(short, long)]
        parameter: String,

        /// Lower end of the sweep (defaults to the parameter's slider minimum)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,

        /// Upper end of the sweep (defaults to the parameter's slider maximum)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,

        /// Number of parameter values
        #[arg(short, long, default_value = "11")]
        steps: usize,
    },

    /// Start the web UI server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// TOML scenario file used as the page's initial values
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn resolve_config(args: &ScenarioArgs) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ScenarioConfig::default(),
    };

    let overrides = [
        (args.feed_concentration, &mut config.reactor.feed_concentration),
        (args.rate_constant, &mut config.reactor.rate_constant),
        (args.flow_rate, &mut config.reactor.flow_rate),
        (args.v_max, &mut config.range.v_max),
        (args.reagent_price, &mut config.economics.reagent_price),
        (args.product_price, &mut config.economics.product_price),
        (args.capital_coeff, &mut config.economics.capital_cost_coeff),
        (args.operating_coeff, &mut config.economics.operating_cost_coeff),
        (args.capital_exponent, &mut config.economics.capital_exponent),
        (args.operating_exponent, &mut config.economics.operating_exponent),
    ];
    for (value, field) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }

    Ok(config)
}

fn apply_display(display: &DisplayArgs, config: &mut ScenarioConfig) {
    let overrides = [
        (display.x_min, &mut config.display.x_min),
        (display.x_max, &mut config.display.x_max),
        (display.y_min, &mut config.display.y_min),
        (display.y_max, &mut config.display.y_max),
    ];
    for (value, field) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            scenario,
            display,
            no_chart,
            export,
            pretty,
        } => {
            let mut config = resolve_config(&scenario)?;
            apply_display(&display, &mut config);
            let scenario = config.scenario();

            println!("\n{}", "CSTR Profit vs. Volume Simulation".bold().cyan());
            print_parameter_table(&scenario);

            let report = scenario.optimize()?;
            print_optimum_summary(&report);

            if !no_chart {
                print_profit_chart(&report.curve, &report.optimum, &config.display);
            }

            if let Some(path) = export {
                let writer = io::writer_for_path(&path, pretty)?;
                writer.write(&report, &path)?;
                println!(
                    "{} Exported {} samples -> {}",
                    "Success:".green().bold(),
                    report.curve.len(),
                    path.display()
                );
            }
        }

        Commands::Evaluate { scenario, volume } => {
            let scenario = resolve_config(&scenario)?.scenario();
            let breakdown = scenario.breakdown(volume)?;
            print_breakdown_table(&breakdown);
        }

        Commands::Sweep {
            scenario,
            parameter,
            from,
            to,
            steps,
        } => {
            let parameter: EconomicParameter = parameter.parse()?;
            let scenario = resolve_config(&scenario)?.scenario();
            let (lo, hi) = parameter.slider_bounds();
            let points = scenario.sweep(parameter, from.unwrap_or(lo), to.unwrap_or(hi), steps)?;
            print_sweep_table(parameter, &points);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, config } => {
            let defaults = match config {
                Some(path) => load_config(path)?,
                None => ScenarioConfig::default(),
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(cstr_profit::web::start_server(port, defaults))?;
        }
    }

    Ok(())
}

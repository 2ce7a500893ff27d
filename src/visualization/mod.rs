mod config;
mod tables;
mod charts;

pub use config::AxisBounds;
pub use tables::{
    format_parameter_table, print_parameter_table,
    format_optimum_summary, print_optimum_summary,
    format_breakdown_table, print_breakdown_table,
    format_sweep_table, print_sweep_table,
};
pub use charts::{format_profit_chart, print_profit_chart};

use std::io;
use std::process::ExitCode;

use aqi_trend::app;
use aqi_trend::config::{AnalysisConfig, Cli};
use aqi_trend::pipeline;
use aqi_trend::state::TrendChart;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let config = AnalysisConfig::from(Cli::parse());
    log::debug!("Running with {config:?}");

    let analysis = match pipeline::run(&config, &mut io::stdout().lock()) {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("\n{e}");
            return ExitCode::FAILURE;
        }
    };

    if !config.show_chart {
        return ExitCode::SUCCESS;
    }

    let chart = TrendChart::new(&config.city, config.cutoff, &analysis.monthly);
    match app::show(chart, analysis.summary) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

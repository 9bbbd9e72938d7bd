mod cli;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::debug;
use tripdates_core::{
    Config, DurationRange, TripRequest, VacationWindow, output::write_response_file,
    trip_dates_possibilities,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tripdates: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!(?config, "configuration loaded");

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
    }));

    let request = build_request(&cli)?;
    let candidates = trip_dates_possibilities(&request)?;

    if cli.count {
        renderer.print_count(candidates.len());
        return Ok(());
    }

    let output = cli.output.clone().unwrap_or(config.output_file);
    let pretty = config.pretty && !cli.compact;
    write_response_file(&output, &candidates, pretty)?;
    renderer.print_written(&output, candidates.len());

    if cli.print {
        renderer.print_candidates(&request, &candidates);
    }

    Ok(())
}

/// Flags override the built-in sample one group at a time.
fn build_request(cli: &Cli) -> Result<TripRequest> {
    let sample = TripRequest::sample();

    let vacation = match (cli.from.as_deref(), cli.to.as_deref()) {
        (Some(from), Some(to)) => VacationWindow::parse(from, to)?,
        _ => sample.vacation,
    };
    let desired_trip_duration = match (cli.min, cli.max) {
        (Some(min), Some(max)) => DurationRange::new(min, max),
        _ => sample.desired_trip_duration,
    };

    Ok(TripRequest::new(vacation, desired_trip_duration))
}

/*!
 * Round-Robin Simulator - Command Line Entry Point
 *
 * Usage: rr-sim [WORKLOAD.json]
 *
 * Runs the workload to completion and prints the execution trace (or a JSON
 * report with RR_SIM_OUTPUT=json) to stdout. Logs go to stderr.
 */

use miette::IntoDiagnostic;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use rr_sim::{
    init_tracing, OutputFormat, RunReport, SimError, SimResult, SimulationConfig, TraceExport,
};

fn main() -> miette::Result<()> {
    init_tracing();

    let path_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let output = simulate(path_arg)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes()).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    Ok(())
}

fn simulate(path_arg: Option<PathBuf>) -> SimResult<String> {
    let config = SimulationConfig::from_env(path_arg)?;

    let mut scheduler = config.workload.build_scheduler()?;
    info!(
        processes = scheduler.len(),
        time_quantum = config.time_quantum,
        "Starting simulation"
    );
    scheduler.run(config.time_quantum)?;

    match config.output {
        OutputFormat::Trace => TraceExport::from_scheduler(&scheduler)
            .map(|trace| trace.render())
            .ok_or_else(|| SimError::Export("no run to export".to_string())),
        OutputFormat::Json => {
            let report = RunReport::from_scheduler(&scheduler)
                .ok_or_else(|| SimError::Export("no run to export".to_string()))?;
            report
                .to_json()
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| SimError::Export(e.to_string()))
        }
    }
}

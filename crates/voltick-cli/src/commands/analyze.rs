//! Full pipeline: ingest, analyze, write reports, print summary.

use tracing::{info, warn};
use voltick_core::analysis;
use voltick_core::{load_daily, load_intraday_all, DailyTable, IntradayTable};

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::error::CliError;
use crate::report;

pub fn run(args: &AnalyzeArgs, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let daily = DailyTable::new(load_daily(&args.daily)?);
    let intraday = IntradayTable::new(load_intraday_all(&args.intraday)?);

    if daily.is_empty() {
        warn!("daily dataset has no records; reports will be empty");
    }
    info!(
        daily_records = daily.record_count(),
        intraday_ticks = intraday.tick_count(),
        "datasets loaded"
    );

    let reference_dates = if args.dates.is_empty() {
        intraday.dates()
    } else {
        args.dates.clone()
    };
    if reference_dates.is_empty() {
        return Err(CliError::Command(String::from(
            "no reference dates: the intraday input is empty and no --date was given",
        )));
    }

    let analysis_report = analysis::run(&daily, &intraday, &reference_dates);

    report::write_reports(&args.out_dir, &analysis_report)?;
    report::render_summary(&analysis_report, format, pretty)?;

    Ok(())
}

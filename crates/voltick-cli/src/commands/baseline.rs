//! Baseline table without the intraday scan.

use voltick_core::{baseline_table, load_daily, DailyTable};

use crate::cli::{BaselineArgs, OutputFormat};
use crate::error::CliError;
use crate::report;

pub fn run(args: &BaselineArgs, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let daily = DailyTable::new(load_daily(&args.daily)?);
    let rows = baseline_table(&daily, &args.dates);

    report::render_baselines(&rows, format, pretty)?;

    Ok(())
}

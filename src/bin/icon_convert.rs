use std::process::ExitCode;
use icon_assets_lib::types::IconConvertConfig;
use icon_assets_lib::{default_mechanisms, logging, report_summary, run_conversions};

fn main() -> ExitCode {
    logging::init();

    let config = IconConvertConfig::default();
    let summary = run_conversions(&config, &default_mechanisms());

    ExitCode::from(report_summary(&summary))
}

use std::process::ExitCode;

use anyhow::Context;

use grocer_report::{load_products, Report, ReportConfig};

fn run(config: &ReportConfig) -> anyhow::Result<Vec<String>> {
    let products = load_products(&config.data_path, config.validation)?;
    let report = Report::build(&products).context("failed to build report")?;
    report.render().context("failed to render report")
}

fn main() -> ExitCode {
    grocer_observability::init();

    let config = ReportConfig::from_env();

    match run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("report failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

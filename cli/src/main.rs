mod args;
mod convert;
mod error;
mod paths;
mod report;
mod settings;

use args::{Args, usage_error};
use clap::Parser;
use clap::error::ErrorKind;
use report::Report;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the JSON report
    env_logger::init();

    let report = match Args::try_parse() {
        Ok(args) => match convert::run(&args) {
            Ok(report) => report,
            Err(e) => {
                log::error!("{}", e);
                Report::failure(&e)
            }
        },
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = usage_error(&e);
            log::error!("{}", err);
            Report::failure(&err)
        }
    };

    match serde_json::to_string(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

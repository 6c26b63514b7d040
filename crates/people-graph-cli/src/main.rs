#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::process::ExitCode;

use args::Command;
use clap::crate_version;
use tokio::runtime;

mod args;
mod telemetry;

const THREAD_NAME: &str = "people-graph";

fn main() -> anyhow::Result<ExitCode> {
    let args = args::parse();
    telemetry::init(&args);

    let crate_version = crate_version!();
    tracing::debug!("people-graph {crate_version}");

    let config = args.config()?;
    let schema = people_graph::build_schema(&config)?;

    match &args.command {
        Command::Sdl => {
            println!("{}", schema.sdl());

            Ok(ExitCode::SUCCESS)
        }
        Command::Execute(execute) => {
            let request = execute.request()?;

            let runtime = runtime::Builder::new_current_thread().thread_name(THREAD_NAME).build()?;
            let response = runtime.block_on(schema.execute(request));

            println!("{}", serde_json::to_string_pretty(&response)?);

            if response.is_err() {
                tracing::warn!(errors = response.errors.len(), "operation finished with errors");

                return Ok(ExitCode::FAILURE);
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

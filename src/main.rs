// src/main.rs
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod presentation;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use source_metrics_core::{loc_report, resolve};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&cli::Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let query = args.to_query();
    let report = loc_report(&query)?;
    log::debug!("report ready for {}", query.root.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &report).context("Failed to serialize report")?;
        writeln!(out)?;
    } else {
        let profile = resolve(&report.language)?;
        presentation::write_markdown(&mut out, &report, profile)?;
    }
    out.flush()?;
    Ok(())
}

#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use fitcalc::{batch, cli, dispatch, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = match cli.packages.as_deref() {
        Some(path) => batch::load_packages(path)?,
        None => batch::sample_packages(),
    };
    dlog!(
        "mode=report packages={} keep_going={} codes={:?}",
        packages.len(),
        cli.keep_going,
        dispatch::known_codes()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = batch::run(&packages, cli.keep_going, &mut out)?;
    out.flush()?;

    if report.failed > 0 {
        tracing::warn!(
            printed = report.printed,
            failed = report.failed,
            "some packages were skipped"
        );
    }

    Ok(())
}

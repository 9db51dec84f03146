#![allow(clippy::doc_markdown)]

mod api;
mod chart;
mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod report;
mod summary;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => cli::compare(&args)?,
        Command::Report(args) => cli::report(&args)?,
        Command::Contact(args) => cli::contact(&args)?,
    }

    info!("done!");
    Ok(())
}

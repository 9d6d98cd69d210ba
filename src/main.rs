mod app;
mod cli;
mod error;
mod logic;
mod models;
mod utils;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    app::run(cli::Cli::parse())
}

#![allow(clippy::print_stdout)]

mod args;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use shub::packages::{bag_to_rows, normalize_feature_bag, serialize_feature_bag};
use shub::platform::reconcile_page;
use shub_logger::{LevelFilter, Logger};
use std::io::Read;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).level(LevelFilter::WARN).init()?;

    match cli.command {
        Command::Bag { file } => {
            let payload = read_payload(file.as_deref())?;
            let bag = normalize_feature_bag(Some(&payload));
            println!("{}", serde_json::to_string_pretty(&serialize_feature_bag(&bag))?);
        }
        Command::Rows { file } => {
            let payload = read_payload(file.as_deref())?;
            let rows = bag_to_rows(&normalize_feature_bag(Some(&payload)));
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Page { file, limit } => {
            let payload = read_payload(file.as_deref())?;
            let page = reconcile_page(&payload, limit, |row: &Value| Some(row.clone()));
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }

    Ok(())
}

fn read_payload(file: Option<&std::path::Path>) -> Result<Value> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(raw.trim()).context("Input is not valid JSON")
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod replay;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use replay::{Outcome, Step, replay};
use tms_plan::PlanPolicy;
use tms_plan_api::{DraftSession, InMemoryOrderBook, RecordingSink};
use tms_plan_audit::Actor;
use tms_plan_domain::{OrderRecord, TransportMode};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Replays a scripted editing session against a shipment draft.
///
/// Prints the submitted payload, or the final plan if the script does not
/// submit, as JSON on stdout. Logs go to stderr.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of steps to replay
    #[arg(short, long)]
    script: PathBuf,

    /// JSON array of orders available for linking
    #[arg(short, long)]
    orders: Option<PathBuf>,

    /// Transport mode of the new draft
    #[arg(short, long, default_value = "road")]
    mode: String,

    /// Operator recorded in the audit trail
    #[arg(long, default_value = "cli")]
    operator: String,

    /// Require each segment to start where the previous one ends
    #[arg(long)]
    enforce_continuity: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(&self) -> Result<String> {
        let steps: Vec<Step> = read_json(&self.script)?;
        let orders: InMemoryOrderBook = match &self.orders {
            Some(path) => InMemoryOrderBook::from_records(read_json::<Vec<OrderRecord>>(path)?),
            None => InMemoryOrderBook::new(),
        };
        let mode: TransportMode = self
            .mode
            .parse()
            .wrap_err_with(|| format!("Invalid --mode '{}'", self.mode))?;

        info!(
            steps = steps.len(),
            orders = orders.len(),
            %mode,
            enforce_continuity = self.enforce_continuity,
            "Starting replay"
        );

        let mut session: DraftSession = DraftSession::new(
            mode,
            PlanPolicy::new(self.enforce_continuity),
            Actor::operator(&self.operator),
        );
        let mut sink: RecordingSink = RecordingSink::new();
        let outcome: Outcome = replay(&mut session, steps, &orders, &mut sink)?;

        serde_json::to_string_pretty(&outcome).wrap_err("Failed to serialize the result")
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

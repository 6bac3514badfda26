//! Shape-parity runner
//!
//! Runs named scenarios against both backends and exits non-zero when any
//! response pair diverges in shape or a call fails outright.
//!
//! ```bash
//! hl-parity                      # the three canonical scenarios
//! hl-parity all                  # every known scenario
//! hl-parity allMids userFills    # an explicit list
//! ```

use anyhow::{bail, Result};
use hl_parity::config::ParityConfig;
use hl_parity::harness::ParityHarness;
use hl_parity::scenario::Scenario;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scenarios = select_scenarios()?;
    let config = ParityConfig::from_env();
    info!(
        hyperliquid = %config.hyperliquid_url,
        ambient = %config.ambient_url,
        scenarios = scenarios.len(),
        "starting parity run"
    );

    let mut harness = ParityHarness::new(config);
    harness.run_all(&scenarios).await?;
    harness.print_summary();

    if !harness.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn select_scenarios() -> Result<Vec<Scenario>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(Scenario::canonical());
    }
    if args.len() == 1 && args[0] == "all" {
        return Ok(Scenario::all());
    }

    args.iter()
        .map(|name| match Scenario::from_name(name) {
            Some(scenario) => Ok(scenario),
            None => {
                let known: Vec<&str> = Scenario::all().iter().map(Scenario::name).collect();
                bail!("unknown scenario {name:?} (known: {})", known.join(", "))
            }
        })
        .collect()
}
